#[cfg(feature = "ssr")]
pub mod errors;
mod front_matter;
mod post;

#[cfg(feature = "ssr")]
pub use errors::{Error, Result};
pub use front_matter::{FrontMatter, Metadata};
pub use post::Post;

/// URL of the blog index. Every post lives directly under this prefix and the
/// index page itself (`index.md`) maps to exactly this URL.
pub const BLOG_PATH: &str = "/blog";

/// The content store: a directory of Markdown documents with YAML front
/// matter. `pages` enumerates them in a deterministic order (file name,
/// lexicographic), which is the "collection order" callers may rely on when
/// they sort with ties.
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct Store {
    path: std::path::PathBuf,
}

#[cfg(feature = "ssr")]
impl Store {
    pub fn new(path: std::path::PathBuf) -> Self {
        Self { path }
    }

    fn paths(&self) -> Result<Vec<std::path::PathBuf>> {
        let directory = self.path.read_dir().map_err(|error| Error::IO {
            error,
            path: self.path.clone(),
        })?;

        let mut paths = vec![];
        for entry in directory {
            let entry = entry.map_err(|error| Error::IO {
                error,
                path: self.path.clone(),
            })?;
            let path = entry.path();
            if path.extension().and_then(|extension| extension.to_str()) != Some("md") {
                continue;
            }
            if path.file_stem().and_then(|stem| stem.to_str()).is_none() {
                log::warn!("invalid utf-8 file name in the store: {:?}", entry.file_name());
                continue;
            }
            paths.push(path);
        }
        paths.sort();
        Ok(paths)
    }

    /// Front matter of every page in the store, the index page included.
    pub fn pages(&self) -> Result<Vec<FrontMatter>> {
        let paths = self.paths()?;
        let mut pages = Vec::with_capacity(paths.len());
        for path in paths {
            pages.push(FrontMatter::read(&path)?);
        }
        Ok(pages)
    }

    /// Look up and render a single page. `slug` is the ordered list of path
    /// segments under [`BLOG_PATH`]; an empty slug resolves to the index
    /// page. Resolution slugifies each candidate file stem with the same
    /// helper [`Store::pages`] uses, so every enumerated slug round-trips
    /// back to its file even when the file name is not in slug form.
    pub fn get_page(&self, slug: &[String]) -> Result<Post> {
        let wanted = slug.join("/");
        for path in self.paths()? {
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if front_matter::slug_for_stem(stem).join("/") == wanted {
                log::info!("slug \"{}\" points to \"{}\"", wanted, path.display());
                return post::render(&path);
            }
        }
        Err(Error::NotFound {
            slug: wanted,
            error: String::from("no matching file in the store"),
        })
    }

    /// Every valid non-empty slug, for route pre-generation. Straight
    /// delegation to [`Store::pages`], minus the index entry.
    pub fn params(&self) -> Result<Vec<Vec<String>>> {
        Ok(self
            .pages()?
            .into_iter()
            .filter(|page| !page.slug.is_empty())
            .map(|page| page.slug)
            .collect())
    }

    /// Open Graph image for a page: the front matter `image` when set,
    /// otherwise a deterministic path derived from the page URL.
    pub fn page_image(&self, page: &FrontMatter) -> String {
        page.metadata
            .image
            .clone()
            .unwrap_or_else(|| format!("/og{}.png", page.url))
    }
}
