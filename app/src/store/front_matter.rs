use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One page of the store, as seen by the listing and the feeds: its unique
/// URL, its slug segments (empty for the index page), and its front matter.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct FrontMatter {
    pub url: String,
    pub slug: Vec<String>,
    pub metadata: Metadata,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Metadata {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "naive_date_from_str",
        serialize_with = "naive_date_to_str"
    )]
    pub date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

fn naive_date_from_str<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<chrono::NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Deserialize::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(s) => Ok(Some(
            chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(serde::de::Error::custom)?,
        )),
    }
}

fn naive_date_to_str<S>(
    date: &Option<chrono::NaiveDate>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(date.format("%Y-%m-%d").to_string().as_str()),
        None => serializer.serialize_none(),
    }
}

#[cfg(feature = "ssr")]
pub(crate) use read::slug_for_stem;

#[cfg(feature = "ssr")]
mod read {
    use std::path::{Path, PathBuf};

    use super::{FrontMatter, Metadata};
    use crate::store::{Error, Result, BLOG_PATH};

    impl FrontMatter {
        pub fn read(path: &Path) -> Result<Self> {
            let contents = std::fs::read_to_string(path).map_err(|error| Error::IO {
                error,
                path: PathBuf::from(path),
            })?;
            Self::from_contents(&contents, path).map(|(front_matter, _)| front_matter)
        }

        /// Extract and deserialize the YAML front matter, returning it along
        /// with the remaining Markdown body.
        pub(crate) fn from_contents<'a>(
            contents: &'a str,
            path: &Path,
        ) -> Result<(Self, &'a str)> {
            let (yaml, body) =
                split_front_matter(contents).ok_or_else(|| Error::Deserialize {
                    error: String::from("front matter is missing"),
                    path: PathBuf::from(path),
                })?;
            let metadata: Metadata =
                serde_yml::from_str(yaml).map_err(|error| Error::Deserialize {
                    error: format!("front matter is not valid YAML: {error}"),
                    path: PathBuf::from(path),
                })?;

            let stem = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_else(|| Error::Deserialize {
                    error: String::from("file name is not valid utf-8"),
                    path: PathBuf::from(path),
                })?;
            let slug = slug_for_stem(stem);
            let url = if slug.is_empty() {
                String::from(BLOG_PATH)
            } else {
                format!("{}/{}", BLOG_PATH, slug.join("/"))
            };

            Ok((Self { url, slug, metadata }, body))
        }
    }

    /// The slug a file stem is advertised under. [`Store::get_page`] resolves
    /// with the same mapping, so enumeration and lookup cannot drift apart.
    ///
    /// [`Store::get_page`]: crate::store::Store::get_page
    pub(crate) fn slug_for_stem(stem: &str) -> Vec<String> {
        if stem == "index" {
            vec![]
        } else {
            vec![slug::slugify(stem)]
        }
    }

    /// Split `contents` into its front matter block and the body after it.
    /// The block is delimited by whole `---` lines at the very top of the
    /// file; trailing spaces or tabs after a delimiter are tolerated, but a
    /// line that merely starts with three hyphens (`----`, `--- foo`) does
    /// not close the block.
    fn split_front_matter(contents: &str) -> Option<(&str, &str)> {
        let rest = contents.strip_prefix("---")?;
        let rest = rest.trim_start_matches([' ', '\t']);
        let rest = rest.strip_prefix('\n')?;
        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end_matches(['\n', '\r', ' ', '\t']) == "---" {
                let yaml = &rest[..offset];
                let body = &rest[offset + line.len()..];
                return Some((yaml, body));
            }
            offset += line.len();
        }
        None
    }
}
