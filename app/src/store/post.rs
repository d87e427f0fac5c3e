use serde::{Deserialize, Serialize};

use crate::store::FrontMatter;

/// A fully rendered page: front matter plus the HTML produced from its
/// Markdown body.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Post {
    pub front_matter: FrontMatter,
    pub html_body: String,
}

#[cfg(feature = "ssr")]
pub(crate) use render::render;

#[cfg(feature = "ssr")]
mod render {
    use pulldown_cmark::{CowStr, Event, Tag};
    use std::path::{Path, PathBuf};

    use super::Post;
    use crate::store::{Error, FrontMatter, Result, BLOG_PATH};

    pub fn render(path: &Path) -> Result<Post> {
        let contents = std::fs::read_to_string(path).map_err(|error| Error::IO {
            error,
            path: PathBuf::from(path),
        })?;
        let (front_matter, body) = FrontMatter::from_contents(&contents, path)?;

        let all_options = pulldown_cmark::Options::all();
        let events = pulldown_cmark::Parser::new_ext(body, all_options)
            .map(|event| rewrite_relative_links(event, &front_matter));

        let mut html = String::with_capacity(body.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, events);

        Ok(Post {
            front_matter,
            html_body: html,
        })
    }

    /// Relative link and image destinations in a page body are resolved
    /// against the page's own URL, so that `[next](other-post)` written in
    /// `/blog/some-post` points at `/blog/other-post` wherever the body ends
    /// up being displayed.
    fn rewrite_relative_links<'input>(
        event: Event<'input>,
        front_matter: &FrontMatter,
    ) -> Event<'input> {
        match event {
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Link {
                link_type,
                dest_url: resolve(dest_url, front_matter),
                title,
                id,
            }),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Image {
                link_type,
                dest_url: resolve(dest_url, front_matter),
                title,
                id,
            }),
            other => other,
        }
    }

    fn resolve<'input>(dest: CowStr<'input>, front_matter: &FrontMatter) -> CowStr<'input> {
        if dest.is_empty()
            || dest.starts_with('/')
            || dest.starts_with('#')
            || dest.contains(':')
        {
            return dest;
        }

        // Base directory of the page in URL space: the blog prefix plus every
        // slug segment but the last. With a flat store this is always the
        // blog prefix itself.
        let mut segments: Vec<&str> = BLOG_PATH
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        let base_len = front_matter.slug.len().saturating_sub(1);
        segments.extend(front_matter.slug[..base_len].iter().map(String::as_str));

        for segment in dest.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                other => segments.push(other),
            }
        }
        CowStr::from(format!("/{}", segments.join("/")))
    }
}
