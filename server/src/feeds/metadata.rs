const BASE_URL: &str = "https://cjroth.com";

pub const BLOG_PATH: &str = app::store::BLOG_PATH;
pub const COPYRIGHT: &str = "Copyright Chris Roth";
pub const DESCRIPTION: &str = app::pages::blog::LISTING_DESCRIPTION;
pub const LANGUAGE: &str = "en";
pub const TITLE: &str = app::pages::blog::LISTING_TITLE;

pub fn link(path: &str) -> String {
    String::from(BASE_URL) + path
}

pub fn blog_link(slug: Option<&str>) -> String {
    match slug {
        Some(slug) => link(format!("{BLOG_PATH}/{slug}").as_str()),
        None => link(BLOG_PATH),
    }
}

pub fn feed_link(name: &str) -> String {
    link(format!("{BLOG_PATH}/feed.{name}").as_str())
}
