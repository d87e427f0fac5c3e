use app::pages::blog::{
    format_date, slug_segments, sorted_listing, LISTING_DESCRIPTION, LISTING_TITLE,
};
use app::store::{FrontMatter, Metadata, BLOG_PATH};

fn page(url: &str, date: Option<(i32, u32, u32)>) -> FrontMatter {
    let slug = url
        .trim_start_matches(BLOG_PATH)
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect();
    FrontMatter {
        url: String::from(url),
        slug,
        metadata: Metadata {
            title: String::from(url),
            description: None,
            date: date.map(|(y, m, d)| chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            author: None,
            tags: vec![],
            image: None,
        },
    }
}

#[test]
fn listing_excludes_the_index_page() {
    let listing = sorted_listing(vec![
        page("/blog", None),
        page("/blog/one", Some((2024, 1, 5))),
    ]);
    assert!(listing.iter().all(|entry| entry.url != BLOG_PATH));
    assert_eq!(1, listing.len());
}

#[test]
fn listing_is_most_recent_first() {
    let listing = sorted_listing(vec![
        page("/blog/old", Some((2023, 11, 20))),
        page("/blog/new", Some((2024, 3, 18))),
        page("/blog/mid", Some((2024, 1, 5))),
    ]);
    let urls = listing.iter().map(|entry| entry.url.as_str()).collect::<Vec<_>>();
    assert_eq!(vec!["/blog/new", "/blog/mid", "/blog/old"], urls);
}

#[test]
fn undated_pages_come_last_in_collection_order() {
    let listing = sorted_listing(vec![
        page("/blog/undated-a", None),
        page("/blog/dated", Some((2024, 1, 5))),
        page("/blog/undated-b", None),
    ]);
    let urls = listing.iter().map(|entry| entry.url.as_str()).collect::<Vec<_>>();
    assert_eq!(vec!["/blog/dated", "/blog/undated-a", "/blog/undated-b"], urls);
}

#[test]
fn equal_dates_keep_collection_order() {
    let listing = sorted_listing(vec![
        page("/blog/first", Some((2024, 1, 5))),
        page("/blog/second", Some((2024, 1, 5))),
    ]);
    let urls = listing.iter().map(|entry| entry.url.as_str()).collect::<Vec<_>>();
    assert_eq!(vec!["/blog/first", "/blog/second"], urls);
}

#[test]
fn listing_metadata_is_pinned() {
    assert_eq!("Chris Roth's Blog", LISTING_TITLE);
    assert_eq!(
        "Thoughts on software, design, and building products.",
        LISTING_DESCRIPTION,
    );
}

#[test]
fn slashes_alone_name_no_page() {
    // The detail view treats an empty segment list as a missing page, not as
    // a server error; these are the wildcard values that take that path.
    assert!(slug_segments("").is_empty());
    assert!(slug_segments("/").is_empty());
    assert_eq!(vec![String::from("hello")], slug_segments("hello/"));
    assert_eq!(
        vec![String::from("a"), String::from("b")],
        slug_segments("a/b"),
    );
}

#[test]
fn dates_format_in_long_form() {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    assert_eq!("January 5, 2024", format_date(&date));
}
