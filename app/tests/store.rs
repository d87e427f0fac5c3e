use std::path::PathBuf;

use app::store::{Error, Store, BLOG_PATH};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn store() -> Store {
    Store::new(PathBuf::from("tests/data/posts"))
}

#[test]
fn pages_enumerate_markdown_files_in_file_name_order() {
    setup();

    let pages = store().pages().unwrap();
    let urls = pages.iter().map(|page| page.url.as_str()).collect::<Vec<_>>();
    assert_eq!(
        vec![
            "/blog/my-post",
            "/blog/hello",
            "/blog",
            "/blog/notes",
            "/blog/older",
            "/blog/zzz-notes",
        ],
        urls,
    );
}

#[test]
fn the_index_file_maps_to_the_blog_path() {
    setup();

    let pages = store().pages().unwrap();
    let index = pages.iter().find(|page| page.slug.is_empty()).unwrap();
    assert_eq!(BLOG_PATH, index.url);
    assert_eq!("Chris Roth's Blog", index.metadata.title);
}

#[test]
fn get_page_renders_front_matter_and_body() {
    setup();

    let post = store().get_page(&[String::from("hello")]).unwrap();
    let metadata = &post.front_matter.metadata;
    assert_eq!("Hello", metadata.title);
    assert_eq!(Some(String::from("The very first post.")), metadata.description);
    assert_eq!(Some(String::from("Chris Roth")), metadata.author);
    assert_eq!(vec![String::from("a"), String::from("b")], metadata.tags);
    assert_eq!(
        Some(chrono::NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
        metadata.date,
    );
    assert!(post.html_body.contains("<h1"));
    assert!(post.html_body.contains("First heading"));
}

#[test]
fn relative_links_resolve_against_the_page_url() {
    setup();

    let post = store().get_page(&[String::from("hello")]).unwrap();
    assert!(post.html_body.contains("href=\"/blog/older\""));
    assert!(post.html_body.contains("src=\"/blog/images/cover.png\""));
}

#[test]
fn get_page_reports_not_found_for_unknown_slugs() {
    setup();

    let error = store().get_page(&[String::from("nope")]).unwrap_err();
    assert!(matches!(error, Error::NotFound { .. }));
}

#[test]
fn get_page_rejects_path_traversal() {
    setup();

    let error = store()
        .get_page(&[String::from(".."), String::from("posts")])
        .unwrap_err();
    assert!(matches!(error, Error::NotFound { .. }));
}

#[test]
fn params_enumerate_every_slug_but_the_index() {
    setup();

    let params = store().params().unwrap();
    assert_eq!(
        vec![
            vec![String::from("my-post")],
            vec![String::from("hello")],
            vec![String::from("notes")],
            vec![String::from("older")],
            vec![String::from("zzz-notes")],
        ],
        params,
    );
}

#[test]
fn enumerated_slugs_round_trip_through_get_page() {
    setup();

    let store = store();
    for slug in store.params().unwrap() {
        let post = store.get_page(&slug).unwrap();
        assert_eq!(slug, post.front_matter.slug);
    }
    // "My Post.md" is advertised as "my-post" and must resolve as such.
    let post = store.get_page(&[String::from("my-post")]).unwrap();
    assert_eq!("My Post", post.front_matter.metadata.title);
}

#[test]
fn a_dashed_line_does_not_close_the_front_matter() {
    setup();

    let store = Store::new(PathBuf::from("tests/data/malformed"));
    let error = store.get_page(&[String::from("dashes")]).unwrap_err();
    assert!(matches!(error, Error::Deserialize { .. }));
}

#[test]
fn page_image_prefers_the_front_matter_image() {
    setup();

    let store = store();
    let pages = store.pages().unwrap();
    let older = pages.iter().find(|page| page.url == "/blog/older").unwrap();
    let hello = pages.iter().find(|page| page.url == "/blog/hello").unwrap();
    assert_eq!("/images/older.png", store.page_image(older));
    assert_eq!("/og/blog/hello.png", store.page_image(hello));
}
