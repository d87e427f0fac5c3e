use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;
use serde::{Deserialize, Serialize};

use crate::components::{Footer, NavBar, NotFound};
use crate::store;

pub const LISTING_TITLE: &str = "Chris Roth's Blog";
pub const LISTING_DESCRIPTION: &str = "Thoughts on software, design, and building products.";

/// A rendered page plus its Open Graph image, as served to the detail view.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct PostPage {
    pub post: store::Post,
    pub image: String,
}

/// The blog listing: every page of the store except the index page itself,
/// most recent first. The sort is stable and a missing date counts as the
/// epoch, so undated pages come last, in store order among themselves.
pub fn sorted_listing(mut pages: Vec<store::FrontMatter>) -> Vec<store::FrontMatter> {
    pages.retain(|page| page.url != store::BLOG_PATH);
    pages.sort_by_key(|page| std::cmp::Reverse(page.metadata.date.unwrap_or_default()));
    pages
}

/// `en-US` long form, e.g. "January 5, 2024".
pub fn format_date(date: &chrono::NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Split the wildcard route parameter into slug segments. A bare or trailing
/// slash contributes no segment.
pub fn slug_segments(raw: &str) -> Vec<String> {
    raw.split('/')
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

#[component]
pub fn Index() -> impl IntoView {
    let index = Resource::new_blocking(|| (), move |_| async { get_blog_index().await });

    view! {
        <Title text=LISTING_TITLE/>
        <Meta name="description" content=LISTING_DESCRIPTION/>
        <NavBar />
        <main class="blog-index">
            {move || match index.get() {
                None => leptos::either::EitherOf3::A(view! { "Loading…" }.into_view()),
                Some(Ok(list)) => leptos::either::EitherOf3::B(view! {
                    <div class="post-list">
                        {list
                            .into_iter()
                            .map(|page| {
                                let url = page.url.clone();
                                view! {
                                    <article class="post-summary">
                                        <A href={ url }>
                                            {page.metadata.date.map(|date| view! {
                                                <time datetime=date.format("%Y-%m-%d").to_string()>
                                                    {format_date(&date)}
                                                </time>
                                            })}
                                            <h2>{page.metadata.title.clone()}</h2>
                                            {page.metadata.description.clone().map(|description| view! {
                                                <p class="summary">{description}</p>
                                            })}
                                            <span class="read-more">"Read more " {"\u{2192}"}</span>
                                        </A>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                }.into_view()),
                Some(Err(err)) => leptos::either::EitherOf3::C(view! {
                    {format!("Could not load the blog index: {}", err.to_string())}
                }.into_view()),
            }}
        </main>
        <Footer />
    }
}

#[server(GetBlogIndex, "/blog/api", "GetJson", "index")]
pub async fn get_blog_index() -> Result<Vec<store::FrontMatter>, ServerFnError> {
    let store = use_context::<store::Store>()
        .ok_or_else(|| ServerFnError::new("content store was not provided"))?;
    store
        .pages()
        .map(sorted_listing)
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

#[component]
pub fn Post() -> impl IntoView {
    let params = leptos_router::hooks::use_params_map();

    let post = Resource::new_blocking(
        move || params.read().get("slug").unwrap_or_default(),
        move |slug| async move {
            let segments = slug_segments(&slug);
            if segments.is_empty() {
                // "/blog/" with a trailing slash names no page
                return Ok(None);
            }
            get_blog_post(segments).await
        },
    );

    view! {
        <NavBar />
        {move || match post.get() {
            None => leptos::either::EitherOf4::A(view! { <p>{"Loading…"}</p> }.into_view()),
            Some(Ok(Some(page))) => leptos::either::EitherOf4::B(view! {
                <PostArticle page />
            }.into_view()),
            Some(Ok(None)) => leptos::either::EitherOf4::C(view! { <NotFound /> }.into_view()),
            Some(Err(err)) => leptos::either::EitherOf4::D(view! {
                <p>{format!("Could not load the post: {}", err.to_string())}</p>
            }.into_view()),
        }}
        <Footer />
    }
}

#[component]
fn PostArticle(page: PostPage) -> impl IntoView {
    let metadata = page.post.front_matter.metadata;
    let tags = metadata.tags;

    view! {
        <Title text=metadata.title.clone()/>
        {metadata.description.clone().map(|description| view! {
            <Meta name="description" content=description/>
        })}
        <Meta property="og:image" content=page.image/>
        <main class="blog-post">
            <article>
                <header>
                    <h1>{metadata.title.clone()}</h1>
                    {metadata.description.clone().map(|description| view! {
                        <p class="description">{description}</p>
                    })}
                    <div class="post-meta">
                        {metadata.author.clone().map(|author| view! {
                            <span class="author">{author}</span>
                        })}
                        {metadata.date.map(|date| view! {
                            <span class="separator">{"\u{2022}"}</span>
                            <time datetime=date.format("%Y-%m-%d").to_string()>
                                {format_date(&date)}
                            </time>
                        })}
                        {(!tags.is_empty()).then(|| view! {
                            <span class="separator">{"\u{2022}"}</span>
                            <span class="tags">
                                {tags
                                    .into_iter()
                                    .map(|tag| view! { <span class="tag">{tag}</span> })
                                    .collect_view()}
                            </span>
                        })}
                    </div>
                </header>
                <div class="post-body" inner_html=page.post.html_body></div>
            </article>
        </main>
    }
}

#[server(GetBlogPost, "/blog/api", "GetJson", "post")]
pub async fn get_blog_post(slug: Vec<String>) -> Result<Option<PostPage>, ServerFnError> {
    if slug.is_empty() {
        return Err(ServerFnError::MissingArg(String::from("empty slug")));
    }
    let store = use_context::<store::Store>()
        .ok_or_else(|| ServerFnError::new("content store was not provided"))?;
    match store.get_page(&slug) {
        Ok(post) => {
            let image = store.page_image(&post.front_matter);
            Ok(Some(PostPage { post, image }))
        }
        Err(store::Error::NotFound { .. }) => Ok(None),
        Err(error) => Err(ServerFnError::ServerError(error.to_string())),
    }
}
