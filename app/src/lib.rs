pub mod components;
#[cfg(feature = "ssr")]
pub mod context;
pub mod pages;
pub mod store;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment, WildcardSegment,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body id="top">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/site-pkg/cjroth-site.css"/>

        // pages set their own titles; the landing page leaves it empty
        <Title formatter=|text: String| {
            if text.is_empty() {
                String::from("Chris Roth")
            } else {
                text
            }
        }/>

        // This is really static content, so render everything on the server.
        // The blog routes block on their store lookup before streaming.
        <Router>
            <Routes fallback=|| view! { <components::NotFound /> }>
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
                <Route
                    path=StaticSegment("blog")
                    view=pages::blog::Index
                    ssr=SsrMode::PartiallyBlocked
                />
                <Route
                    path=(StaticSegment("blog"), WildcardSegment("slug"))
                    view=pages::blog::Post
                    ssr=SsrMode::PartiallyBlocked
                />
            </Routes>
        </Router>
    }
}
