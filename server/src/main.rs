#![recursion_limit = "256"]

use leptos::prelude::*;

use app::store;

mod feeds;

const LEPTOS_SERVER_FN_URL_PATH: &str = "/blog/api/{*fn_name}";
const DEFAULT_STORE_PATH: &str = "content/blog";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let store_path = std::env::var("BLOG_STORE_PATH")
        .unwrap_or_else(|_| String::from(DEFAULT_STORE_PATH));
    let ctx = app::context::Context {
        leptos_options: leptos_options.clone(),
        store: store::Store::new(std::path::PathBuf::from(store_path)),
    };

    match ctx.store.params() {
        Ok(params) => log::info!("store holds {} posts", params.len()),
        Err(error) => log::warn!("could not enumerate the store: {error}"),
    }

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let ctx_fn = {
        let ctx = ctx.clone();
        move || provide_context(ctx.store.clone())
    };
    let app_fn = {
        let ctx = ctx.clone();
        move || app::shell(ctx.leptos_options.clone())
    };

    let leptos_server_fn_method_router = axum::routing::get(leptos_server_fn_axum_handler)
        .post(leptos_server_fn_axum_handler);
    let json_feed_method_router = axum::routing::get(feeds::json::handler);
    let rss_feed_method_router = axum::routing::get(feeds::rss::handler);
    let app = axum::Router::new()
        .route(LEPTOS_SERVER_FN_URL_PATH, leptos_server_fn_method_router)
        .route(feeds::json::URL_PATH, json_feed_method_router)
        .route(feeds::rss::URL_PATH, rss_feed_method_router)
        .leptos_routes_with_context(&ctx, routes, ctx_fn, app_fn)
        .fallback(leptos_axum::file_and_error_handler::<app::context::Context, _>(app::shell))
        .with_state(ctx);

    log::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

async fn leptos_server_fn_axum_handler(
    axum::extract::State(ctx): axum::extract::State<app::context::Context>,
    request: axum::extract::Request<axum::body::Body>,
) -> impl axum::response::IntoResponse {
    let additional_context = move || {
        provide_context(ctx.store.clone());
    };
    leptos_axum::handle_server_fns_with_context(additional_context, request).await
}
