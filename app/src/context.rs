use leptos::prelude::LeptosOptions;

use crate::store;

/// Server-side application state: the Leptos configuration plus the content
/// store handed to every server function and page render.
#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub store: store::Store,
}

impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
