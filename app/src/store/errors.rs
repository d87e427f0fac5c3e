use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not read `{path}': {error}")]
    IO {
        error: std::io::Error,
        path: PathBuf,
    },

    #[error("Could not parse `{path}': {error}")]
    Deserialize { error: String, path: PathBuf },

    #[error("Could not find page `{slug}': {error}")]
    NotFound { slug: String, error: String },
}

pub type Result<T> = std::result::Result<T, Error>;

// Lets axum handlers (the feeds) bubble store errors straight out; a missing
// page is a 404, anything else is on us.
impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            Error::NotFound { .. } => axum::http::StatusCode::NOT_FOUND,
            _ => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };
        log::error!("{self}");
        (status, self.to_string()).into_response()
    }
}
