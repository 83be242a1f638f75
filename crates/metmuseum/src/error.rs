use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("JSON error at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
