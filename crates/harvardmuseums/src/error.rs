use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarvardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("no API key configured")]
    MissingApiKey,
}
