mod client;
mod error;
pub mod models;
mod objects;
mod search;

pub use client::MetClient;
pub use error::MetError;
pub use models::{MetObject, SearchResponse};

pub type Result<T> = std::result::Result<T, MetError>;
