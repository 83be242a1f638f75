mod client;
mod error;
pub mod models;
mod objects;

pub use client::HarvardClient;
pub use error::HarvardError;
pub use models::{HarvardObject, ObjectsResponse, PageInfo};

pub type Result<T> = std::result::Result<T, HarvardError>;
