//! Persistence for user-curated exhibitions: a CRUD and membership store
//! over a single storage slot holding the whole serialized collection.

mod error;
mod storage;
mod store;

pub use error::StoreError;
pub use storage::{FileStorage, MemoryStorage, StorageBackend, StorageError};
pub use store::ExhibitionStore;
