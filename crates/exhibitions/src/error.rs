use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisting the updated collection failed; the mutation was not
    /// applied.
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
