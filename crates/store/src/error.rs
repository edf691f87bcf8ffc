//! Store error types.

use ledgerfeed_core::workflow::WorkflowError;
use ledgerfeed_shared::types::{PostId, TransactionId};
use thiserror::Error;

/// Errors reported by a [`crate::LedgerStore`] implementation.
///
/// "Not found" is always reported distinctly from backend failure so
/// callers can tell an absent row from a broken store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    /// Post not found.
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    /// Backend failure (I/O, connection, corruption).
    #[error("Store backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for WorkflowError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TransactionNotFound(id) => Self::TransactionNotFound(id),
            StoreError::PostNotFound(id) => Self::PostNotFound(id),
            StoreError::Backend(msg) => Self::Store(msg),
        }
    }
}
