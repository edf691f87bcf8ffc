//! Workflow error types for transaction lifecycle management.

use ledgerfeed_shared::types::{PostId, TransactionId, UserId};
use thiserror::Error;

use crate::ledger::LedgerError;

/// Errors that can occur during lifecycle operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Validation or reference error from the ledger layer.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Attempted to edit an approved transaction.
    #[error("Cannot edit approved transactions")]
    CannotEditApproved,

    /// Attempted to delete an approved transaction.
    #[error("Cannot delete approved transactions")]
    CannotDeleteApproved,

    /// The post already has an associated transaction.
    #[error("Post {0} already has an associated transaction")]
    PostAlreadyLinked(PostId),

    /// Attempted to delete a post that still has an associated transaction.
    #[error("Cannot delete post {0} while it has an associated transaction")]
    PostHasTransaction(PostId),

    /// Transaction not found.
    #[error("Transaction {0} not found")]
    TransactionNotFound(TransactionId),

    /// Post not found.
    #[error("Post {0} not found")]
    PostNotFound(PostId),

    /// The creator reference does not resolve to a known user.
    #[error("User {0} is not a known user")]
    UnknownUser(UserId),

    /// The approver reference does not resolve to a known user.
    #[error("Approver {0} is not a known user")]
    UnknownApprover(UserId),

    /// The store left a transaction partially written; the operation is
    /// failed and compensating cleanup was attempted.
    #[error("Transaction {0} left in an inconsistent state: {1}")]
    Inconsistent(TransactionId, String),

    /// Backing store error.
    #[error("Store error: {0}")]
    Store(String),
}

impl WorkflowError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Ledger(err) => err.error_code(),
            Self::CannotEditApproved => "CANNOT_EDIT_APPROVED",
            Self::CannotDeleteApproved => "CANNOT_DELETE_APPROVED",
            Self::PostAlreadyLinked(_) => "POST_ALREADY_LINKED",
            Self::PostHasTransaction(_) => "POST_HAS_TRANSACTION",
            Self::TransactionNotFound(_) => "TRANSACTION_NOT_FOUND",
            Self::PostNotFound(_) => "POST_NOT_FOUND",
            Self::UnknownUser(_) => "UNKNOWN_USER",
            Self::UnknownApprover(_) => "UNKNOWN_APPROVER",
            Self::Inconsistent(..) => "INCONSISTENT_STATE",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Ledger(err) => err.http_status_code(),

            // 400 Bad Request - immutable state violations
            Self::CannotEditApproved | Self::CannotDeleteApproved => 400,

            // 404 Not Found - unresolved references
            Self::TransactionNotFound(_)
            | Self::PostNotFound(_)
            | Self::UnknownUser(_)
            | Self::UnknownApprover(_) => 404,

            // 409 Conflict - link already taken
            Self::PostAlreadyLinked(_) | Self::PostHasTransaction(_) => 409,

            // 500 Internal Server Error
            Self::Inconsistent(..) | Self::Store(_) => 500,
        }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}
