//! Workflow service for transaction state transitions.
//!
//! Stateless transition logic for the approval state machine. Approve and
//! reject on a non-pending transaction are deliberate no-ops (`None`), not
//! errors; callers report the stored transaction unchanged. Edit and delete
//! guards return hard errors, since touching an approved transaction is an
//! immutable-state violation.

use chrono::{DateTime, Utc};
use ledgerfeed_shared::types::UserId;

use crate::workflow::error::WorkflowError;
use crate::workflow::types::{TransactionStatus, WorkflowAction};

/// Stateless service for managing transaction workflow transitions.
pub struct WorkflowService;

impl WorkflowService {
    /// Approve a pending transaction.
    ///
    /// Returns `Some(WorkflowAction::Approve)` when the transaction is
    /// pending, and `None` (no-op) for any other status.
    #[must_use]
    pub fn approve(
        current_status: TransactionStatus,
        approved_by: UserId,
        approved_at: DateTime<Utc>,
    ) -> Option<WorkflowAction> {
        match current_status {
            TransactionStatus::Pending => Some(WorkflowAction::Approve {
                new_status: TransactionStatus::Approved,
                approved_by,
                approved_at,
            }),
            TransactionStatus::Approved | TransactionStatus::Rejected => None,
        }
    }

    /// Reject a pending transaction.
    ///
    /// Returns `Some(WorkflowAction::Reject)` when the transaction is
    /// pending, and `None` (no-op) for any other status. Rejecting twice in
    /// a row leaves the status rejected; the second call is a no-op.
    #[must_use]
    pub fn reject(current_status: TransactionStatus) -> Option<WorkflowAction> {
        match current_status {
            TransactionStatus::Pending => Some(WorkflowAction::Reject {
                new_status: TransactionStatus::Rejected,
            }),
            TransactionStatus::Approved | TransactionStatus::Rejected => None,
        }
    }

    /// Validate that a transaction can be edited.
    ///
    /// # Errors
    ///
    /// Returns `CannotEditApproved` if the transaction is approved.
    pub fn ensure_editable(current_status: TransactionStatus) -> Result<(), WorkflowError> {
        if current_status.is_immutable() {
            return Err(WorkflowError::CannotEditApproved);
        }
        Ok(())
    }

    /// Validate that a transaction can be deleted.
    ///
    /// # Errors
    ///
    /// Returns `CannotDeleteApproved` if the transaction is approved.
    pub fn ensure_deletable(current_status: TransactionStatus) -> Result<(), WorkflowError> {
        if current_status.is_immutable() {
            return Err(WorkflowError::CannotDeleteApproved);
        }
        Ok(())
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Pending → Approved (approve)
    /// - Pending → Rejected (reject)
    /// - Rejected → Pending (edit)
    #[must_use]
    pub fn is_valid_transition(from: TransactionStatus, to: TransactionStatus) -> bool {
        matches!(
            (from, to),
            (
                TransactionStatus::Pending,
                TransactionStatus::Approved | TransactionStatus::Rejected
            ) | (TransactionStatus::Rejected, TransactionStatus::Pending)
        )
    }
}
