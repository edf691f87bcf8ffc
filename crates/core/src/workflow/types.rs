//! Workflow domain types for transaction lifecycle management.

use chrono::{DateTime, Utc};
use ledgerfeed_shared::types::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction status in the approval workflow.
///
/// `Pending` is the only reachable state for newly created transactions.
/// `Approved` is terminal and immutable. `Rejected` is terminal for that
/// version but re-editable: editing a rejected transaction resets it to
/// `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Awaiting approval; editable.
    Pending,
    /// Approved and immutable.
    Approved,
    /// Rejected; editable, editing resets to pending.
    Rejected,
}

impl TransactionStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if the transaction can be modified.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Pending | Self::Rejected)
    }

    /// Returns true if the transaction is immutable.
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workflow action representing a state transition with audit data.
#[derive(Debug, Clone)]
pub enum WorkflowAction {
    /// Approve a pending transaction.
    Approve {
        /// The new status after approval.
        new_status: TransactionStatus,
        /// The user who approved the transaction.
        approved_by: UserId,
        /// When the transaction was approved.
        approved_at: DateTime<Utc>,
    },
    /// Reject a pending transaction.
    Reject {
        /// The new status after rejection.
        new_status: TransactionStatus,
    },
}

impl WorkflowAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> TransactionStatus {
        match self {
            Self::Approve { new_status, .. } | Self::Reject { new_status } => *new_status,
        }
    }
}
