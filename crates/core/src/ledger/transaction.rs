//! Transaction aggregate.

use chrono::{DateTime, NaiveDate, Utc};
use ledgerfeed_shared::types::{PostId, TransactionId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::TransactionEntry;
use crate::workflow::TransactionStatus;

/// A journal transaction consisting of balanced entries.
///
/// Entry order is not semantically significant but is preserved for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// Transaction description.
    pub description: String,
    /// Transaction date.
    pub date: NaiveDate,
    /// Current status in the approval workflow.
    pub status: TransactionStatus,
    /// User who created the transaction.
    pub created_by: UserId,
    /// User who approved the transaction, if approved.
    pub approved_by: Option<UserId>,
    /// The post this transaction was derived from, if any.
    pub post_id: Option<PostId>,
    /// When the transaction was created.
    pub created_at: DateTime<Utc>,
    /// When the transaction was last updated.
    pub updated_at: DateTime<Utc>,
    /// Transaction entries, in submission order.
    pub entries: Vec<TransactionEntry>,
}

impl Transaction {
    /// Returns true if the transaction can be edited.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        self.status.is_editable()
    }

    /// Returns true if the transaction can be approved.
    #[must_use]
    pub fn can_approve(&self) -> bool {
        self.status == TransactionStatus::Pending
    }

    /// Returns true if the transaction can be deleted.
    #[must_use]
    pub fn can_delete(&self) -> bool {
        !self.status.is_immutable()
    }

    /// Sum of debit amounts across all entries.
    #[must_use]
    pub fn total_debits(&self) -> Decimal {
        self.entries.iter().map(TransactionEntry::debit).sum()
    }

    /// Sum of credit amounts across all entries.
    #[must_use]
    pub fn total_credits(&self) -> Decimal {
        self.entries.iter().map(TransactionEntry::credit).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::entry::EntrySide;
    use ledgerfeed_shared::types::{AccountId, EntryId};
    use rust_decimal_macros::dec;

    fn make_transaction(status: TransactionStatus) -> Transaction {
        let id = TransactionId::new();
        let entries = vec![
            TransactionEntry {
                id: EntryId::new(),
                transaction_id: id,
                account_id: AccountId::new(),
                side: EntrySide::Debit,
                amount: dec!(75.00),
            },
            TransactionEntry {
                id: EntryId::new(),
                transaction_id: id,
                account_id: AccountId::new(),
                side: EntrySide::Credit,
                amount: dec!(75.00),
            },
        ];
        Transaction {
            id,
            description: "Office supplies".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            status,
            created_by: UserId::new(),
            approved_by: None,
            post_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            entries,
        }
    }

    #[test]
    fn test_totals() {
        let tx = make_transaction(TransactionStatus::Pending);
        assert_eq!(tx.total_debits(), dec!(75.00));
        assert_eq!(tx.total_credits(), dec!(75.00));
    }

    #[test]
    fn test_pending_is_editable_and_approvable() {
        let tx = make_transaction(TransactionStatus::Pending);
        assert!(tx.is_editable());
        assert!(tx.can_approve());
        assert!(tx.can_delete());
    }

    #[test]
    fn test_approved_is_locked() {
        let tx = make_transaction(TransactionStatus::Approved);
        assert!(!tx.is_editable());
        assert!(!tx.can_approve());
        assert!(!tx.can_delete());
    }

    #[test]
    fn test_rejected_is_editable() {
        let tx = make_transaction(TransactionStatus::Rejected);
        assert!(tx.is_editable());
        assert!(!tx.can_approve());
        assert!(tx.can_delete());
    }
}
