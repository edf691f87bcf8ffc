//! Transaction entry domain types.

use ledgerfeed_shared::types::{AccountId, EntryId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side of a transaction entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    /// Debit entry (increases assets/expenses, decreases liabilities/equity/revenue).
    Debit,
    /// Credit entry (decreases assets/expenses, increases liabilities/equity/revenue).
    Credit,
}

impl EntrySide {
    /// Returns the lowercase wire name of the side.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

impl std::fmt::Display for EntrySide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single debit or credit line of a persisted transaction.
///
/// Each transaction consists of at least two entries whose debit and credit
/// totals must balance. Entries are immutable once the parent transaction is
/// approved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionEntry {
    /// Unique identifier for this entry.
    pub id: EntryId,
    /// The transaction this entry belongs to.
    pub transaction_id: TransactionId,
    /// The account affected by this entry.
    pub account_id: AccountId,
    /// Whether this is a debit or credit.
    pub side: EntrySide,
    /// The positive amount for that side.
    pub amount: Decimal,
}

impl TransactionEntry {
    /// Returns the debit amount (zero for credit entries).
    #[must_use]
    pub fn debit(&self) -> Decimal {
        match self.side {
            EntrySide::Debit => self.amount,
            EntrySide::Credit => Decimal::ZERO,
        }
    }

    /// Returns the credit amount (zero for debit entries).
    #[must_use]
    pub fn credit(&self) -> Decimal {
        match self.side {
            EntrySide::Debit => Decimal::ZERO,
            EntrySide::Credit => self.amount,
        }
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.side {
            EntrySide::Debit => self.amount,
            EntrySide::Credit => -self.amount,
        }
    }
}
