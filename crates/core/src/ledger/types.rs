//! Ledger domain types for transaction creation and validation.
//!
//! This module defines the candidate (draft) types that model incoming,
//! not-yet-validated data, the reports produced by validation, and the
//! resolved types produced only when a draft passes every check.

use chrono::NaiveDate;
use ledgerfeed_shared::types::{AccountId, PostId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::EntrySide;

/// Account classification in the chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Asset account (cash, receivables, equipment).
    Asset,
    /// Liability account (payables, loans).
    Liability,
    /// Equity account (owner's capital, retained earnings).
    Equity,
    /// Revenue account (sales, service income).
    Revenue,
    /// Expense account (rent, supplies, utilities).
    Expense,
}

impl AccountKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        }
    }

    /// Parses a kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asset" => Some(Self::Asset),
            "liability" => Some(Self::Liability),
            "equity" => Some(Self::Equity),
            "revenue" => Some(Self::Revenue),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An account in the chart of accounts.
///
/// Immutable once referenced by a posted entry, except for the active flag
/// and name/category corrections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub kind: AccountKind,
    /// Free-text category.
    pub category: String,
    /// Whether the account accepts new entries.
    pub is_active: bool,
}

/// A candidate entry: one line of a transaction as submitted by a caller.
///
/// Exactly one of `debit`/`credit` must be present and positive for the
/// entry to be valid; both fields are optional here because this type models
/// the unvalidated state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryDraft {
    /// The account this entry posts to.
    pub account_id: Option<AccountId>,
    /// Debit amount, if this is a debit line.
    pub debit: Option<Decimal>,
    /// Credit amount, if this is a credit line.
    pub credit: Option<Decimal>,
}

/// A candidate transaction as submitted by a caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionDraft {
    /// Transaction description.
    pub description: String,
    /// Transaction date (must not be in the future).
    pub date: Option<NaiveDate>,
    /// The user creating the transaction.
    pub created_by: Option<UserId>,
    /// The post this transaction was derived from, if any.
    pub post_id: Option<PostId>,
    /// The candidate entries (must have at least 2).
    pub entries: Vec<EntryDraft>,
}

/// Validity verdict for a single candidate entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    /// Whether the entry passed every check.
    pub is_valid: bool,
    /// Human-readable problems, all collected (never just the first).
    pub errors: Vec<String>,
}

/// Validity verdict plus running totals for a candidate transaction.
///
/// The totals are returned even when the transaction is invalid so a caller
/// can show live running totals while the user is still editing.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Whether the transaction passed every check.
    pub is_valid: bool,
    /// Human-readable problems, all collected (never just the first).
    pub errors: Vec<String>,
    /// Sum of present debit amounts, rounded to currency precision.
    pub total_debits: Decimal,
    /// Sum of present credit amounts, rounded to currency precision.
    pub total_credits: Decimal,
    /// Absolute difference between total debits and total credits.
    pub balance: Decimal,
}

/// A resolved entry: one fully-typed line of a valid transaction.
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    /// The account this entry posts to.
    pub account_id: AccountId,
    /// Whether this is a debit or credit line.
    pub side: EntrySide,
    /// The positive amount for that side.
    pub amount: Decimal,
}

/// A resolved transaction: the fully-typed result of validating a draft.
///
/// Produced only when every check passes; identity and timestamps are
/// assigned at persistence time by the lifecycle manager.
#[derive(Debug, Clone)]
pub struct ResolvedTransaction {
    /// Trimmed transaction description.
    pub description: String,
    /// Transaction date.
    pub date: NaiveDate,
    /// The user creating the transaction.
    pub created_by: UserId,
    /// The post this transaction was derived from, if any.
    pub post_id: Option<PostId>,
    /// The resolved entries, in submission order.
    pub entries: Vec<ResolvedEntry>,
}
