//! Double-entry transaction logic.
//!
//! This module implements the core ledger functionality:
//! - Chart of accounts types
//! - Transaction entries (debits and credits)
//! - Transaction aggregates
//! - Candidate (draft) types and validation reports
//! - Entry and transaction validation rules
//! - Error types for ledger operations

pub mod entry;
pub mod error;
pub mod transaction;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use entry::{EntrySide, TransactionEntry};
pub use error::LedgerError;
pub use transaction::Transaction;
pub use types::{
    Account, AccountKind, EntryDraft, EntryReport, ResolvedEntry, ResolvedTransaction,
    TransactionDraft, ValidationReport,
};
pub use validation::{resolve_transaction, validate_entry, validate_transaction};
