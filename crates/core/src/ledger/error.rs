//! Ledger error types for validation and reference errors.

use ledgerfeed_shared::types::AccountId;
use thiserror::Error;

use super::types::ValidationReport;

/// Errors that can occur when accepting a candidate transaction.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The candidate failed validation; carries the full report.
    #[error("Transaction validation failed: {}", .0.errors.join("; "))]
    Validation(ValidationReport),

    /// A referenced account does not exist.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// A referenced account is inactive and cannot be posted to.
    #[error("Account {0} is inactive")]
    AccountInactive(AccountId),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::AccountInactive(_) => "ACCOUNT_INACTIVE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::AccountInactive(_) => 400,
            Self::AccountNotFound(_) => 404,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_validation_error_display_lists_problems() {
        let err = LedgerError::Validation(ValidationReport {
            is_valid: false,
            errors: vec![
                "Description is required".to_string(),
                "Transaction must have at least 2 entries".to_string(),
            ],
            total_debits: Decimal::ZERO,
            total_credits: Decimal::ZERO,
            balance: Decimal::ZERO,
        });
        let rendered = err.to_string();
        assert!(rendered.contains("Description is required"));
        assert!(rendered.contains("at least 2 entries"));
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
        assert_eq!(err.http_status_code(), 400);
    }

    #[test]
    fn test_account_errors() {
        let id = AccountId::new();
        assert_eq!(LedgerError::AccountNotFound(id).http_status_code(), 404);
        assert_eq!(LedgerError::AccountInactive(id).http_status_code(), 400);
        assert_eq!(
            LedgerError::AccountInactive(id).error_code(),
            "ACCOUNT_INACTIVE"
        );
    }
}
