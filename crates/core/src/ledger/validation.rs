//! Business rule validation for candidate transactions.
//!
//! Validation here is pure computation: the functions never mutate state and
//! never fail for expected-invalid input. Problems are collected into
//! reports so a caller can surface everything wrong at once, and running
//! totals are computed even for invalid drafts so a UI can show them while
//! the user is still editing.

use chrono::NaiveDate;
use ledgerfeed_shared::types::money::{format_usd, round_currency};
use rust_decimal::Decimal;

use super::entry::EntrySide;
use super::types::{
    EntryDraft, EntryReport, ResolvedEntry, ResolvedTransaction, TransactionDraft,
    ValidationReport,
};

/// Maximum transaction description length, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// Minimum number of entries for a double-entry transaction.
pub const MIN_ENTRIES: usize = 2;

/// Smallest accepted entry amount (0.01).
#[must_use]
pub fn min_amount() -> Decimal {
    Decimal::new(1, 2)
}

/// Largest accepted entry amount (999,999,999.99).
#[must_use]
pub fn max_amount() -> Decimal {
    Decimal::new(99_999_999_999, 2)
}

/// Balance tolerance (0.01), absorbing summation rounding rather than
/// semantic imbalance.
#[must_use]
pub fn balance_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

fn amount_in_bounds(amount: Decimal) -> bool {
    amount >= min_amount() && amount <= max_amount()
}

/// Validates a single candidate entry.
///
/// All violations are collected, in rule order, so a caller can report
/// everything wrong with the entry at once.
#[must_use]
pub fn validate_entry(entry: &EntryDraft) -> EntryReport {
    let mut errors = Vec::new();

    if entry.account_id.is_none() {
        errors.push("Account ID is required".to_string());
    }

    match (entry.debit, entry.credit) {
        (None, None) => {
            errors.push("Entry must have either a debit or credit amount".to_string());
        }
        (Some(debit), Some(credit)) if debit > Decimal::ZERO && credit > Decimal::ZERO => {
            errors.push("Entry cannot have both debit and credit amounts".to_string());
        }
        _ => {}
    }

    if let Some(debit) = entry.debit {
        if !amount_in_bounds(debit) {
            errors.push("Debit amount must be between 0.01 and 999999999.99".to_string());
        }
    }
    if let Some(credit) = entry.credit {
        if !amount_in_bounds(credit) {
            errors.push("Credit amount must be between 0.01 and 999999999.99".to_string());
        }
    }

    EntryReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Validates a whole candidate transaction against `today`.
///
/// Checks run in order: description, date, creator, entry-count floor,
/// per-entry rules (skipped below the floor, since per-entry problems are
/// not meaningful there), and the balance invariant. Totals are always
/// computed from whatever entries exist, valid or not.
#[must_use]
pub fn validate_transaction(draft: &TransactionDraft, today: NaiveDate) -> ValidationReport {
    let mut errors = Vec::new();

    let description = draft.description.trim();
    if description.is_empty() {
        errors.push("Description is required".to_string());
    } else if description.chars().count() > MAX_DESCRIPTION_CHARS {
        errors.push("Description must be 200 characters or less".to_string());
    }

    match draft.date {
        None => errors.push("Transaction date is required".to_string()),
        Some(date) if date > today => {
            errors.push("Transaction date cannot be in the future".to_string());
        }
        Some(_) => {}
    }

    if draft.created_by.is_none() {
        errors.push("Created by is required".to_string());
    }

    if draft.entries.len() < MIN_ENTRIES {
        errors.push("Transaction must have at least 2 entries".to_string());
    } else {
        for (index, entry) in draft.entries.iter().enumerate() {
            let report = validate_entry(entry);
            for problem in report.errors {
                errors.push(format!("Entry {}: {problem}", index + 1));
            }
        }
    }

    let total_debits = round_currency(draft.entries.iter().filter_map(|e| e.debit).sum());
    let total_credits = round_currency(draft.entries.iter().filter_map(|e| e.credit).sum());
    let balance = (total_debits - total_credits).abs();

    if balance > balance_tolerance() {
        errors.push(format!(
            "Transaction does not balance. Debits: {}, Credits: {}",
            format_usd(total_debits),
            format_usd(total_credits)
        ));
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        total_debits,
        total_credits,
        balance,
    }
}

/// Resolves a candidate transaction into its fully-typed form.
///
/// Runs [`validate_transaction`] and, on a clean report, parses the draft
/// into a [`ResolvedTransaction`] whose fields are no longer optional.
///
/// # Errors
///
/// Returns the full [`ValidationReport`] if any check fails.
pub fn resolve_transaction(
    draft: &TransactionDraft,
    today: NaiveDate,
) -> Result<ResolvedTransaction, ValidationReport> {
    let report = validate_transaction(draft, today);
    if !report.is_valid {
        return Err(report);
    }

    // A clean report guarantees these fields; the fallbacks are unreachable
    // but keep the parse total without panicking.
    let (Some(date), Some(created_by)) = (draft.date, draft.created_by) else {
        return Err(report);
    };

    let mut entries = Vec::with_capacity(draft.entries.len());
    for entry in &draft.entries {
        let resolved = match (entry.account_id, entry.debit, entry.credit) {
            (Some(account_id), Some(amount), None) => ResolvedEntry {
                account_id,
                side: EntrySide::Debit,
                amount,
            },
            (Some(account_id), None, Some(amount)) => ResolvedEntry {
                account_id,
                side: EntrySide::Credit,
                amount,
            },
            _ => return Err(report),
        };
        entries.push(resolved);
    }

    Ok(ResolvedTransaction {
        description: draft.description.trim().to_string(),
        date,
        created_by,
        post_id: draft.post_id,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerfeed_shared::types::{AccountId, PostId, UserId};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn debit_entry(amount: Decimal) -> EntryDraft {
        EntryDraft {
            account_id: Some(AccountId::new()),
            debit: Some(amount),
            credit: None,
        }
    }

    fn credit_entry(amount: Decimal) -> EntryDraft {
        EntryDraft {
            account_id: Some(AccountId::new()),
            debit: None,
            credit: Some(amount),
        }
    }

    fn make_draft(entries: Vec<EntryDraft>) -> TransactionDraft {
        TransactionDraft {
            description: "Office supplies".to_string(),
            date: Some(today()),
            created_by: Some(UserId::new()),
            post_id: None,
            entries,
        }
    }

    // ========== Entry validator ==========

    #[test]
    fn test_entry_valid_debit() {
        let report = validate_entry(&debit_entry(dec!(100.00)));
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_entry_missing_account() {
        let mut entry = debit_entry(dec!(100.00));
        entry.account_id = None;
        let report = validate_entry(&entry);
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["Account ID is required"]);
    }

    #[test]
    fn test_entry_neither_amount() {
        let entry = EntryDraft {
            account_id: Some(AccountId::new()),
            debit: None,
            credit: None,
        };
        let report = validate_entry(&entry);
        assert_eq!(
            report.errors,
            vec!["Entry must have either a debit or credit amount"]
        );
    }

    #[test]
    fn test_entry_both_amounts() {
        let entry = EntryDraft {
            account_id: Some(AccountId::new()),
            debit: Some(dec!(10.00)),
            credit: Some(dec!(10.00)),
        };
        let report = validate_entry(&entry);
        assert_eq!(
            report.errors,
            vec!["Entry cannot have both debit and credit amounts"]
        );
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(0.001))]
    #[case(dec!(-5))]
    #[case(dec!(1000000000))]
    fn test_entry_debit_out_of_bounds(#[case] amount: Decimal) {
        let report = validate_entry(&debit_entry(amount));
        assert_eq!(
            report.errors,
            vec!["Debit amount must be between 0.01 and 999999999.99"]
        );
    }

    #[rstest]
    #[case(dec!(0.01))]
    #[case(dec!(999999999.99))]
    fn test_entry_bounds_are_inclusive(#[case] amount: Decimal) {
        assert!(validate_entry(&credit_entry(amount)).is_valid);
    }

    #[test]
    fn test_entry_collects_all_problems() {
        let entry = EntryDraft {
            account_id: None,
            debit: None,
            credit: None,
        };
        let report = validate_entry(&entry);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0], "Account ID is required");
        assert_eq!(
            report.errors[1],
            "Entry must have either a debit or credit amount"
        );
    }

    // ========== Transaction validator ==========

    #[test]
    fn test_balanced_transaction_is_valid() {
        // Scenario A
        let draft = make_draft(vec![debit_entry(dec!(100.00)), credit_entry(dec!(100.00))]);
        let report = validate_transaction(&draft, today());
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.total_debits, dec!(100.00));
        assert_eq!(report.total_credits, dec!(100.00));
        assert_eq!(report.balance, Decimal::ZERO);
    }

    #[test]
    fn test_unbalanced_transaction_message() {
        // Scenario B
        let draft = make_draft(vec![debit_entry(dec!(100.00)), credit_entry(dec!(90.00))]);
        let report = validate_transaction(&draft, today());
        assert!(!report.is_valid);
        assert!(report.errors.contains(
            &"Transaction does not balance. Debits: $100.00, Credits: $90.00".to_string()
        ));
        assert_eq!(report.balance, dec!(10.00));
    }

    #[test]
    fn test_single_entry_rejected() {
        // Scenario C
        let draft = make_draft(vec![debit_entry(dec!(50.00))]);
        let report = validate_transaction(&draft, today());
        assert!(!report.is_valid);
        assert!(
            report
                .errors
                .contains(&"Transaction must have at least 2 entries".to_string())
        );
        // Totals are still computed from whatever entries exist.
        assert_eq!(report.total_debits, dec!(50.00));
        assert_eq!(report.total_credits, Decimal::ZERO);
        assert_eq!(report.balance, dec!(50.00));
    }

    #[test]
    fn test_entry_problems_are_position_prefixed() {
        let mut second = credit_entry(dec!(100.00));
        second.account_id = None;
        let draft = make_draft(vec![debit_entry(dec!(100.00)), second]);
        let report = validate_transaction(&draft, today());
        assert_eq!(report.errors, vec!["Entry 2: Account ID is required"]);
    }

    #[test]
    fn test_description_required() {
        let mut draft = make_draft(vec![debit_entry(dec!(10.00)), credit_entry(dec!(10.00))]);
        draft.description = "   ".to_string();
        let report = validate_transaction(&draft, today());
        assert_eq!(report.errors, vec!["Description is required"]);
    }

    #[test]
    fn test_description_length_bound() {
        let mut draft = make_draft(vec![debit_entry(dec!(10.00)), credit_entry(dec!(10.00))]);
        draft.description = "x".repeat(MAX_DESCRIPTION_CHARS + 1);
        let report = validate_transaction(&draft, today());
        assert_eq!(
            report.errors,
            vec!["Description must be 200 characters or less"]
        );

        draft.description = "x".repeat(MAX_DESCRIPTION_CHARS);
        assert!(validate_transaction(&draft, today()).is_valid);
    }

    #[test]
    fn test_date_required() {
        let mut draft = make_draft(vec![debit_entry(dec!(10.00)), credit_entry(dec!(10.00))]);
        draft.date = None;
        let report = validate_transaction(&draft, today());
        assert_eq!(report.errors, vec!["Transaction date is required"]);
    }

    #[test]
    fn test_future_date_rejected() {
        let mut draft = make_draft(vec![debit_entry(dec!(10.00)), credit_entry(dec!(10.00))]);
        draft.date = Some(today().succ_opt().unwrap());
        let report = validate_transaction(&draft, today());
        assert_eq!(report.errors, vec!["Transaction date cannot be in the future"]);
    }

    #[test]
    fn test_today_is_not_future() {
        let draft = make_draft(vec![debit_entry(dec!(10.00)), credit_entry(dec!(10.00))]);
        assert!(validate_transaction(&draft, today()).is_valid);
    }

    #[test]
    fn test_created_by_required() {
        let mut draft = make_draft(vec![debit_entry(dec!(10.00)), credit_entry(dec!(10.00))]);
        draft.created_by = None;
        let report = validate_transaction(&draft, today());
        assert_eq!(report.errors, vec!["Created by is required"]);
    }

    #[test]
    fn test_imbalance_within_tolerance_accepted() {
        let draft = make_draft(vec![debit_entry(dec!(100.00)), credit_entry(dec!(99.99))]);
        let report = validate_transaction(&draft, today());
        assert!(report.is_valid);
        assert_eq!(report.balance, dec!(0.01));
    }

    #[test]
    fn test_multi_entry_split() {
        let draft = make_draft(vec![
            debit_entry(dec!(60.00)),
            debit_entry(dec!(40.00)),
            credit_entry(dec!(100.00)),
        ]);
        let report = validate_transaction(&draft, today());
        assert!(report.is_valid);
        assert_eq!(report.total_debits, dec!(100.00));
        assert_eq!(report.total_credits, dec!(100.00));
    }

    // ========== Resolution ==========

    #[test]
    fn test_resolve_valid_draft() {
        let mut draft = make_draft(vec![debit_entry(dec!(100.00)), credit_entry(dec!(100.00))]);
        draft.description = "  Office supplies  ".to_string();
        draft.post_id = Some(PostId::new());

        let resolved = resolve_transaction(&draft, today()).unwrap();
        assert_eq!(resolved.description, "Office supplies");
        assert_eq!(resolved.date, today());
        assert_eq!(resolved.post_id, draft.post_id);
        assert_eq!(resolved.entries.len(), 2);
        assert_eq!(resolved.entries[0].side, EntrySide::Debit);
        assert_eq!(resolved.entries[0].amount, dec!(100.00));
        assert_eq!(resolved.entries[1].side, EntrySide::Credit);
    }

    #[test]
    fn test_resolve_invalid_draft_returns_report() {
        let draft = make_draft(vec![debit_entry(dec!(100.00)), credit_entry(dec!(90.00))]);
        let report = resolve_transaction(&draft, today()).unwrap_err();
        assert!(!report.is_valid);
        assert_eq!(report.balance, dec!(10.00));
    }
}
