//! Property-based tests for entry and transaction validation rules.

use chrono::NaiveDate;
use ledgerfeed_shared::types::{AccountId, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::{EntryDraft, TransactionDraft};
use super::validation::{validate_entry, validate_transaction};

/// Strategy to generate an in-bounds positive amount (0.01 ..= 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
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
        description: "Property test".to_string(),
        date: Some(today()),
        created_by: Some(UserId::new()),
        post_id: None,
        entries,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any in-bounds amount, a one-sided entry is valid.
    #[test]
    fn prop_one_sided_entry_accepted(amount in positive_amount()) {
        prop_assert!(validate_entry(&debit_entry(amount)).is_valid);
        prop_assert!(validate_entry(&credit_entry(amount)).is_valid);
    }

    /// For any positive amounts, an entry carrying both sides is invalid.
    #[test]
    fn prop_both_sides_rejected(debit in positive_amount(), credit in positive_amount()) {
        let entry = EntryDraft {
            account_id: Some(AccountId::new()),
            debit: Some(debit),
            credit: Some(credit),
        };
        let report = validate_entry(&entry);
        prop_assert!(!report.is_valid);
        prop_assert!(report.errors.iter().any(|e| e.contains("both debit and credit")));
    }

    /// A balanced two-entry transaction is always valid and reports a zero
    /// balance.
    #[test]
    fn prop_balanced_transaction_accepted(amount in positive_amount()) {
        let draft = make_draft(vec![debit_entry(amount), credit_entry(amount)]);
        let report = validate_transaction(&draft, today());
        prop_assert!(report.is_valid, "errors: {:?}", report.errors);
        prop_assert_eq!(report.balance, Decimal::ZERO);
        prop_assert_eq!(report.total_debits, report.total_credits);
    }

    /// Splitting one side across several entries preserves validity.
    #[test]
    fn prop_split_balanced_accepted(a in positive_amount(), b in positive_amount()) {
        let draft = make_draft(vec![
            debit_entry(a),
            debit_entry(b),
            credit_entry(a + b),
        ]);
        let report = validate_transaction(&draft, today());
        prop_assert!(report.is_valid, "errors: {:?}", report.errors);
    }

    /// Totals differing by more than the tolerance are always rejected with
    /// the balance message, and the reported balance is the absolute
    /// difference.
    #[test]
    fn prop_unbalanced_rejected(amount in positive_amount(), gap in 2i64..1_000_000i64) {
        let other = amount + Decimal::new(gap, 2);
        let draft = make_draft(vec![debit_entry(amount), credit_entry(other)]);
        let report = validate_transaction(&draft, today());
        prop_assert!(!report.is_valid);
        prop_assert_eq!(report.balance, Decimal::new(gap, 2));
        prop_assert!(report.errors.iter().any(|e| e.starts_with("Transaction does not balance")));
    }

    /// Fewer than two entries is always invalid, whatever the entry looks like.
    #[test]
    fn prop_below_entry_floor_rejected(amount in positive_amount()) {
        let draft = make_draft(vec![debit_entry(amount)]);
        let report = validate_transaction(&draft, today());
        prop_assert!(!report.is_valid);
        prop_assert!(report.errors.contains(&"Transaction must have at least 2 entries".to_string()));
    }

    /// Future dates are always rejected.
    #[test]
    fn prop_future_date_rejected(amount in positive_amount(), days_ahead in 1i64..3650i64) {
        let mut draft = make_draft(vec![debit_entry(amount), credit_entry(amount)]);
        draft.date = Some(today() + chrono::Duration::days(days_ahead));
        let report = validate_transaction(&draft, today());
        prop_assert!(!report.is_valid);
        prop_assert!(report.errors.contains(&"Transaction date cannot be in the future".to_string()));
    }
}
