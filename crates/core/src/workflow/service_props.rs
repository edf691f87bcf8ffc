//! Property-based tests for the workflow state machine.

use chrono::Utc;
use ledgerfeed_shared::types::UserId;
use proptest::prelude::*;

use super::service::WorkflowService;
use super::types::TransactionStatus;

fn status_strategy() -> impl Strategy<Value = TransactionStatus> {
    prop_oneof![
        Just(TransactionStatus::Pending),
        Just(TransactionStatus::Approved),
        Just(TransactionStatus::Rejected),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every action the service emits corresponds to a valid transition.
    #[test]
    fn prop_emitted_actions_are_valid_transitions(status in status_strategy()) {
        if let Some(action) = WorkflowService::approve(status, UserId::new(), Utc::now()) {
            prop_assert!(WorkflowService::is_valid_transition(status, action.new_status()));
        }
        if let Some(action) = WorkflowService::reject(status) {
            prop_assert!(WorkflowService::is_valid_transition(status, action.new_status()));
        }
    }

    /// Approve and reject act only on pending transactions.
    #[test]
    fn prop_only_pending_transitions(status in status_strategy()) {
        let approved = WorkflowService::approve(status, UserId::new(), Utc::now());
        let rejected = WorkflowService::reject(status);
        if status == TransactionStatus::Pending {
            prop_assert!(approved.is_some());
            prop_assert!(rejected.is_some());
        } else {
            prop_assert!(approved.is_none());
            prop_assert!(rejected.is_none());
        }
    }

    /// A second reject is always a no-op: the status after one reject never
    /// admits another transition.
    #[test]
    fn prop_reject_is_idempotent(status in status_strategy()) {
        if let Some(action) = WorkflowService::reject(status) {
            prop_assert!(WorkflowService::reject(action.new_status()).is_none());
        }
    }

    /// Approved is terminal: nothing transitions out of it.
    #[test]
    fn prop_approved_is_terminal(to in status_strategy()) {
        prop_assert!(!WorkflowService::is_valid_transition(TransactionStatus::Approved, to));
        prop_assert!(WorkflowService::ensure_editable(TransactionStatus::Approved).is_err());
        prop_assert!(WorkflowService::ensure_deletable(TransactionStatus::Approved).is_err());
    }
}
