//! Transaction lifecycle manager.
//!
//! Owns the status state machine and the post/transaction link. Every
//! mutating operation validates through `ledgerfeed-core`, applies the
//! workflow transition, and persists through the [`LedgerStore`] trait as a
//! single serialized unit.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{info, warn};

use ledgerfeed_core::clock::Clock;
use ledgerfeed_core::feed::Post;
use ledgerfeed_core::ledger::{
    LedgerError, ResolvedTransaction, Transaction, TransactionDraft, TransactionEntry,
    ValidationReport, resolve_transaction, validate_transaction,
};
use ledgerfeed_core::workflow::{TransactionStatus, WorkflowAction, WorkflowError, WorkflowService};
use ledgerfeed_shared::types::{EntryId, PostId, TransactionId, UserId};

use crate::repository::{Directory, LedgerStore};

/// Lifecycle manager for posts and transactions.
///
/// Mutations are serialized through an internal lock so that two concurrent
/// transitions on the same transaction cannot interleave; reads go straight
/// to the store.
pub struct TransactionManager<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
    transitions: Mutex<()>,
}

impl<S> TransactionManager<S>
where
    S: LedgerStore + Directory,
{
    /// Creates a manager over the given store and clock.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            transitions: Mutex::new(()),
        }
    }

    /// Dry-run validation of a candidate transaction.
    ///
    /// Pure: no reference checks, no persistence. Used by callers to show
    /// live totals and problems while the user is still editing.
    #[must_use]
    pub fn validate(&self, draft: &TransactionDraft) -> ValidationReport {
        validate_transaction(draft, self.clock.today())
    }

    /// Creates a transaction from a candidate draft.
    ///
    /// On success the status is forced to `pending` regardless of caller
    /// input, the transaction and its entries are persisted, and the
    /// originating post (if any) is linked to the new transaction.
    ///
    /// # Errors
    ///
    /// Validation failures carry the full problem list; reference failures
    /// (unknown creator, unknown or inactive account, missing post) and an
    /// already-linked post are reported without any persistence side effect.
    pub async fn create(&self, draft: &TransactionDraft) -> Result<Transaction, WorkflowError> {
        let _guard = self.transitions.lock().await;

        let resolved = resolve_transaction(draft, self.clock.today())
            .map_err(LedgerError::Validation)?;
        self.check_references(&resolved).await?;

        if let Some(post_id) = resolved.post_id {
            if self.store.get_post_transaction_link(post_id).await?.is_some() {
                return Err(WorkflowError::PostAlreadyLinked(post_id));
            }
        }

        let transaction = build_transaction(resolved, self.clock.now());
        self.store.insert_transaction(&transaction).await?;

        if let Some(post_id) = transaction.post_id {
            if let Err(link_err) = self
                .store
                .link_post_to_transaction(post_id, Some(transaction.id))
                .await
            {
                // The transaction must not survive without its post link;
                // roll it back and report the operation as failed.
                warn!(transaction_id = %transaction.id, %post_id, error = %link_err,
                    "Post link failed after insert, rolling back transaction");
                if let Err(cleanup_err) = self.store.delete_transaction(transaction.id).await {
                    return Err(WorkflowError::Inconsistent(
                        transaction.id,
                        cleanup_err.to_string(),
                    ));
                }
                return Err(link_err.into());
            }
        }

        info!(transaction_id = %transaction.id, entries = transaction.entries.len(),
            "Created transaction");
        Ok(transaction)
    }

    /// Replaces the description, date, and entries of a stored transaction.
    ///
    /// Refused for approved transactions. The candidate is fully re-validated
    /// and the status is forced back to `pending`: an edit always requires
    /// re-approval. The creator and post link of the stored transaction are
    /// preserved.
    pub async fn update(
        &self,
        id: TransactionId,
        draft: &TransactionDraft,
    ) -> Result<Transaction, WorkflowError> {
        let _guard = self.transitions.lock().await;

        let existing = self.store.get_transaction(id).await?;
        WorkflowService::ensure_editable(existing.status)?;

        let mut candidate = draft.clone();
        candidate.created_by = candidate.created_by.or(Some(existing.created_by));
        candidate.post_id = existing.post_id;

        let resolved = resolve_transaction(&candidate, self.clock.today())
            .map_err(LedgerError::Validation)?;
        self.check_references(&resolved).await?;

        let mut updated = build_transaction(resolved, self.clock.now());
        updated.id = id;
        updated.created_by = existing.created_by;
        updated.created_at = existing.created_at;
        for entry in &mut updated.entries {
            entry.transaction_id = id;
        }

        self.store.update_transaction(&updated).await?;
        info!(transaction_id = %id, from = %existing.status, "Updated transaction, back to pending");
        Ok(updated)
    }

    /// Approves a pending transaction.
    ///
    /// The approver must resolve to a known user. Approving a transaction
    /// that is not pending is a silent no-op returning the stored record
    /// unchanged.
    pub async fn approve(
        &self,
        id: TransactionId,
        approver: UserId,
    ) -> Result<Transaction, WorkflowError> {
        let _guard = self.transitions.lock().await;

        if !self.store.user_exists(approver).await? {
            return Err(WorkflowError::UnknownApprover(approver));
        }

        let mut transaction = self.store.get_transaction(id).await?;
        let Some(action) = WorkflowService::approve(transaction.status, approver, self.clock.now())
        else {
            return Ok(transaction);
        };

        apply_action(&mut transaction, &action);
        self.store.update_transaction(&transaction).await?;
        info!(transaction_id = %id, %approver, "Approved transaction");
        Ok(transaction)
    }

    /// Rejects a pending transaction and clears its approver.
    ///
    /// Rejecting a transaction that is not pending is a silent no-op;
    /// rejecting twice in a row leaves the status `rejected`.
    pub async fn reject(&self, id: TransactionId) -> Result<Transaction, WorkflowError> {
        let _guard = self.transitions.lock().await;

        let mut transaction = self.store.get_transaction(id).await?;
        let Some(action) = WorkflowService::reject(transaction.status) else {
            return Ok(transaction);
        };

        apply_action(&mut transaction, &action);
        transaction.updated_at = self.clock.now();
        self.store.update_transaction(&transaction).await?;
        info!(transaction_id = %id, "Rejected transaction");
        Ok(transaction)
    }

    /// Deletes a transaction, its entries, and the originating post's link.
    ///
    /// Refused for approved transactions.
    pub async fn delete(&self, id: TransactionId) -> Result<(), WorkflowError> {
        let _guard = self.transitions.lock().await;

        let transaction = self.store.get_transaction(id).await?;
        WorkflowService::ensure_deletable(transaction.status)?;

        self.store.delete_transaction(id).await?;

        if let Some(post_id) = transaction.post_id {
            if let Err(err) = self.store.link_post_to_transaction(post_id, None).await {
                // The transaction row is gone but the post still points at
                // it; a missing post is fine, anything else is reported.
                if !matches!(err, crate::StoreError::PostNotFound(_)) {
                    warn!(transaction_id = %id, %post_id, error = %err,
                        "Failed to clear post link after delete");
                    return Err(WorkflowError::Inconsistent(id, err.to_string()));
                }
            }
        }

        info!(transaction_id = %id, "Deleted transaction");
        Ok(())
    }

    /// Fetches a transaction with its entries.
    pub async fn get(&self, id: TransactionId) -> Result<Transaction, WorkflowError> {
        Ok(self.store.get_transaction(id).await?)
    }

    /// Creates a feed post with no transaction link.
    pub async fn create_post(&self, author: UserId, body: String) -> Result<Post, WorkflowError> {
        if !self.store.user_exists(author).await? {
            return Err(WorkflowError::UnknownUser(author));
        }
        let post = Post::new(author, body, self.clock.now());
        self.store.insert_post(&post).await?;
        info!(post_id = %post.id, "Created post");
        Ok(post)
    }

    /// Fetches a post.
    pub async fn get_post(&self, id: PostId) -> Result<Post, WorkflowError> {
        Ok(self.store.get_post(id).await?)
    }

    /// Deletes a post. Refused while the post has an associated transaction.
    pub async fn delete_post(&self, id: PostId) -> Result<(), WorkflowError> {
        let _guard = self.transitions.lock().await;

        let post = self.store.get_post(id).await?;
        if post.has_transaction() {
            return Err(WorkflowError::PostHasTransaction(id));
        }
        self.store.delete_post(id).await?;
        info!(post_id = %id, "Deleted post");
        Ok(())
    }

    /// Validates the foreign references of a resolved draft: the creator
    /// must be a known user, and every entry account must exist and be
    /// active.
    async fn check_references(&self, resolved: &ResolvedTransaction) -> Result<(), WorkflowError> {
        if !self.store.user_exists(resolved.created_by).await? {
            return Err(WorkflowError::UnknownUser(resolved.created_by));
        }
        for entry in &resolved.entries {
            let account = self
                .store
                .account(entry.account_id)
                .await?
                .ok_or(LedgerError::AccountNotFound(entry.account_id))?;
            if !account.is_active {
                return Err(LedgerError::AccountInactive(entry.account_id).into());
            }
        }
        Ok(())
    }
}

/// Builds a persistable transaction from a resolved draft.
///
/// Status is forced to `pending` here; there is no code path that creates a
/// transaction in any other state.
fn build_transaction(resolved: ResolvedTransaction, now: DateTime<Utc>) -> Transaction {
    let id = TransactionId::new();
    let entries = resolved
        .entries
        .into_iter()
        .map(|entry| TransactionEntry {
            id: EntryId::new(),
            transaction_id: id,
            account_id: entry.account_id,
            side: entry.side,
            amount: entry.amount,
        })
        .collect();

    Transaction {
        id,
        description: resolved.description,
        date: resolved.date,
        status: TransactionStatus::Pending,
        created_by: resolved.created_by,
        approved_by: None,
        post_id: resolved.post_id,
        created_at: now,
        updated_at: now,
        entries,
    }
}

fn apply_action(transaction: &mut Transaction, action: &WorkflowAction) {
    match action {
        WorkflowAction::Approve {
            new_status,
            approved_by,
            approved_at,
        } => {
            transaction.status = *new_status;
            transaction.approved_by = Some(*approved_by);
            transaction.updated_at = *approved_at;
        }
        WorkflowAction::Reject { new_status } => {
            transaction.status = *new_status;
            transaction.approved_by = None;
        }
    }
}
