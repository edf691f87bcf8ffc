//! Repository and lookup traits consumed by the lifecycle manager.
//!
//! Each method must execute as a single atomic unit against the backing
//! store, and implementations must serialize concurrent writes touching the
//! same transaction id.

use async_trait::async_trait;
use ledgerfeed_core::feed::Post;
use ledgerfeed_core::ledger::{Account, Transaction};
use ledgerfeed_shared::types::{AccountId, PostId, TransactionId, UserId};

use crate::error::StoreError;

/// Persistence interface for transactions and posts.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Persists a new transaction together with its entries.
    async fn insert_transaction(&self, transaction: &Transaction) -> Result<(), StoreError>;

    /// Replaces a stored transaction and its entry set (last-write-wins).
    async fn update_transaction(&self, transaction: &Transaction) -> Result<(), StoreError>;

    /// Removes a transaction; cascades to its entries.
    async fn delete_transaction(&self, id: TransactionId) -> Result<(), StoreError>;

    /// Fetches a transaction with its entries.
    async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, StoreError>;

    /// Persists a new post.
    async fn insert_post(&self, post: &Post) -> Result<(), StoreError>;

    /// Fetches a post.
    async fn get_post(&self, id: PostId) -> Result<Post, StoreError>;

    /// Removes a post.
    async fn delete_post(&self, id: PostId) -> Result<(), StoreError>;

    /// Sets or clears a post's transaction link.
    async fn link_post_to_transaction(
        &self,
        post_id: PostId,
        transaction_id: Option<TransactionId>,
    ) -> Result<(), StoreError>;

    /// Returns a post's transaction link, if any.
    async fn get_post_transaction_link(
        &self,
        post_id: PostId,
    ) -> Result<Option<TransactionId>, StoreError>;
}

/// Reference lookup interface for validating foreign references before
/// accepting a candidate transaction.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Returns the account for `id`, or `None` if it does not exist.
    async fn account(&self, id: AccountId) -> Result<Option<Account>, StoreError>;

    /// Returns true if `id` resolves to a known user.
    async fn user_exists(&self, id: UserId) -> Result<bool, StoreError>;
}
