//! In-memory store implementation.
//!
//! Backs the server and the test suite. Every repository operation takes
//! the single write lock and either applies completely or not at all, which
//! satisfies the atomicity requirement without a real database.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use ledgerfeed_core::feed::Post;
use ledgerfeed_core::ledger::{Account, AccountKind, Transaction};
use ledgerfeed_shared::types::{AccountId, PostId, TransactionId, UserId};
use tokio::sync::RwLock;
use tracing::info;

use crate::error::StoreError;
use crate::repository::{Directory, LedgerStore};

#[derive(Debug, Default)]
struct State {
    transactions: HashMap<TransactionId, Transaction>,
    posts: HashMap<PostId, Post>,
    accounts: HashMap<AccountId, Account>,
    users: HashSet<UserId>,
}

/// In-memory implementation of [`LedgerStore`] and [`Directory`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

/// Accounts and user created by [`MemoryStore::seed_demo`].
#[derive(Debug)]
pub struct DemoSeed {
    /// The demo chart of accounts.
    pub accounts: Vec<Account>,
    /// A demo user allowed to create and approve transactions.
    pub user: UserId,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account in the chart of accounts.
    pub async fn add_account(&self, account: Account) {
        self.state
            .write()
            .await
            .accounts
            .insert(account.id, account);
    }

    /// Registers a known user.
    pub async fn add_user(&self, id: UserId) {
        self.state.write().await.users.insert(id);
    }

    /// Seeds a small demo chart of accounts and one demo user.
    pub async fn seed_demo(&self) -> DemoSeed {
        let accounts = vec![
            demo_account("Cash", AccountKind::Asset, "Current Assets"),
            demo_account("Accounts Payable", AccountKind::Liability, "Current Liabilities"),
            demo_account("Owner's Equity", AccountKind::Equity, "Equity"),
            demo_account("Sales Revenue", AccountKind::Revenue, "Operating Revenue"),
            demo_account("Office Expenses", AccountKind::Expense, "Operating Expenses"),
        ];
        let user = UserId::new();

        let mut state = self.state.write().await;
        for account in &accounts {
            state.accounts.insert(account.id, account.clone());
        }
        state.users.insert(user);
        drop(state);

        info!(accounts = accounts.len(), %user, "Seeded demo chart of accounts");
        DemoSeed { accounts, user }
    }
}

fn demo_account(name: &str, kind: AccountKind, category: &str) -> Account {
    Account {
        id: AccountId::new(),
        name: name.to_string(),
        kind,
        category: category.to_string(),
        is_active: true,
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn insert_transaction(&self, transaction: &Transaction) -> Result<(), StoreError> {
        self.state
            .write()
            .await
            .transactions
            .insert(transaction.id, transaction.clone());
        Ok(())
    }

    async fn update_transaction(&self, transaction: &Transaction) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if !state.transactions.contains_key(&transaction.id) {
            return Err(StoreError::TransactionNotFound(transaction.id));
        }
        state.transactions.insert(transaction.id, transaction.clone());
        Ok(())
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<(), StoreError> {
        // Entries live inside the transaction record, so removal cascades.
        self.state
            .write()
            .await
            .transactions
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::TransactionNotFound(id))
    }

    async fn get_transaction(&self, id: TransactionId) -> Result<Transaction, StoreError> {
        self.state
            .read()
            .await
            .transactions
            .get(&id)
            .cloned()
            .ok_or(StoreError::TransactionNotFound(id))
    }

    async fn insert_post(&self, post: &Post) -> Result<(), StoreError> {
        self.state.write().await.posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn get_post(&self, id: PostId) -> Result<Post, StoreError> {
        self.state
            .read()
            .await
            .posts
            .get(&id)
            .cloned()
            .ok_or(StoreError::PostNotFound(id))
    }

    async fn delete_post(&self, id: PostId) -> Result<(), StoreError> {
        self.state
            .write()
            .await
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::PostNotFound(id))
    }

    async fn link_post_to_transaction(
        &self,
        post_id: PostId,
        transaction_id: Option<TransactionId>,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let post = state
            .posts
            .get_mut(&post_id)
            .ok_or(StoreError::PostNotFound(post_id))?;
        post.transaction_id = transaction_id;
        Ok(())
    }

    async fn get_post_transaction_link(
        &self,
        post_id: PostId,
    ) -> Result<Option<TransactionId>, StoreError> {
        let state = self.state.read().await;
        state
            .posts
            .get(&post_id)
            .map(|post| post.transaction_id)
            .ok_or(StoreError::PostNotFound(post_id))
    }
}

#[async_trait]
impl Directory for MemoryStore {
    async fn account(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        Ok(self.state.read().await.accounts.get(&id).cloned())
    }

    async fn user_exists(&self, id: UserId) -> Result<bool, StoreError> {
        Ok(self.state.read().await.users.contains(&id))
    }
}
