//! Post domain types.

use chrono::{DateTime, Utc};
use ledgerfeed_shared::types::{PostId, TransactionId, UserId};
use serde::{Deserialize, Serialize};

/// A short text update in the feed.
///
/// A post has at most one associated transaction (0..1) and cannot be
/// deleted while that link exists. The link may only be cleared when the
/// transaction itself is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier.
    pub id: PostId,
    /// The user who wrote the post.
    pub author: UserId,
    /// Post body text.
    pub body: String,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// The transaction derived from this post, if any.
    pub transaction_id: Option<TransactionId>,
}

impl Post {
    /// Creates a new post with no transaction link.
    #[must_use]
    pub fn new(author: UserId, body: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: PostId::new(),
            author,
            body,
            created_at,
            transaction_id: None,
        }
    }

    /// Returns true if the post has an associated transaction.
    #[must_use]
    pub fn has_transaction(&self) -> bool {
        self.transaction_id.is_some()
    }

    /// Returns true if the post can be deleted.
    #[must_use]
    pub fn can_delete(&self) -> bool {
        !self.has_transaction()
    }
}
