//! Transaction lifecycle routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ledgerfeed_core::ledger::{
    EntryDraft, Transaction, TransactionDraft, TransactionEntry, ValidationReport,
};
use ledgerfeed_shared::types::{AccountId, PostId, TransactionId, UserId};

use crate::error::ApiError;
use crate::AppState;

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", post(create_transaction))
        .route("/transactions/validate", post(validate_transaction))
        .route("/transactions/{transaction_id}", get(get_transaction))
        .route("/transactions/{transaction_id}", put(update_transaction))
        .route("/transactions/{transaction_id}", delete(delete_transaction))
        .route("/transactions/{transaction_id}/approve", post(approve_transaction))
        .route("/transactions/{transaction_id}/reject", post(reject_transaction))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for a single candidate entry.
#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    /// Account ID.
    pub account_id: Option<Uuid>,
    /// Debit amount.
    pub debit: Option<Decimal>,
    /// Credit amount.
    pub credit: Option<Decimal>,
}

/// Request body for creating or updating a transaction.
///
/// Every field is optional except the entry list itself; missing fields are
/// reported by the validator, not by deserialization.
#[derive(Debug, Deserialize)]
pub struct TransactionRequest {
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Transaction date (YYYY-MM-DD).
    pub date: Option<NaiveDate>,
    /// Creating user ID.
    pub created_by: Option<Uuid>,
    /// Originating post ID.
    pub post_id: Option<Uuid>,
    /// Candidate entries.
    #[serde(default)]
    pub entries: Vec<EntryRequest>,
}

impl From<TransactionRequest> for TransactionDraft {
    fn from(req: TransactionRequest) -> Self {
        Self {
            description: req.description,
            date: req.date,
            created_by: req.created_by.map(UserId::from_uuid),
            post_id: req.post_id.map(PostId::from_uuid),
            entries: req
                .entries
                .into_iter()
                .map(|entry| EntryDraft {
                    account_id: entry.account_id.map(AccountId::from_uuid),
                    debit: entry.debit,
                    credit: entry.credit,
                })
                .collect(),
        }
    }
}

/// Request body for approving a transaction.
#[derive(Debug, Deserialize)]
pub struct ApproveRequest {
    /// Approving user ID.
    pub approved_by: Uuid,
}

/// Response for a ledger entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    /// Entry ID.
    pub id: Uuid,
    /// Account ID.
    pub account_id: Uuid,
    /// Entry side: "debit" or "credit".
    pub side: String,
    /// Entry amount.
    pub amount: String,
}

impl From<&TransactionEntry> for EntryResponse {
    fn from(entry: &TransactionEntry) -> Self {
        Self {
            id: entry.id.into_inner(),
            account_id: entry.account_id.into_inner(),
            side: entry.side.to_string(),
            amount: entry.amount.to_string(),
        }
    }
}

/// Response for a transaction.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: Uuid,
    /// Description.
    pub description: String,
    /// Transaction date.
    pub date: String,
    /// Status.
    pub status: String,
    /// Creating user ID.
    pub created_by: Uuid,
    /// Approving user ID, set once approved.
    pub approved_by: Option<Uuid>,
    /// Originating post ID, if any.
    pub post_id: Option<Uuid>,
    /// Created at timestamp.
    pub created_at: String,
    /// Updated at timestamp.
    pub updated_at: String,
    /// Ledger entries.
    pub entries: Vec<EntryResponse>,
    /// Total debits.
    pub total_debits: String,
    /// Total credits.
    pub total_credits: String,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        let entries = tx.entries.iter().map(EntryResponse::from).collect();
        let total_debits = tx.total_debits().to_string();
        let total_credits = tx.total_credits().to_string();
        Self {
            id: tx.id.into_inner(),
            description: tx.description,
            date: tx.date.to_string(),
            status: tx.status.to_string(),
            created_by: tx.created_by.into_inner(),
            approved_by: tx.approved_by.map(|id| id.into_inner()),
            post_id: tx.post_id.map(|id| id.into_inner()),
            created_at: tx.created_at.to_rfc3339(),
            updated_at: tx.updated_at.to_rfc3339(),
            entries,
            total_debits,
            total_credits,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/transactions` - Create a transaction from a candidate draft.
async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<TransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = TransactionDraft::from(payload);
    let created = state.manager.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(TransactionResponse::from(created))))
}

/// POST `/transactions/validate` - Dry-run validation of a candidate.
///
/// Always returns 200 with the full report; an invalid candidate is data,
/// not an error.
async fn validate_transaction(
    State(state): State<AppState>,
    Json(payload): Json<TransactionRequest>,
) -> Json<ValidationReport> {
    let draft = TransactionDraft::from(payload);
    Json(state.manager.validate(&draft))
}

/// GET `/transactions/{transaction_id}` - Fetch a transaction with entries.
async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let found = state
        .manager
        .get(TransactionId::from_uuid(transaction_id))
        .await?;
    Ok(Json(TransactionResponse::from(found)))
}

/// PUT `/transactions/{transaction_id}` - Replace a transaction's content.
///
/// Refused for approved transactions; a successful edit returns the
/// transaction to pending.
async fn update_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
    Json(payload): Json<TransactionRequest>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let draft = TransactionDraft::from(payload);
    let updated = state
        .manager
        .update(TransactionId::from_uuid(transaction_id), &draft)
        .await?;
    Ok(Json(TransactionResponse::from(updated)))
}

/// POST `/transactions/{transaction_id}/approve` - Approve a pending
/// transaction. A no-op when the transaction is not pending.
async fn approve_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
    Json(payload): Json<ApproveRequest>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let approved = state
        .manager
        .approve(
            TransactionId::from_uuid(transaction_id),
            UserId::from_uuid(payload.approved_by),
        )
        .await?;
    Ok(Json(TransactionResponse::from(approved)))
}

/// POST `/transactions/{transaction_id}/reject` - Reject a pending
/// transaction. A no-op when the transaction is not pending.
async fn reject_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let rejected = state
        .manager
        .reject(TransactionId::from_uuid(transaction_id))
        .await?;
    Ok(Json(TransactionResponse::from(rejected)))
}

/// DELETE `/transactions/{transaction_id}` - Delete a non-approved
/// transaction and clear its post link.
async fn delete_transaction(
    State(state): State<AppState>,
    Path(transaction_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .manager
        .delete(TransactionId::from_uuid(transaction_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
