//! Feed post routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ledgerfeed_core::feed::Post;
use ledgerfeed_shared::types::{PostId, UserId};

use crate::error::ApiError;
use crate::AppState;

/// Creates the post routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(create_post))
        .route("/posts/{post_id}", get(get_post))
        .route("/posts/{post_id}", delete(delete_post))
}

/// Request body for creating a post.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    /// Author user ID.
    pub author: Uuid,
    /// Post body text.
    pub body: String,
}

/// Response for a post.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: PostId,
    /// Author user ID.
    pub author: UserId,
    /// Post body text.
    pub body: String,
    /// Created at timestamp.
    pub created_at: String,
    /// Linked transaction ID, if any.
    pub transaction_id: Option<Uuid>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author: post.author,
            body: post.body,
            created_at: post.created_at.to_rfc3339(),
            transaction_id: post.transaction_id.map(|id| id.into_inner()),
        }
    }
}

/// POST `/posts` - Create a feed post.
async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let author = UserId::from_uuid(payload.author);
    let created = state.manager.create_post(author, payload.body).await?;
    Ok((StatusCode::CREATED, Json(PostResponse::from(created))))
}

/// GET `/posts/{post_id}` - Fetch a post.
async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostResponse>, ApiError> {
    let found = state.manager.get_post(PostId::from_uuid(post_id)).await?;
    Ok(Json(PostResponse::from(found)))
}

/// DELETE `/posts/{post_id}` - Delete a post without a linked transaction.
async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.manager.delete_post(PostId::from_uuid(post_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
