//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for posts and transactions
//! - Error-to-response mapping for the workflow layer
//! - The shared application state

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use ledgerfeed_store::{MemoryStore, TransactionManager};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Lifecycle manager for posts and transactions.
    pub manager: Arc<TransactionManager<MemoryStore>>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
