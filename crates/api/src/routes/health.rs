//! Service health endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Liveness snapshot for the ledgerfeed service.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Reporting service name.
    pub service: &'static str,
    /// Overall status; "ok" whenever the process is serving requests. The
    /// store lives in-process, so a reachable router implies a usable store.
    pub status: &'static str,
    /// Crate version the running binary was built from.
    pub version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "ledgerfeed",
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates the health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
