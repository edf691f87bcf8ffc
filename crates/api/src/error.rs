//! Error-to-response mapping for the workflow layer.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use ledgerfeed_core::ledger::LedgerError;
use ledgerfeed_core::workflow::WorkflowError;

/// Wrapper turning a [`WorkflowError`] into an HTTP response.
///
/// The status code and machine-readable error code come from the error
/// itself; validation failures additionally carry the full problem list and
/// totals so clients can render them next to the form.
pub struct ApiError(pub WorkflowError);

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %err, "Request failed");
        }

        let body = match &err {
            WorkflowError::Ledger(LedgerError::Validation(report)) => json!({
                "error": err.error_code(),
                "message": err.to_string(),
                "validation": report,
            }),
            _ => json!({
                "error": err.error_code(),
                "message": err.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
