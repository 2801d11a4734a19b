//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lh_site::{LOAD_FAILURE_MESSAGE, NavigationError};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// The requested category does not exist.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The site document failed to load at startup.
    #[error("Site document unavailable: {0}")]
    Unavailable(String),

    /// A blocking task panicked or was cancelled.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Navigation(NavigationError::UnknownCategory(id)) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Category not found", "id": id}),
            ),
            Self::Unavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({"error": LOAD_FAILURE_MESSAGE}),
            ),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Internal server error"}),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, axum::Json(body)).into_response()
    }
}
