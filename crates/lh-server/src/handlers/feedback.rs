//! Feedback endpoints.
//!
//! - `/api/feedback`: JSON relay to the destination webhook (POST only).
//! - `POST /feedback`: the page modal's form, answered with the re-rendered
//!   page showing the submission status.

use std::sync::Arc;

use axum::Form;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use lh_feedback::RelayError;
use lh_site::{FeedbackForm, FeedbackModal, FeedbackSender, category_id_from_path};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::handlers::local_path;
use crate::handlers::pages::{PageRequest, render_page};
use crate::handlers::theme::request_theme;
use crate::state::AppState;

/// Body of every relay response.
#[derive(Debug, Serialize)]
struct RelayResponse {
    message: String,
}

fn relay_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(RelayResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

/// Handle any method on /api/feedback.
///
/// Anything but POST is refused. A body that is not JSON counts as a
/// missing message.
pub(crate) async fn relay_feedback(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        return relay_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }

    let Ok(form) = serde_json::from_slice::<FeedbackForm>(&body) else {
        return relay_response(
            StatusCode::BAD_REQUEST,
            RelayError::MissingMessage.to_string(),
        );
    };

    let relay = Arc::clone(&state.relay);
    match tokio::task::spawn_blocking(move || relay.relay(&form)).await {
        Ok(Ok(())) => relay_response(StatusCode::OK, "Feedback sent successfully"),
        Ok(Err(err)) => {
            let status = StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            relay_response(status, err.to_string())
        }
        Err(err) => {
            tracing::error!(error = %err, "Feedback handler error");
            relay_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Form posted by the page modal.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ModalSubmission {
    #[serde(default)]
    message: String,
    #[serde(default)]
    category: Option<String>,
    /// Page the modal was opened on.
    #[serde(default)]
    return_to: Option<String>,
}

/// Handle POST /feedback.
///
/// Runs the modal's submit step against the in-process relay and renders
/// the page it came from with the outcome.
pub(crate) async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(submission): Form<ModalSubmission>,
) -> Result<Response, ServerError> {
    let mut modal = FeedbackModal::new();
    modal.open(submission.category.as_deref());
    modal.set_message(submission.message);

    let form = modal.begin_submit();
    let relay = Arc::clone(&state.relay);
    let result = tokio::task::spawn_blocking(move || relay.send(&form))
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?;
    modal.finish(result);

    let return_to = submission
        .return_to
        .as_deref()
        .and_then(local_path)
        .unwrap_or("/");
    let page = return_to.split(['?', '#']).next().unwrap_or_default();
    let category = category_id_from_path(page);

    Ok(render_page(
        &state,
        PageRequest {
            category: category.as_deref(),
            query: "",
            theme: request_theme(&headers),
            modal: Some(modal),
            open_modal: true,
        },
    ))
}
