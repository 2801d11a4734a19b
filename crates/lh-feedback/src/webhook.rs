//! Destination chat webhook.

use std::time::Duration;

use serde::Serialize;
use ureq::Agent;

/// Message body accepted by the chat webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub content: String,
    pub username: String,
}

/// Error delivering a message to the webhook.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The webhook answered with a non-success status.
    #[error("HTTP error: {status} - {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },
    /// The request could not be completed (DNS, connect, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Transport(String),
}

/// Destination for forwarded feedback.
pub trait Webhook: Send + Sync {
    fn deliver(&self, payload: &WebhookPayload) -> Result<(), DeliveryError>;
}

/// Create an HTTP agent with a global timeout that reports HTTP error
/// statuses as responses rather than errors.
pub fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Webhook reached over HTTP.
pub struct HttpWebhook {
    agent: Agent,
    url: String,
}

impl HttpWebhook {
    #[must_use]
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: create_agent(timeout),
            url: url.into(),
        }
    }
}

impl Webhook for HttpWebhook {
    fn deliver(&self, payload: &WebhookPayload) -> Result<(), DeliveryError> {
        let response = self
            .agent
            .post(&self.url)
            .header("Content-Type", "application/json")
            .send_json(payload)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .into_body()
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
