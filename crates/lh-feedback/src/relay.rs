//! Feedback relay: validate, format, forward.

use std::sync::Arc;

use lh_config::FeedbackConfig;
use lh_site::{DEFAULT_CATEGORY, FeedbackForm, FeedbackSender, SubmissionError};

use crate::webhook::{DeliveryError, HttpWebhook, Webhook, WebhookPayload};

/// Error returned when a submission cannot be relayed.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The submission has no message.
    #[error("Message is required")]
    MissingMessage,
    /// No destination webhook is configured.
    #[error("Server configuration error: WEBHOOK_URL not set")]
    NotConfigured,
    /// The webhook rejected the message.
    #[error("Failed to send feedback to webhook")]
    Destination(#[source] DeliveryError),
    /// The webhook could not be reached.
    #[error("Internal server error")]
    Transport(#[source] DeliveryError),
}

impl RelayError {
    /// HTTP status the relay endpoint answers with.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingMessage => 400,
            Self::NotConfigured | Self::Destination(_) | Self::Transport(_) => 500,
        }
    }
}

impl From<DeliveryError> for RelayError {
    fn from(e: DeliveryError) -> Self {
        match e {
            DeliveryError::Rejected { .. } => Self::Destination(e),
            DeliveryError::Transport(_) => Self::Transport(e),
        }
    }
}

/// Chat message text for a submission.
pub fn format_content(category: Option<&str>, message: &str) -> String {
    let category = category.filter(|c| !c.is_empty()).unwrap_or(DEFAULT_CATEGORY);
    format!("**New Feedback**\n\n**Category:** {category}\n**Message:**\n{message}")
}

/// Forwards feedback submissions to a destination webhook.
pub struct FeedbackRelay {
    webhook: Option<Arc<dyn Webhook>>,
    username: String,
}

impl FeedbackRelay {
    /// Create a relay. `None` means no destination is configured and every
    /// valid submission fails with [`RelayError::NotConfigured`].
    #[must_use]
    pub fn new(webhook: Option<Arc<dyn Webhook>>, username: impl Into<String>) -> Self {
        Self {
            webhook,
            username: username.into(),
        }
    }

    /// Create a relay posting to the configured webhook URL, if any.
    #[must_use]
    pub fn from_config(config: &FeedbackConfig) -> Self {
        let webhook = config.webhook_url.as_ref().map(|url| {
            Arc::new(HttpWebhook::new(url.clone(), config.timeout())) as Arc<dyn Webhook>
        });
        Self::new(webhook, config.username.clone())
    }

    /// Whether a destination webhook is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.webhook.is_some()
    }

    /// Validate and forward one submission.
    pub fn relay(&self, form: &FeedbackForm) -> Result<(), RelayError> {
        if form.message.is_empty() {
            return Err(RelayError::MissingMessage);
        }
        let webhook = self.webhook.as_ref().ok_or(RelayError::NotConfigured)?;

        let payload = WebhookPayload {
            content: format_content(form.category.as_deref(), &form.message),
            username: self.username.clone(),
        };

        webhook.deliver(&payload).map_err(|e| {
            match &e {
                DeliveryError::Rejected { status, body } => {
                    tracing::error!(status, body = %body, "Webhook error");
                }
                DeliveryError::Transport(reason) => {
                    tracing::error!(error = %reason, "Feedback handler error");
                }
            }
            RelayError::from(e)
        })?;

        tracing::info!(
            category = form.category.as_deref().unwrap_or(DEFAULT_CATEGORY),
            "Feedback relayed"
        );
        Ok(())
    }
}

/// Submitting a modal directly through the relay, without HTTP.
impl FeedbackSender for FeedbackRelay {
    fn send(&self, form: &FeedbackForm) -> Result<(), SubmissionError> {
        self.relay(form).map_err(|e| SubmissionError::Rejected {
            status: e.status_code(),
        })
    }
}
