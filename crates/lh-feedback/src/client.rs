//! HTTP client for a relay endpoint.

use std::time::Duration;

use lh_site::{FeedbackForm, FeedbackSender, SubmissionError};
use ureq::Agent;

use crate::webhook::create_agent;

/// Posts feedback forms as JSON to a relay endpoint (`/api/feedback`).
pub struct RelayClient {
    agent: Agent,
    endpoint: String,
}

impl RelayClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: create_agent(timeout),
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl FeedbackSender for RelayClient {
    fn send(&self, form: &FeedbackForm) -> Result<(), SubmissionError> {
        tracing::debug!(endpoint = %self.endpoint, "Sending feedback");

        let response = self
            .agent
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .send_json(form)
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
