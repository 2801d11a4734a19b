//! `lh feedback` command implementation.
//!
//! Fills the feedback modal from the command line and submits it to a
//! relay endpoint, reporting the same status a page would show.

use std::path::PathBuf;

use clap::Args;
use lh_config::Config;
use lh_feedback::RelayClient;
use lh_site::{FeedbackModal, FeedbackSender, FeedbackStatus, SubmitOutcome};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the feedback command.
#[derive(Args)]
pub(crate) struct FeedbackArgs {
    /// Feedback text.
    #[arg(short, long)]
    message: String,

    /// Category the feedback is about (default: General).
    #[arg(long)]
    category: Option<String>,

    /// Relay endpoint (default: /api/feedback on the configured server).
    #[arg(short, long, env = "LH_FEEDBACK_ENDPOINT")]
    endpoint: Option<String>,

    /// Path to configuration file (default: auto-discover lh.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl FeedbackArgs {
    /// Execute the feedback command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the relay does not accept
    /// the submission.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let endpoint = self
            .endpoint
            .unwrap_or_else(|| default_endpoint(&config.server.host, config.server.port));
        let client = RelayClient::new(endpoint, config.feedback.timeout());
        output.info(&format!("Sending feedback to {}", client.endpoint()));

        let mut modal = FeedbackModal::new();
        modal.open(self.category.as_deref());
        modal.set_message(self.message);

        let form = modal.begin_submit();
        let result = tokio::task::spawn_blocking(move || client.send(&form))
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;
        let outcome = modal.finish(result);

        let message = modal.status().map_or("", FeedbackStatus::message);
        match outcome {
            SubmitOutcome::Sent { .. } => {
                output.success(message);
                Ok(())
            }
            SubmitOutcome::Failed => Err(CliError::Submission(message.to_owned())),
        }
    }
}

/// Relay endpoint of a server bound to `host:port`.
fn default_endpoint(host: &str, port: u16) -> String {
    format!("http://{host}:{port}/api/feedback")
}
