//! Feedback form state machine.
//!
//! The modal is either closed or open. Opening captures the active category
//! into the hidden category field. Submitting is split in two steps:
//! [`FeedbackModal::begin_submit`] disables the submit control and hands out
//! the form, [`FeedbackModal::finish`] applies what the [`FeedbackSender`]
//! answered. A successful submission closes the modal after
//! [`AUTO_CLOSE_DELAY`], a failed one leaves it open with the form intact.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Status text after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you for your feedback!";

/// Status text after a failed submission.
pub const ERROR_MESSAGE: &str = "Error sending feedback. Please try again later.";

/// Delay before a successful submission closes the modal.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_secs(2);

/// Category label used when none is known.
pub const DEFAULT_CATEGORY: &str = "General";

/// Body sent to the relay endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Error from sending a feedback form.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The relay answered with a non-success status.
    #[error("relay responded with HTTP {status}")]
    Rejected { status: u16 },
    /// The request could not be completed.
    #[error("request failed: {0}")]
    Transport(String),
}

/// Transport used by [`FeedbackModal::submit`].
pub trait FeedbackSender {
    fn send(&self, form: &FeedbackForm) -> Result<(), SubmissionError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Where a click landed while the modal is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area outside the dialog.
    Backdrop,
    /// Anywhere inside the dialog.
    Dialog,
}

/// Outcome message of the last submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackStatus {
    Success,
    Error,
}

impl FeedbackStatus {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Error => ERROR_MESSAGE,
        }
    }

    /// CSS class of the status line.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success-msg",
            Self::Error => "error-msg",
        }
    }
}

/// Result of [`FeedbackModal::submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted; the modal should close after `close_after`.
    Sent { close_after: Duration },
    /// Rejected or not delivered; the modal stays open.
    Failed,
}

/// Feedback modal state.
#[derive(Clone, Debug)]
pub struct FeedbackModal {
    state: ModalState,
    category: String,
    message: String,
    status: Option<FeedbackStatus>,
    submit_enabled: bool,
}

impl Default for FeedbackModal {
    fn default() -> Self {
        Self {
            state: ModalState::Closed,
            category: DEFAULT_CATEGORY.to_owned(),
            message: String::new(),
            status: None,
            submit_enabled: true,
        }
    }
}

impl FeedbackModal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal for the given active category.
    ///
    /// Clears any previous status and resets the form.
    pub fn open(&mut self, current_category: Option<&str>) {
        self.state = ModalState::Open;
        self.category = current_category
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_owned();
        self.message.clear();
        self.status = None;
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Handle a click while shown: the backdrop closes the modal.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    #[must_use]
    pub fn state(&self) -> ModalState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn status(&self) -> Option<FeedbackStatus> {
        self.status
    }

    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Current form fields as sent to the relay.
    #[must_use]
    pub fn form(&self) -> FeedbackForm {
        FeedbackForm {
            message: self.message.clone(),
            category: Some(self.category.clone()),
        }
    }

    /// Enter the sending state and return the form to send.
    ///
    /// Clears the previous status. The submit control stays disabled until
    /// [`FeedbackModal::finish`] applies the result.
    pub fn begin_submit(&mut self) -> FeedbackForm {
        self.submit_enabled = false;
        self.status = None;
        self.form()
    }

    /// Apply the result of sending the form returned by
    /// [`FeedbackModal::begin_submit`] and re-enable the submit control.
    pub fn finish(&mut self, result: Result<(), SubmissionError>) -> SubmitOutcome {
        self.submit_enabled = true;
        match result {
            Ok(()) => {
                self.status = Some(FeedbackStatus::Success);
                self.message.clear();
                SubmitOutcome::Sent {
                    close_after: AUTO_CLOSE_DELAY,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Feedback submission failed");
                self.status = Some(FeedbackStatus::Error);
                SubmitOutcome::Failed
            }
        }
    }

    /// Send the form through `sender` and apply the result.
    pub fn submit(&mut self, sender: &impl FeedbackSender) -> SubmitOutcome {
        let form = self.begin_submit();
        let result = sender.send(&form);
        self.finish(result)
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        !self.submit_enabled
    }

    /// Wait out the auto-close delay after a successful submission, then
    /// close the modal and clear the status. No-op otherwise.
    pub async fn settle(&mut self) {
        if self.status != Some(FeedbackStatus::Success) {
            return;
        }
        tokio::time::sleep(AUTO_CLOSE_DELAY).await;
        self.close();
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Sender recording forms and answering with a fixed result.
    struct StubSender {
        status: Option<u16>,
        sent: RefCell<Vec<FeedbackForm>>,
    }

    impl StubSender {
        fn ok() -> Self {
            Self {
                status: None,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn rejecting(status: u16) -> Self {
            Self {
                status: Some(status),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl FeedbackSender for StubSender {
        fn send(&self, form: &FeedbackForm) -> Result<(), SubmissionError> {
            self.sent.borrow_mut().push(form.clone());
            match self.status {
                None => Ok(()),
                Some(status) => Err(SubmissionError::Rejected { status }),
            }
        }
    }

    #[test]
    fn test_open_populates_category() {
        let mut modal = FeedbackModal::new();
        modal.open(Some("tools"));

        assert!(modal.is_open());
        assert_eq!(modal.category(), "tools");
        assert_eq!(modal.status(), None);
    }

    #[test]
    fn test_open_without_category_uses_default() {
        let mut modal = FeedbackModal::new();
        modal.open(None);
        assert_eq!(modal.category(), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_open_resets_form() {
        let mut modal = FeedbackModal::new();
        modal.open(Some("home"));
        modal.set_message("draft");
        modal.close();

        modal.open(Some("home"));

        assert_eq!(modal.message(), "");
    }

    #[test]
    fn test_backdrop_click_closes() {
        let mut modal = FeedbackModal::new();
        modal.open(None);

        modal.click(ClickTarget::Dialog);
        assert!(modal.is_open());

        modal.click(ClickTarget::Backdrop);
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_submit_sends_form_fields() {
        let sender = StubSender::ok();
        let mut modal = FeedbackModal::new();
        modal.open(Some("tools"));
        modal.set_message("Great links");

        modal.submit(&sender);

        assert_eq!(
            sender.sent.borrow().as_slice(),
            &[FeedbackForm {
                message: "Great links".to_owned(),
                category: Some("tools".to_owned()),
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_closes_after_delay() {
        let sender = StubSender::ok();
        let mut modal = FeedbackModal::new();
        modal.open(Some("home"));
        modal.set_message("hi");

        let outcome = modal.submit(&sender);

        assert_eq!(
            outcome,
            SubmitOutcome::Sent {
                close_after: AUTO_CLOSE_DELAY
            }
        );
        assert_eq!(modal.status().map(FeedbackStatus::message), Some(SUCCESS_MESSAGE));
        assert_eq!(modal.message(), "");
        assert!(modal.submit_enabled());
        assert!(modal.is_open());

        let started = tokio::time::Instant::now();
        modal.settle().await;

        assert!(started.elapsed() <= AUTO_CLOSE_DELAY);
        assert!(!modal.is_open());
        assert_eq!(modal.status(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_leaves_modal_open() {
        let sender = StubSender::rejecting(500);
        let mut modal = FeedbackModal::new();
        modal.open(Some("home"));
        modal.set_message("hi");

        let outcome = modal.submit(&sender);
        modal.settle().await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(modal.is_open());
        assert_eq!(modal.status().map(FeedbackStatus::message), Some(ERROR_MESSAGE));
        assert_eq!(modal.message(), "hi");
        assert!(modal.submit_enabled());
    }

    #[test]
    fn test_submit_control_disabled_while_sending() {
        let mut modal = FeedbackModal::new();
        modal.open(Some("tools"));
        modal.set_message("hi");

        let form = modal.begin_submit();

        assert!(!modal.submit_enabled());
        assert!(modal.is_sending());
        assert_eq!(modal.status(), None);
        assert_eq!(form.category.as_deref(), Some("tools"));

        let outcome = modal.finish(Ok(()));

        assert!(matches!(outcome, SubmitOutcome::Sent { .. }));
        assert!(modal.submit_enabled());
        assert_eq!(modal.status(), Some(FeedbackStatus::Success));
    }

    #[test]
    fn test_submit_control_reenabled_after_failure() {
        let mut modal = FeedbackModal::new();
        modal.open(Some("home"));
        modal.set_message("hi");

        modal.begin_submit();
        assert!(!modal.submit_enabled());

        let outcome = modal.finish(Err(SubmissionError::Transport("offline".to_owned())));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(modal.submit_enabled());
        assert_eq!(modal.status(), Some(FeedbackStatus::Error));
        assert_eq!(modal.message(), "hi");
    }

    #[test]
    fn test_begin_submit_clears_previous_status() {
        let mut modal = FeedbackModal::new();
        modal.open(None);
        modal.set_message("hi");
        modal.submit(&StubSender::rejecting(502));
        assert_eq!(modal.status(), Some(FeedbackStatus::Error));

        modal.begin_submit();

        assert_eq!(modal.status(), None);
    }

    #[test]
    fn test_form_serialization_omits_missing_category() {
        let form = FeedbackForm {
            message: "x".to_owned(),
            category: None,
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({"message": "x"})
        );
    }
}
