//! Feedback modal markup.

use std::fmt::Write;

use lh_site::FeedbackModal;

use crate::escape::escape_html;

/// Render the feedback modal for the page at `return_to`.
///
/// The modal is always present; it is shown when open. Close, cancel and the
/// backdrop are links back to `return_to`, the form posts to `/feedback`.
pub fn render_modal(modal: &FeedbackModal, return_to: &str) -> String {
    let return_to = escape_html(return_to);
    let class = if modal.is_open() { "modal show" } else { "modal" };
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<div id="feedback-modal" class="{class}"><a class="modal-backdrop" href="{return_to}" aria-label="Close"></a><div class="modal-content" role="dialog" aria-modal="true" aria-labelledby="feedback-title"><div class="modal-header"><h3 id="feedback-title">Share Feedback</h3><a class="close-modal" href="{return_to}" aria-label="Close">&times;</a></div>"#
    );

    let _ = write!(
        out,
        r#"<form method="post" action="/feedback"><input type="hidden" id="feedback-category" name="category" value="{}"><input type="hidden" name="return_to" value="{return_to}"><label for="feedback-message">Your feedback</label><textarea id="feedback-message" name="message" rows="5" required placeholder="What's missing, broken, or great?">{}</textarea>"#,
        escape_html(modal.category()),
        escape_html(modal.message())
    );

    if let Some(status) = modal.status() {
        let _ = write!(
            out,
            r#"<div id="feedback-status" class="{}">{}</div>"#,
            status.class(),
            escape_html(status.message())
        );
    } else {
        out.push_str(r#"<div id="feedback-status"></div>"#);
    }

    let (disabled, label) = if modal.submit_enabled() {
        ("", "Send Feedback")
    } else {
        (" disabled", "Sending...")
    };
    let _ = write!(
        out,
        r#"<div class="modal-actions"><a class="btn-cancel" href="{return_to}">Cancel</a><button type="submit" class="btn-submit"{disabled}>{label}</button></div></form></div></div>"#
    );

    out
}
