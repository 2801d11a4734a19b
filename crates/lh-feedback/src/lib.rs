//! Feedback relay and webhook clients for linkhub.
//!
//! - [`FeedbackRelay`]: validates a submission and forwards it to the
//!   destination [`Webhook`] as a formatted chat message
//! - [`HttpWebhook`]: posts messages to a chat webhook URL
//! - [`RelayClient`]: posts feedback forms to a relay endpoint, used as the
//!   [`FeedbackSender`](lh_site::FeedbackSender) of a feedback modal
//!
//! All HTTP is blocking (`ureq`); async callers run it on a blocking thread.
//! Nothing is retried.

mod client;
mod relay;
#[cfg(test)]
mod test_server;
mod webhook;

pub use client::RelayClient;
pub use relay::{FeedbackRelay, RelayError, format_content};
pub use webhook::{DeliveryError, HttpWebhook, Webhook, WebhookPayload, create_agent};
