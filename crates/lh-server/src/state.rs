//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use lh_feedback::FeedbackRelay;
use lh_site::{DataStore, LoadedDocument, Navigation};

use crate::error::ServerError;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Site document, or the reason it failed to load.
    pub(crate) store: DataStore,
    /// Relay for feedback submissions.
    pub(crate) relay: Arc<FeedbackRelay>,
    /// Category shown at `/`.
    pub(crate) home: String,
    /// Name shown in the header and window title.
    pub(crate) site_name: String,
    /// Application version for cache validators.
    pub(crate) version: String,
}

impl AppState {
    /// The loaded document, or [`ServerError::Unavailable`] after a failed load.
    pub(crate) fn loaded(&self) -> Result<&LoadedDocument, ServerError> {
        self.store.loaded().ok_or_else(|| {
            ServerError::Unavailable(self.store.failure().unwrap_or_default().to_owned())
        })
    }

    /// Fresh navigation state at the home category, if the document loaded.
    pub(crate) fn navigation(&self) -> Option<Navigation> {
        self.store
            .document()
            .map(|document| Navigation::new(Arc::clone(document), self.home.clone()))
    }
}
