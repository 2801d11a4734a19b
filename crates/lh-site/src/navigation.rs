//! Active category state.
//!
//! [`Navigation`] is a small state machine whose states are category ids.
//! It starts at the home id and only moves to ids that exist in the
//! document, so a dangling sidebar link is reported instead of ignored.

use std::borrow::Cow;
use std::sync::Arc;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::model::{Category, SiteDocument};

/// Unreserved path characters: A-Z a-z 0-9 - . _ ~
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Page path of a category, with the id percent-encoded as a single segment.
pub fn category_path(id: &str) -> String {
    format!("/c/{}", utf8_percent_encode(id, PATH_SEGMENT_ENCODE_SET))
}

/// Category id addressed by a page path built with [`category_path`].
///
/// `None` for paths outside `/c/`, an empty id, or an id that does not
/// decode to UTF-8.
pub fn category_id_from_path(path: &str) -> Option<String> {
    let segment = path.strip_prefix("/c/").filter(|s| !s.is_empty())?;
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

/// Error returned when a category id does not resolve.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Category not found: {0}")]
    UnknownCategory(String),
}

/// Tracks the active category of a session.
#[derive(Clone, Debug)]
pub struct Navigation {
    document: Arc<SiteDocument>,
    active: String,
}

impl Navigation {
    /// Start at `home`. The id is not checked here; see [`Navigation::current`].
    #[must_use]
    pub fn new(document: Arc<SiteDocument>, home: impl Into<String>) -> Self {
        Self {
            document,
            active: home.into(),
        }
    }

    /// Active category id.
    #[must_use]
    pub fn active_id(&self) -> &str {
        &self.active
    }

    /// Document being navigated.
    #[must_use]
    pub fn document(&self) -> &SiteDocument {
        &self.document
    }

    /// Active category.
    pub fn current(&self) -> Result<&Category, NavigationError> {
        self.document
            .category(&self.active)
            .ok_or_else(|| NavigationError::UnknownCategory(self.active.clone()))
    }

    /// Move to `id` and return its category.
    ///
    /// Unknown ids leave the state unchanged.
    pub fn select(&mut self, id: &str) -> Result<&Category, NavigationError> {
        if self.document.category(id).is_none() {
            return Err(NavigationError::UnknownCategory(id.to_owned()));
        }
        id.clone_into(&mut self.active);
        self.current()
    }
}
