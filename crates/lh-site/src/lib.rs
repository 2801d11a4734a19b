//! Site document, navigation and UI state for linkhub.
//!
//! The site is described by a single JSON document ([`SiteDocument`]) holding
//! sidebar groups and categories. This crate owns everything that is not
//! markup:
//!
//! - [`DataStore`]: loads the document once and remembers load failures
//! - [`Navigation`]: the active category state machine
//! - [`SearchQuery`]: case-insensitive filtering of rendered items
//! - [`ThemeController`]: dark/light mode persisted through a [`ThemeStore`]
//! - [`FeedbackModal`]: the feedback form state machine, sending through a
//!   [`FeedbackSender`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lh_site::{Navigation, SiteDocument};
//!
//! let json = r#"{
//!     "sidebar": [{"group": "Start", "items": [{"id": "home", "label": "Home", "icon": "fa-house"}]}],
//!     "categories": {"home": {"title": "Welcome", "subtitle": "", "sections": []}}
//! }"#;
//! let document: SiteDocument = serde_json::from_str(json).unwrap();
//! let navigation = Navigation::new(Arc::new(document), "home");
//! assert_eq!(navigation.current().unwrap().title, "Welcome");
//! ```

mod modal;
mod model;
mod navigation;
mod search;
mod store;
mod theme;
mod validate;

pub use modal::{
    AUTO_CLOSE_DELAY, ClickTarget, DEFAULT_CATEGORY, ERROR_MESSAGE, FeedbackForm, FeedbackModal,
    FeedbackSender, FeedbackStatus, ModalState, SUCCESS_MESSAGE, SubmissionError, SubmitOutcome,
};
pub use model::{Category, Link, Section, SidebarGroup, SidebarItem, SiteDocument, Tip};
pub use navigation::{Navigation, NavigationError, category_id_from_path, category_path};
pub use search::{Emphasis, FocusShortcut, KeyChord, SearchQuery, Visibility};
pub use store::{DataStore, LOAD_FAILURE_MESSAGE, LoadError, LoadOptions, LoadedDocument};
pub use theme::{MemoryThemeStore, THEME_STORAGE_KEY, Theme, ThemeController, ThemeStore};
pub use validate::ValidationIssue;
