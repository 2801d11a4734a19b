//! HTML rendering of linkhub site documents.
//!
//! Every function here is a pure transformation from site data (and UI
//! state from `lh-site`) to markup. Mounting the markup is left to the
//! caller; the server sends whole pages, there is no diffing.
//!
//! # Example
//!
//! ```
//! use lh_renderer::render_category;
//! use lh_site::{Category, SearchQuery};
//!
//! let category = Category {
//!     title: "Tools".to_owned(),
//!     subtitle: "Things we use".to_owned(),
//!     sections: Vec::new(),
//! };
//! let view = render_category(&category, "/c/tools", &SearchQuery::default());
//! assert!(view.html.starts_with("<h1>Tools</h1>"));
//! ```

mod category;
mod escape;
mod modal;
mod page;
mod sidebar;
mod toc;

pub use category::{CategoryView, link_item_text, render_category, render_message};
pub use escape::escape_html;
pub use modal::render_modal;
pub use page::PageLayout;
pub use sidebar::render_sidebar;
pub use toc::{TocEntry, render_toc, toc_entries};
