//! Site document data model.
//!
//! Mirrors the JSON data file one-to-one. Optional fields default so that a
//! hand-written file may omit them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The whole site: sidebar layout plus categories keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDocument {
    /// Sidebar groups in display order.
    #[serde(default)]
    pub sidebar: Vec<SidebarGroup>,
    /// Categories keyed by the id used in sidebar items.
    #[serde(default)]
    pub categories: BTreeMap<String, Category>,
}

impl SiteDocument {
    /// Look up a category by id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    /// All sidebar items across groups, in display order.
    pub fn sidebar_items(&self) -> impl Iterator<Item = &SidebarItem> {
        self.sidebar.iter().flat_map(|group| group.items.iter())
    }
}

/// A labelled group of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group label.
    pub group: String,
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<SidebarItem>,
}

/// A sidebar entry pointing at a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarItem {
    /// Category id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Icon class name (e.g. `fa-house`).
    #[serde(default)]
    pub icon: String,
}

/// One selectable content page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A headed list of links within a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Anchor id, also used by the table of contents.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<Tip>,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Callout shown under a section heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub text: String,
}

/// An external link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub url: String,
    /// Short description shown after the link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Highlight as a recommended link.
    #[serde(default)]
    pub star: bool,
}
