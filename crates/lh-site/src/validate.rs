//! Reference checks for a loaded site document.

use std::collections::HashSet;

use crate::model::SiteDocument;

/// A reference problem found in the data file.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    /// Sidebar item whose id has no category.
    #[error("sidebar item '{label}' in group '{group}' points to unknown category '{id}'")]
    DanglingSidebarItem {
        group: String,
        id: String,
        label: String,
    },
    /// Sidebar id listed more than once.
    #[error("sidebar item '{id}' is listed more than once")]
    DuplicateSidebarItem { id: String },
    /// Home category does not exist.
    #[error("home category '{0}' does not exist")]
    MissingHome(String),
}

impl SiteDocument {
    /// Check that sidebar items and the home id resolve to categories.
    ///
    /// Returns every issue found, in sidebar order, with the home check last.
    #[must_use]
    pub fn validate(&self, home: &str) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for group in &self.sidebar {
            for item in &group.items {
                if !seen.insert(item.id.as_str()) {
                    issues.push(ValidationIssue::DuplicateSidebarItem {
                        id: item.id.clone(),
                    });
                }
                if !self.categories.contains_key(&item.id) {
                    issues.push(ValidationIssue::DanglingSidebarItem {
                        group: group.group.clone(),
                        id: item.id.clone(),
                        label: item.label.clone(),
                    });
                }
            }
        }

        if !self.categories.contains_key(home) {
            issues.push(ValidationIssue::MissingHome(home.to_owned()));
        }

        issues
    }
}
