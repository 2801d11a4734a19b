//! Live search over rendered text.
//!
//! Filtering is stateless: every query is applied from scratch to the text
//! of each rendered list item and sidebar entry.

/// Lowercased search query. An empty query matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// Whether the query filters nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// The lowercased query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Case-insensitive substring containment.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.needle)
    }

    /// Visibility of each list item.
    pub fn filter<'a>(&self, items: impl IntoIterator<Item = &'a str>) -> Vec<Visibility> {
        items
            .into_iter()
            .map(|text| {
                if self.matches(text) {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                }
            })
            .collect()
    }

    /// Emphasis of each sidebar entry.
    pub fn dim<'a>(&self, entries: impl IntoIterator<Item = &'a str>) -> Vec<Emphasis> {
        entries
            .into_iter()
            .map(|text| {
                if self.matches(text) {
                    Emphasis::Full
                } else {
                    Emphasis::Dimmed
                }
            })
            .collect()
    }
}

/// Whether a list item is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Whether a sidebar entry is drawn at full opacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Full,
    Dimmed,
}

/// A key press with its Control modifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyChord {
    pub ctrl: bool,
    pub key: char,
}

/// Keyboard shortcut that focuses the search input.
///
/// Focusing never changes the current query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusShortcut {
    key: char,
}

impl FocusShortcut {
    /// Ctrl+K.
    pub const CTRL_K: Self = Self { key: 'k' };

    #[must_use]
    pub fn matches(self, chord: KeyChord) -> bool {
        chord.ctrl && chord.key == self.key
    }

    /// Value for the `aria-keyshortcuts` attribute.
    #[must_use]
    pub fn aria(self) -> String {
        format!("Control+{}", self.key.to_ascii_uppercase())
    }
}
