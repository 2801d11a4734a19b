//! Table of contents derived from a category's sections.

use std::fmt::Write;

use lh_site::Section;

use crate::escape::escape_html;

/// One table of contents link.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TocEntry {
    /// Section anchor id.
    pub id: String,
    /// Section heading text.
    pub title: String,
}

/// One entry per section, in source order.
pub fn toc_entries(sections: &[Section]) -> Vec<TocEntry> {
    sections
        .iter()
        .map(|section| TocEntry {
            id: section.id.clone(),
            title: section.title.clone(),
        })
        .collect()
}

/// Render the "On this page" block.
pub fn render_toc(entries: &[TocEntry]) -> String {
    let mut out = String::from(r#"<div class="toc-title">On this page</div>"#);
    for entry in entries {
        let _ = write!(
            out,
            r##"<a href="#{}" class="toc-link">{}</a>"##,
            escape_html(&entry.id),
            escape_html(&entry.title)
        );
    }
    out
}
