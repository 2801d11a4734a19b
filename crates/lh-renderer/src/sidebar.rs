//! Sidebar navigation markup.

use std::fmt::Write;

use lh_site::{SearchQuery, SidebarGroup, category_path};

use crate::escape::escape_html;

/// Render sidebar groups.
///
/// The first item whose id equals `active_id` gets the `active` class, so at
/// most one entry is highlighted even if an id is listed twice. Entries whose
/// label does not match `query` get the `dimmed` class.
pub fn render_sidebar(groups: &[SidebarGroup], active_id: &str, query: &SearchQuery) -> String {
    let mut out = String::new();
    let mut active_marked = false;

    for group in groups {
        let _ = write!(
            out,
            r#"<div class="nav-group"><div class="nav-label">{}</div>"#,
            escape_html(&group.group)
        );

        for item in &group.items {
            let mut class = String::from("nav-item");
            if !active_marked && item.id == active_id {
                class.push_str(" active");
                active_marked = true;
            }
            if !query.matches(&item.label) {
                class.push_str(" dimmed");
            }
            let _ = write!(
                out,
                r#"<a href="{}" class="{class}" data-category="{}"><i class="fa-solid {}"></i> {}</a>"#,
                escape_html(&category_path(&item.id)),
                escape_html(&item.id),
                escape_html(&item.icon),
                escape_html(&item.label),
            );
        }

        out.push_str("</div>");
    }

    out
}
