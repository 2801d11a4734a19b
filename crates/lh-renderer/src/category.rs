//! Category content markup.

use std::fmt::Write;

use lh_site::{Category, Link, SearchQuery};

use crate::escape::escape_html;
use crate::toc::{TocEntry, toc_entries};


/// Rendered category content and its table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryView {
    /// Main content markup.
    pub html: String,
    /// Table of contents entries, one per section.
    pub toc: Vec<TocEntry>,
}

/// Text content of a rendered link item, as matched by search.
pub fn link_item_text(link: &Link) -> String {
    let mut text = String::new();
    if link.star {
        text.push_str("⭐ ");
    }
    text.push_str(&link.text);
    if let Some(desc) = &link.desc {
        text.push_str(" - ");
        text.push_str(desc);
    }
    text
}

/// Render a category served at `path`.
///
/// The feedback prompt under the subtitle opens the modal on `path`. List
/// items whose text does not match `query` are rendered with the `hidden`
/// attribute.
pub fn render_category(category: &Category, path: &str, query: &SearchQuery) -> CategoryView {
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<h1>{}</h1><p class="subtitle">{}</p>"#,
        escape_html(&category.title),
        escape_html(&category.subtitle)
    );
    let _ = write!(
        html,
        r#"<div class="feedback-box"><div class="feedback-icon"><i class="fa-solid fa-envelope"></i></div><div class="feedback-text"><strong>Got feedback?</strong><span>We'd love to know what you think about this page.</span></div><a href="{}?feedback=open" class="feedback-btn">Share Feedback</a></div>"#,
        escape_html(path)
    );

    for section in &category.sections {
        let _ = write!(
            html,
            r#"<h2 id="{}">{}</h2>"#,
            escape_html(&section.id),
            escape_html(&section.title)
        );

        if let Some(tip) = &section.tip {
            let _ = write!(
                html,
                r#"<div class="tip-box"><div class="tip-label"><i class="fa-regular fa-lightbulb"></i> TIP</div><p>{}</p></div>"#,
                escape_html(&tip.text)
            );
        }

        html.push_str(r#"<ul class="link-list">"#);
        for link in &section.links {
            render_link(link, query, &mut html);
        }
        html.push_str("</ul>");
    }

    CategoryView {
        html,
        toc: toc_entries(&category.sections),
    }
}

fn render_link(link: &Link, query: &SearchQuery, out: &mut String) {
    let hidden = if query.matches(&link_item_text(link)) {
        ""
    } else {
        " hidden"
    };
    let star = if link.star { "⭐ " } else { "" };
    let _ = write!(
        out,
        r#"<li{hidden}>{star}<a href="{}" target="_blank" rel="noopener">{}</a>"#,
        escape_html(&link.url),
        escape_html(&link.text)
    );
    if let Some(desc) = &link.desc {
        let _ = write!(out, " - {}", escape_html(desc));
    }
    out.push_str("</li>");
}

/// Render a plain message in place of category content.
pub fn render_message(message: &str) -> String {
    format!(r#"<p class="content-message">{}</p>"#, escape_html(message))
}
