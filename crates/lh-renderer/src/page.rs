//! Full page layout.

use std::fmt::Write;

use lh_site::{AUTO_CLOSE_DELAY, FeedbackModal, FeedbackStatus, FocusShortcut, Theme};

use crate::escape::escape_html;
use crate::modal::render_modal;

/// Icon font stylesheet referenced by every page.
const ICON_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// Pieces of a page, assembled by [`PageLayout::render`].
pub struct PageLayout<'a> {
    /// Site name shown in the header and window title.
    pub site_name: &'a str,
    /// Document title.
    pub title: &'a str,
    /// Path of this page, used for search, close links and redirects.
    pub path: &'a str,
    pub theme: Theme,
    /// Raw search query, echoed into the search input.
    pub query: &'a str,
    /// Rendered sidebar groups.
    pub sidebar: &'a str,
    /// Rendered main content.
    pub content: &'a str,
    /// Rendered table of contents.
    pub toc: &'a str,
    pub modal: &'a FeedbackModal,
}

impl PageLayout<'_> {
    /// Render the complete HTML document.
    pub fn render(&self) -> String {
        let path = escape_html(self.path);
        let mut out = String::with_capacity(
            self.sidebar.len() + self.content.len() + self.toc.len() + 4096,
        );

        out.push_str(r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1">"#);
        let _ = write!(
            out,
            "<title>{} · {}</title>",
            escape_html(self.title),
            escape_html(self.site_name)
        );
        let _ = write!(
            out,
            r#"<link rel="stylesheet" href="/assets/style.css"><link rel="stylesheet" href="{ICON_STYLESHEET}">"#
        );
        // A successful submission closes the modal by reloading the page without it.
        if self.modal.status() == Some(FeedbackStatus::Success) {
            let _ = write!(
                out,
                r#"<meta http-equiv="refresh" content="{};url={path}">"#,
                AUTO_CLOSE_DELAY.as_secs()
            );
        }
        out.push_str("</head>");

        if let Some(class) = self.theme.body_class() {
            let _ = write!(out, r#"<body class="{class}">"#);
        } else {
            out.push_str("<body>");
        }

        self.render_header(&path, &mut out);

        let _ = write!(
            out,
            r#"<div class="layout"><nav class="sidebar"><div class="nav-scroll">{}</div><div class="nav-footer"><a href="{path}?feedback=open" class="nav-footer-link">Submit Feedback</a></div></nav><main class="content"><div class="content-container">{}</div></main><aside class="toc-sidebar">{}</aside></div>"#,
            self.sidebar, self.content, self.toc
        );

        out.push_str(&render_modal(self.modal, self.path));
        out.push_str("</body></html>");
        out
    }

    fn render_header(&self, path: &str, out: &mut String) {
        let shortcut = FocusShortcut::CTRL_K;
        let _ = write!(
            out,
            r#"<header class="top-bar"><a class="brand" href="/">{}</a><form class="search" method="get" action="{path}"><i class="fa-solid fa-magnifying-glass"></i><input class="search-input" type="search" name="q" value="{}" placeholder="Search links..." aria-keyshortcuts="{}" autocomplete="off"></form>"#,
            escape_html(self.site_name),
            escape_html(self.query),
            shortcut.aria()
        );
        let _ = write!(
            out,
            r#"<form class="theme-form" method="post" action="/theme"><input type="hidden" name="return_to" value="{path}"><button type="submit" class="theme-toggle" aria-label="Toggle theme"><i class="fa-solid {}"></i></button></form></header>"#,
            self.theme.icon()
        );
    }
}
