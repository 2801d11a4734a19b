//! HTML pages.
//!
//! Every page is rendered in full: sidebar, category content, table of
//! contents and the feedback modal, with the search query and theme
//! applied server-side.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use lh_renderer::{PageLayout, render_category, render_message, render_sidebar, render_toc};
use lh_site::{FeedbackModal, LOAD_FAILURE_MESSAGE, SearchQuery, Theme, category_path};
use serde::Deserialize;

use crate::handlers::theme::request_theme;
use crate::state::AppState;

/// Query string accepted by pages.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageParams {
    /// Search query.
    #[serde(default)]
    q: String,
    /// `open` shows the feedback modal.
    #[serde(default)]
    feedback: Option<String>,
}

/// What to render: the category (or home), the query and the modal.
pub(crate) struct PageRequest<'a> {
    /// Category id, `None` for the home page.
    pub(crate) category: Option<&'a str>,
    pub(crate) query: &'a str,
    pub(crate) theme: Theme,
    /// A submitted modal. `None` builds a fresh one.
    pub(crate) modal: Option<FeedbackModal>,
    /// Open the fresh modal for the active category.
    pub(crate) open_modal: bool,
}

/// Handle GET /.
pub(crate) async fn home_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
    headers: HeaderMap,
) -> Response {
    render_page(
        &state,
        PageRequest {
            category: None,
            query: &params.q,
            theme: request_theme(&headers),
            modal: None,
            open_modal: params.wants_modal(),
        },
    )
}

/// Handle GET /c/{id}.
pub(crate) async fn category_page(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
    headers: HeaderMap,
) -> Response {
    render_page(
        &state,
        PageRequest {
            category: Some(&id),
            query: &params.q,
            theme: request_theme(&headers),
            modal: None,
            open_modal: params.wants_modal(),
        },
    )
}

impl PageParams {
    fn wants_modal(&self) -> bool {
        self.feedback.as_deref() == Some("open")
    }
}

/// Render a complete page.
///
/// Unknown categories answer 404 with the sidebar still in place. A failed
/// document load renders the load failure message in place of content.
pub(crate) fn render_page(state: &AppState, request: PageRequest<'_>) -> Response {
    let query = SearchQuery::new(request.query);
    let path = request.category.map_or_else(|| "/".to_owned(), category_path);
    let mut status = StatusCode::OK;

    let (title, sidebar, content, toc, active) = match state.navigation() {
        None => (
            "Error".to_owned(),
            String::new(),
            render_message(LOAD_FAILURE_MESSAGE),
            String::new(),
            None,
        ),
        Some(mut navigation) => {
            let selected = match request.category {
                Some(id) => navigation.select(id).cloned(),
                None => navigation.current().cloned(),
            };
            let (title, content, toc) = match selected {
                Ok(category) => {
                    let view = render_category(&category, &path, &query);
                    (category.title, view.html, render_toc(&view.toc))
                }
                Err(err) => {
                    tracing::debug!(error = %err, "Page not found");
                    status = StatusCode::NOT_FOUND;
                    ("Not found".to_owned(), render_message(&err.to_string()), String::new())
                }
            };
            let sidebar = render_sidebar(
                &navigation.document().sidebar,
                navigation.active_id(),
                &query,
            );
            let active = (status == StatusCode::OK).then(|| navigation.active_id().to_owned());
            (title, sidebar, content, toc, active)
        }
    };

    let modal = request.modal.unwrap_or_else(|| {
        let mut modal = FeedbackModal::new();
        if request.open_modal {
            modal.open(active.as_deref());
        }
        modal
    });

    let html = PageLayout {
        site_name: &state.site_name,
        title: &title,
        path: &path,
        theme: request.theme,
        query: request.query,
        sidebar: &sidebar,
        content: &content,
        toc: &toc,
        modal: &modal,
    }
    .render();

    (status, Html(html)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_modal() {
        let params = PageParams {
            q: String::new(),
            feedback: Some("open".to_owned()),
        };
        assert!(params.wants_modal());
        assert!(!PageParams::default().wants_modal());
    }
}
