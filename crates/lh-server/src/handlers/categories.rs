//! Categories API endpoint.
//!
//! Renders a category and returns it as JSON with cache validators.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use lh_renderer::{TocEntry, render_category};
use lh_site::{NavigationError, SearchQuery, category_path};
use md5::{Digest, Md5};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/categories/{id}.
#[derive(Serialize)]
struct CategoryResponse {
    /// Category id.
    id: String,
    /// Page path of the category.
    path: String,
    title: String,
    subtitle: String,
    /// Table of contents entries.
    toc: Vec<TocEntry>,
    /// Rendered HTML content.
    content: String,
}

/// Handle GET /api/categories/{id}.
pub(crate) async fn get_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let loaded = state.loaded()?;
    let category = loaded
        .document
        .category(&id)
        .ok_or_else(|| NavigationError::UnknownCategory(id.clone()))?;

    let path = category_path(&id);
    let view = render_category(category, &path, &SearchQuery::default());
    let etag = compute_etag(&state.version, &view.html);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let response = CategoryResponse {
        id,
        path,
        title: category.title.clone(),
        subtitle: category.subtitle.clone(),
        toc: view.toc,
        content: view.html,
    };

    let mut cache_headers = vec![
        (header::ETAG, etag),
        (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
    ];
    if let Some(modified) = loaded.modified {
        let last_modified: DateTime<Utc> = modified.into();
        cache_headers.push((header::LAST_MODIFIED, http_date(last_modified)));
    }

    let mut response = Json(response).into_response();
    for (name, value) in cache_headers {
        if let Ok(value) = value.parse() {
            response.headers_mut().insert(name, value);
        }
    }
    Ok(response)
}

/// Format a timestamp as an HTTP date.
fn http_date(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Compute `ETag` from version and content.
///
/// MD5 truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
