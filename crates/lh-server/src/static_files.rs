//! Static file serving.
//!
//! Serves the stylesheet and other assets from `lh-assets`, embedded or
//! from the filesystem.

use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::state::AppState;

/// Create router for `/assets/*`.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().route("/assets/{*path}", get(serve_asset))
}

/// Serve one asset.
async fn serve_asset(Path(path): Path<String>) -> Response {
    match lh_assets::get(&path) {
        Some(content) => (
            [
                (header::CONTENT_TYPE, lh_assets::mime_for(&path)),
                (header::CACHE_CONTROL, "public, max-age=3600".to_owned()),
            ],
            content.into_owned(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
