//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{any, get, post};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let page_routes = Router::new()
        .route("/", get(handlers::pages::home_page))
        .route("/c/{id}", get(handlers::pages::category_page))
        .route("/theme", post(handlers::theme::toggle_theme))
        .route("/feedback", post(handlers::feedback::submit_feedback));

    let api_routes = Router::new()
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/categories/{id}", get(handlers::categories::get_category))
        .route("/api/feedback", any(handlers::feedback::relay_feedback));

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .merge(static_files::static_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
