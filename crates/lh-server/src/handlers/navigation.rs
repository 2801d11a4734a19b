//! Navigation API endpoint.
//!
//! Returns the sidebar groups of the site document.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use lh_site::SidebarGroup;
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Category shown at `/`.
    home: String,
    /// Sidebar groups in document order.
    groups: Vec<SidebarGroup>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationResponse>, ServerError> {
    let loaded = state.loaded()?;

    Ok(Json(NavigationResponse {
        home: state.home.clone(),
        groups: loaded.document.sidebar.clone(),
    }))
}
