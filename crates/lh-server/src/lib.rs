//! HTTP server for linkhub.
//!
//! Serves server-rendered pages for the site document, a small JSON API,
//! the feedback relay and the stylesheet.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use lh_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         data_file: PathBuf::from("data.json"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Routes
//!
//! ```text
//! GET  /                     home category page (?q=, ?feedback=open)
//! GET  /c/{id}               category page (?q=, ?feedback=open)
//! POST /theme                toggle the theme cookie, redirect back
//! POST /feedback             modal form submission, re-renders the page
//! GET  /api/navigation       sidebar groups
//! GET  /api/categories/{id}  rendered category (ETag, Last-Modified)
//! *    /api/feedback         feedback relay (POST only)
//! GET  /assets/{*path}       stylesheet
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use lh_config::FeedbackConfig;
use lh_feedback::FeedbackRelay;
use lh_site::{DataStore, LoadOptions};
use state::AppState;

/// Name shown in the header and window title.
pub const SITE_NAME: &str = "Linkhub";

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Site document to serve.
    pub data_file: PathBuf,
    /// Category shown at `/`.
    pub home: String,
    /// Fail the load on dangling references.
    pub strict: bool,
    /// Feedback relay settings.
    pub feedback: FeedbackConfig,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version (for cache validators).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            data_file: PathBuf::from("data.json"),
            home: "home".to_owned(),
            strict: false,
            feedback: FeedbackConfig::default(),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// The site document is loaded once. A failed load does not stop the
/// server; pages then show the load failure message.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let options = LoadOptions {
        home: config.home.clone(),
        strict: config.strict,
    };
    let store = DataStore::load(&config.data_file, &options);

    let relay = FeedbackRelay::from_config(&config.feedback);
    if !relay.is_configured() {
        tracing::warn!("No feedback webhook configured, relay requests will fail");
    }

    let state = Arc::new(AppState {
        store,
        relay: Arc::new(relay),
        home: config.home.clone(),
        site_name: SITE_NAME.to_owned(),
        version: config.version.clone(),
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from linkhub config.
#[must_use]
pub fn server_config_from_config(
    config: &lh_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        data_file: config.site_resolved.data_file.clone(),
        home: config.site_resolved.home.clone(),
        strict: config.site_resolved.strict,
        feedback: config.feedback.clone(),
        verbose,
        version,
    }
}
