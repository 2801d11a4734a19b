//! `lh serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use lh_config::{CliSettings, Config};
use lh_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover lh.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site document (overrides config).
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Destination webhook for feedback (overrides config and WEBHOOK_URL).
    #[arg(long)]
    webhook_url: Option<String>,

    /// Enable verbose output (request and load logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            data_file: self.data_file,
            webhook_url: self.webhook_url,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "Configuration loaded");

        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Site document: {}",
            config.site_resolved.data_file.display()
        ));
        if config.feedback.webhook_url.is_some() {
            output.info("Feedback relay: enabled");
        } else {
            output.warning("Feedback relay: disabled (WEBHOOK_URL not set)");
        }

        let server_config = server_config_from_config(&config, version.to_owned(), self.verbose);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
