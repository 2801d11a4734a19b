//! CLI error types.

use lh_config::ConfigError;
use lh_site::LoadError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Submission(String),
}
