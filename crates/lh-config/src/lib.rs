//! Configuration management for linkhub.
//!
//! Parses `lh.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `feedback.webhook_url`
//!
//! When `feedback.webhook_url` is not set at all, the `WEBHOOK_URL`
//! environment variable is used instead.

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override site data file.
    pub data_file: Option<PathBuf>,
    /// Override destination webhook URL.
    pub webhook_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lh.toml";

/// Environment variable consulted when no webhook URL is configured.
pub const WEBHOOK_ENV_VAR: &str = "WEBHOOK_URL";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Feedback relay configuration.
    pub feedback: FeedbackConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    data_file: Option<String>,
    home: Option<String>,
    strict: Option<bool>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// JSON document holding the sidebar and categories.
    pub data_file: PathBuf,
    /// Category shown at `/`.
    pub home: String,
    /// Treat data file reference problems as load failures.
    pub strict: bool,
}

/// Feedback relay configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Destination chat webhook. `None` means the relay is not configured.
    pub webhook_url: Option<String>,
    /// Display name attached to forwarded messages.
    pub username: String,
    /// Timeout for outbound webhook requests, in seconds.
    pub timeout_secs: u64,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            username: "Linkhub Feedback Bot".to_owned(),
            timeout_secs: 30,
        }
    }
}

impl FeedbackConfig {
    /// Outbound request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Fill in the webhook URL from `lookup(WEBHOOK_URL)` when unset,
    /// and treat an empty URL as unset.
    fn resolve_webhook(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.webhook_url.is_none() {
            self.webhook_url = lookup(WEBHOOK_ENV_VAR);
        }
        if self.webhook_url.as_deref().is_some_and(str::is_empty) {
            self.webhook_url = None;
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`feedback.webhook_url`").
        field: String,
        /// Error message (e.g., "${`WEBHOOK_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Read an environment variable, ignoring unset and non-UTF-8 values.
fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lh.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }
        config.feedback.resolve_webhook(env_lookup);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(data_file) = &settings.data_file {
            self.site_resolved.data_file.clone_from(data_file);
        }
        if let Some(webhook_url) = &settings.webhook_url {
            self.feedback.webhook_url = Some(webhook_url.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfigRaw::default(),
            feedback: FeedbackConfig::default(),
            site_resolved: SiteConfig {
                data_file: base.join("data.json"),
                home: "home".to_owned(),
                strict: false,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_site()?;
        self.validate_feedback()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site_resolved.home, "site.home")
    }

    fn validate_feedback(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.feedback.webhook_url {
            require_http_url(url, "feedback.webhook_url")?;
        }
        require_non_empty(&self.feedback.username, "feedback.username")?;
        if self.feedback.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "feedback.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref url) = self.feedback.webhook_url {
            self.feedback.webhook_url = Some(expand::expand_env(url, "feedback.webhook_url")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_resolved = SiteConfig {
            data_file: config_dir.join(self.site.data_file.as_deref().unwrap_or("data.json")),
            home: self.site.home.clone().unwrap_or_else(|| "home".to_owned()),
            strict: self.site.strict.unwrap_or(false),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(
            config.site_resolved.data_file,
            PathBuf::from("/test/data.json")
        );
        assert_eq!(config.site_resolved.home, "home");
        assert!(!config.site_resolved.strict);
        assert!(config.feedback.webhook_url.is_none());
        assert_eq!(config.feedback.username, "Linkhub Feedback Bot");
        assert_eq!(config.feedback.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
    }

    #[test]
    fn test_parse_feedback_config() {
        let toml = r#"
[feedback]
webhook_url = "https://chat.example.com/hooks/abc"
username = "Docs Bot"
timeout_secs = 5
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.feedback.webhook_url.as_deref(),
            Some("https://chat.example.com/hooks/abc")
        );
        assert_eq!(config.feedback.username, "Docs Bot");
        assert_eq!(config.feedback.timeout_secs, 5);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[site]
data_file = "content/links.json"
home = "start"
strict = true
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.site_resolved.data_file,
            PathBuf::from("/project/content/links.json")
        );
        assert_eq!(config.site_resolved.home, "start");
        assert!(config.site_resolved.strict);
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.site_resolved.data_file,
            PathBuf::from("/project/data.json")
        );
        assert_eq!(config.site_resolved.home, "home");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lh.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9000\n\n[site]\ndata_file = \"links.json\"\n",
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.site_resolved.data_file, dir.path().join("links.json"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/lh.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut config = Config::default_with_base(Path::new("/test"));

        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
            data_file: Some(PathBuf::from("/srv/data.json")),
            webhook_url: Some("https://hooks.example.com/x".to_owned()),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.site_resolved.data_file,
            PathBuf::from("/srv/data.json")
        );
        assert_eq!(
            config.feedback.webhook_url.as_deref(),
            Some("https://hooks.example.com/x")
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(
            config.site_resolved.data_file,
            PathBuf::from("/test/data.json")
        );
    }

    #[test]
    fn test_resolve_webhook_falls_back_to_env() {
        let mut feedback = FeedbackConfig::default();
        feedback.resolve_webhook(|name| {
            (name == WEBHOOK_ENV_VAR).then(|| "https://hooks.example.com/env".to_owned())
        });
        assert_eq!(
            feedback.webhook_url.as_deref(),
            Some("https://hooks.example.com/env")
        );
    }

    #[test]
    fn test_resolve_webhook_keeps_configured_value() {
        let mut feedback = FeedbackConfig {
            webhook_url: Some("https://hooks.example.com/file".to_owned()),
            ..FeedbackConfig::default()
        };
        feedback.resolve_webhook(|_| Some("https://hooks.example.com/env".to_owned()));
        assert_eq!(
            feedback.webhook_url.as_deref(),
            Some("https://hooks.example.com/file")
        );
    }

    #[test]
    fn test_resolve_webhook_empty_means_unset() {
        let mut feedback = FeedbackConfig {
            webhook_url: Some(String::new()),
            ..FeedbackConfig::default()
        };
        feedback.resolve_webhook(|_| None);
        assert!(feedback.webhook_url.is_none());
    }

    #[test]
    fn test_expand_env_vars_webhook_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LH_TEST_HOOK");
        }

        let toml = r#"
[feedback]
webhook_url = "${LH_TEST_HOOK:-}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.feedback.resolve_webhook(|_| None);

        assert!(config.feedback.webhook_url.is_none());
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_LH_CONFIG_TEST");
        }

        let toml = r#"
[server]
host = "${MISSING_VAR_LH_CONFIG_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_LH_CONFIG_TEST"));
        assert!(err.to_string().contains("server.host"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.host = String::new();
        assert_validation_error(&config, &["server.host", "empty"]);
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.server.port = 0;
        assert_validation_error(&config, &["server.port"]);
    }

    #[test]
    fn test_validate_home_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site_resolved.home = String::new();
        assert_validation_error(&config, &["site.home", "empty"]);
    }

    #[test]
    fn test_validate_webhook_invalid_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.feedback.webhook_url = Some("ftp://hooks.example.com".to_owned());
        assert_validation_error(&config, &["webhook_url", "http"]);
    }

    #[test]
    fn test_validate_webhook_valid_https() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.feedback.webhook_url = Some("https://hooks.example.com/x".to_owned());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_timeout_zero() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.feedback.timeout_secs = 0;
        assert_validation_error(&config, &["timeout_secs", "greater than 0"]);
    }
}
