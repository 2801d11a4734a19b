//! `lh check` command implementation.

use std::path::PathBuf;

use clap::Args;
use lh_config::{CliSettings, Config};
use lh_site::{LoadOptions, LoadedDocument};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover lh.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site document (overrides config).
    #[arg(short, long)]
    data_file: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded or has reference
    /// problems.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            data_file: self.data_file,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let path = &config.site_resolved.data_file;
        let options = LoadOptions {
            home: config.site_resolved.home.clone(),
            strict: false,
        };
        let loaded = LoadedDocument::load(path, &options)?;

        output.info(&format!("Checked {}", path.display()));
        output.info(&format!(
            "{} categories, {} sidebar items",
            loaded.document.categories.len(),
            loaded.document.sidebar_items().count()
        ));

        if loaded.issues.is_empty() {
            output.success("No problems found");
            return Ok(());
        }

        for issue in &loaded.issues {
            output.warning(&format!("  {issue}"));
        }
        Err(CliError::Validation(problem_summary(loaded.issues.len())))
    }
}

fn problem_summary(count: usize) -> String {
    if count == 1 {
        "1 problem found".to_owned()
    } else {
        format!("{count} problems found")
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_site(dir: &std::path::Path, json: &str) -> PathBuf {
        let path = dir.join("data.json");
        fs::write(&path, json).unwrap();
        fs::write(dir.join("lh.toml"), "[site]\ndata_file = \"data.json\"\n").unwrap();
        path
    }

    #[test]
    fn test_problem_summary() {
        assert_eq!(problem_summary(1), "1 problem found");
        assert_eq!(problem_summary(3), "3 problems found");
    }

    #[test]
    fn test_check_valid_document() {
        let dir = tempfile::tempdir().unwrap();
        write_site(
            dir.path(),
            r#"{"sidebar":[{"group":"Main","items":[{"id":"home","label":"Home"}]}],
                "categories":{"home":{"title":"Welcome"}}}"#,
        );
        let args = CheckArgs {
            config: Some(dir.path().join("lh.toml")),
            data_file: None,
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_check_reports_dangling_items() {
        let dir = tempfile::tempdir().unwrap();
        write_site(
            dir.path(),
            r#"{"sidebar":[{"group":"Main","items":[{"id":"tools","label":"Tools"}]}],
                "categories":{"home":{"title":"Welcome"}}}"#,
        );
        let args = CheckArgs {
            config: Some(dir.path().join("lh.toml")),
            data_file: None,
        };

        let err = args.execute().unwrap_err();

        assert!(matches!(err, CliError::Validation(_)));
        assert_eq!(err.to_string(), "1 problem found");
    }

    #[test]
    fn test_check_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lh.toml"), "").unwrap();
        let args = CheckArgs {
            config: Some(dir.path().join("lh.toml")),
            data_file: Some(dir.path().join("absent.json")),
        };

        assert!(matches!(args.execute(), Err(CliError::Load(_))));
    }
}
