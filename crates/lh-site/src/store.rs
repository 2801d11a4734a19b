//! One-shot loading of the site document.
//!
//! The document is read once at startup. A failed load is remembered rather
//! than returned, so the server can still start and show
//! [`LOAD_FAILURE_MESSAGE`] in place of content.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::model::SiteDocument;
use crate::validate::ValidationIssue;

/// Message shown in place of content when the document could not be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load content. Make sure data.json exists.";

/// Error returned when the document cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid site document.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Reference checks failed in strict mode.
    #[error("{} has {} invalid reference(s)", path.display(), issues.len())]
    Invalid {
        path: PathBuf,
        issues: Vec<ValidationIssue>,
    },
}

/// Options controlling how the document is checked after parsing.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// Home category id, checked for existence.
    pub home: String,
    /// Fail the load when reference checks find issues.
    pub strict: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            home: "home".to_owned(),
            strict: false,
        }
    }
}

/// A successfully loaded document.
#[derive(Clone, Debug)]
pub struct LoadedDocument {
    /// Parsed document, shared read-only for the session.
    pub document: Arc<SiteDocument>,
    /// Modification time of the source file, if the platform reports one.
    pub modified: Option<SystemTime>,
    /// Reference issues found (always empty in strict mode).
    pub issues: Vec<ValidationIssue>,
}

impl LoadedDocument {
    /// Read, parse and check the document at `path`.
    pub fn load(path: &Path, options: &LoadOptions) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: SiteDocument =
            serde_json::from_str(&content).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let issues = document.validate(&options.home);
        if options.strict && !issues.is_empty() {
            return Err(LoadError::Invalid {
                path: path.to_path_buf(),
                issues,
            });
        }

        let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok();

        Ok(Self {
            document: Arc::new(document),
            modified,
            issues,
        })
    }
}

/// Holds the session's document or the reason it failed to load.
#[derive(Clone, Debug)]
pub struct DataStore {
    state: Result<LoadedDocument, String>,
}

impl DataStore {
    /// Load the document at `path`, recording any failure.
    ///
    /// Failures and reference issues are logged; the returned store is
    /// always usable.
    #[must_use]
    pub fn load(path: &Path, options: &LoadOptions) -> Self {
        match LoadedDocument::load(path, options) {
            Ok(loaded) => {
                for issue in &loaded.issues {
                    tracing::warn!(path = %path.display(), %issue, "Site document issue");
                }
                tracing::info!(
                    path = %path.display(),
                    categories = loaded.document.categories.len(),
                    "Loaded site document"
                );
                Self { state: Ok(loaded) }
            }
            Err(err) => {
                if let LoadError::Invalid { issues, .. } = &err {
                    for issue in issues {
                        tracing::error!(path = %path.display(), %issue, "Site document issue");
                    }
                }
                tracing::error!(error = %err, "Failed to load site document");
                Self::failed(err.to_string())
            }
        }
    }

    /// Store wrapping an already parsed document.
    #[must_use]
    pub fn from_document(document: SiteDocument) -> Self {
        Self {
            state: Ok(LoadedDocument {
                document: Arc::new(document),
                modified: None,
                issues: Vec::new(),
            }),
        }
    }

    /// Store in the failed state.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            state: Err(reason.into()),
        }
    }

    /// The loaded document, if loading succeeded.
    #[must_use]
    pub fn loaded(&self) -> Option<&LoadedDocument> {
        self.state.as_ref().ok()
    }

    /// The shared document, if loading succeeded.
    #[must_use]
    pub fn document(&self) -> Option<&Arc<SiteDocument>> {
        self.loaded().map(|loaded| &loaded.document)
    }

    /// Why loading failed, if it did.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.state.as_ref().err().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const VALID: &str = r#"{
        "sidebar": [{"group": "G", "items": [{"id": "home", "label": "Home"}, {"id": "gone", "label": "Gone"}]}],
        "categories": {"home": {"title": "Home"}}
    }"#;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_document_records_issues() {
        let file = write_temp(VALID);

        let store = DataStore::load(file.path(), &LoadOptions::default());

        let loaded = store.loaded().unwrap();
        assert_eq!(loaded.document.categories.len(), 1);
        assert_eq!(loaded.issues.len(), 1);
        assert!(loaded.modified.is_some());
        assert!(store.failure().is_none());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let store = DataStore::load(
            Path::new("/nonexistent/data.json"),
            &LoadOptions::default(),
        );

        assert!(store.document().is_none());
        assert!(store.failure().unwrap().contains("Failed to read"));
    }

    #[test]
    fn test_load_invalid_json_fails() {
        let file = write_temp("{ not json");

        let err = LoadedDocument::load(file.path(), &LoadOptions::default()).unwrap_err();

        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_strict_mode_rejects_issues() {
        let file = write_temp(VALID);
        let options = LoadOptions {
            strict: true,
            ..LoadOptions::default()
        };

        let err = LoadedDocument::load(file.path(), &options).unwrap_err();

        match err {
            LoadError::Invalid { issues, .. } => assert_eq!(issues.len(), 1),
            other => panic!("Expected LoadError::Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_from_document() {
        let store = DataStore::from_document(SiteDocument::default());
        assert!(store.document().is_some());
        assert!(store.failure().is_none());
    }
}
