//! Static asset serving for linkhub.
//!
//! Provides a single API for accessing the site's static assets (the
//! stylesheet) in both embedded and filesystem modes:
//!
//! - **`embed` feature on**: Assets are compiled into the binary via `rust-embed`
//! - **`embed` feature off**: Assets are read from this crate's `assets/`
//!   directory at runtime

use std::borrow::Cow;

/// Embedded assets (only available with `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
#[prefix = ""]
struct Assets;

/// Directory for filesystem-based asset serving (dev mode).
#[cfg(not(feature = "embed"))]
const DEV_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

/// Get an asset by path (relative to `assets/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(feature = "embed")]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get an asset by path (relative to `assets/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(not(feature = "embed"))]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    if path.split('/').any(|segment| segment == "..") {
        return None;
    }
    let full_path = std::path::Path::new(DEV_DIR).join(path);
    std::fs::read(&full_path).ok().map(Cow::Owned)
}

/// Return the MIME type string for the given file path.
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_available() {
        let css = get("style.css").unwrap();
        assert!(!css.is_empty());
    }

    #[test]
    fn test_missing_asset() {
        assert!(get("missing.js").is_none());
    }

    #[test]
    fn test_parent_segments_rejected() {
        assert!(get("../Cargo.toml").is_none());
    }

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for("style.css"), "text/css");
        assert_eq!(mime_for("unknown.zzz"), "application/octet-stream");
    }
}
