//! HTTP request handlers.

pub(crate) mod categories;
pub(crate) mod feedback;
pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod theme;

/// Accept only same-origin absolute paths as redirect and return targets.
///
/// Rejects full URLs and protocol-relative `//host` paths.
pub(crate) fn local_path(candidate: &str) -> Option<&str> {
    let is_local = candidate.starts_with('/')
        && !candidate.starts_with("//")
        && !candidate.starts_with("/\\");
    is_local.then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_path() {
        assert_eq!(local_path("/c/tools"), Some("/c/tools"));
        assert_eq!(local_path("/"), Some("/"));
        assert_eq!(local_path("//evil.example.com"), None);
        assert_eq!(local_path("https://evil.example.com/"), None);
        assert_eq!(local_path(""), None);
    }
}
