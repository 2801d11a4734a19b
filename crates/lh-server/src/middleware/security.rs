//! Security headers middleware.
//!
//! Adds security headers to all responses:
//! - Content-Security-Policy
//! - X-Content-Type-Options
//! - X-Frame-Options

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy header value.
///
/// Pages are script-free; forms only post back to this origin.
const CSP: &str = concat!(
    "default-src 'self'; ",
    "script-src 'none'; ",
    "style-src 'self' https://cdnjs.cloudflare.com; ",
    "font-src 'self' data: https://cdnjs.cloudflare.com; ",
    "img-src 'self' data:; ",
    "connect-src 'self'; ",
    "form-action 'self'; ",
    "frame-ancestors 'none'"
);

/// Create layer that adds Content-Security-Policy header.
pub(crate) fn csp_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("content-security-policy"),
        HeaderValue::from_static(CSP),
    )
}

/// Create layer that adds X-Content-Type-Options header.
pub(crate) fn content_type_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    )
}

/// Create layer that adds X-Frame-Options header.
pub(crate) fn frame_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON_ORIGIN: &str = "https://cdnjs.cloudflare.com";

    #[test]
    fn test_csp_value() {
        assert!(CSP.contains("default-src 'self'"));
        assert!(CSP.contains("script-src 'none'"));
        assert!(CSP.contains("form-action 'self'"));
        assert!(CSP.contains("frame-ancestors 'none'"));
    }

    #[test]
    fn test_csp_allows_icon_origin() {
        assert!(CSP.contains(&format!("style-src 'self' {ICON_ORIGIN}")));
        assert!(CSP.contains(&format!("font-src 'self' data: {ICON_ORIGIN}")));
    }
}
