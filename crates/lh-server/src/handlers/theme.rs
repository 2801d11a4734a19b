//! Theme toggle backed by a cookie.

use axum::Form;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Redirect, Response};
use lh_site::{THEME_STORAGE_KEY, Theme, ThemeController, ThemeStore};
use serde::Deserialize;

use crate::handlers::local_path;

/// Cookie lifetime: one year.
const COOKIE_MAX_AGE: u64 = 365 * 24 * 60 * 60;

/// Theme storage in the request's `theme` cookie.
///
/// Writes are collected and turned into a `Set-Cookie` header.
#[derive(Debug, Default)]
pub(crate) struct CookieThemeStore {
    value: Option<String>,
    written: Option<String>,
}

impl CookieThemeStore {
    /// Read the theme cookie from request headers.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        let value = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == THEME_STORAGE_KEY)
            .map(|(_, value)| value.to_owned());
        Self {
            value,
            written: None,
        }
    }

    /// `Set-Cookie` value for the last write, if any.
    pub(crate) fn set_cookie(&self) -> Option<String> {
        self.written.as_ref().map(|value| {
            format!("{THEME_STORAGE_KEY}={value}; Path=/; Max-Age={COOKIE_MAX_AGE}; SameSite=Lax")
        })
    }
}

impl ThemeStore for CookieThemeStore {
    fn read(&self) -> Option<String> {
        self.written.clone().or_else(|| self.value.clone())
    }

    fn write(&mut self, value: &str) {
        self.written = Some(value.to_owned());
    }
}

/// Theme applied to a page request.
pub(crate) fn request_theme(headers: &HeaderMap) -> Theme {
    ThemeController::load(CookieThemeStore::from_headers(headers)).theme()
}

/// Form posted by the theme toggle button.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ThemeForm {
    #[serde(default)]
    return_to: Option<String>,
}

/// Handle POST /theme.
///
/// Flips the stored mode and redirects to `return_to`, the referring page,
/// or `/`.
pub(crate) async fn toggle_theme(headers: HeaderMap, Form(form): Form<ThemeForm>) -> Response {
    let mut controller = ThemeController::load(CookieThemeStore::from_headers(&headers));
    controller.toggle();

    let target = redirect_target(form.return_to.as_deref(), &headers);
    let mut response = Redirect::to(&target).into_response();
    if let Some(cookie) = controller.store().set_cookie()
        && let Ok(value) = HeaderValue::from_str(&cookie)
    {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}

/// Pick where to send the browser after a toggle.
fn redirect_target(return_to: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(path) = return_to.and_then(local_path) {
        return path.to_owned();
    }

    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| referer.parse::<axum::http::Uri>().ok())
        .and_then(|uri| uri.path_and_query().map(|pq| pq.as_str().to_owned()))
        .filter(|path| local_path(path).is_some())
        .unwrap_or_else(|| "/".to_owned())
}
