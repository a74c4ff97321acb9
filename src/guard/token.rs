//! Session token extraction

use axum::extract::Request;
use axum::http::header::COOKIE;

use crate::config::SessionConfig;

/// Read a named cookie from the incoming request
///
/// Returns the raw value; no parsing or validation happens at this stage.
pub fn cookie_token(req: &Request, name: &str) -> Option<String> {
    let cookie_header = req.headers().get(COOKIE)?;
    let cookie_str = cookie_header.to_str().ok()?;

    for cookie in cookie_str.split(';') {
        let mut parts = cookie.trim().splitn(2, '=');
        if parts.next() == Some(name) {
            let value = parts.next().unwrap_or("");
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

/// Extract the session token, preferring the refresh cookie
pub fn session_token(req: &Request, session: &SessionConfig) -> Option<String> {
    cookie_token(req, &session.refresh_cookie)
        .or_else(|| cookie_token(req, &session.access_cookie))
}
