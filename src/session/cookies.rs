//! Session cookie construction

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::config::SessionConfig;

/// Build an httpOnly session cookie
pub fn session_cookie(name: &str, value: &str, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((name.to_string(), value.to_string()))
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Lax)
        .path("/".to_string())
        .max_age(Duration::days(config.max_age_days))
        .build()
}

/// Build a removal cookie for a stale session cookie
pub fn removal_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_string(), ""))
        .http_only(true)
        .path("/".to_string())
        .max_age(Duration::ZERO)
        .build()
}
