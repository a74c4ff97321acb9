//! Route guard middleware

use axum::extract::{Request, State};
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::api::SharedState;
use crate::guard::classifier::RouteClass;
use crate::guard::token;
use crate::session::cookies;

/// Observable guard outcome for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    /// Response proceeds unmodified
    Allow,
    /// Redirect to the login page
    Redirect,
    /// Redirect and remove the stale session cookies
    RedirectAndClear,
}

/// Decide the guard action from classification and token state
pub fn decide(class: RouteClass, token_present: bool, token_valid: bool) -> GuardAction {
    match class {
        RouteClass::Public | RouteClass::Unclassified => GuardAction::Allow,
        RouteClass::Protected => {
            if !token_present {
                GuardAction::Redirect
            } else if token_valid {
                GuardAction::Allow
            } else {
                GuardAction::RedirectAndClear
            }
        }
    }
}

/// Request-interception hook applied in front of every route
///
/// Verification only happens for protected paths, so public traffic never
/// pays the provider round-trip.
pub async fn route_guard(State(state): State<SharedState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();

    if state.classifier.is_excluded(&path) {
        return next.run(req).await;
    }

    let class = state.classifier.classify(&path);
    if class != RouteClass::Protected {
        return next.run(req).await;
    }

    let token = token::session_token(&req, &state.config.session);
    let valid = match token.as_deref() {
        Some(t) => state.verifier.verify(t).await,
        None => false,
    };

    match decide(class, token.is_some(), valid) {
        GuardAction::Allow => next.run(req).await,
        GuardAction::Redirect => {
            tracing::debug!(%path, "No session token, redirecting to login");
            login_redirect(&state.config.routes.login_path, &path).into_response()
        }
        GuardAction::RedirectAndClear => {
            tracing::debug!(%path, "Session invalid, redirecting to login and clearing cookies");
            let mut response =
                login_redirect(&state.config.routes.login_path, &path).into_response();

            let session = &state.config.session;
            for name in [&session.refresh_cookie, &session.access_cookie] {
                let removal = cookies::removal_cookie(name).to_string();
                if let Ok(value) = HeaderValue::from_str(&removal) {
                    response.headers_mut().append(SET_COOKIE, value);
                }
            }

            response
        }
    }
}

fn login_redirect(login_path: &str, from: &str) -> Redirect {
    let location = format!("{}?from={}", login_path, urlencoding::encode(from));
    Redirect::temporary(&location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_allows_without_token() {
        assert_eq!(decide(RouteClass::Public, false, false), GuardAction::Allow);
    }

    #[test]
    fn test_public_allows_with_invalid_token() {
        assert_eq!(decide(RouteClass::Public, true, false), GuardAction::Allow);
    }

    #[test]
    fn test_unclassified_allows() {
        assert_eq!(decide(RouteClass::Unclassified, false, false), GuardAction::Allow);
    }

    #[test]
    fn test_protected_without_token_redirects() {
        assert_eq!(decide(RouteClass::Protected, false, false), GuardAction::Redirect);
    }

    #[test]
    fn test_protected_with_invalid_token_redirects_and_clears() {
        assert_eq!(
            decide(RouteClass::Protected, true, false),
            GuardAction::RedirectAndClear
        );
    }

    #[test]
    fn test_protected_with_valid_token_allows() {
        assert_eq!(decide(RouteClass::Protected, true, true), GuardAction::Allow);
    }
}
