//! Route guard integration tests
//!
//! Exercises the guard middleware in-process via `tower::ServiceExt`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use edgeguard::api::AppState;
use edgeguard::config::{Config, VerifyStrategy};
use edgeguard::session::SessionClaims;
use jsonwebtoken::{encode, EncodingKey, Header};
use tower::ServiceExt;

/// Router backed by the local (expiry-only) verification strategy
fn test_app() -> Router {
    let mut config = Config::default();
    config.provider.strategy = VerifyStrategy::Local;
    config.session.secure = false;

    let state = AppState::from_config(config).expect("Failed to build state");
    edgeguard::api::create_router(state)
}

fn token_with_exp(exp: i64) -> String {
    let claims = SessionClaims {
        sub: Some("user-1".to_string()),
        iat: Some(chrono::Utc::now().timestamp()),
        exp: Some(exp),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("Failed to encode token")
}

fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_public_path_allowed_without_cookie() {
    let response = test_app()
        .oneshot(get("/auth/login", None))
        .await
        .unwrap();

    // Passed through to the router (fallback 404), not redirected
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_path_allowed_with_garbage_cookie() {
    let response = test_app()
        .oneshot(get("/pricing", Some("refresh_token=garbage")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unclassified_path_passes_through() {
    let response = test_app().oneshot(get("/blog/post", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_protected_path_without_cookie_redirects() {
    let response = test_app().oneshot(get("/dashboard", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response.headers().get("location").unwrap().to_str().unwrap();
    assert_eq!(location, "/auth/login?from=%2Fdashboard");
}

#[tokio::test]
async fn test_redirect_preserves_nested_path() {
    let response = test_app().oneshot(get("/resumes/42", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response.headers().get("location").unwrap().to_str().unwrap();
    assert_eq!(location, "/auth/login?from=%2Fresumes%2F42");
}

#[tokio::test]
async fn test_protected_path_with_expired_token_redirects_and_clears() {
    let expired = token_with_exp(chrono::Utc::now().timestamp() - 3600);
    let cookie = format!("refresh_token={}", expired);

    let response = test_app()
        .oneshot(get("/resumes", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let set_cookies: Vec<String> = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();

    assert!(set_cookies
        .iter()
        .any(|c| c.starts_with("refresh_token=") && c.contains("Max-Age=0")));
    assert!(set_cookies
        .iter()
        .any(|c| c.starts_with("access_token=") && c.contains("Max-Age=0")));
}

#[tokio::test]
async fn test_protected_path_with_valid_token_allowed() {
    let valid = token_with_exp(chrono::Utc::now().timestamp() + 3600);
    let cookie = format!("refresh_token={}", valid);

    let response = test_app()
        .oneshot(get("/dashboard", Some(&cookie)))
        .await
        .unwrap();

    // Guard lets it through; no route is registered so the fallback answers
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn test_protected_path_with_undecodable_token_redirects() {
    let response = test_app()
        .oneshot(get("/dashboard", Some("refresh_token=not-a-jwt")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_excluded_path_skips_guard() {
    // /api/ is excluded; health responds even with a garbage cookie
    let response = test_app()
        .oneshot(get("/api/health", Some("refresh_token=garbage")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_access_cookie_accepted_as_fallback() {
    let valid = token_with_exp(chrono::Utc::now().timestamp() + 3600);
    let cookie = format!("access_token={}", valid);

    let response = test_app()
        .oneshot(get("/settings", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
