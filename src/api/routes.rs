//! API route handlers

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use super::server::SharedState;
use crate::error::{Error, Result};
use crate::session::cookies;
use crate::upload::{self, UploadSummary};

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SetSessionRequest {
    pub refresh_token: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

// Health check

pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok("healthy"))
}

// Session routes

/// Store provider-issued tokens in httpOnly cookies
///
/// Only `refresh_token` is required; `access_token` is stored when
/// present. Validation failures surface as 400, anything unexpected as
/// 500.
pub async fn set_session(
    State(state): State<SharedState>,
    jar: CookieJar,
    Json(req): Json<SetSessionRequest>,
) -> Result<(CookieJar, Json<ApiResponse<&'static str>>)> {
    let refresh = match req.refresh_token.as_deref() {
        Some(token) if !token.is_empty() => token,
        _ => return Err(Error::MissingRequiredField("refresh_token".to_string())),
    };

    let session = &state.config.session;
    let mut jar = jar.add(cookies::session_cookie(
        &session.refresh_cookie,
        refresh,
        session,
    ));

    if let Some(access) = req.access_token.as_deref().filter(|t| !t.is_empty()) {
        jar = jar.add(cookies::session_cookie(
            &session.access_cookie,
            access,
            session,
        ));
    }

    tracing::debug!("Session cookies set");

    Ok((jar, Json(ApiResponse::ok("session set"))))
}

/// Report whether the current session cookie is valid
///
/// Fail-soft: always answers 200. A missing cookie, a failed decode or an
/// unreachable provider are all reported as `valid: false`, never as an
/// error status.
pub async fn verify_session(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Json<VerifyResponse> {
    let session = &state.config.session;
    let token = jar
        .get(&session.refresh_cookie)
        .or_else(|| jar.get(&session.access_cookie))
        .map(|c| c.value().to_string());

    let valid = match token.as_deref() {
        Some(token) => state.verifier.verify(token).await,
        None => false,
    };

    Json(VerifyResponse { valid })
}

/// Clear the session cookies
pub async fn logout(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<&'static str>>) {
    let session = &state.config.session;
    let jar = jar
        .remove(cookies::removal_cookie(&session.refresh_cookie))
        .remove(cookies::removal_cookie(&session.access_cookie));

    (jar, Json(ApiResponse::ok("logged out")))
}

// Upload routes

/// Validate a resume upload
pub async fn upload_resume(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadSummary>>> {
    let summary = upload::validate_upload(&state.config.upload, &mut multipart).await?;

    tracing::info!(
        filename = %summary.filename,
        size_bytes = summary.size_bytes,
        "Resume upload accepted"
    );

    Ok(Json(ApiResponse::ok(summary)))
}

// Fallback

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::err("Not found")))
}
