//! Error types for Edgeguard

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found. Run 'edgeguard init' first.")]
    ConfigNotFound,

    #[error("No session token found")]
    MissingToken,

    #[error("Token decode failed: {0}")]
    TokenDecode(String),

    #[error("Remote verification failed: {0}")]
    RemoteVerification(String),

    #[error("Missing required token: {0}")]
    MissingRequiredField(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            err @ Error::MissingRequiredField(_) => (StatusCode::BAD_REQUEST, err.to_string()),
            err @ Error::InvalidUpload(_) => {
                tracing::debug!(error = %err, "Upload rejected");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            err @ (Error::MissingToken
            | Error::TokenDecode(_)
            | Error::RemoteVerification(_)) => {
                tracing::debug!(error = %err, "Session rejected");
                (StatusCode::UNAUTHORIZED, "Unauthorized".to_string())
            }
            other => {
                let correlation_id = uuid::Uuid::new_v4();
                tracing::error!(%correlation_id, error = %other, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
