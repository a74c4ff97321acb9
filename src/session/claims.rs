//! Optimistic expiry check for session tokens
//!
//! Decodes a JWT payload WITHOUT verifying its signature and compares the
//! claimed `exp` against the current time. This does not authenticate the
//! token; a forged-but-unexpired token passes. Callers that need real
//! authentication must use the remote verification strategy.

use crate::error::{Error, Result};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims of interest in a session token payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject (user ID)
    #[serde(default)]
    pub sub: Option<String>,
    /// Issued at
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiration time (Unix seconds)
    #[serde(default)]
    pub exp: Option<i64>,
}

impl SessionClaims {
    /// Check the claimed expiry against the current time
    ///
    /// A missing `exp` claim counts as expired.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => chrono::Utc::now().timestamp() >= exp,
            None => true,
        }
    }
}

/// Decode a token's payload without verifying its signature
pub fn decode_unverified(token: &str) -> Result<SessionClaims> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<SessionClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| Error::TokenDecode(e.to_string()))
}

/// Expiry-only validity check
///
/// Decode failure, a missing `exp` claim, or a past expiry all count as
/// invalid.
pub fn check_expiry(token: &str) -> bool {
    match decode_unverified(token) {
        Ok(claims) => !claims.is_expired(),
        Err(e) => {
            tracing::debug!(error = %e, "Token decode failed");
            false
        }
    }
}
