//! Session verification strategies

use std::time::Duration;

use crate::config::{ProviderConfig, VerifyStrategy};
use crate::error::{Error, Result};
use crate::session::claims;

/// Verifies session tokens against the identity provider or by a local
/// expiry check, depending on configuration
#[derive(Debug, Clone)]
pub struct SessionVerifier {
    strategy: VerifyStrategy,
    validate_url: String,
    client: reqwest::Client,
}

impl SessionVerifier {
    pub fn from_config(provider: &ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(provider.timeout_secs))
            .build()?;

        Ok(Self {
            strategy: provider.strategy,
            validate_url: provider.validate_url.clone(),
            client,
        })
    }

    /// Verify a session token
    ///
    /// Never errors: network failures, timeouts and malformed tokens all
    /// normalize to `false`, so an indeterminate session fails closed.
    pub async fn verify(&self, token: &str) -> bool {
        match self.strategy {
            VerifyStrategy::Local => claims::check_expiry(token),
            VerifyStrategy::Remote => match self.verify_remote(token).await {
                Ok(valid) => valid,
                Err(e) => {
                    tracing::warn!(error = %e, "Session validation call failed");
                    false
                }
            },
        }
    }

    async fn verify_remote(&self, token: &str) -> Result<bool> {
        let response = self
            .client
            .get(&self.validate_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| Error::RemoteVerification(e.to_string()))?;

        Ok(response.status().is_success())
    }
}
