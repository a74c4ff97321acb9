//! Upload field checks

use serde::Serialize;

use crate::config::UploadConfig;
use crate::error::{Error, Result};

/// Accepted upload metadata returned to the client
#[derive(Debug, Serialize)]
pub struct UploadSummary {
    pub filename: String,
    pub content_type: String,
    pub size_bytes: usize,
}

/// Check the declared content type against the allow-list
pub fn check_content_type(config: &UploadConfig, content_type: &str) -> Result<()> {
    if config.allowed_types.iter().any(|t| t == content_type) {
        Ok(())
    } else {
        Err(Error::InvalidUpload(format!(
            "unsupported content type: {}",
            if content_type.is_empty() { "(none)" } else { content_type }
        )))
    }
}

/// Check the upload size against the configured cap
pub fn check_size(config: &UploadConfig, size: usize) -> Result<()> {
    if size == 0 {
        return Err(Error::InvalidUpload("empty file".to_string()));
    }
    if size > config.max_size_bytes {
        return Err(Error::InvalidUpload(format!(
            "file exceeds {} bytes",
            config.max_size_bytes
        )));
    }
    Ok(())
}
