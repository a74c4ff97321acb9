//! Resume upload validation
//!
//! Validates the multipart upload only; storage and analysis of accepted
//! resumes live in the analysis service.

mod validation;

pub use validation::{check_content_type, check_size, UploadSummary};

use axum::extract::Multipart;

use crate::config::UploadConfig;
use crate::error::{Error, Result};

/// Validate a multipart resume upload
///
/// Requires a `file` field whose content type is on the allow-list and
/// whose size is under the configured cap. The type check runs before the
/// body is read, so oversized uploads of the wrong type are rejected
/// cheaply.
pub async fn validate_upload(
    config: &UploadConfig,
    multipart: &mut Multipart,
) -> Result<UploadSummary> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidUpload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        check_content_type(config, &content_type)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::InvalidUpload(e.to_string()))?;
        check_size(config, data.len())?;

        return Ok(UploadSummary {
            filename,
            content_type,
            size_bytes: data.len(),
        });
    }

    Err(Error::InvalidUpload("missing file field".to_string()))
}
