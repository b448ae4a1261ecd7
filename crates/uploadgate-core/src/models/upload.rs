use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::constants::DEFAULT_CONTENT_TYPE;
use crate::error::AppError;

/// Body of `POST /generate-upload-url`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlRequest {
    /// Object key the client will upload to.
    #[validate(
        required(message = "filename is required"),
        length(min = 1, message = "filename is required")
    )]
    pub filename: Option<String>,
    /// MIME type of the upload. Defaults to `application/octet-stream`.
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Body of `POST /generate-download-url`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct DownloadUrlRequest {
    #[validate(
        required(message = "filename is required"),
        length(min = 1, message = "filename is required")
    )]
    pub filename: Option<String>,
}

/// Validated upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub filename: String,
    pub content_type: String,
}

/// Validated download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub filename: String,
}

impl TryFrom<UploadUrlRequest> for UploadRequest {
    type Error = AppError;

    fn try_from(body: UploadUrlRequest) -> Result<Self, Self::Error> {
        body.validate()?;
        let filename = body
            .filename
            .ok_or_else(|| AppError::InvalidInput("filename is required".to_string()))?;
        let content_type = body
            .content_type
            .filter(|ct| !ct.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
        Ok(UploadRequest {
            filename,
            content_type,
        })
    }
}

impl TryFrom<DownloadUrlRequest> for DownloadRequest {
    type Error = AppError;

    fn try_from(body: DownloadUrlRequest) -> Result<Self, Self::Error> {
        body.validate()?;
        let filename = body
            .filename
            .ok_or_else(|| AppError::InvalidInput("filename is required".to_string()))?;
        Ok(DownloadRequest { filename })
    }
}

/// A signed PUT plus the URL the object will be served from once uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUpload {
    pub presigned_url: String,
    pub public_url: String,
    pub filename: String,
}

/// A signed GET for an existing object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedDownload {
    pub presigned_url: String,
    pub filename: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub success: bool,
    pub presigned_url: String,
    pub public_url: String,
    pub filename: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadUrlResponse {
    pub success: bool,
    pub presigned_url: String,
    pub filename: String,
    pub message: String,
}

/// Response of the legacy `POST /upload`. Field names are kept for existing clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LegacyUploadResponse {
    pub success: bool,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
