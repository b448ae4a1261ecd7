use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use uploadgate_core::models::{
    DownloadRequest, DownloadUrlRequest, DownloadUrlResponse, UploadRequest, UploadUrlRequest,
    UploadUrlResponse,
};

/// Generate a presigned URL for a direct PUT to the bucket
#[utoipa::path(
    post,
    path = "/generate-upload-url",
    tag = "uploads",
    request_body = UploadUrlRequest,
    responses(
        (status = 200, description = "Presigned upload URL generated", body = UploadUrlResponse),
        (status = 400, description = "Missing filename or malformed body", body = ErrorResponse),
        (status = 500, description = "Signing failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, body),
    fields(
        filename = ?body.filename,
        content_type = ?body.content_type,
        operation = "generate_upload_url"
    )
)]
pub async fn generate_upload_url(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<UploadUrlRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let request = UploadRequest::try_from(body)?;

    let signed = state.gateway.generate_upload_url(&request).await?;

    Ok(Json(UploadUrlResponse {
        success: true,
        presigned_url: signed.presigned_url,
        public_url: signed.public_url,
        filename: signed.filename,
        message: "Upload URL generated successfully".to_string(),
    }))
}

/// Generate a presigned URL for a direct GET from the bucket
#[utoipa::path(
    post,
    path = "/generate-download-url",
    tag = "uploads",
    request_body = DownloadUrlRequest,
    responses(
        (status = 200, description = "Presigned download URL generated", body = DownloadUrlResponse),
        (status = 400, description = "Missing filename or malformed body", body = ErrorResponse),
        (status = 500, description = "Signing failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, body),
    fields(filename = ?body.filename, operation = "generate_download_url")
)]
pub async fn generate_download_url(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<DownloadUrlRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let request = DownloadRequest::try_from(body)?;

    let signed = state.gateway.generate_download_url(&request).await?;

    Ok(Json(DownloadUrlResponse {
        success: true,
        presigned_url: signed.presigned_url,
        filename: signed.filename,
        message: "Download URL generated successfully".to_string(),
    }))
}
