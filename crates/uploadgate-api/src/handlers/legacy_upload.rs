use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::stage_multipart_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uploadgate_core::models::LegacyUploadResponse;
use uploadgate_core::AppError;

/// Upload a file through the server (legacy path)
///
/// The file is staged on local disk, written to the bucket under its original
/// filename and then removed. Prefer `/generate-upload-url` for new clients.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "uploads",
    request_body(content = String, description = "Multipart form with a single `file` field", content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = LegacyUploadResponse),
        (status = 400, description = "No file uploaded", body = ErrorResponse),
        (status = 413, description = "Upload exceeds the size limit", body = ErrorResponse),
        (status = 500, description = "Store write failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "legacy_upload"))]
pub async fn legacy_upload(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let multipart = multipart.map_err(|rejection| {
        AppError::InvalidInput(format!("Invalid multipart request: {}", rejection.body_text()))
    })?;

    let staged = stage_multipart_file(multipart, state.config.upload_temp_dir()).await?;

    tracing::info!(
        filename = %staged.original_filename(),
        content_type = %staged.content_type(),
        size_bytes = staged.size(),
        "Received legacy upload"
    );

    let video_url = state.gateway.legacy_upload(staged).await?;

    Ok(Json(LegacyUploadResponse {
        success: true,
        video_url,
        thumbnail_url: String::new(),
        duration: String::new(),
        message: "File uploaded successfully".to_string(),
    }))
}
