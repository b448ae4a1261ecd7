//! OpenAPI documentation, served at `/api/openapi.json` and rendered at `/docs`.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use uploadgate_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Upload Gateway API",
        version = "0.1.0",
        description = "Issues short-lived presigned URLs for direct uploads to and downloads from an S3-compatible bucket, and accepts legacy multipart uploads through the server."
    ),
    paths(
        handlers::health::health_check,
        handlers::presigned::generate_upload_url,
        handlers::presigned::generate_download_url,
        handlers::legacy_upload::legacy_upload,
    ),
    components(
        schemas(
            models::UploadUrlRequest,
            models::UploadUrlResponse,
            models::DownloadUrlRequest,
            models::DownloadUrlResponse,
            models::LegacyUploadResponse,
            models::HealthResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness checks"),
        (name = "uploads", description = "Presigned URL and legacy upload operations")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
