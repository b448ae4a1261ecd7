//! Shared constants

use std::time::Duration;

/// Lifetime of every presigned URL issued by the gateway.
pub const PRESIGNED_URL_EXPIRY: Duration = Duration::from_secs(3600);

/// Content type recorded when the caller does not provide one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Public base URL used when `PUBLIC_BASE_URL` is not configured.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://cdn.example.com";

/// Multipart field carrying the file on the legacy upload path.
pub const UPLOAD_FIELD_NAME: &str = "file";
