//! Request and response models for the HTTP surface.

pub mod upload;

pub use upload::{
    DownloadRequest, DownloadUrlRequest, DownloadUrlResponse, HealthResponse,
    LegacyUploadResponse, SignedDownload, SignedUpload, UploadRequest, UploadUrlRequest,
    UploadUrlResponse,
};
