//! Storage abstraction trait
//!
//! This module defines the `Store` trait the gateway depends on. Only three
//! capabilities are needed: sign a PUT, sign a GET, and write a whole object.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use uploadgate_core::AppError;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::UploadFailed(msg) => AppError::Storage(msg),
            StorageError::SigningFailed(msg) => AppError::Storage(msg),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Object store capability used by the gateway.
///
/// Implementations must be cheap to share across requests (`Arc<dyn Store>`).
#[async_trait]
pub trait Store: Send + Sync {
    /// Generate a presigned PUT URL for `key`.
    ///
    /// The URL authorizes one upload to exactly this key and expires after `expires_in`.
    async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Generate a presigned GET URL for `key`.
    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> StorageResult<String>;

    /// Write the full payload to `key` in a single request.
    async fn put(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Bucket the store writes to.
    fn bucket(&self) -> &str;
}
