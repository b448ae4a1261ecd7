//! Upload gateway service
//!
//! Issues presigned URLs against the configured bucket and runs the legacy
//! buffered upload. Holds no per-request state; one instance is shared by all
//! handlers through `AppState`.

use std::sync::Arc;

use uploadgate_core::constants::PRESIGNED_URL_EXPIRY;
use uploadgate_core::models::{DownloadRequest, SignedDownload, SignedUpload, UploadRequest};
use uploadgate_core::{public_url, AppError};
use uploadgate_storage::Store;

use crate::utils::upload::StagedFile;

#[derive(Clone)]
pub struct UploadGateway {
    store: Arc<dyn Store>,
    public_base_url: String,
}

impl UploadGateway {
    pub fn new(store: Arc<dyn Store>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            public_base_url: public_base_url.into(),
        }
    }

    /// Permanent URL of `key` once the object exists.
    pub fn public_url_for(&self, key: &str) -> String {
        public_url(&self.public_base_url, key)
    }

    /// Sign a PUT for `request.filename`, valid for one hour.
    pub async fn generate_upload_url(
        &self,
        request: &UploadRequest,
    ) -> Result<SignedUpload, AppError> {
        let presigned_url = self
            .store
            .presigned_put_url(
                &request.filename,
                &request.content_type,
                PRESIGNED_URL_EXPIRY,
            )
            .await?;

        let public_url = self.public_url_for(&request.filename);

        tracing::info!(
            bucket = %self.store.bucket(),
            filename = %request.filename,
            content_type = %request.content_type,
            public_url = %public_url,
            "Generated presigned upload URL"
        );

        Ok(SignedUpload {
            presigned_url,
            public_url,
            filename: request.filename.clone(),
        })
    }

    /// Sign a GET for `request.filename`, valid for one hour.
    pub async fn generate_download_url(
        &self,
        request: &DownloadRequest,
    ) -> Result<SignedDownload, AppError> {
        let presigned_url = self
            .store
            .presigned_get_url(&request.filename, PRESIGNED_URL_EXPIRY)
            .await?;

        tracing::info!(
            bucket = %self.store.bucket(),
            filename = %request.filename,
            "Generated presigned download URL"
        );

        Ok(SignedDownload {
            presigned_url,
            filename: request.filename.clone(),
        })
    }

    /// Write a staged upload to the store under its original filename and return
    /// the public URL. The staged file is deleted whether or not the write succeeds.
    pub async fn legacy_upload(&self, staged: StagedFile) -> Result<String, AppError> {
        let key = staged.original_filename().to_string();

        let outcome = self.transfer_staged(&staged).await;
        staged.discard();
        outcome?;

        let public_url = self.public_url_for(&key);

        tracing::info!(
            bucket = %self.store.bucket(),
            filename = %key,
            public_url = %public_url,
            "Legacy upload stored"
        );

        Ok(public_url)
    }

    async fn transfer_staged(&self, staged: &StagedFile) -> Result<(), AppError> {
        if !tokio::fs::try_exists(staged.path()).await? {
            return Err(AppError::Io(format!(
                "staged upload {} not found",
                staged.path().display()
            )));
        }

        let data = tokio::fs::read(staged.path()).await?;

        self.store
            .put(staged.original_filename(), staged.content_type(), data)
            .await?;

        Ok(())
    }
}
