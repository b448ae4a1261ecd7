//! Multipart staging for the legacy upload path
//!
//! The uploaded file is streamed to a temporary file before the gateway reads it
//! back. The file is owned by a [`StagedFile`], which removes it when dropped, so
//! every exit path (early return, `?`, panic) releases the disk space.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use std::io;
use std::path::Path;
use tempfile::TempPath;
use tokio::io::AsyncWriteExt;
use uploadgate_core::constants::{DEFAULT_CONTENT_TYPE, UPLOAD_FIELD_NAME};
use uploadgate_core::AppError;

const TEMP_FILE_PREFIX: &str = "uploadgate-";

/// An uploaded payload staged on local disk, exclusively owned by one request.
#[derive(Debug)]
pub struct StagedFile {
    path: TempPath,
    original_filename: String,
    content_type: String,
    size: u64,
}

impl StagedFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original_filename(&self) -> &str {
        &self.original_filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Delete the staged file now and report failures to the log.
    ///
    /// Never returns an error: a failed delete must not replace the outcome of the
    /// request that owned the file.
    pub fn discard(self) {
        let path = self.path.to_path_buf();
        match self.path.close() {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Staged upload removed");
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Staged upload already gone");
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    "Failed to remove staged upload"
                );
            }
        }
    }

    #[cfg(test)]
    pub(crate) async fn from_bytes(
        temp_dir: Option<&Path>,
        original_filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> io::Result<Self> {
        let (file, path) = new_temp_file(temp_dir)?.into_parts();
        let mut file = tokio::fs::File::from_std(file);
        file.write_all(data).await?;
        file.flush().await?;
        Ok(StagedFile {
            path,
            original_filename: original_filename.to_string(),
            content_type: content_type.to_string(),
            size: data.len() as u64,
        })
    }
}

fn new_temp_file(temp_dir: Option<&Path>) -> io::Result<tempfile::NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(TEMP_FILE_PREFIX);
    match temp_dir {
        Some(dir) => builder.tempfile_in(dir),
        None => builder.tempfile(),
    }
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
    }
}

/// Stream the single field named "file" into a temporary file.
/// Other fields are ignored; a second "file" field is rejected.
pub async fn stage_multipart_file(
    mut multipart: Multipart,
    temp_dir: Option<&Path>,
) -> Result<StagedFile, AppError> {
    let mut staged: Option<StagedFile> = None;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        if staged.is_some() {
            return Err(AppError::InvalidInput(
                "Multiple file fields are not allowed; send exactly one field named 'file'"
                    .to_string(),
            ));
        }

        let original_filename = field
            .file_name()
            .filter(|name| !name.is_empty())
            .unwrap_or("unknown")
            .to_string();
        let content_type = field
            .content_type()
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();

        let (file, path) = new_temp_file(temp_dir)?.into_parts();
        let mut file = tokio::fs::File::from_std(file);
        let mut size: u64 = 0;

        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            size += chunk.len() as u64;
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        tracing::debug!(
            filename = %original_filename,
            content_type = %content_type,
            size_bytes = size,
            path = %path.display(),
            "Staged multipart upload"
        );

        staged = Some(StagedFile {
            path,
            original_filename,
            content_type,
            size,
        });
    }

    staged.ok_or_else(|| AppError::InvalidInput("No file uploaded".to_string()))
}
