use crate::traits::{Store, StorageError, StorageResult};
use async_trait::async_trait;
use bytes::Bytes;
use http::Method;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::signer::Signer;
use object_store::{
    Attribute, AttributeValue, Attributes, ObjectStore, PutOptions, PutPayload,
    Result as ObjectResult,
};
use std::time::Duration;
use uploadgate_core::StoreConfig;

/// S3 storage implementation
#[derive(Clone, Debug)]
pub struct S3Storage {
    store: AmazonS3,
    bucket: String,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// Settings not present in `config` (session tokens, container credentials, ...)
    /// are picked up from the standard AWS environment variables. A custom endpoint
    /// switches to path-style requests, e.g. "http://localhost:9000" for MinIO or
    /// "https://<account>.r2.cloudflarestorage.com" for R2.
    pub fn new(config: &StoreConfig) -> StorageResult<Self> {
        let mut builder = AmazonS3Builder::from_env()
            .with_region(config.region.clone())
            .with_bucket_name(config.bucket.clone());

        if let Some(ref endpoint) = config.endpoint {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_virtual_hosted_style_request(false)
                .with_allow_http(allow_http);
        }

        if let (Some(key_id), Some(secret)) = (&config.access_key_id, &config.secret_access_key) {
            builder = builder
                .with_access_key_id(key_id.clone())
                .with_secret_access_key(secret.clone());
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(S3Storage {
            store,
            bucket: config.bucket.clone(),
        })
    }

    /// The object key exactly as given. Keys object_store cannot represent verbatim
    /// (leading, trailing or doubled `/`, `.`/`..` segments, control characters)
    /// are rejected instead of rewritten.
    fn location(key: &str) -> StorageResult<Path> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey("key must not be empty".to_string()));
        }
        let location = Path::parse(key)
            .map_err(|e| StorageError::InvalidKey(format!("unsupported key '{}': {}", key, e)))?;
        // parse() strips a single leading or trailing delimiter
        if AsRef::<str>::as_ref(&location) != key {
            return Err(StorageError::InvalidKey(format!(
                "unsupported key '{}': leading or trailing '/'",
                key
            )));
        }
        Ok(location)
    }

    async fn sign(&self, method: Method, key: &str, expires_in: Duration) -> StorageResult<String> {
        let location = Self::location(key)?;
        let url_result: ObjectResult<_> = self
            .store
            .signed_url(method.clone(), &location, expires_in)
            .await;

        let url = url_result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                method = %method,
                "S3 presign failed"
            );
            StorageError::SigningFailed(e.to_string())
        })?;

        tracing::debug!(
            bucket = %self.bucket,
            key = %key,
            method = %method,
            expires_in_seconds = expires_in.as_secs(),
            "Generated presigned URL"
        );

        Ok(url.to_string())
    }
}

#[async_trait]
impl Store for S3Storage {
    #[tracing::instrument(skip(self), fields(s3.bucket = %self.bucket, s3.key = %key))]
    async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        // SigV4 query signing here covers method, host and path only; the client
        // sends the Content-Type header with its PUT.
        self.sign(Method::PUT, key, expires_in).await
    }

    #[tracing::instrument(skip(self), fields(s3.bucket = %self.bucket, s3.key = %key))]
    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
        self.sign(Method::GET, key, expires_in).await
    }

    async fn put(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<()> {
        let location = Self::location(key)?;
        let size = data.len() as u64;
        let payload = PutPayload::from(Bytes::from(data));

        let mut attributes = Attributes::new();
        attributes.insert(
            Attribute::ContentType,
            AttributeValue::from(content_type.to_string()),
        );
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        let start = std::time::Instant::now();

        let result: ObjectResult<_> = self.store.put_opts(&location, payload, opts).await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            content_type = %content_type,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(())
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
