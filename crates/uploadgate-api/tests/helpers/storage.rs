use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use uploadgate_storage::{StorageError, StorageResult, Store};

/// Object written through `Store::put`.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub content_type: String,
    pub data: Vec<u8>,
}

/// In-memory store. Every signed URL carries a fresh nonce so concurrent signing
/// for the same key yields distinct URLs, as real SigV4 timestamps do.
#[derive(Default)]
pub struct MockStore {
    pub fail_sign: bool,
    pub fail_put: bool,
    nonce: AtomicU64,
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl MockStore {
    pub fn failing_sign() -> Self {
        Self {
            fail_sign: true,
            ..Default::default()
        }
    }

    pub fn failing_put() -> Self {
        Self {
            fail_put: true,
            ..Default::default()
        }
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    fn signed(&self, method: &str, key: &str, expires_in: Duration) -> StorageResult<String> {
        if self.fail_sign {
            return Err(StorageError::SigningFailed(
                "missing credentials".to_string(),
            ));
        }
        let nonce = self.nonce.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "https://test-bucket.s3.test/{}?X-Amz-Method={}&X-Amz-Expires={}&X-Amz-Signature={:016x}",
            key,
            method,
            expires_in.as_secs(),
            nonce
        ))
    }
}

#[async_trait]
impl Store for MockStore {
    async fn presigned_put_url(
        &self,
        key: &str,
        _content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        self.signed("PUT", key, expires_in)
    }

    async fn presigned_get_url(&self, key: &str, expires_in: Duration) -> StorageResult<String> {
        self.signed("GET", key, expires_in)
    }

    async fn put(&self, key: &str, content_type: &str, data: Vec<u8>) -> StorageResult<()> {
        if self.fail_put {
            return Err(StorageError::UploadFailed("AccessDenied".to_string()));
        }
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                content_type: content_type.to_string(),
                data,
            },
        );
        Ok(())
    }

    fn bucket(&self) -> &str {
        "test-bucket"
    }
}
