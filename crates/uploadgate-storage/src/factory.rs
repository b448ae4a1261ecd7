use crate::{S3Storage, Store, StorageResult};
use std::sync::Arc;
use uploadgate_core::Config;

/// Create the store backend from configuration
pub fn create_storage(config: &Config) -> StorageResult<Arc<dyn Store>> {
    let storage = S3Storage::new(&config.store)?;

    tracing::info!(
        bucket = %config.s3_bucket(),
        region = %config.s3_region(),
        endpoint = config.s3_endpoint().unwrap_or("aws"),
        "S3 storage initialized"
    );

    Ok(Arc::new(storage))
}
