//! Upload Gateway Storage Library
//!
//! This crate provides the `Store` abstraction the gateway signs and writes through,
//! and its S3 implementation on top of `object_store`.
//!
//! Object keys are used exactly as the caller supplied them: the gateway does not
//! prefix, rename or namespace keys.

pub mod factory;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use s3::S3Storage;
pub use traits::{Store, StorageError, StorageResult};
