//! Upload Gateway Core Library
//!
//! This crate provides the configuration, error types, request/response models and
//! public URL rules shared by the storage and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod public_url;

// Re-export commonly used types
pub use config::{BaseConfig, Config, StoreConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use public_url::{decode_key, encode_key, public_url};
