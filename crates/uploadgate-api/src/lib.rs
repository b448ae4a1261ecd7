//! Upload Gateway API Library
//!
//! This crate provides the HTTP handlers, the gateway service and application setup.

mod api_doc;
mod handlers;
mod telemetry;

pub mod error;
pub mod services;
pub mod setup;
pub mod state;
pub mod utils;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use services::gateway::UploadGateway;
pub use state::AppState;
