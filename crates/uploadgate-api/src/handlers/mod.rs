pub mod health;
pub mod index;
pub mod legacy_upload;
pub mod presigned;
