//! Custom Axum extractors.

pub mod body;
pub mod upload;

pub use body::JsonOrForm;
pub use upload::{PhotoUpload, UploadForm};
