//! Cart Templates

pub mod errors;
pub mod service;

pub use errors::TemplatesServiceError;
pub use service::*;
