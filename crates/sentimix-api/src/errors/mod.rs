//! errors module
pub mod error_definition;

pub use error_definition::{ApiError, ApiErrorKind, MISSING_TEXT_MESSAGE, Result};
