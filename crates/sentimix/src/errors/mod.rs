//! errors module
pub mod error_definition;

/// Re-export major error types
pub use error_definition::{ClassifierError, ConfigError, SentimixError, SentimixResult};
