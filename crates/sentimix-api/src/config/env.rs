//! Config loading from environment variables

use std::time::Duration;

use sentimix::config::{ClassifierConfig, SentimixConfig};

use super::constants::{
  BIND_HOST, DEFAULT_PORT, ENV_API_KEY, ENV_LLM_BASE_URL, ENV_LLM_MODEL, ENV_LLM_TIMEOUT_SECS,
  ENV_PORT,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:5001")
  pub bind_addr: String,
  /// Analysis library configuration (remote classifier settings)
  pub sentimix: SentimixConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// A missing API key is not an error; the classifier then starts disabled.
  ///
  /// # Errors
  /// - `PORT` is not a valid port number
  /// - `SENTIMIX_LLM_TIMEOUT_SECS` is not a positive integer
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let port = match lookup(ENV_PORT) {
      Some(raw) => raw
        .trim()
        .parse::<u16>()
        .map_err(|e| ApiError::config(format!("{ENV_PORT} is not a valid port ({raw:?}): {e}")))?,
      None => DEFAULT_PORT,
    };

    let mut classifier = ClassifierConfig { api_key: lookup(ENV_API_KEY), ..Default::default() };

    if let Some(model) = lookup(ENV_LLM_MODEL).filter(|v| !v.trim().is_empty()) {
      classifier.model = model.trim().to_string();
    }

    if let Some(base_url) = lookup(ENV_LLM_BASE_URL).filter(|v| !v.trim().is_empty()) {
      classifier.base_url = base_url.trim().to_string();
    }

    if let Some(raw) = lookup(ENV_LLM_TIMEOUT_SECS) {
      let secs = raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0).ok_or_else(|| {
        ApiError::config(format!("{ENV_LLM_TIMEOUT_SECS} must be a positive integer: {raw:?}"))
      })?;
      classifier.timeout = Duration::from_secs(secs);
    }

    Ok(Self {
      bind_addr: format!("{BIND_HOST}:{port}"),
      sentimix: SentimixConfig { classifier },
    })
  }

  /// Whether an API key was supplied
  pub fn has_api_key(&self) -> bool {
    self.sentimix.classifier.usable_api_key().is_some()
  }
}
