// crates/sentimix/src/config.rs

use std::fmt;
use std::time::Duration;

use crate::errors::ConfigError;

/// Default base URL of the chat-completion API (OpenAI compatible).
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model used for classification.
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature. Kept low so the label is as stable as the provider allows.
pub const DEFAULT_LLM_TEMPERATURE: f64 = 0.1;

/// Output token cap. Both labels fit comfortably; anything longer is cut.
pub const DEFAULT_LLM_MAX_TOKENS: u32 = 10;

/// Upper bound on a single classification call.
pub const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(5);

/// Accepted temperature range of chat-completion providers.
const TEMPERATURE_RANGE: (f64, f64) = (0.0, 2.0);

/// Top-level configuration for sentimix.
#[derive(Debug, Clone, Default)]
pub struct SentimixConfig {
  /// Remote classifier section
  pub classifier: ClassifierConfig,
}

/// Remote classifier configuration.
///
/// `api_key == None` is a valid configuration: the classifier starts disabled.
#[derive(Clone)]
pub struct ClassifierConfig {
  /// Bearer credential for the chat-completion API
  pub api_key: Option<String>,
  /// API base URL, without the `/chat/completions` suffix
  pub base_url: String,
  /// Model name sent with every request
  pub model: String,
  /// Sampling temperature
  pub temperature: f64,
  /// Maximum number of output tokens
  pub max_tokens: u32,
  /// Per-call timeout (connect + response)
  pub timeout: Duration,
}

impl Default for ClassifierConfig {
  fn default() -> Self {
    Self {
      api_key: None,
      base_url: DEFAULT_LLM_BASE_URL.to_string(),
      model: DEFAULT_LLM_MODEL.to_string(),
      temperature: DEFAULT_LLM_TEMPERATURE,
      max_tokens: DEFAULT_LLM_MAX_TOKENS,
      timeout: DEFAULT_LLM_TIMEOUT,
    }
  }
}

// The key must never end up in logs.
impl fmt::Debug for ClassifierConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClassifierConfig")
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .field("base_url", &self.base_url)
      .field("model", &self.model)
      .field("temperature", &self.temperature)
      .field("max_tokens", &self.max_tokens)
      .field("timeout", &self.timeout)
      .finish()
  }
}

impl ClassifierConfig {
  /// Returns the API key if one is configured and not blank.
  pub fn usable_api_key(&self) -> Option<&str> {
    self.api_key.as_deref().map(str::trim).filter(|key| !key.is_empty())
  }

  /// Full URL of the chat-completion endpoint.
  pub fn completions_url(&self) -> String {
    format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
  }
}

// ===== Validation =====

impl SentimixConfig {
  /// Validates the configuration.
  ///
  /// A missing API key is not an error.
  ///
  /// # Errors
  /// - temperature outside `[0.0, 2.0]`
  /// - `max_tokens == 0`
  /// - zero timeout
  /// - base URL without an http(s) scheme
  pub fn validate(&self) -> Result<(), ConfigError> {
    let classifier = &self.classifier;

    let (min, max) = TEMPERATURE_RANGE;
    if !(min..=max).contains(&classifier.temperature) {
      return Err(ConfigError::InvalidTemperature { min, max, actual: classifier.temperature });
    }

    if classifier.max_tokens == 0 {
      return Err(ConfigError::InvalidMaxTokens { actual: classifier.max_tokens });
    }

    if classifier.timeout.is_zero() {
      return Err(ConfigError::ZeroTimeout);
    }

    let base_url = classifier.base_url.as_str();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
      return Err(ConfigError::InvalidBaseUrl { base_url: base_url.to_string() });
    }

    Ok(())
  }
}
