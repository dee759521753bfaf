//! Chat-completion HTTP client (OpenAI compatible wire format)

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SYSTEM_PROMPT;
use crate::config::ClassifierConfig;
use crate::errors::ClassifierError;

/// Longest response body kept in [`ClassifierError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Enabled classifier handle.
///
/// One request per call, no retry. The timeout configured on the inner
/// `reqwest::Client` bounds every call.
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
  http: reqwest::Client,
  url: String,
  model: String,
  temperature: f64,
  max_tokens: u32,
}

impl ChatCompletionClient {
  /// Builds the HTTP client.
  ///
  /// # Errors
  /// - `InvalidApiKey`: the key is not a valid header value
  /// - `ClientBuild`: the TLS backend cannot be initialized
  pub fn new(config: &ClassifierConfig, api_key: &str) -> Result<Self, ClassifierError> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
      .map_err(|_| ClassifierError::InvalidApiKey)?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, auth);

    let http = reqwest::Client::builder()
      .default_headers(headers)
      .timeout(config.timeout)
      .build()
      .map_err(|e| ClassifierError::ClientBuild(Arc::new(e)))?;

    Ok(Self {
      http,
      url: config.completions_url(),
      model: config.model.clone(),
      temperature: config.temperature,
      max_tokens: config.max_tokens,
    })
  }

  /// Sends `text` for classification and returns the model's reply verbatim.
  ///
  /// # Errors
  /// - `Request`: connection failure or timeout
  /// - `Status`: non-2xx response
  /// - `MalformedResponse`: body is not a chat-completion object
  /// - `EmptyCompletion`: no choice, or empty content
  pub async fn complete(&self, text: &str) -> Result<String, ClassifierError> {
    let body = ChatRequest {
      model: &self.model,
      messages: [
        ChatMessage { role: "system", content: SYSTEM_PROMPT },
        ChatMessage { role: "user", content: text },
      ],
      temperature: self.temperature,
      max_tokens: self.max_tokens,
    };

    let response = self
      .http
      .post(&self.url)
      .json(&body)
      .send()
      .await
      .map_err(|e| ClassifierError::Request(Arc::new(e)))?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(ClassifierError::Status {
        status: status.as_u16(),
        body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
      });
    }

    let completion: ChatResponse =
      response.json().await.map_err(|e| ClassifierError::MalformedResponse(Arc::new(e)))?;

    let content = completion
      .choices
      .into_iter()
      .next()
      .and_then(|choice| choice.message.content)
      .filter(|content| !content.trim().is_empty())
      .ok_or(ClassifierError::EmptyCompletion)?;

    debug!(model = %self.model, reply_len = content.len(), "Chat completion received");

    Ok(content)
  }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
  model: &'a str,
  messages: [ChatMessage<'a>; 2],
  temperature: f64,
  max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
  role: &'static str,
  content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
  #[serde(default)]
  choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
  #[serde(default)]
  content: Option<String>,
}
