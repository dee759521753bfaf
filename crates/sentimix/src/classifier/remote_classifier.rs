//! Remote LLM classifier
//!
//! Two states, fixed at construction:
//! - `Disabled`: no key (or the client could not be built). No network call is
//!   ever made; every call reports `Unavailable`.
//! - `Enabled`: one chat-completion request per call. A failed call reports
//!   `Failed` and does not affect later calls.

use tracing::{debug, warn};

use super::chat_completion::ChatCompletionClient;
use crate::config::ClassifierConfig;
use crate::models::{Classification, DisabledReason};

/// Binary sentiment classifier backed by a hosted LLM.
#[derive(Debug, Clone)]
pub enum RemoteClassifier {
  /// Never calls out
  Disabled(DisabledReason),
  /// Calls the configured chat-completion endpoint
  Enabled(ChatCompletionClient),
}

impl RemoteClassifier {
  /// Builds the classifier. Never fails: problems leave it disabled.
  pub fn from_config(config: &ClassifierConfig) -> Self {
    let Some(api_key) = config.usable_api_key() else {
      warn!("API キーが設定されていないため LLM 分類を無効化します");
      return Self::Disabled(DisabledReason::MissingApiKey);
    };

    match ChatCompletionClient::new(config, api_key) {
      Ok(client) => {
        debug!(model = %config.model, base_url = %config.base_url, "LLM 分類クライアントを初期化しました");
        Self::Enabled(client)
      }
      Err(err) => {
        warn!(error = %err, "LLM 分類クライアントの初期化に失敗したため無効化します");
        Self::Disabled(DisabledReason::ClientBuild(err.to_string()))
      }
    }
  }

  /// Whether calls can reach the remote API.
  pub fn is_enabled(&self) -> bool {
    matches!(self, Self::Enabled(_))
  }

  /// Classifies `text`. Never returns an error; failures are folded into
  /// [`Classification`].
  pub async fn classify(&self, text: &str) -> Classification {
    let client = match self {
      Self::Disabled(reason) => return Classification::Unavailable(reason.clone()),
      Self::Enabled(client) => client,
    };

    match client.complete(text).await {
      Ok(label) => {
        let classification = Classification::Label(label);
        if !classification.is_expected_label() {
          warn!(label = %classification.as_display(), "LLM が想定外のラベルを返しました");
        }
        classification
      }
      Err(err) => {
        warn!(error = %err, timeout = err.is_timeout(), "LLM 分類に失敗しました");
        Classification::Failed(err)
      }
    }
  }
}
