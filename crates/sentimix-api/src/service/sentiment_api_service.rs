//! Sentiment Scoring Service

use std::sync::Arc;

use async_trait::async_trait;
use sentimix::models::AggregatedResult;
use sentimix::service::SentimixService;
use tracing::{error, info};

use crate::config::Config;
use crate::errors::{ApiError, Result};
use crate::models::{ScoreRequest, ScoreResponse};

/// Common interface for the sentiment scoring service
///
/// This trait allows swapping production implementation (`SentimentApiServiceFull`) with
/// test stubs/mocks.
#[async_trait]
pub trait SentimentApiService: Send + Sync {
  /// Scores the text with all three analyzers
  ///
  /// # Errors
  /// Internal error if a local analyzer aborts. Remote classifier failures are
  /// not errors; they show up in `llm_analysis`.
  async fn score(&self, request: ScoreRequest) -> Result<ScoreResponse>;
}

/// Sentiment Scoring Service
///
/// Holds the analyzers built once at startup; cloning only bumps the `Arc`.
#[derive(Clone)]
pub struct SentimentApiServiceFull {
  inner: Arc<SentimixService>,
}

impl SentimentApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (including remote classifier settings)
  ///
  /// # Errors
  /// Returns an error if the classifier settings are invalid
  pub fn new(config: &Config) -> Result<Self> {
    let inner = SentimixService::init(&config.sentimix)?;
    Ok(Self { inner: Arc::new(inner) })
  }

  /// Whether the remote classifier can be called
  pub fn llm_enabled(&self) -> bool {
    self.inner.llm_enabled()
  }

  /// Executes all three analyses
  ///
  /// Local analyzers are CPU bound and run on the blocking pool so they do
  /// not stall the async runtime; the remote call is awaited afterwards.
  ///
  /// # Errors
  /// Internal error if the blocking task panics
  pub async fn score(&self, request: ScoreRequest) -> Result<ScoreResponse> {
    let service = Arc::clone(&self.inner);
    let text = request.text;

    let (local, text) = run_blocking(move || {
      let local = service.analyze_local(&text);
      (local, text)
    })
    .await?;

    let classification = self.inner.classify(&text).await;
    info!(
      vader_compound = local.lexicon.compound,
      textblob_polarity = local.statistical.polarity,
      llm_outcome = classification.outcome(),
      "感情スコアリング完了"
    );

    Ok(ScoreResponse::from(AggregatedResult::new(local, classification)))
  }
}

/// CPU バウンドな処理をブロッキングプールで実行する
///
/// タスクのパニックは内部エラーに変換する。
async fn run_blocking<F, T>(f: F) -> Result<T>
where
  F: FnOnce() -> T + Send + 'static,
  T: Send + 'static,
{
  tokio::task::spawn_blocking(f).await.map_err(|e| {
    error!(error = %e, "ローカル解析タスクが異常終了しました");
    ApiError::internal("local sentiment analysis failed")
  })
}

/// Production implementation of trait `SentimentApiService`
#[async_trait]
impl SentimentApiService for SentimentApiServiceFull {
  async fn score(&self, request: ScoreRequest) -> Result<ScoreResponse> {
    // Note: Writing `self.score(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    SentimentApiServiceFull::score(self, request).await
  }
}
