//! sentimix-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sentimix_api::ApiError;
use sentimix_api::api::AppState;
use sentimix_api::api::run_server;
use sentimix_api::config::Config;
use sentimix_api::service::SentimentApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // ロギングの初期化（RUST_LOG 未設定時は info）
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(bind_addr = %config.bind_addr, llm_api_key = config.has_api_key(), "設定を読み込みました");

  // サービスの初期化
  let service = Arc::new(SentimentApiServiceFull::new(&config)?);
  tracing::info!(llm_enabled = service.llm_enabled(), "感情分析サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
