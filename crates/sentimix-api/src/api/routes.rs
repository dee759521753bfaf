//! ルーター定義

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::post_score;
use super::state::AppState;
use crate::errors::ApiError;

/// APIルーターを作成する
///
/// クロスオリジンのリクエストはすべて許可する。
/// 入力長は検証しないため、ボディサイズの上限（既定 2MB）も外す。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

  Router::new()
    .route("/score", post(post_score))
    .layer(DefaultBodyLimit::disable())
    .layer(cors)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use async_trait::async_trait;
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use tower::ServiceExt;

  use super::*;
  use crate::config::Config;
  use crate::errors::Result as ApiResult;
  use crate::models::{ScoreRequest, ScoreResponse};
  use crate::service::SentimentApiService;
  use sentimix::models::{LexiconScore, StatisticalScore};

  /// テスト用のダミー実装（アナライザーを一切触らない）
  #[derive(Clone)]
  struct DummyService;

  #[async_trait]
  impl SentimentApiService for DummyService {
    async fn score(&self, request: ScoreRequest) -> ApiResult<ScoreResponse> {
      Ok(ScoreResponse {
        vader: LexiconScore { neg: 0.0, neu: 1.0, pos: 0.0, compound: 0.0 },
        textblob: StatisticalScore { polarity: 0.0, subjectivity: 0.0 },
        llm_analysis: format!("{} bytes", request.text.len()),
      })
    }
  }

  /// 常に内部エラーを返すダミー実装
  struct FailingService;

  #[async_trait]
  impl SentimentApiService for FailingService {
    async fn score(&self, _request: ScoreRequest) -> ApiResult<ScoreResponse> {
      Err(ApiError::internal("local sentiment analysis failed"))
    }
  }

  fn create_test_state() -> AppState {
    state_with(Arc::new(DummyService))
  }

  fn state_with(service: Arc<dyn SentimentApiService>) -> AppState {
    let config = Config::from_lookup(|_| None).expect("defaults are valid");

    // スタブを注入（アナライザーの構築不要）
    AppState::new(config, service)
  }

  fn post_json(body: String) -> Request<Body> {
    Request::builder()
      .method("POST")
      .uri("/score")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(body))
      .unwrap()
  }

  #[tokio::test]
  async fn test_cors_preflight_allows_any_origin() {
    let router = create_router(create_test_state());

    let response = router
      .oneshot(
        Request::builder()
          .method("OPTIONS")
          .uri("/score")
          .header(header::ORIGIN, "https://example.com")
          .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
          .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
  }

  #[tokio::test]
  async fn test_unknown_route_returns_404() {
    let router = create_router(create_test_state());

    let response = router
      .oneshot(Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap())
      .await
      .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn test_get_on_score_is_not_allowed() {
    let router = create_router(create_test_state());

    let response = router
      .oneshot(Request::builder().method("GET").uri("/score").body(Body::empty()).unwrap())
      .await
      .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
  }

  #[tokio::test]
  async fn test_body_larger_than_2mb_is_accepted() {
    let router = create_router(create_test_state());
    let text = "good ".repeat(600_000);
    let body = serde_json::json!({ "text": &text }).to_string();
    assert!(body.len() > 2 * 1024 * 1024);

    let response = router.oneshot(post_json(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["llm_analysis"], format!("{} bytes", text.len()));
  }

  #[tokio::test]
  async fn test_internal_error_returns_500_json() {
    let router = create_router(state_with(Arc::new(FailingService)));

    let response =
      router.oneshot(post_json(r#"{"text": "I love this!"}"#.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(json["error"].is_string(), "unexpected body: {json}");
  }
}
