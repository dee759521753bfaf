//! HTTPハンドラー定義

use axum::{Json, body::Bytes, extract::State};
use tracing::debug;

use crate::errors::ApiError;
use crate::models::{ScoreRequest, ScoreResponse};

use super::state::AppState;

/// POST /score エンドポイント
///
/// 3つのアナライザー（VADER、pattern、LLM）で感情スコアを算出する。
///
/// # Request Body
/// ```json
/// { "text": "解析対象のテキスト" }
/// ```
///
/// # Response
/// - 200 OK: 解析成功（LLM が使えない・失敗した場合も `llm_analysis` にプレースホルダーを入れて 200）
/// - 400 Bad Request: `text` フィールドが無い、または JSON として不正
/// - 500 Internal Server Error: ローカル解析の異常終了
pub async fn post_score(
  State(state): State<AppState>,
  body: Bytes,
) -> Result<Json<ScoreResponse>, ApiError> {
  // Json 抽出器ではなく生のボディを受け取り、どの不正入力でも同じ 400 を返す
  let request = ScoreRequest::from_body(&body)?;
  debug!(text_len = request.text.len(), "感情スコアリングリクエストを受信");

  let response = state.service.score(request).await?;

  // モデルの返答は入力を含み得るため debug でのみ出す
  debug!(llm_analysis = %response.llm_analysis, "LLM の返答");

  Ok(Json(response))
}
