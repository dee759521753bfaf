//! リクエストモデル定義

use serde_json::Value;
use tracing::debug;

use crate::errors::{ApiError, Result};

/// 感情スコアリングリクエスト
///
/// `text` は空文字列も受け付ける（長さ・内容の検証は行わない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRequest {
  /// 解析対象のテキスト
  pub text: String,
}

impl ScoreRequest {
  /// 生のリクエストボディを検証してリクエストに変換する
  ///
  /// Content-Type は問わない。
  ///
  /// # Errors
  /// 以下はすべて固定メッセージの `InvalidInput` になる
  /// - ボディが空、または JSON として不正
  /// - JSON オブジェクトでない
  /// - `text` が欠落、`null`、または文字列でない
  pub fn from_body(body: &[u8]) -> Result<Self> {
    // 構造体へ直接デシリアライズすると配列 `["..."]` も通ってしまうため Value 経由で検証する
    let value: Value = serde_json::from_slice(body).map_err(|e| {
      debug!(error = %e, body_len = body.len(), "リクエストボディが JSON として不正");
      ApiError::missing_text()
    })?;

    match value {
      Value::Object(mut map) => match map.remove("text") {
        Some(Value::String(text)) => Ok(Self { text }),
        _ => {
          debug!("text フィールドが無いか文字列でない");
          Err(ApiError::missing_text())
        }
      },
      _ => {
        debug!("リクエストボディが JSON オブジェクトでない");
        Err(ApiError::missing_text())
      }
    }
  }
}
