//! APIエラー定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// sentimix クレートのエラー型をインポート
use sentimix::errors::SentimixError;

/// `text` フィールド欠落時にクライアントへ返す固定メッセージ
pub const MISSING_TEXT_MESSAGE: &str = "Invalid input, \"text\" field is required.";

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が無効
  InvalidInput,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput => StatusCode::BAD_REQUEST,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
///
/// LLM 分類の失敗はここには現れない（レスポンス内のプレースホルダーに変換済み）。
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値が無効（メッセージはそのままクライアントに返す）
  #[error("{0}")]
  InvalidInput(String),

  /// 内部エラー
  #[error("Internal error: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("Configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// `text` フィールド欠落エラーを作成
  #[must_use]
  pub fn missing_text() -> Self {
    Self::InvalidInput(MISSING_TEXT_MESSAGE.to_string())
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
///
/// `{"error": "<message>"}`
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse { error: self.to_string() };

    (status, Json(body)).into_response()
  }
}

/// SentimixError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<SentimixError> for ApiError {
  fn from(err: SentimixError) -> Self {
    match err {
      SentimixError::Config(err) => ApiError::config(err.to_string()),
      // 分類エラーは通常 Classification に畳み込まれるため、ここに来るのは想定外
      SentimixError::Classifier(err) => ApiError::internal(format!("classifier error: {err}")),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
