//! エラー定義

use std::sync::Arc;
use thiserror::Error;

/// 設定（SentimixConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// classifier.temperature が許容範囲外
  #[error("classifier.temperature は {min}〜{max} の範囲で指定してください: actual={actual}")]
  InvalidTemperature {
    /// 許容される最小値
    min: f64,
    /// 許容される最大値
    max: f64,
    /// 実際に指定された値
    actual: f64,
  },

  /// classifier.max_tokens < 1
  #[error("classifier.max_tokens は 1 以上である必要があります: actual={actual}")]
  InvalidMaxTokens {
    /// 実際に指定された値
    actual: u32,
  },

  /// classifier.timeout が 0
  #[error("classifier.timeout は 0 より大きい必要があります")]
  ZeroTimeout,

  /// classifier.base_url が http(s) URL でない
  #[error("classifier.base_url は http:// または https:// で始まる必要があります: {base_url}")]
  InvalidBaseUrl {
    /// 指定された URL
    base_url: String,
  },
}

/// LLM 分類クライアント関連のエラー
///
/// 分類の失敗はリクエスト全体を失敗させず、呼び出し側でプレースホルダー文字列に変換される。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ClassifierError {
  /// API キーが HTTP ヘッダー値として使用できない（改行等を含む）
  #[error("API キーに HTTP ヘッダーとして使用できない文字が含まれています")]
  InvalidApiKey,

  /// HTTP クライアントの構築に失敗
  #[error("HTTP クライアントの構築に失敗しました: {0}")]
  ClientBuild(Arc<reqwest::Error>),

  /// 送信失敗（接続エラー、タイムアウト等）
  #[error("LLM API へのリクエストに失敗しました: {0}")]
  Request(Arc<reqwest::Error>),

  /// 2xx 以外のステータス
  #[error("LLM API がエラーを返しました: status={status}, body={body}")]
  Status {
    /// HTTP ステータスコード
    status: u16,
    /// レスポンスボディ（診断用）
    body: String,
  },

  /// レスポンスボディの JSON デコード失敗
  #[error("LLM API のレスポンスを解釈できません: {0}")]
  MalformedResponse(Arc<reqwest::Error>),

  /// choices が空、または content が空
  #[error("LLM API のレスポンスに分類結果が含まれていません")]
  EmptyCompletion,
}

impl ClassifierError {
  /// タイムアウト起因のエラーかどうか
  #[must_use]
  pub fn is_timeout(&self) -> bool {
    match self {
      Self::Request(err) => err.is_timeout(),
      _ => false,
    }
  }
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `SentimixResult<T>` = `Result<T, SentimixError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum SentimixError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// 分類クライアント関連エラー
  #[error(transparent)]
  Classifier(#[from] ClassifierError),
}

/// sentimix クレートの標準 Result 型エイリアス
pub type SentimixResult<T> = Result<T, SentimixError>;
