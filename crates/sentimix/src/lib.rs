//! sentimix 感情分析ライブラリー
//!
//! VADER 辞書、pattern 辞書、LLM 分類の3系統で英語テキストの感情を評価する

/// 分類モジュール - LLM (chat completion API) による二値分類クライアント
pub mod classifier;

/// 設定モジュール - SentimixConfig, ClassifierConfig 等の設定構造体を定義
pub mod config;

/// エラーモジュール - SentimixError, SentimixResult 等のエラー型を定義
pub mod errors;

/// 辞書スコアリングモジュール - VADER による neg/neu/pos/compound
pub mod lexicon;

/// データモデルモジュール - LexiconScore, StatisticalScore, Classification 等
pub mod models;

/// サービスモジュール - SentimixService 等の上位レベルAPIを提供
pub mod service;

/// 統計的解析モジュール - pattern 辞書による極性・主観性
pub mod statistical;

/// 再エクスポート
pub use config::{ClassifierConfig, SentimixConfig};
pub use errors::{SentimixError, SentimixResult};
pub use models::{AggregatedResult, Classification, LexiconScore, StatisticalScore};
pub use service::SentimixService;
