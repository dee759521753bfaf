// crates/sentimix/src/service.rs

//! SentimixService: sentimix クレートの統合ファサード。
//!
//! - VADER 辞書スコアリング (LexiconAnalyzer)
//! - pattern 辞書による極性・主観性 (PatternAnalyzer)
//! - LLM による二値分類 (RemoteClassifier)
//!
//! 3つとも起動時に一度だけ構築し、以後は読み取り専用で共有する。

use tracing::debug;

use crate::classifier::RemoteClassifier;
use crate::config::SentimixConfig;
use crate::errors::SentimixResult;
use crate::lexicon::LexiconAnalyzer;
use crate::models::{AggregatedResult, Classification, LocalScores};
use crate::statistical::PatternAnalyzer;

/// sentimix クレートの統合ファサード。
///
/// `Send + Sync` のため `Arc` で包んでリクエスト間で共有できる。
pub struct SentimixService {
  lexicon: LexiconAnalyzer,
  statistical: PatternAnalyzer,
  classifier: RemoteClassifier,
}

impl SentimixService {
  /// 初期化（設定検証 + 各アナライザーの構築）
  ///
  /// API キーが無い場合もエラーにはならず、LLM 分類が無効状態で起動する。
  ///
  /// # エラー
  /// - 設定が不正（temperature の範囲外、max_tokens が 0 等）
  pub fn init(config: &SentimixConfig) -> SentimixResult<Self> {
    config.validate()?;

    let service = Self {
      lexicon: LexiconAnalyzer::new(),
      statistical: PatternAnalyzer::new(),
      classifier: RemoteClassifier::from_config(&config.classifier),
    };

    debug!(llm_enabled = service.classifier.is_enabled(), "SentimixService を初期化しました");
    Ok(service)
  }

  /// LLM 分類が有効かどうか
  pub fn llm_enabled(&self) -> bool {
    self.classifier.is_enabled()
  }

  /// ローカルの2アナライザーでスコアリングする（同期・CPU のみ）
  pub fn analyze_local(&self, text: &str) -> LocalScores {
    LocalScores {
      lexicon: self.lexicon.polarity_scores(text),
      statistical: self.statistical.sentiment(text),
    }
  }

  /// LLM で分類する。失敗は `Classification` に畳み込まれる。
  pub async fn classify(&self, text: &str) -> Classification {
    self.classifier.classify(text).await
  }

  /// 3つの解析をすべて実行して結合する。
  ///
  /// LLM が失敗してもローカルの結果は常に含まれる。
  pub async fn aggregate(&self, text: &str) -> AggregatedResult {
    let local = self.analyze_local(text);
    let classification = self.classify(text).await;
    AggregatedResult::new(local, classification)
  }
}
