//! Response Model Definition

use serde::Serialize;

use sentimix::models::{AggregatedResult, LexiconScore, StatisticalScore};

/// Sentiment Scoring Response
///
/// Top-level keys are stable wire identifiers and are always all present.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
  /// VADER lexicon scores
  pub vader: LexiconScore,
  /// Pattern lexicon polarity / subjectivity
  pub textblob: StatisticalScore,
  /// LLM label, or a placeholder when the LLM is unavailable or failed
  pub llm_analysis: String,
}

/// Collapses the classification into its display string.
impl From<AggregatedResult> for ScoreResponse {
  fn from(result: AggregatedResult) -> Self {
    Self {
      vader: result.lexicon,
      textblob: result.statistical,
      llm_analysis: result.classification.as_display().to_string(),
    }
  }
}
