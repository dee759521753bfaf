//! VADER lexicon analyzer
//!
//! Thin wrapper over `vader_sentiment` that turns its string-keyed score map
//! into [`LexiconScore`].

use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::models::LexiconScore;

/// Rule-based VADER scorer.
///
/// - Stateless apart from the static lexicon
/// - `Send + Sync`, build once and share
pub struct LexiconAnalyzer {
  inner: SentimentIntensityAnalyzer<'static>,
}

impl LexiconAnalyzer {
  /// Creates an analyzer backed by the bundled VADER lexicon.
  pub fn new() -> Self {
    Self { inner: SentimentIntensityAnalyzer::new() }
  }

  /// Scores `text`. Deterministic for a given input.
  pub fn polarity_scores(&self, text: &str) -> LexiconScore {
    let scores = self.inner.polarity_scores(text);
    let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

    let score =
      LexiconScore { neg: get("neg"), neu: get("neu"), pos: get("pos"), compound: get("compound") };

    debug!(compound = score.compound, "VADER scoring completed");
    score
  }
}

impl Default for LexiconAnalyzer {
  fn default() -> Self {
    Self::new()
  }
}
