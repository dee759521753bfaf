//! Data models for sentiment analysis results
//!
//! Every value here is produced per call and never stored.

use std::fmt;

use serde::Serialize;

use crate::errors::ClassifierError;

/// Label returned by the model for positive/neutral text.
pub const HEALTHY_LABEL: &str = "Healthy sentiment";

/// Label returned by the model for negative text.
pub const UNHEALTHY_LABEL: &str = "Unhealthy sentiment";

/// Placeholder when the classifier is disabled.
pub const UNAVAILABLE_MESSAGE: &str = "LLM Analysis not available.";

/// Placeholder when a classification call fails.
pub const FAILED_MESSAGE: &str = "LLM analysis failed.";

/// VADER scores.
///
/// `neg`, `neu` and `pos` are proportions in `[0.0, 1.0]`;
/// `compound` is the normalized sum in `[-1.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LexiconScore {
  /// Negative proportion
  pub neg: f64,
  /// Neutral proportion
  pub neu: f64,
  /// Positive proportion
  pub pos: f64,
  /// Normalized compound score
  pub compound: f64,
}

/// Polarity / subjectivity pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticalScore {
  /// -1.0 (negative) ..= 1.0 (positive)
  pub polarity: f64,
  /// 0.0 (objective) ..= 1.0 (subjective)
  pub subjectivity: f64,
}

impl StatisticalScore {
  /// Score of a text without any assessed word.
  pub const NEUTRAL: Self = Self { polarity: 0.0, subjectivity: 0.0 };
}

/// Output of both local analyzers for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalScores {
  /// VADER result
  pub lexicon: LexiconScore,
  /// Pattern lexicon result
  pub statistical: StatisticalScore,
}

/// Why the remote classifier never makes network calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisabledReason {
  /// No API key (or a blank one) was configured
  MissingApiKey,
  /// The HTTP client could not be constructed
  ClientBuild(String),
}

impl fmt::Display for DisabledReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingApiKey => write!(f, "no API key configured"),
      Self::ClientBuild(reason) => write!(f, "HTTP client construction failed: {reason}"),
    }
  }
}

/// Outcome of one remote classification.
///
/// Keeps the failure reason for logging; [`Classification::as_display`]
/// collapses it into the string clients see.
#[derive(Debug, Clone)]
pub enum Classification {
  /// Raw model output, passed through unmodified
  Label(String),
  /// Classifier is disabled for the process lifetime
  Unavailable(DisabledReason),
  /// This call failed; the next one may succeed
  Failed(ClassifierError),
}

impl Classification {
  /// Wire representation of the outcome.
  pub fn as_display(&self) -> &str {
    match self {
      Self::Label(label) => label,
      Self::Unavailable(_) => UNAVAILABLE_MESSAGE,
      Self::Failed(_) => FAILED_MESSAGE,
    }
  }

  /// Whether the model answered with one of the two expected phrases.
  pub fn is_expected_label(&self) -> bool {
    matches!(self, Self::Label(label) if label == HEALTHY_LABEL || label == UNHEALTHY_LABEL)
  }

  /// Short outcome name for structured logs.
  pub fn outcome(&self) -> &'static str {
    match self {
      Self::Label(_) => "label",
      Self::Unavailable(_) => "unavailable",
      Self::Failed(_) => "failed",
    }
  }
}

/// All three analyses of one text. Never partial.
#[derive(Debug, Clone)]
pub struct AggregatedResult {
  /// VADER result
  pub lexicon: LexiconScore,
  /// Pattern lexicon result
  pub statistical: StatisticalScore,
  /// Remote classification (possibly degraded)
  pub classification: Classification,
}

impl AggregatedResult {
  /// Combines local scores with a classification.
  pub fn new(local: LocalScores, classification: Classification) -> Self {
    Self { lexicon: local.lexicon, statistical: local.statistical, classification }
  }
}
