//! Pattern-style polarity / subjectivity analyzer
//!
//! Every opinion word found in the text becomes one assessment; the result is
//! the mean polarity and mean subjectivity over all assessments.
//!
//! - intensifier (`very good`): polarity and subjectivity × intensity
//! - negation (`not good`, `isn't good`): polarity × -0.5
//! - `!` after an assessment: polarity of the latest assessment × 1.25, once

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::lexicon_data::{EXCLAMATION_FACTOR, NEGATION_FACTOR, NEGATIONS, OPINION_WORDS};
use crate::models::StatisticalScore;

/// Emoticons first so `:)` is not split into punctuation.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[:;]-?[()]|[a-z]+(?:'[a-z]+)*|!").expect("token pattern is a valid regex")
});

/// Lexicon entry.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
  polarity: f64,
  subjectivity: f64,
  intensity: f64,
}

impl Entry {
  fn is_intensifier(&self) -> bool {
    self.polarity == 0.0 && self.intensity != 1.0
  }
}

/// One scored word.
#[derive(Debug, Clone, Copy)]
struct Assessment {
  polarity: f64,
  subjectivity: f64,
  exclaimed: bool,
}

/// Averaging lexicon analyzer.
///
/// Deterministic, no I/O, `Send + Sync`.
pub struct PatternAnalyzer {
  lexicon: HashMap<&'static str, Entry>,
}

impl PatternAnalyzer {
  /// Builds the analyzer from the embedded lexicon.
  pub fn new() -> Self {
    let lexicon = OPINION_WORDS
      .iter()
      .map(|&(word, polarity, subjectivity, intensity)| {
        (word, Entry { polarity, subjectivity, intensity })
      })
      .collect();

    Self { lexicon }
  }

  /// Computes polarity and subjectivity of `text`.
  ///
  /// Text without any opinion word scores `(0.0, 0.0)`.
  pub fn sentiment(&self, text: &str) -> StatisticalScore {
    let assessments = self.assess(text);

    if assessments.is_empty() {
      return StatisticalScore::NEUTRAL;
    }

    let count = assessments.len() as f64;
    let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / count;
    let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / count;

    let score = StatisticalScore {
      polarity: polarity.clamp(-1.0, 1.0),
      subjectivity: subjectivity.clamp(0.0, 1.0),
    };

    debug!(
      assessments = assessments.len(),
      polarity = score.polarity,
      subjectivity = score.subjectivity,
      "Pattern scoring completed"
    );

    score
  }

  fn assess(&self, text: &str) -> Vec<Assessment> {
    let normalized = text.to_lowercase().replace('\u{2019}', "'");

    let mut assessments: Vec<Assessment> = Vec::new();
    let mut negated = false;
    let mut intensity: Option<f64> = None;

    for token in TOKEN_PATTERN.find_iter(&normalized).map(|m| m.as_str()) {
      if token == "!" {
        if let Some(last) = assessments.last_mut().filter(|a| !a.exclaimed) {
          last.polarity = (last.polarity * EXCLAMATION_FACTOR).clamp(-1.0, 1.0);
          last.exclaimed = true;
        }
        negated = false;
        intensity = None;
        continue;
      }

      if is_negation(token) {
        negated = true;
        continue;
      }

      match self.lexicon.get(token) {
        Some(entry) if entry.is_intensifier() => {
          intensity = Some(intensity.unwrap_or(1.0) * entry.intensity);
        }
        Some(entry) => {
          let scale = intensity.unwrap_or(1.0);
          let mut polarity = entry.polarity * scale;
          if negated {
            polarity *= NEGATION_FACTOR;
          }

          assessments.push(Assessment {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: (entry.subjectivity * scale).clamp(0.0, 1.0),
            exclaimed: false,
          });

          negated = false;
          intensity = None;
        }
        // A negation reaches past plain words ("not a good idea"),
        // an intensifier only modifies the word right after it.
        None => intensity = None,
      }
    }

    assessments
  }
}

impl Default for PatternAnalyzer {
  fn default() -> Self {
    Self::new()
  }
}

fn is_negation(token: &str) -> bool {
  NEGATIONS.contains(&token) || token.ends_with("n't")
}
