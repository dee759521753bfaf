//! Embedded opinion lexicon
//!
//! `(word, polarity, subjectivity, intensity)`. Values follow the pattern
//! English sentiment lexicon. Entries with polarity 0 and intensity != 1 are
//! intensifiers: they scale the next assessed word instead of being assessed.

pub(crate) const OPINION_WORDS: &[(&str, f64, f64, f64)] = &[
  // positive
  ("good", 0.7, 0.6, 1.0),
  ("great", 0.8, 0.75, 1.0),
  ("excellent", 1.0, 1.0, 1.0),
  ("amazing", 0.6, 0.9, 1.0),
  ("awesome", 1.0, 1.0, 1.0),
  ("wonderful", 1.0, 1.0, 1.0),
  ("fantastic", 0.4, 0.9, 1.0),
  ("best", 1.0, 0.3, 1.0),
  ("better", 0.5, 0.5, 1.0),
  ("nice", 0.6, 1.0, 1.0),
  ("happy", 0.8, 1.0, 1.0),
  ("glad", 0.5, 1.0, 1.0),
  ("beautiful", 0.85, 1.0, 1.0),
  ("lovely", 0.5, 0.75, 1.0),
  ("love", 0.5, 0.6, 1.0),
  ("loved", 0.7, 0.8, 1.0),
  ("perfect", 1.0, 1.0, 1.0),
  ("brilliant", 0.9, 1.0, 1.0),
  ("fine", 0.4167, 0.5, 1.0),
  ("pleasant", 0.7333, 0.9667, 1.0),
  ("fun", 0.3, 0.2, 1.0),
  ("interesting", 0.5, 0.5, 1.0),
  ("healthy", 0.5, 0.5, 1.0),
  ("positive", 0.2273, 0.5455, 1.0),
  ("cool", 0.35, 0.65, 1.0),
  ("easy", 0.4333, 0.8333, 1.0),
  ("clean", 0.3667, 0.6833, 1.0),
  ("friendly", 0.375, 0.5, 1.0),
  ("calm", 0.3, 0.75, 1.0),
  ("safe", 0.5, 0.5, 1.0),
  ("strong", 0.4333, 0.7333, 1.0),
  ("impressive", 1.0, 1.0, 1.0),
  ("favorite", 0.5, 1.0, 1.0),
  ("incredible", 0.9, 0.9, 1.0),
  ("delightful", 1.0, 1.0, 1.0),
  ("satisfied", 0.5, 1.0, 1.0),
  ("excited", 0.375, 0.75, 1.0),
  ("proud", 0.8, 1.0, 1.0),
  ("helpful", 0.3, 0.4, 1.0),
  ("kind", 0.6, 0.9, 1.0),
  ("smart", 0.2143, 0.6429, 1.0),
  ("useful", 0.3, 0.0, 1.0),
  ("fresh", 0.3, 0.5, 1.0),
  ("comfortable", 0.4, 0.7, 1.0),
  // negative
  ("bad", -0.7, 0.6667, 1.0),
  ("terrible", -1.0, 1.0, 1.0),
  ("horrible", -1.0, 1.0, 1.0),
  ("awful", -1.0, 1.0, 1.0),
  ("worst", -1.0, 1.0, 1.0),
  ("worse", -0.4, 0.6, 1.0),
  ("poor", -0.4, 0.6, 1.0),
  ("sad", -0.5, 1.0, 1.0),
  ("angry", -0.5, 1.0, 1.0),
  ("hate", -0.8, 0.9, 1.0),
  ("hated", -0.9, 0.7, 1.0),
  ("ugly", -0.7, 1.0, 1.0),
  ("boring", -1.0, 1.0, 1.0),
  ("stupid", -0.8, 1.0, 1.0),
  ("disappointing", -0.6, 0.7, 1.0),
  ("disappointed", -0.75, 0.75, 1.0),
  ("annoying", -0.8, 0.9, 1.0),
  ("wrong", -0.5, 0.9, 1.0),
  ("slow", -0.3, 0.3901, 1.0),
  ("broken", -0.4, 0.4, 1.0),
  ("dirty", -0.6, 0.8, 1.0),
  ("unhealthy", -0.5, 0.5, 1.0),
  ("negative", -0.3, 0.4, 1.0),
  ("painful", -0.7, 0.9, 1.0),
  ("useless", -0.5, 0.2, 1.0),
  ("miserable", -1.0, 1.0, 1.0),
  ("pathetic", -1.0, 1.0, 1.0),
  ("rude", -0.3, 0.6, 1.0),
  ("dangerous", -0.6, 0.9, 1.0),
  ("difficult", -0.5, 1.0, 1.0),
  ("sick", -0.7143, 0.8571, 1.0),
  ("tired", -0.4, 0.7, 1.0),
  ("weak", -0.375, 0.625, 1.0),
  ("nasty", -1.0, 1.0, 1.0),
  ("disgusting", -1.0, 1.0, 1.0),
  ("fake", -0.5, 1.0, 1.0),
  ("lonely", -0.5, 1.0, 1.0),
  ("scared", -0.5, 1.0, 1.0),
  ("upset", -0.4, 0.6, 1.0),
  // emoticons
  (":)", 0.5, 1.0, 1.0),
  (":-)", 0.5, 1.0, 1.0),
  (";)", 0.5, 1.0, 1.0),
  (":(", -0.75, 1.0, 1.0),
  (":-(", -0.75, 1.0, 1.0),
  // intensifiers
  ("very", 0.0, 0.0, 1.3),
  ("really", 0.0, 0.0, 1.3),
  ("so", 0.0, 0.0, 1.3),
  ("too", 0.0, 0.0, 1.3),
  ("extremely", 0.0, 0.0, 1.5),
  ("incredibly", 0.0, 0.0, 1.5),
  ("absolutely", 0.0, 0.0, 1.4),
  ("totally", 0.0, 0.0, 1.3),
  ("quite", 0.0, 0.0, 1.1),
  ("slightly", 0.0, 0.0, 0.8),
  ("somewhat", 0.0, 0.0, 0.9),
];

/// Words that flip the next assessed word.
pub(crate) const NEGATIONS: &[&str] = &["not", "never", "no", "neither", "nor", "cannot"];

/// Polarity multiplier for a negated word.
pub(crate) const NEGATION_FACTOR: f64 = -0.5;

/// Polarity multiplier an exclamation mark applies to the latest assessment.
pub(crate) const EXCLAMATION_FACTOR: f64 = 1.25;
