//! statistical module
mod lexicon_data;
pub mod pattern_analyzer;

pub use pattern_analyzer::PatternAnalyzer;
