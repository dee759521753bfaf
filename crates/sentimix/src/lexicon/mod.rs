//! lexicon module
pub mod vader_analyzer;

pub use vader_analyzer::LexiconAnalyzer;
