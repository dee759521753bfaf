//! models module
pub mod model_definition;

pub use model_definition::{
  AggregatedResult, Classification, DisabledReason, FAILED_MESSAGE, HEALTHY_LABEL, LexiconScore,
  LocalScores, StatisticalScore, UNAVAILABLE_MESSAGE, UNHEALTHY_LABEL,
};
