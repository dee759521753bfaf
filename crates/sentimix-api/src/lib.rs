//! sentimix-api crate
//!
//! Web server providing multi-source sentiment scoring as HTTP API.
//!
//! ## Endpoints
//! - `POST /score` - Sentiment Scoring (VADER + pattern lexicon + LLM label)
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5001/score \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "I love this!"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{ScoreRequest, ScoreResponse};
pub use service::SentimentApiServiceFull;
