//! モデルモジュール

mod request;
mod response;

pub use request::ScoreRequest;
pub use response::ScoreResponse;
