//! Config module

mod constants;
mod env;

pub use constants::{
  BIND_HOST, DEFAULT_PORT, ENV_API_KEY, ENV_LLM_BASE_URL, ENV_LLM_MODEL, ENV_LLM_TIMEOUT_SECS,
  ENV_PORT,
};
pub use env::Config;
