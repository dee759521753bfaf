//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::post_score;
pub use routes::{create_router, run_server};
pub use state::AppState;
