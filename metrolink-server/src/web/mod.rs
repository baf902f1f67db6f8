//! Web layer for the Metrolink departure boards.
//!
//! Provides JSON endpoints for the stop list and per-stop boards.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
