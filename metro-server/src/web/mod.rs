//! Web layer for the metro trip planner.
//!
//! JSON endpoints for listing lines, searching stations and planning trips.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
