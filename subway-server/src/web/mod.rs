//! Web layer for the subway network service.
//!
//! Provides JSON endpoints for stations, lines, sections and shortest paths.

mod dto;
mod error;
mod routes;
mod state;

pub use dto::*;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
