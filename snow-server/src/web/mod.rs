//! Web layer for the snow depth page.
//!
//! Serves the rendered depth range plus a small JSON API.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
