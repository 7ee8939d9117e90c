//! Web layer: serves the game page, the geodata and static assets.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::IndexTemplate;
