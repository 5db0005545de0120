//! HTTP layer serving station availability.
//!
//! Holds the current full station list and serves filtered views of it.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
