//! Quiz admin HTTP server.
//!
//! Serves the game's static pages and the JSON questions API.

mod handlers;
mod server;
mod state;

pub use server::{Server, ServerConfig, router};
pub use state::AppState;
