//! # quiz-admin
//!
//! Backend for a browser quiz game: serves the game's static files and a
//! small JSON API for editing the questions it asks.
//!
//! All quiz content lives in one JSON document, grouped by *attending*.
//! Each request reads the document through a [`QuestionStore`] and, if it
//! changes anything, writes the whole document back.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_admin::{Server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = ServerConfig {
//!         questions_path: "questions.json".into(),
//!         ..Default::default()
//!     };
//!     Server::new(config).run().await
//! }
//! ```

mod data;
mod error;
mod models;
mod protocol;
mod server;

pub use data::{JsonFileStore, MemoryStore, QuestionStore};
pub use error::{QuizError, StoreError};
pub use models::{Attending, Question, QuizData, generate_id};
pub use protocol::{
    CatchphraseUpdate, DEFAULT_PORT, ErrorResponse, NewQuestion, QuestionUpdate, Status,
    StatusResponse,
};
pub use server::{AppState, Server, ServerConfig, router};
