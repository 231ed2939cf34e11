//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::data::QuestionStore;

/// Application state shared across handlers.
///
/// Holds no quiz data itself; every request goes through the store.
pub struct AppState {
    pub store: Arc<dyn QuestionStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }
}
