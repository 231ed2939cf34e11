//! Loading and saving the question store.

mod store;

pub use store::{JsonFileStore, MemoryStore, QuestionStore};
