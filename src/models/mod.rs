//! Data model of the question store.

mod attending;
mod question;
mod quiz;

pub use attending::Attending;
pub use question::{Question, generate_id};
pub use quiz::QuizData;
