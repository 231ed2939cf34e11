//! Wire types of the admin API.

mod messages;

pub use messages::{
    CatchphraseUpdate, DEFAULT_PORT, ErrorResponse, NewQuestion, QuestionUpdate, Status,
    StatusResponse,
};
