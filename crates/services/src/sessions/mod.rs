mod report;
mod session;

pub use crate::error::SessionError;
pub use report::{AnswerFeedback, QuizReport};
pub use session::{ReaderSession, SessionId};
