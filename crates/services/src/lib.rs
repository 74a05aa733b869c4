#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod sessions;

pub use reader_core::Clock;
pub use sessions as session;

pub use app_services::ReaderServices;
pub use error::{AppServicesError, SessionError};
pub use sessions::{AnswerFeedback, QuizReport, ReaderSession, SessionId};
