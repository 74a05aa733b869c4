//! Shared error types for the services crate.

use thiserror::Error;

use content::ContentError;
use reader_core::model::{ChecklistId, QuestionId, QuizId};

/// Caller defects detected by a `ReaderSession`.
///
/// The catalog itself is already valid; these only fire when the presentation
/// layer refers to something that does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("unknown quiz `{0}`")]
    UnknownQuiz(String),
    #[error("quiz `{quiz}` has no question `{question}`")]
    UnknownQuestion { quiz: QuizId, question: String },
    #[error("question `{question}` has {choices} choices, index {index} is out of range")]
    ChoiceOutOfRange {
        question: QuestionId,
        index: usize,
        choices: usize,
    },
    #[error("question `{0}` is single-select; use choose_answer")]
    ExpectedSingleSelect(QuestionId),
    #[error("question `{0}` is multi-select; use toggle_answer")]
    ExpectedMultiSelect(QuestionId),
    #[error("unknown checklist `{0}`")]
    UnknownChecklist(String),
    #[error("checklist `{checklist}` has {items} items, index {index} is out of range")]
    ItemOutOfRange {
        checklist: ChecklistId,
        index: usize,
        items: usize,
    },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("cannot load {source_name}: {error}")]
    Content {
        source_name: String,
        #[source]
        error: ContentError,
    },
}
