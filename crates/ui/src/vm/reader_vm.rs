use services::{ReaderSession, SessionError};

use crate::views::ViewError;

/// Everything a learner can do in the reader window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReaderIntent {
    SelectSection(String),
    TogglePanel(String),
    Choose {
        quiz: String,
        question: String,
        choice: usize,
    },
    Toggle {
        quiz: String,
        question: String,
        choice: usize,
    },
    CheckAnswers(String),
    ResetQuiz(String),
    ToggleChecklistItem {
        checklist: String,
        item: usize,
    },
}

/// Apply one intent to the session.
///
/// # Errors
///
/// Returns `ViewError::InvalidAction` when the intent names something the
/// catalog does not have.
pub fn apply_intent(session: &mut ReaderSession, intent: ReaderIntent) -> Result<(), ViewError> {
    let result: Result<(), SessionError> = match intent {
        ReaderIntent::SelectSection(id) => {
            session.select_section(&id);
            Ok(())
        }
        ReaderIntent::TogglePanel(id) => {
            session.toggle_panel(&id);
            Ok(())
        }
        ReaderIntent::Choose {
            quiz,
            question,
            choice,
        } => session.choose_answer(&quiz, &question, choice).map(drop),
        ReaderIntent::Toggle {
            quiz,
            question,
            choice,
        } => session.toggle_answer(&quiz, &question, choice).map(drop),
        ReaderIntent::CheckAnswers(quiz) => session.check_answers(&quiz).map(drop),
        ReaderIntent::ResetQuiz(quiz) => session.reset_quiz(&quiz),
        ReaderIntent::ToggleChecklistItem { checklist, item } => {
            session.toggle_checklist_item(&checklist, item).map(drop)
        }
    };
    result.map_err(|_| ViewError::InvalidAction)
}
