use std::collections::HashMap;

use crate::model::ids::{QuestionId, QuizId};
use crate::model::quiz::Selection;

/// A learner's in-progress answers to one quiz.
///
/// Ephemeral: lives inside a reader session and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    quiz_id: QuizId,
    selections: HashMap<QuestionId, Selection>,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(quiz_id: QuizId) -> Self {
        Self {
            quiz_id,
            selections: HashMap::new(),
        }
    }

    #[must_use]
    pub fn quiz_id(&self) -> &QuizId {
        &self.quiz_id
    }

    /// Current selection for a question, `None` if it was never touched.
    #[must_use]
    pub fn selection(&self, question_id: &str) -> Option<&Selection> {
        self.selections.get(question_id)
    }

    /// Single-select answer: replaces any previous choice.
    pub fn choose(&mut self, question_id: QuestionId, choice: usize) {
        self.selections.entry(question_id).or_default().choose(choice);
    }

    /// Multi-select answer: flips one choice. Returns whether it is now selected.
    pub fn toggle(&mut self, question_id: QuestionId, choice: usize) -> bool {
        self.selections.entry(question_id).or_default().toggle(choice)
    }

    pub fn set(&mut self, question_id: QuestionId, selection: Selection) {
        self.selections.insert(question_id, selection);
    }

    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// Number of questions with a non-empty selection.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selections.values().filter(|s| !s.is_empty()).count()
    }
}
