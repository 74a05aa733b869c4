//! Quiz evaluator: exact-match grading and score aggregation.
//!
//! There is no partial credit. An unanswered question is graded incorrect and
//! still counts toward the total.

use std::fmt;

use crate::model::{QuestionId, Quiz, QuizAttempt, QuizQuestion, Selection};

/// Result of grading one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionGrade {
    pub question_id: QuestionId,
    pub answered: bool,
    pub correct: bool,
}

/// Number of correct answers out of the number of questions in the quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: u32,
    pub total: u32,
}

impl QuizScore {
    /// Score a list of graded questions.
    #[must_use]
    pub fn from_grades(grades: &[QuestionGrade]) -> Self {
        let correct = grades.iter().filter(|grade| grade.correct).count();
        Self {
            correct: u32::try_from(correct).unwrap_or(u32::MAX),
            total: u32::try_from(grades.len()).unwrap_or(u32::MAX),
        }
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

impl fmt::Display for QuizScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// True iff the selection is exactly the question's correct choice set.
///
/// Single-select questions have a one-element correct set, so the same
/// comparison covers both kinds. `None` or an empty selection is unanswered.
#[must_use]
pub fn grade_question(question: &QuizQuestion, selection: Option<&Selection>) -> bool {
    let Some(selection) = selection.filter(|s| !s.is_empty()) else {
        return false;
    };
    question
        .correct_choices()
        .is_some_and(|correct| correct == *selection)
}

/// Grade every question of `quiz` in quiz order.
#[must_use]
pub fn grade_attempt(quiz: &Quiz, attempt: &QuizAttempt) -> Vec<QuestionGrade> {
    quiz.questions
        .iter()
        .map(|question| {
            let selection = attempt.selection(question.id.as_str());
            QuestionGrade {
                question_id: question.id.clone(),
                answered: selection.is_some_and(|s| !s.is_empty()),
                correct: grade_question(question, selection),
            }
        })
        .collect()
}

/// Count of exactly-correct questions, always out of `quiz.questions.len()`.
#[must_use]
pub fn aggregate_score(quiz: &Quiz, attempt: &QuizAttempt) -> QuizScore {
    QuizScore::from_grades(&grade_attempt(quiz, attempt))
}
