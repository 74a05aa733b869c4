use chrono::{DateTime, Utc};
use reader_core::model::{QuestionId, QuizId};
use reader_core::{QuestionGrade, QuizScore};

//
// ─── INSTANT FEEDBACK ──────────────────────────────────────────────────────────
//

/// Immediate verdict for one answer in an instant-mode quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_id: QuestionId,
    pub correct: bool,
    /// The quiz's `correct` or `incorrect` line, when the author wrote one.
    pub message: Option<String>,
}

//
// ─── CHECKED QUIZ ──────────────────────────────────────────────────────────────
//

/// Outcome of "Check Answers" on one quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    pub quiz_id: QuizId,
    pub score: QuizScore,
    pub grades: Vec<QuestionGrade>,
    /// The quiz's `perfect` message, only when every question is correct.
    pub message: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl QuizReport {
    #[must_use]
    pub fn grade(&self, question: &str) -> Option<&QuestionGrade> {
        self.grades
            .iter()
            .find(|grade| grade.question_id.as_str() == question)
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score.is_perfect()
    }
}
