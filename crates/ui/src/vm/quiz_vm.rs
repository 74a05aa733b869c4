use reader_core::model::{QuestionKind, Quiz};
use services::ReaderSession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

/// Verdict shown under a question, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerdictVm {
    pub correct: bool,
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: String,
    pub prompt: String,
    pub multi: bool,
    pub choices: Vec<ChoiceVm>,
    pub verdict: Option<VerdictVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub id: String,
    pub title: Option<String>,
    pub instant: bool,
    pub questions: Vec<QuestionVm>,
    /// "Score: 2/3" once the quiz has been checked.
    pub score_label: Option<String>,
    pub perfect: bool,
    pub message: Option<String>,
}

/// Snapshot of one quiz as seen by `session`.
#[must_use]
pub fn map_quiz(quiz: &Quiz, session: &ReaderSession) -> QuizVm {
    let quiz_id = quiz.id.as_str();
    let report = session.report(quiz_id);

    let questions = quiz
        .questions
        .iter()
        .map(|question| {
            let selection = session.selection(quiz_id, question.id.as_str());
            let choices = question
                .choices
                .iter()
                .enumerate()
                .map(|(index, text)| ChoiceVm {
                    index,
                    text: text.clone(),
                    selected: selection.is_some_and(|s| s.contains(index)),
                })
                .collect();

            let verdict = session
                .instant_feedback(quiz_id, question.id.as_str())
                .map(|feedback| VerdictVm {
                    correct: feedback.correct,
                    message: feedback.message,
                })
                .or_else(|| {
                    report
                        .and_then(|r| r.grade(question.id.as_str()))
                        .map(|grade| VerdictVm {
                            correct: grade.correct,
                            message: None,
                        })
                });

            QuestionVm {
                id: question.id.to_string(),
                prompt: question.prompt.clone(),
                multi: question.kind() == QuestionKind::MultiSelect,
                choices,
                verdict,
            }
        })
        .collect();

    QuizVm {
        id: quiz_id.to_string(),
        title: quiz.title.clone(),
        instant: quiz.mode == reader_core::model::QuizMode::Instant,
        questions,
        score_label: report.map(|r| format!("Score: {}", r.score)),
        perfect: report.is_some_and(|r| r.is_perfect()),
        message: report.and_then(|r| r.message.clone()),
    }
}
