use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use reader_core::model::{
    ChecklistId, PanelId, Payload, QuestionKind, Quiz, QuizAttempt, QuizId, QuizMode,
    QuizQuestion, Section, Selection,
};
use reader_core::{Catalog, NavigationState, QuizScore, grade_attempt, grade_question};
use tracing::{debug, info};
use uuid::Uuid;

use super::report::{AnswerFeedback, QuizReport};
use crate::Clock;
use crate::error::SessionError;

/// Opaque identifier of one reader session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Everything one learner has done since opening the reader.
///
/// Sessions share the catalog but nothing else: navigation, quiz attempts and
/// checklist picks of one session never leak into another.
#[derive(Debug, Clone)]
pub struct ReaderSession {
    id: SessionId,
    started_at: DateTime<Utc>,
    clock: Clock,
    catalog: Arc<Catalog>,
    navigation: NavigationState,
    attempts: HashMap<QuizId, QuizAttempt>,
    reports: HashMap<QuizId, QuizReport>,
    checklists: HashMap<ChecklistId, BTreeSet<usize>>,
}

impl ReaderSession {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, clock: Clock) -> Self {
        let id = SessionId::random();
        let started_at = clock.now();
        info!(session = %id, "reader session started");
        Self {
            id,
            started_at,
            clock,
            catalog,
            navigation: NavigationState::new(),
            attempts: HashMap::new(),
            reports: HashMap::new(),
            checklists: HashMap::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    // ─── navigation ───

    /// Show section `id`; unknown ids fall back to the default section.
    pub fn select_section(&mut self, id: &str) -> &Section {
        let known = self.navigation.select_section(&self.catalog, id);
        if !known {
            debug!(session = %self.id, section = id, "unknown section, showing default");
        }
        self.navigation.current_section(&self.catalog)
    }

    #[must_use]
    pub fn current_section(&self) -> &Section {
        self.navigation.current_section(&self.catalog)
    }

    #[must_use]
    pub fn current_payload(&self) -> &Payload {
        self.current_section().payload()
    }

    /// Returns whether the panel is expanded afterwards.
    pub fn toggle_panel(&mut self, panel: &str) -> bool {
        self.navigation.toggle_panel(PanelId::new(panel))
    }

    #[must_use]
    pub fn is_panel_expanded(&self, panel: &str) -> bool {
        self.navigation.is_expanded(panel)
    }

    // ─── quizzes ───

    /// Select `choice` for a single-select question, replacing any earlier pick.
    ///
    /// Instant-mode quizzes answer with feedback right away.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` for unknown ids, an out-of-range choice, or a
    /// multi-select question.
    pub fn choose_answer(
        &mut self,
        quiz: &str,
        question: &str,
        choice: usize,
    ) -> Result<Option<AnswerFeedback>, SessionError> {
        self.answer(quiz, question, choice, QuestionKind::SingleSelect)
    }

    /// Add or remove `choice` for a multi-select question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` for unknown ids, an out-of-range choice, or a
    /// single-select question.
    pub fn toggle_answer(
        &mut self,
        quiz: &str,
        question: &str,
        choice: usize,
    ) -> Result<Option<AnswerFeedback>, SessionError> {
        self.answer(quiz, question, choice, QuestionKind::MultiSelect)
    }

    fn answer(
        &mut self,
        quiz_id: &str,
        question_id: &str,
        choice: usize,
        kind: QuestionKind,
    ) -> Result<Option<AnswerFeedback>, SessionError> {
        let catalog = Arc::clone(&self.catalog);
        let (quiz, question) = locate_question(&catalog, quiz_id, question_id)?;

        if question.kind() != kind {
            return Err(match question.kind() {
                QuestionKind::SingleSelect => SessionError::ExpectedSingleSelect(question.id.clone()),
                QuestionKind::MultiSelect => SessionError::ExpectedMultiSelect(question.id.clone()),
            });
        }
        if choice >= question.choices.len() {
            return Err(SessionError::ChoiceOutOfRange {
                question: question.id.clone(),
                index: choice,
                choices: question.choices.len(),
            });
        }

        let attempt = self
            .attempts
            .entry(quiz.id.clone())
            .or_insert_with(|| QuizAttempt::new(quiz.id.clone()));
        match kind {
            QuestionKind::SingleSelect => attempt.choose(question.id.clone(), choice),
            QuestionKind::MultiSelect => {
                attempt.toggle(question.id.clone(), choice);
            }
        }
        // A report describes the answers it was computed from.
        self.reports.remove(&quiz.id);

        debug!(session = %self.id, quiz = %quiz.id, question = %question.id, choice, "answer recorded");
        Ok(self.feedback_for(quiz, question))
    }

    /// Current verdict for one question of an instant-mode quiz.
    ///
    /// `None` for on-submit quizzes, unknown ids and unanswered questions.
    #[must_use]
    pub fn instant_feedback(&self, quiz: &str, question: &str) -> Option<AnswerFeedback> {
        let (quiz, question) = locate_question(&self.catalog, quiz, question).ok()?;
        self.feedback_for(quiz, question)
    }

    fn feedback_for(&self, quiz: &Quiz, question: &QuizQuestion) -> Option<AnswerFeedback> {
        if quiz.mode != QuizMode::Instant {
            return None;
        }
        let selection = self.selection(quiz.id.as_str(), question.id.as_str())?;
        if selection.is_empty() {
            return None;
        }
        let correct = grade_question(question, Some(selection));
        let message = if correct {
            quiz.feedback.correct.clone()
        } else {
            quiz.feedback.incorrect.clone()
        };
        Some(AnswerFeedback {
            question_id: question.id.clone(),
            correct,
            message,
        })
    }

    /// Grade every question of `quiz` and remember the report.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownQuiz` if the catalog has no such quiz.
    pub fn check_answers(&mut self, quiz: &str) -> Result<QuizReport, SessionError> {
        let catalog = Arc::clone(&self.catalog);
        let quiz = locate_quiz(&catalog, quiz)?;

        let grades = match self.attempts.get(&quiz.id) {
            Some(attempt) => grade_attempt(quiz, attempt),
            None => grade_attempt(quiz, &QuizAttempt::new(quiz.id.clone())),
        };
        let score = QuizScore::from_grades(&grades);
        let message = if score.is_perfect() {
            quiz.feedback.perfect.clone()
        } else {
            None
        };
        let report = QuizReport {
            quiz_id: quiz.id.clone(),
            score,
            grades,
            message,
            checked_at: self.clock.now(),
        };

        info!(session = %self.id, quiz = %quiz.id, score = %score, "quiz checked");
        self.reports.insert(quiz.id.clone(), report.clone());
        Ok(report)
    }

    /// Forget every answer and the last report of `quiz`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownQuiz` if the catalog has no such quiz.
    pub fn reset_quiz(&mut self, quiz: &str) -> Result<(), SessionError> {
        let id = locate_quiz(&self.catalog, quiz)?.id.clone();
        self.attempts.remove(&id);
        self.reports.remove(&id);
        debug!(session = %self.id, quiz = %id, "quiz reset");
        Ok(())
    }

    #[must_use]
    pub fn attempt(&self, quiz: &str) -> Option<&QuizAttempt> {
        self.attempts.get(quiz)
    }

    #[must_use]
    pub fn report(&self, quiz: &str) -> Option<&QuizReport> {
        self.reports.get(quiz)
    }

    #[must_use]
    pub fn selection(&self, quiz: &str, question: &str) -> Option<&Selection> {
        self.attempts.get(quiz)?.selection(question)
    }

    // ─── checklists ───

    /// Flip one checklist item. Returns whether it is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` for an unknown checklist or an out-of-range item.
    pub fn toggle_checklist_item(
        &mut self,
        checklist: &str,
        item: usize,
    ) -> Result<bool, SessionError> {
        let Some((_, found)) = self.catalog.find_checklist(checklist) else {
            return Err(SessionError::UnknownChecklist(checklist.to_string()));
        };
        if item >= found.items.len() {
            return Err(SessionError::ItemOutOfRange {
                checklist: found.id.clone(),
                index: item,
                items: found.items.len(),
            });
        }

        let picked = self.checklists.entry(found.id.clone()).or_default();
        let selected = if picked.remove(&item) {
            false
        } else {
            picked.insert(item);
            true
        };
        Ok(selected)
    }

    #[must_use]
    pub fn is_checklist_item_selected(&self, checklist: &str, item: usize) -> bool {
        self.checklists
            .get(checklist)
            .is_some_and(|picked| picked.contains(&item))
    }

    #[must_use]
    pub fn checklist_count(&self, checklist: &str) -> usize {
        self.checklists.get(checklist).map_or(0, BTreeSet::len)
    }

    /// The checklist's advisory with the pick count filled in, or `None` when
    /// nothing is picked.
    #[must_use]
    pub fn checklist_advisory(&self, checklist: &str) -> Option<String> {
        let (_, found) = self.catalog.find_checklist(checklist)?;
        found.advisory_for(self.checklist_count(checklist))
    }
}

fn locate_quiz<'c>(catalog: &'c Catalog, quiz: &str) -> Result<&'c Quiz, SessionError> {
    catalog
        .find_quiz(quiz)
        .map(|(_, quiz)| quiz)
        .ok_or_else(|| SessionError::UnknownQuiz(quiz.to_string()))
}

fn locate_question<'c>(
    catalog: &'c Catalog,
    quiz: &str,
    question: &str,
) -> Result<(&'c Quiz, &'c QuizQuestion), SessionError> {
    let quiz = locate_quiz(catalog, quiz)?;
    let found = quiz
        .question(question)
        .ok_or_else(|| SessionError::UnknownQuestion {
            quiz: quiz.id.clone(),
            question: question.to_string(),
        })?;
    Ok((quiz, found))
}
