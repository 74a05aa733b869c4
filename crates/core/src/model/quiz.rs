use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::ids::{QuestionId, QuizId};

//
// ─── QUIZ DEFINITIONS ──────────────────────────────────────────────────────────
//

/// When a quiz is graded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    /// Graded as a whole when the learner asks to check answers.
    #[default]
    OnSubmit,
    /// Every answer is graded immediately ("pick the best response" exercises).
    Instant,
}

/// Optional author-supplied feedback lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incorrect: Option<String>,
    /// Shown when every question of an on-submit quiz is correct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perfect: Option<String>,
}

/// A graded block of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub mode: QuizMode,
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub feedback: QuizFeedback,
}

impl Quiz {
    #[must_use]
    pub fn question(&self, id: &str) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id.as_str() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// The answer key of a question, written as choice text.
///
/// A single string marks a single-select question, a list marks a
/// multi-select question that must be matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Single(String),
    Multi(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    SingleSelect,
    MultiSelect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub prompt: String,
    pub choices: Vec<String>,
    pub answer: AnswerKey,
}

impl QuizQuestion {
    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        match self.answer {
            AnswerKey::Single(_) => QuestionKind::SingleSelect,
            AnswerKey::Multi(_) => QuestionKind::MultiSelect,
        }
    }

    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    /// Position of a choice by its exact text.
    #[must_use]
    pub fn choice_index(&self, text: &str) -> Option<usize> {
        self.choices.iter().position(|c| c == text)
    }

    /// Indices of the correct choices.
    ///
    /// Returns `None` when the key names a choice that does not exist, which a
    /// validated catalog never contains.
    #[must_use]
    pub fn correct_choices(&self) -> Option<Selection> {
        match &self.answer {
            AnswerKey::Single(text) => self.choice_index(text).map(Selection::single),
            AnswerKey::Multi(texts) => texts
                .iter()
                .map(|text| self.choice_index(text))
                .collect::<Option<Selection>>(),
        }
    }
}

//
// ─── LEARNER SELECTION ─────────────────────────────────────────────────────────
//

/// The set of choice indices a learner currently has selected for one question.
///
/// An empty selection means the question is unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<usize>);

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single(index: usize) -> Self {
        Self(BTreeSet::from([index]))
    }

    /// Radio behaviour: the given choice replaces whatever was selected.
    pub fn choose(&mut self, index: usize) {
        self.0.clear();
        self.0.insert(index);
    }

    /// Multi-select behaviour: add if absent, remove if present.
    ///
    /// Returns whether the choice is selected afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.0.remove(&index) {
            false
        } else {
            self.0.insert(index);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: AnswerKey) -> QuizQuestion {
        QuizQuestion {
            id: QuestionId::new("q"),
            prompt: "Pick".into(),
            choices: vec!["A".into(), "B".into(), "C".into()],
            answer,
        }
    }

    #[test]
    fn kind_follows_answer_key() {
        assert_eq!(
            question(AnswerKey::Single("A".into())).kind(),
            QuestionKind::SingleSelect
        );
        assert_eq!(
            question(AnswerKey::Multi(vec!["A".into()])).kind(),
            QuestionKind::MultiSelect
        );
    }

    #[test]
    fn correct_choices_map_text_to_indices() {
        let q = question(AnswerKey::Multi(vec!["C".into(), "A".into()]));
        assert_eq!(q.correct_choices(), Some([0, 2].into_iter().collect()));
    }

    #[test]
    fn unknown_key_text_has_no_correct_choices() {
        let q = question(AnswerKey::Single("Z".into()));
        assert_eq!(q.correct_choices(), None);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = Selection::new();
        assert!(sel.toggle(1));
        assert!(sel.contains(1));
        assert!(!sel.toggle(1));
        assert!(sel.is_empty());
    }

    #[test]
    fn choose_replaces_previous_choice() {
        let mut sel = Selection::single(0);
        sel.choose(2);
        assert_eq!(sel, Selection::single(2));
    }

    #[test]
    fn answer_key_deserializes_string_or_list() {
        let single: AnswerKey = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(single, AnswerKey::Single("A".into()));
        let multi: AnswerKey = serde_json::from_str("[\"A\", \"B\"]").unwrap();
        assert_eq!(multi, AnswerKey::Multi(vec!["A".into(), "B".into()]));
    }
}
