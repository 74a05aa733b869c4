//! The content catalog: an immutable, validated, ordered set of sections.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    AnswerKey, Block, Checklist, ChecklistId, GroupDraft, PanelId, Payload, QuestionId, Quiz,
    QuizId, Section, SectionId,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Content-authoring defects found while validating a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no sections")]
    Empty,

    #[error("catalog title cannot be empty")]
    EmptyTitle,

    #[error("group name cannot be empty")]
    EmptyGroupName,

    #[error("group `{0}` is declared more than once")]
    DuplicateGroup(String),

    #[error("group `{0}` has no sections")]
    EmptyGroup(String),

    #[error("a section in group `{group}` has a blank id")]
    BlankSectionId { group: String },

    #[error("section `{0}` has an empty title")]
    EmptySectionTitle(SectionId),

    #[error("section id `{0}` is used more than once")]
    DuplicateSection(SectionId),

    #[error("section `{section}` contains a {kind} with a blank id")]
    BlankBlockId {
        section: SectionId,
        kind: &'static str,
    },

    #[error("panel id `{panel}` in section `{section}` is already used")]
    DuplicatePanel { section: SectionId, panel: PanelId },

    #[error("quiz id `{quiz}` in section `{section}` is already used")]
    DuplicateQuiz { section: SectionId, quiz: QuizId },

    #[error("checklist id `{checklist}` in section `{section}` is already used")]
    DuplicateChecklist {
        section: SectionId,
        checklist: ChecklistId,
    },

    #[error("quiz `{0}` has no questions")]
    EmptyQuiz(QuizId),

    #[error("question `{question}` appears twice in quiz `{quiz}`")]
    DuplicateQuestion { quiz: QuizId, question: QuestionId },

    #[error("question `{question}` in quiz `{quiz}` has no choices")]
    EmptyChoices { quiz: QuizId, question: QuestionId },

    #[error("question `{question}` in quiz `{quiz}` lists choice `{choice}` twice")]
    DuplicateChoice {
        quiz: QuizId,
        question: QuestionId,
        choice: String,
    },

    #[error("answer `{answer}` of question `{question}` in quiz `{quiz}` is not one of its choices")]
    AnswerNotInChoices {
        quiz: QuizId,
        question: QuestionId,
        answer: String,
    },

    #[error("multi-select question `{question}` in quiz `{quiz}` has an empty answer")]
    EmptyAnswer { quiz: QuizId, question: QuestionId },

    #[error("answer `{answer}` of question `{question}` in quiz `{quiz}` is listed twice")]
    DuplicateAnswer {
        quiz: QuizId,
        question: QuestionId,
        answer: String,
    },

    #[error("checklist `{0}` has no items")]
    EmptyChecklist(ChecklistId),

    #[error("table row {row} in section `{section}` has {found} cells, expected {expected}")]
    RaggedTable {
        section: SectionId,
        row: usize,
        expected: usize,
        found: usize,
    },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// A catalog as written by an author, before any invariant is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidebar_notes: Vec<String>,
    /// Prefix sidebar entries with the section id ("2.4: Depression in Cancer").
    #[serde(default)]
    pub numbered_sections: bool,
    pub groups: Vec<GroupDraft>,
}

impl CatalogDraft {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            footer: None,
            sidebar_notes: Vec::new(),
            numbered_sections: false,
            groups: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_group(mut self, group: GroupDraft) -> Self {
        self.groups.push(group);
        self
    }

    /// Check every catalog invariant and build the immutable catalog.
    ///
    /// The first section of the first group becomes the default section.
    ///
    /// # Errors
    ///
    /// Returns the first `CatalogError` found, in document order.
    pub fn validate(self) -> Result<Catalog, CatalogError> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle);
        }
        if self.groups.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut sections: Vec<Section> = Vec::new();
        let mut index: HashMap<SectionId, usize> = HashMap::new();
        let mut groups: Vec<String> = Vec::new();
        let mut ids = BlockIds::default();

        for group in self.groups {
            let name = group.name.trim().to_string();
            if name.is_empty() {
                return Err(CatalogError::EmptyGroupName);
            }
            if groups.contains(&name) {
                return Err(CatalogError::DuplicateGroup(name));
            }
            if group.sections.is_empty() {
                return Err(CatalogError::EmptyGroup(name));
            }

            for draft in group.sections {
                if draft.id.is_blank() {
                    return Err(CatalogError::BlankSectionId { group: name });
                }
                if draft.title.trim().is_empty() {
                    return Err(CatalogError::EmptySectionTitle(draft.id));
                }
                if index.contains_key(&draft.id) {
                    return Err(CatalogError::DuplicateSection(draft.id));
                }
                ids.check_blocks(&draft.id, &draft.blocks)?;

                index.insert(draft.id.clone(), sections.len());
                sections.push(Section::new(
                    draft.id,
                    draft.title,
                    name.clone(),
                    Payload::new(draft.blocks),
                ));
            }
            groups.push(name);
        }

        Ok(Catalog {
            meta: CatalogMeta {
                title: self.title,
                subtitle: self.subtitle,
                footer: self.footer,
                sidebar_notes: self.sidebar_notes,
                numbered_sections: self.numbered_sections,
            },
            sections,
            index,
            groups,
        })
    }
}

/// Catalog-wide uniqueness bookkeeping for ids that live inside payloads.
#[derive(Default)]
struct BlockIds {
    panels: HashSet<PanelId>,
    quizzes: HashSet<QuizId>,
    checklists: HashSet<ChecklistId>,
}

impl BlockIds {
    fn check_blocks(&mut self, section: &SectionId, blocks: &[Block]) -> Result<(), CatalogError> {
        for block in blocks {
            match block {
                Block::Table(table) => {
                    let expected = table.headers.len();
                    for (row, cells) in table.rows.iter().enumerate() {
                        if cells.len() != expected {
                            return Err(CatalogError::RaggedTable {
                                section: section.clone(),
                                row,
                                expected,
                                found: cells.len(),
                            });
                        }
                    }
                }
                Block::Panel(panel) => {
                    if panel.id.is_blank() {
                        return Err(blank(section, "panel"));
                    }
                    if !self.panels.insert(panel.id.clone()) {
                        return Err(CatalogError::DuplicatePanel {
                            section: section.clone(),
                            panel: panel.id.clone(),
                        });
                    }
                    self.check_blocks(section, &panel.blocks)?;
                }
                Block::Tabs { tabs } => {
                    for tab in tabs {
                        self.check_blocks(section, &tab.blocks)?;
                    }
                }
                Block::Quiz(quiz) => {
                    if quiz.id.is_blank() {
                        return Err(blank(section, "quiz"));
                    }
                    if !self.quizzes.insert(quiz.id.clone()) {
                        return Err(CatalogError::DuplicateQuiz {
                            section: section.clone(),
                            quiz: quiz.id.clone(),
                        });
                    }
                    check_quiz(section, quiz)?;
                }
                Block::Checklist(checklist) => {
                    if checklist.id.is_blank() {
                        return Err(blank(section, "checklist"));
                    }
                    if !self.checklists.insert(checklist.id.clone()) {
                        return Err(CatalogError::DuplicateChecklist {
                            section: section.clone(),
                            checklist: checklist.id.clone(),
                        });
                    }
                    if checklist.items.is_empty() {
                        return Err(CatalogError::EmptyChecklist(checklist.id.clone()));
                    }
                }
                Block::Heading { .. }
                | Block::Markdown { .. }
                | Block::Callout { .. }
                | Block::Objectives { .. }
                | Block::ReviewQuestions { .. } => {}
            }
        }
        Ok(())
    }
}

fn blank(section: &SectionId, kind: &'static str) -> CatalogError {
    CatalogError::BlankBlockId {
        section: section.clone(),
        kind,
    }
}

fn check_quiz(section: &SectionId, quiz: &Quiz) -> Result<(), CatalogError> {
    if quiz.questions.is_empty() {
        return Err(CatalogError::EmptyQuiz(quiz.id.clone()));
    }

    let mut questions: HashSet<&QuestionId> = HashSet::new();
    for question in &quiz.questions {
        if question.id.is_blank() {
            return Err(blank(section, "question"));
        }
        if !questions.insert(&question.id) {
            return Err(CatalogError::DuplicateQuestion {
                quiz: quiz.id.clone(),
                question: question.id.clone(),
            });
        }
        if question.choices.is_empty() {
            return Err(CatalogError::EmptyChoices {
                quiz: quiz.id.clone(),
                question: question.id.clone(),
            });
        }

        let mut choices: HashSet<&str> = HashSet::new();
        for choice in &question.choices {
            if !choices.insert(choice.as_str()) {
                return Err(CatalogError::DuplicateChoice {
                    quiz: quiz.id.clone(),
                    question: question.id.clone(),
                    choice: choice.clone(),
                });
            }
        }

        let not_in_choices = |answer: &str| CatalogError::AnswerNotInChoices {
            quiz: quiz.id.clone(),
            question: question.id.clone(),
            answer: answer.to_string(),
        };
        match &question.answer {
            AnswerKey::Single(answer) => {
                if !choices.contains(answer.as_str()) {
                    return Err(not_in_choices(answer.as_str()));
                }
            }
            AnswerKey::Multi(answers) => {
                if answers.is_empty() {
                    return Err(CatalogError::EmptyAnswer {
                        quiz: quiz.id.clone(),
                        question: question.id.clone(),
                    });
                }
                let mut seen: HashSet<&str> = HashSet::new();
                for answer in answers {
                    if !choices.contains(answer.as_str()) {
                        return Err(not_in_choices(answer.as_str()));
                    }
                    if !seen.insert(answer.as_str()) {
                        return Err(CatalogError::DuplicateAnswer {
                            quiz: quiz.id.clone(),
                            question: question.id.clone(),
                            answer: answer.clone(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMeta {
    pub title: String,
    pub subtitle: Option<String>,
    pub footer: Option<String>,
    pub sidebar_notes: Vec<String>,
    pub numbered_sections: bool,
}

/// Sections sharing a sidebar heading, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup<'a> {
    pub name: &'a str,
    pub sections: Vec<&'a Section>,
}

/// Validated, read-only content catalog.
///
/// Only obtainable through [`CatalogDraft::validate`], so it always holds at
/// least one section and every id invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    meta: CatalogMeta,
    sections: Vec<Section>,
    index: HashMap<SectionId, usize>,
    groups: Vec<String>,
}

impl Catalog {
    #[must_use]
    pub fn meta(&self) -> &CatalogMeta {
        &self.meta
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.meta.title
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.index.get(id).map(|&i| &self.sections[i])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The first-registered section, used whenever an id is unknown.
    #[must_use]
    pub fn default_section(&self) -> &Section {
        &self.sections[0]
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn groups(&self) -> Vec<SectionGroup<'_>> {
        self.groups
            .iter()
            .map(|name| SectionGroup {
                name: name.as_str(),
                sections: self
                    .sections
                    .iter()
                    .filter(|section| section.group() == name)
                    .collect(),
            })
            .collect()
    }

    /// Locate a quiz anywhere in the catalog.
    #[must_use]
    pub fn find_quiz(&self, id: &str) -> Option<(&Section, &Quiz)> {
        self.sections.iter().find_map(|section| {
            section
                .payload()
                .quizzes()
                .into_iter()
                .find(|quiz| quiz.id.as_str() == id)
                .map(|quiz| (section, quiz))
        })
    }

    #[must_use]
    pub fn find_checklist(&self, id: &str) -> Option<(&Section, &Checklist)> {
        self.sections.iter().find_map(|section| {
            section
                .payload()
                .checklists()
                .into_iter()
                .find(|checklist| checklist.id.as_str() == id)
                .map(|checklist| (section, checklist))
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
