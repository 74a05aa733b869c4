use serde::{Deserialize, Serialize};

use crate::model::ids::{ChecklistId, PanelId};
use crate::model::quiz::Quiz;

//
// ─── BLOCKS ────────────────────────────────────────────────────────────────────
//

/// One renderable unit of a section.
///
/// Blocks are inert data for the presentation layer; the only blocks with
/// behaviour are panels (expand state), quizzes (grading) and checklists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        text: String,
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    Markdown {
        text: String,
    },
    Callout {
        style: CalloutStyle,
        text: String,
    },
    Objectives {
        items: Vec<String>,
    },
    Table(Table),
    Panel(Panel),
    Tabs {
        tabs: Vec<Tab>,
    },
    ReviewQuestions {
        questions: Vec<String>,
    },
    Quiz(Quiz),
    Checklist(Checklist),
}

fn default_heading_level() -> u8 {
    3
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutStyle {
    KeyConcept,
    ClinicalTip,
    Warning,
    Summary,
    Highlight,
}

impl CalloutStyle {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CalloutStyle::KeyConcept => "Key Concept",
            CalloutStyle::ClinicalTip => "Clinical Tip",
            CalloutStyle::Warning => "Warning",
            CalloutStyle::Summary => "Chapter Summary",
            CalloutStyle::Highlight => "Key Takeaway",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelStyle {
    #[default]
    Plain,
    CaseStudy,
}

/// A collapsible block. Its expanded state belongs to the navigation state,
/// not to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub id: PanelId,
    pub title: String,
    #[serde(default)]
    pub style: PanelStyle,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub label: String,
    pub blocks: Vec<Block>,
}

/// Self-assessment multi-select. Nothing is graded; the learner only gets an
/// advisory naming how many items they picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: ChecklistId,
    pub prompt: String,
    pub items: Vec<String>,
    /// Message template; `{count}` is replaced with the number of picked items.
    pub advisory: String,
}

impl Checklist {
    #[must_use]
    pub fn advisory_for(&self, count: usize) -> Option<String> {
        if count == 0 {
            return None;
        }
        Some(self.advisory.replace("{count}", &count.to_string()))
    }
}

//
// ─── PAYLOAD ───────────────────────────────────────────────────────────────────
//

/// Everything a section renders, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload {
    blocks: Vec<Block>,
}

impl Payload {
    #[must_use]
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All blocks depth-first, including those nested in panels and tabs.
    #[must_use]
    pub fn all_blocks(&self) -> Vec<&Block> {
        let mut out = Vec::new();
        collect_blocks(&self.blocks, &mut out);
        out
    }

    #[must_use]
    pub fn panels(&self) -> Vec<&Panel> {
        self.all_blocks()
            .into_iter()
            .filter_map(|block| match block {
                Block::Panel(panel) => Some(panel),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn quizzes(&self) -> Vec<&Quiz> {
        self.all_blocks()
            .into_iter()
            .filter_map(|block| match block {
                Block::Quiz(quiz) => Some(quiz),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn checklists(&self) -> Vec<&Checklist> {
        self.all_blocks()
            .into_iter()
            .filter_map(|block| match block {
                Block::Checklist(checklist) => Some(checklist),
                _ => None,
            })
            .collect()
    }
}

fn collect_blocks<'a>(blocks: &'a [Block], out: &mut Vec<&'a Block>) {
    for block in blocks {
        out.push(block);
        match block {
            Block::Panel(panel) => collect_blocks(&panel.blocks, out),
            Block::Tabs { tabs } => {
                for tab in tabs {
                    collect_blocks(&tab.blocks, out);
                }
            }
            _ => {}
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
