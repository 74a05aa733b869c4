use serde::{Deserialize, Serialize};

use crate::model::ids::SectionId;
use crate::model::payload::{Block, Payload};

/// One navigable unit of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    title: String,
    group: String,
    payload: Payload,
}

impl Section {
    #[must_use]
    pub fn new(
        id: SectionId,
        title: impl Into<String>,
        group: impl Into<String>,
        payload: Payload,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            group: group.into(),
            payload,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Sidebar label, e.g. `"2.4: Depression in Cancer"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}: {}", self.id, self.title)
    }
}

/// Unvalidated section as written by a content author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDraft {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl SectionDraft {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            id: SectionId::new(id),
            title: title.into(),
            blocks,
        }
    }
}

/// Unvalidated sidebar group of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDraft {
    pub name: String,
    pub sections: Vec<SectionDraft>,
}

impl GroupDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, sections: Vec<SectionDraft>) -> Self {
        Self {
            name: name.into(),
            sections,
        }
    }
}
