use reader_core::Catalog;
use reader_core::model::{Block, Section};

use super::sidebar_vm::section_label;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageVm {
    /// Shown above the blocks unless the payload opens with its own top heading.
    pub title: Option<String>,
    pub group: String,
    pub blocks: Vec<Block>,
}

#[must_use]
pub fn map_page(catalog: &Catalog, section: &Section) -> PageVm {
    let blocks = section.payload().blocks().to_vec();
    let has_own_title = matches!(blocks.first(), Some(Block::Heading { level, .. }) if *level <= 2);
    PageVm {
        title: (!has_own_title).then(|| section_label(catalog, section)),
        group: section.group().to_string(),
        blocks,
    }
}
