use reader_core::Catalog;
use reader_core::model::Section;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarItemVm {
    pub id: String,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarGroupVm {
    pub name: String,
    pub items: Vec<SidebarItemVm>,
}

#[must_use]
pub fn section_label(catalog: &Catalog, section: &Section) -> String {
    if catalog.meta().numbered_sections {
        section.label()
    } else {
        section.title().to_string()
    }
}

/// Sidebar groups in catalog order with the displayed section marked active.
#[must_use]
pub fn map_sidebar(catalog: &Catalog, current: &Section) -> Vec<SidebarGroupVm> {
    catalog
        .groups()
        .into_iter()
        .map(|group| SidebarGroupVm {
            name: group.name.to_string(),
            items: group
                .sections
                .into_iter()
                .map(|section| SidebarItemVm {
                    id: section.id().to_string(),
                    label: section_label(catalog, section),
                    active: section.id() == current.id(),
                })
                .collect(),
        })
        .collect()
}
