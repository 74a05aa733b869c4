//! Per-session navigation state: which section is shown and which panels are open.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::model::{PanelId, Section, SectionId};
use crate::router::resolve_section;

/// What one learner is currently looking at.
///
/// Owned by the session that created it; there is no shared or global
/// instance. `current` is `None` until a known section is selected, and
/// `None` always means "the catalog's default section".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    current: Option<SectionId>,
    expanded: HashSet<PanelId>,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `id` if the catalog knows it, otherwise revert to the default
    /// section. Unknown ids are accepted silently.
    ///
    /// Returns `true` when `id` was recognised.
    pub fn select_section(&mut self, catalog: &Catalog, id: &str) -> bool {
        match catalog.get(id) {
            Some(section) => {
                self.current = Some(section.id().clone());
                true
            }
            None => {
                self.current = None;
                false
            }
        }
    }

    /// The explicitly selected id, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&SectionId> {
        self.current.as_ref()
    }

    /// The section to display, resolving the default when nothing valid is selected.
    #[must_use]
    pub fn current_section<'c>(&self, catalog: &'c Catalog) -> &'c Section {
        let id = self.current.as_ref().map_or("", SectionId::as_str);
        resolve_section(id, catalog)
    }

    /// Flip one panel between expanded and collapsed.
    ///
    /// Returns whether the panel is expanded afterwards.
    pub fn toggle_panel(&mut self, panel: PanelId) -> bool {
        if self.expanded.remove(&panel) {
            false
        } else {
            self.expanded.insert(panel);
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, panel: &str) -> bool {
        self.expanded.contains(panel)
    }

    pub fn expanded_panels(&self) -> impl Iterator<Item = &PanelId> {
        self.expanded.iter()
    }
}
