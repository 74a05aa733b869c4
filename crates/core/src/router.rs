//! Section id → payload lookup with an explicit, total fallback.
//!
//! Unknown ids are not errors: they resolve to the catalog's default
//! (first-registered) section, whatever the id looks like.

use crate::catalog::Catalog;
use crate::model::{Payload, Section};

/// The section to display for `id`, falling back to the default section.
#[must_use]
pub fn resolve_section<'c>(id: &str, catalog: &'c Catalog) -> &'c Section {
    catalog
        .get(id)
        .unwrap_or_else(|| catalog.default_section())
}

/// The payload to display for `id`, falling back to the default section.
#[must_use]
pub fn resolve<'c>(id: &str, catalog: &'c Catalog) -> &'c Payload {
    resolve_section(id, catalog).payload()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogDraft;
    use crate::model::{Block, GroupDraft, SectionDraft};

    fn markdown(text: &str) -> Vec<Block> {
        vec![Block::Markdown { text: text.into() }]
    }

    fn catalog() -> Catalog {
        CatalogDraft::new("Manual")
            .with_group(GroupDraft::new(
                "Section I",
                vec![
                    SectionDraft::new("1.1", "Introduction", markdown("P1")),
                    SectionDraft::new("1.2", "Epidemiology", markdown("P2")),
                ],
            ))
            .with_group(GroupDraft::new(
                "Quick Reference",
                vec![SectionDraft::new("REF1", "Screening Tools", markdown("R1"))],
            ))
            .validate()
            .unwrap()
    }

    #[test]
    fn known_ids_resolve_to_their_exact_payload() {
        let catalog = catalog();
        for section in catalog.sections() {
            assert_eq!(resolve(section.id().as_str(), &catalog), section.payload());
        }
    }

    #[test]
    fn unknown_ids_resolve_to_default_payload() {
        let catalog = catalog();
        let default = catalog.default_section().payload();
        for id in ["", "   ", "9.9", "1.1 ", "ref1", "REF4"] {
            assert_eq!(resolve(id, &catalog), default, "id {id:?}");
        }
    }

    #[test]
    fn removed_id_falls_back_to_default() {
        let with_extra = catalog();
        assert!(with_extra.contains("1.2"));

        let without = CatalogDraft::new("Manual")
            .with_group(GroupDraft::new(
                "Section I",
                vec![SectionDraft::new("1.1", "Introduction", markdown("P1"))],
            ))
            .validate()
            .unwrap();
        assert_eq!(resolve("1.2", &without), without.default_section().payload());
        assert_eq!(resolve_section("1.2", &without).id().as_str(), "1.1");
    }
}
