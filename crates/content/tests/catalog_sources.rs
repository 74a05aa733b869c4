use std::io::Write;

use content::{BuiltinCatalog, CatalogSource, ContentError, InMemoryCatalog, JsonFileCatalog};
use reader_core::model::{Block, GroupDraft, SectionDraft};
use reader_core::{CatalogDraft, CatalogError, resolve};

#[test]
fn residents_manual_loads_in_sidebar_order() {
    let catalog = BuiltinCatalog::ResidentsManual.load().expect("residents manual");
    assert_eq!(catalog.title(), "Training Manual in Psycho-Oncology");
    assert_eq!(catalog.default_section().id().as_str(), "1.1");
    assert_eq!(catalog.len(), 18);

    let groups: Vec<&str> = catalog.groups().iter().map(|g| g.name).collect();
    assert_eq!(groups.first(), Some(&"Section I: Foundations of Psycho-Oncology"));
    assert_eq!(groups.last(), Some(&"Quick Reference"));
}

#[test]
fn quick_reference_sections_are_distinct_pages() {
    let catalog = BuiltinCatalog::ResidentsManual.load().unwrap();
    let ref1 = resolve("REF1", &catalog);
    let ref2 = resolve("REF2", &catalog);
    let ref3 = resolve("REF3", &catalog);
    assert_ne!(ref1, ref2);
    assert_ne!(ref2, ref3);
    assert_ne!(ref1, catalog.default_section().payload());
}

#[test]
fn residents_manual_has_case_studies_and_review_questions() {
    let catalog = BuiltinCatalog::ResidentsManual.load().unwrap();
    let section = catalog.get("2.4").expect("depression chapter");
    assert!(!section.payload().panels().is_empty());
    assert!(
        section
            .payload()
            .blocks()
            .iter()
            .any(|b| matches!(b, Block::ReviewQuestions { .. }))
    );
}

#[test]
fn nursing_guide_has_quizzes_and_checklist() {
    let catalog = BuiltinCatalog::NursingGuide.load().expect("nursing guide");
    assert_eq!(catalog.default_section().id().as_str(), "introduction");
    assert_eq!(catalog.len(), 7);

    let (section, quiz) = catalog.find_quiz("knowledge_check").expect("assessment quiz");
    assert_eq!(section.id().as_str(), "assessment");
    assert_eq!(quiz.len(), 3);

    let (section, _) = catalog.find_checklist("burnout_signs").expect("burnout checklist");
    assert_eq!(section.id().as_str(), "self_care");

    let scenarios = catalog
        .get("therapeutic_communication")
        .unwrap()
        .payload()
        .quizzes()
        .len();
    assert_eq!(scenarios, 5);
}

#[test]
fn json_file_source_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "title": "Pocket Manual",
            "groups": [{{
                "name": "Basics",
                "sections": [{{
                    "id": "1.1",
                    "title": "Intro",
                    "blocks": [{{ "kind": "markdown", "text": "Hello" }}]
                }}]
            }}]
        }}"#
    )
    .unwrap();

    let source = JsonFileCatalog::new(file.path());
    assert!(source.describe().contains("catalog file"));
    let catalog = source.load().unwrap();
    assert_eq!(catalog.title(), "Pocket Manual");
    assert_eq!(catalog.default_section().title(), "Intro");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = JsonFileCatalog::new(&path).load().unwrap_err();
    assert!(matches!(err, ContentError::Io { path: p, .. } if p == path));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let err = JsonFileCatalog::new(file.path()).load().unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

#[test]
fn invalid_draft_is_refused() {
    let draft = CatalogDraft::new("Manual").with_group(GroupDraft::new(
        "Section I",
        vec![
            SectionDraft::new("1.1", "Intro", Vec::new()),
            SectionDraft::new("1.1", "Again", Vec::new()),
        ],
    ));
    let err = InMemoryCatalog::new(draft).load().unwrap_err();
    assert!(matches!(
        err,
        ContentError::Invalid(CatalogError::DuplicateSection(id)) if id.as_str() == "1.1"
    ));
}
