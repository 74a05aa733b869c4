use content::BuiltinCatalog;

use super::test_harness::setup_view_harness;
use crate::vm::ReaderIntent;

#[test]
fn residents_manual_opens_on_first_chapter() {
    let harness = setup_view_harness(BuiltinCatalog::ResidentsManual);
    let html = harness.render();
    assert!(html.contains("Training Manual in Psycho-Oncology"), "missing title in {html}");
    assert!(html.contains("1.1: Introduction to Psycho-Oncology"), "missing page title in {html}");
    assert!(html.contains("Section VI: Palliative Care"), "missing sidebar group in {html}");
    assert!(html.contains("Learning Objectives"), "missing objectives in {html}");
    assert!(html.contains("Review Questions"), "missing review questions in {html}");
}

#[test]
fn selecting_a_section_and_expanding_a_case() {
    let mut harness = setup_view_harness(BuiltinCatalog::ResidentsManual);
    harness.dispatch(ReaderIntent::SelectSection("2.4".into()));
    let html = harness.render();
    assert!(html.contains("2.4: Depression in Cancer"), "missing chapter in {html}");
    assert!(!html.contains("panel__body"), "case open too early in {html}");

    harness.dispatch(ReaderIntent::TogglePanel("case_2.4.1".into()));
    let html = harness.render();
    assert!(html.contains("panel__body"), "case not expanded in {html}");
}

#[test]
fn unknown_section_renders_default_page() {
    let mut harness = setup_view_harness(BuiltinCatalog::ResidentsManual);
    harness.dispatch(ReaderIntent::SelectSection("REF9".into()));
    let html = harness.render();
    assert!(html.contains("1.1: Introduction to Psycho-Oncology"), "no fallback in {html}");
}

#[test]
fn nursing_assessment_shows_score_after_check() {
    let mut harness = setup_view_harness(BuiltinCatalog::NursingGuide);
    let html = harness.render();
    assert!(html.contains("Patient Relation Services"), "missing resources in {html}");

    harness.dispatch(ReaderIntent::SelectSection("assessment".into()));
    harness.dispatch(ReaderIntent::Choose {
        quiz: "knowledge_check".into(),
        question: "q1".into(),
        choice: 1,
    });
    harness.dispatch(ReaderIntent::CheckAnswers("knowledge_check".into()));
    let html = harness.render();
    assert!(html.contains("Check Answers"), "missing button in {html}");
    assert!(html.contains("Score: 1/3"), "missing score in {html}");
}

#[test]
fn burnout_checklist_shows_advisory() {
    let mut harness = setup_view_harness(BuiltinCatalog::NursingGuide);
    harness.dispatch(ReaderIntent::SelectSection("self_care".into()));
    harness.dispatch(ReaderIntent::ToggleChecklistItem {
        checklist: "burnout_signs".into(),
        item: 2,
    });
    let html = harness.render();
    assert!(html.contains("You selected 1 signs."), "missing advisory in {html}");
}

#[test]
fn invalid_intent_shows_an_error_message() {
    let mut harness = setup_view_harness(BuiltinCatalog::NursingGuide);
    harness.dispatch(ReaderIntent::ResetQuiz("missing".into()));
    let html = harness.render();
    assert!(html.contains("That action is not available"), "missing error in {html}");
}
