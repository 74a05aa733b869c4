use std::sync::Arc;

use chrono::Duration;
use content::{BuiltinCatalog, InMemoryCatalog};
use reader_core::CatalogDraft;
use reader_core::model::{Block, GroupDraft, SectionDraft};
use reader_core::time::{fixed_clock, fixed_now};
use services::{AppServicesError, Clock, QuizReport, ReaderServices, SessionError};

fn nursing() -> ReaderServices {
    ReaderServices::load(&BuiltinCatalog::NursingGuide, fixed_clock()).expect("nursing guide")
}

#[test]
fn new_session_starts_on_default_section() {
    let services = nursing();
    let session = services.start_session();
    assert_eq!(session.current_section().id().as_str(), "introduction");
    assert_eq!(session.navigation().expanded_panels().count(), 0);
    assert_eq!(session.started_at(), fixed_now());
}

#[test]
fn navigation_falls_back_for_unknown_sections() {
    let services = nursing();
    let mut session = services.start_session();

    assert_eq!(session.select_section("self_care").title(), "Self-Care");
    assert_eq!(session.select_section("2.4").id().as_str(), "introduction");
    assert_eq!(
        session.current_payload(),
        services.catalog().default_section().payload()
    );
}

#[test]
fn knowledge_check_scores_two_of_three() {
    let services = nursing();
    let mut session = services.start_session();

    session.choose_answer("knowledge_check", "q1", 1).unwrap();
    for choice in [1, 2, 3] {
        session.toggle_answer("knowledge_check", "q2", choice).unwrap();
    }

    let report = session.check_answers("knowledge_check").unwrap();
    assert_eq!(report.score.to_string(), "2/3");
    assert_eq!(report.message, None);
    assert!(!report.grade("q3").unwrap().answered);
    assert_eq!(session.report("knowledge_check"), Some(&report));
}

#[test]
fn perfect_knowledge_check_gets_the_perfect_message() {
    let services = nursing();
    let mut session = services.start_session();

    session.choose_answer("knowledge_check", "q1", 1).unwrap();
    for choice in [1, 2, 3] {
        session.toggle_answer("knowledge_check", "q2", choice).unwrap();
    }
    session.choose_answer("knowledge_check", "q3", 1).unwrap();

    let report: QuizReport = session.check_answers("knowledge_check").unwrap();
    assert!(report.is_perfect());
    assert_eq!(
        report.message.as_deref(),
        Some("🎉 Excellent understanding of key concepts!")
    );
}

#[test]
fn partial_multi_select_is_wrong() {
    let services = nursing();
    let mut session = services.start_session();
    session.toggle_answer("knowledge_check", "q2", 1).unwrap();
    session.toggle_answer("knowledge_check", "q2", 2).unwrap();

    let report = session.check_answers("knowledge_check").unwrap();
    assert!(!report.grade("q2").unwrap().correct);
    assert_eq!(report.score.correct, 0);
}

#[test]
fn changing_an_answer_discards_the_report_and_reset_clears_it() {
    let services = nursing();
    let mut session = services.start_session();
    session.choose_answer("knowledge_check", "q1", 0).unwrap();
    session.check_answers("knowledge_check").unwrap();

    session.choose_answer("knowledge_check", "q1", 1).unwrap();
    assert!(session.report("knowledge_check").is_none());

    session.reset_quiz("knowledge_check").unwrap();
    assert!(session.attempt("knowledge_check").is_none());
    assert_eq!(
        session.check_answers("knowledge_check").unwrap().score.correct,
        0
    );
}

#[test]
fn scenario_quiz_gives_instant_feedback() {
    let services = nursing();
    let mut session = services.start_session();

    let feedback = session
        .choose_answer("scenario_fear_of_dying", "response", 1)
        .unwrap()
        .expect("instant feedback");
    assert!(feedback.correct);
    assert_eq!(
        feedback.message.as_deref(),
        Some("✅ Excellent! This validates emotion and invites sharing.")
    );

    let feedback = session
        .choose_answer("scenario_fear_of_dying", "response", 0)
        .unwrap()
        .unwrap();
    assert!(!feedback.correct);

    let on_submit = session.choose_answer("knowledge_check", "q1", 1).unwrap();
    assert_eq!(on_submit, None);
}

#[test]
fn caller_defects_surface_as_errors() {
    let services = nursing();
    let mut session = services.start_session();

    assert_eq!(
        session.choose_answer("nope", "q1", 0),
        Err(SessionError::UnknownQuiz("nope".into()))
    );
    assert!(matches!(
        session.choose_answer("knowledge_check", "q9", 0),
        Err(SessionError::UnknownQuestion { .. })
    ));
    assert!(matches!(
        session.choose_answer("knowledge_check", "q2", 0),
        Err(SessionError::ExpectedMultiSelect(_))
    ));
    assert!(matches!(
        session.check_answers("missing"),
        Err(SessionError::UnknownQuiz(_))
    ));
}

#[test]
fn burnout_checklist_advisory() {
    let services = nursing();
    let mut session = services.start_session();
    for item in [0, 3, 5] {
        session.toggle_checklist_item("burnout_signs", item).unwrap();
    }
    assert_eq!(
        session.checklist_advisory("burnout_signs").as_deref(),
        Some(
            "You selected 3 signs. Consider discussing with a supervisor or accessing wellness resources."
        )
    );
}

#[test]
fn sessions_are_isolated() {
    let services = nursing();
    let mut alice = services.start_session();
    let bob = services.start_session();
    assert_ne!(alice.id(), bob.id());

    alice.select_section("assessment");
    alice.toggle_panel("culture_causation");
    alice.choose_answer("knowledge_check", "q1", 1).unwrap();
    alice.toggle_checklist_item("burnout_signs", 0).unwrap();

    assert_eq!(bob.current_section().id().as_str(), "introduction");
    assert!(!bob.is_panel_expanded("culture_causation"));
    assert!(bob.attempt("knowledge_check").is_none());
    assert_eq!(bob.checklist_advisory("burnout_signs"), None);
}

#[test]
fn report_timestamps_follow_the_clock() {
    let mut clock = fixed_clock();
    clock.advance(Duration::minutes(30));
    let services = ReaderServices::load(&BuiltinCatalog::NursingGuide, clock).unwrap();
    let mut session = services.start_session();
    let report = session.check_answers("knowledge_check").unwrap();
    assert_eq!(report.checked_at, fixed_now() + Duration::minutes(30));
}

#[test]
fn invalid_catalog_refuses_to_start() {
    let draft = CatalogDraft::new("Broken").with_group(GroupDraft::new(
        "Section I",
        vec![SectionDraft::new("1.1", "Intro", vec![Block::Markdown {
            text: "x".into(),
        }])],
    ))
    .with_group(GroupDraft::new("Section I", vec![SectionDraft::new("1.2", "More", Vec::new())]));

    let err = ReaderServices::load(&InMemoryCatalog::new(draft), Clock::system()).unwrap_err();
    assert!(matches!(err, AppServicesError::Content { .. }));
}

#[test]
fn services_share_one_catalog() {
    let services = ReaderServices::load(&BuiltinCatalog::ResidentsManual, fixed_clock()).unwrap();
    let session = services.start_session();
    assert!(Arc::ptr_eq(&services.catalog(), &services.catalog()));
    assert_eq!(session.catalog().len(), services.catalog().len());
}
