use dioxus::prelude::*;
use reader_core::model::Quiz;
use services::ReaderSession;

use crate::vm::{ChoiceVm, QuestionVm, ReaderIntent, VerdictVm, inline_markdown_to_html, map_quiz};

#[component]
pub fn QuizBlock(quiz: Quiz, on_intent: Callback<ReaderIntent>) -> Element {
    let session = use_context::<Signal<ReaderSession>>();
    let vm = map_quiz(&quiz, &session.read());
    let check_id = vm.id.clone();
    let reset_id = vm.id.clone();
    let checked = vm.score_label.is_some();

    rsx! {
        section { class: "quiz",
            if let Some(title) = vm.title.clone() {
                h4 { class: "quiz__title", "{title}" }
            }
            for question in vm.questions.iter().cloned() {
                QuestionView {
                    key: "{question.id}",
                    quiz_id: vm.id.clone(),
                    question,
                    on_intent,
                }
            }
            if !vm.instant {
                div { class: "quiz__actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_intent.call(ReaderIntent::CheckAnswers(check_id.clone())),
                        "Check Answers"
                    }
                    if checked {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| on_intent.call(ReaderIntent::ResetQuiz(reset_id.clone())),
                            "Start Over"
                        }
                    }
                }
            }
            if let Some(score) = vm.score_label.clone() {
                p { class: "quiz__score", role: "status", "{score}" }
            }
            if let Some(message) = vm.message.clone() {
                p { class: "quiz__message quiz__message--perfect", "{message}" }
            }
        }
    }
}

#[component]
fn QuestionView(quiz_id: String, question: QuestionVm, on_intent: Callback<ReaderIntent>) -> Element {
    let prompt_html = inline_markdown_to_html(&question.prompt);

    rsx! {
        fieldset { class: "quiz__question",
            legend { dangerous_inner_html: "{prompt_html}" }
            for choice in question.choices.iter().cloned() {
                ChoiceInput {
                    key: "{choice.index}",
                    quiz_id: quiz_id.clone(),
                    question_id: question.id.clone(),
                    multi: question.multi,
                    choice,
                    on_intent,
                }
            }
            if let Some(verdict) = question.verdict.clone() {
                Verdict { verdict }
            }
        }
    }
}

#[component]
fn ChoiceInput(
    quiz_id: String,
    question_id: String,
    multi: bool,
    choice: ChoiceVm,
    on_intent: Callback<ReaderIntent>,
) -> Element {
    let input_type = if multi { "checkbox" } else { "radio" };
    let group = format!("{quiz_id}-{question_id}");
    let index = choice.index;

    rsx! {
        label { class: "quiz__choice",
            input {
                r#type: "{input_type}",
                name: "{group}",
                checked: choice.selected,
                onchange: move |_| {
                    let quiz = quiz_id.clone();
                    let question = question_id.clone();
                    let intent = if multi {
                        ReaderIntent::Toggle { quiz, question, choice: index }
                    } else {
                        ReaderIntent::Choose { quiz, question, choice: index }
                    };
                    on_intent.call(intent);
                },
            }
            " {choice.text}"
        }
    }
}

#[component]
fn Verdict(verdict: VerdictVm) -> Element {
    let (class, fallback) = if verdict.correct {
        ("quiz__verdict quiz__verdict--correct", "Correct")
    } else {
        ("quiz__verdict quiz__verdict--incorrect", "Incorrect")
    };
    let text = verdict.message.unwrap_or_else(|| fallback.to_string());

    rsx! {
        p { class: "{class}", "{text}" }
    }
}
