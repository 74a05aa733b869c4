use dioxus::prelude::*;
use reader_core::model::{Block, CalloutStyle, Checklist, Panel, PanelStyle, Tab, Table};
use services::ReaderSession;

use crate::views::quiz::QuizBlock;
use crate::vm::{ReaderIntent, inline_markdown_to_html, markdown_to_html};

#[component]
pub fn BlockList(blocks: Vec<Block>, on_intent: Callback<ReaderIntent>) -> Element {
    rsx! {
        for (index, block) in blocks.into_iter().enumerate() {
            BlockView { key: "{index}", block, on_intent }
        }
    }
}

#[component]
fn BlockView(block: Block, on_intent: Callback<ReaderIntent>) -> Element {
    match block {
        Block::Heading { text, level } => heading(level, &text),
        Block::Markdown { text } => {
            let html = markdown_to_html(&text);
            rsx! {
                div { class: "block-markdown", dangerous_inner_html: "{html}" }
            }
        }
        Block::Callout { style, text } => {
            let html = markdown_to_html(&text);
            let class = format!("callout {}", callout_class(style));
            rsx! {
                aside { class: "{class}",
                    p { class: "callout__label", "{style.label()}" }
                    div { class: "callout__body", dangerous_inner_html: "{html}" }
                }
            }
        }
        Block::Objectives { items } => rsx! {
            div { class: "objectives",
                p { class: "objectives__label", "Learning Objectives" }
                ul {
                    for item in items {
                        li { dangerous_inner_html: "{inline_markdown_to_html(&item)}" }
                    }
                }
            }
        },
        Block::Table(table) => rsx! { TableBlock { data: table } },
        Block::Panel(panel) => rsx! { PanelBlock { panel, on_intent } },
        Block::Tabs { tabs } => rsx! { TabsBlock { tabs, on_intent } },
        Block::ReviewQuestions { questions } => rsx! {
            div { class: "review-questions",
                p { class: "review-questions__label", "Review Questions" }
                ol {
                    for question in questions {
                        li { dangerous_inner_html: "{inline_markdown_to_html(&question)}" }
                    }
                }
            }
        },
        Block::Quiz(quiz) => rsx! { QuizBlock { quiz, on_intent } },
        Block::Checklist(checklist) => rsx! { ChecklistBlock { checklist, on_intent } },
    }
}

fn heading(level: u8, text: &str) -> Element {
    let html = inline_markdown_to_html(text);
    match level {
        0 | 1 => rsx! { h2 { class: "block-heading", dangerous_inner_html: "{html}" } },
        2 => rsx! { h3 { class: "block-heading", dangerous_inner_html: "{html}" } },
        3 => rsx! { h4 { class: "block-heading", dangerous_inner_html: "{html}" } },
        _ => rsx! { h5 { class: "block-heading", dangerous_inner_html: "{html}" } },
    }
}

fn callout_class(style: CalloutStyle) -> &'static str {
    match style {
        CalloutStyle::KeyConcept => "callout--key-concept",
        CalloutStyle::ClinicalTip => "callout--clinical-tip",
        CalloutStyle::Warning => "callout--warning",
        CalloutStyle::Summary => "callout--summary",
        CalloutStyle::Highlight => "callout--highlight",
    }
}

#[component]
fn TableBlock(data: Table) -> Element {
    rsx! {
        div { class: "table-wrap",
            table { class: "data-table",
                if let Some(text) = data.caption.clone() {
                    caption { "{text}" }
                }
                thead {
                    tr {
                        for header in data.headers.iter() {
                            th { dangerous_inner_html: "{inline_markdown_to_html(header)}" }
                        }
                    }
                }
                tbody {
                    for row in data.rows.iter() {
                        tr {
                            for cell in row.iter() {
                                td { dangerous_inner_html: "{inline_markdown_to_html(cell)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PanelBlock(panel: Panel, on_intent: Callback<ReaderIntent>) -> Element {
    let session = use_context::<Signal<ReaderSession>>();
    let expanded = session.read().is_panel_expanded(panel.id.as_str());
    let id = panel.id.to_string();
    let style = match panel.style {
        PanelStyle::Plain => "panel",
        PanelStyle::CaseStudy => "panel panel--case-study",
    };
    let marker = if expanded { "▾" } else { "▸" };

    rsx! {
        div { class: "{style}",
            button {
                class: "panel__toggle",
                r#type: "button",
                aria_expanded: "{expanded}",
                onclick: move |_| on_intent.call(ReaderIntent::TogglePanel(id.clone())),
                span { class: "panel__marker", "{marker}" }
                " {panel.title}"
            }
            if expanded {
                div { class: "panel__body",
                    BlockList { blocks: panel.blocks.clone(), on_intent }
                }
            }
        }
    }
}

/// The selected tab is window-local; it is not part of the session.
#[component]
fn TabsBlock(tabs: Vec<Tab>, on_intent: Callback<ReaderIntent>) -> Element {
    let mut active = use_signal(|| 0usize);
    let current = active().min(tabs.len().saturating_sub(1));
    let blocks = tabs.get(current).map(|tab| tab.blocks.clone()).unwrap_or_default();

    rsx! {
        div { class: "tabs",
            div { class: "tabs__bar", role: "tablist",
                for (index, tab) in tabs.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: "{tab_class(index == current)}",
                        r#type: "button",
                        role: "tab",
                        onclick: move |_| active.set(index),
                        "{tab.label}"
                    }
                }
            }
            div { class: "tabs__panel", role: "tabpanel",
                BlockList { key: "{current}", blocks, on_intent }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "tabs__tab tabs__tab--active"
    } else {
        "tabs__tab"
    }
}

#[component]
fn ChecklistBlock(checklist: Checklist, on_intent: Callback<ReaderIntent>) -> Element {
    let session = use_context::<Signal<ReaderSession>>();
    let id = checklist.id.as_str();
    let (picked, advisory): (Vec<bool>, Option<String>) = {
        let session = session.read();
        (
            (0..checklist.items.len())
                .map(|index| session.is_checklist_item_selected(id, index))
                .collect(),
            session.checklist_advisory(id),
        )
    };

    rsx! {
        fieldset { class: "checklist",
            legend { "{checklist.prompt}" }
            for (index, (item, selected)) in checklist.items.iter().zip(picked).enumerate() {
                ChecklistItem {
                    key: "{index}",
                    checklist: checklist.id.to_string(),
                    index,
                    text: item.clone(),
                    selected,
                    on_intent,
                }
            }
            if let Some(advisory) = advisory {
                p { class: "checklist__advisory", role: "status", "{advisory}" }
            }
        }
    }
}

#[component]
fn ChecklistItem(
    checklist: String,
    index: usize,
    text: String,
    selected: bool,
    on_intent: Callback<ReaderIntent>,
) -> Element {
    rsx! {
        label { class: "checklist__item",
            input {
                r#type: "checkbox",
                checked: selected,
                onchange: move |_| {
                    on_intent.call(ReaderIntent::ToggleChecklistItem {
                        checklist: checklist.clone(),
                        item: index,
                    });
                },
            }
            " {text}"
        }
    }
}
