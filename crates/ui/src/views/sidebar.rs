use dioxus::prelude::*;

use crate::vm::{ReaderIntent, SidebarGroupVm, SidebarItemVm, inline_markdown_to_html};

#[component]
pub fn Sidebar(
    groups: Vec<SidebarGroupVm>,
    notes: Vec<String>,
    on_intent: Callback<ReaderIntent>,
) -> Element {
    rsx! {
        nav { class: "sidebar",
            h3 { class: "sidebar__title", "Navigation" }
            for group in groups {
                section { class: "sidebar__group", key: "{group.name}",
                    p { class: "sidebar__group-name", "{group.name}" }
                    ul {
                        for item in group.items {
                            NavItem { key: "{item.id}", item, on_intent }
                        }
                    }
                }
            }
            if !notes.is_empty() {
                section { class: "sidebar__notes",
                    h3 { class: "sidebar__title", "Resources" }
                    for note in notes {
                        p { dangerous_inner_html: "{inline_markdown_to_html(&note)}" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(item: SidebarItemVm, on_intent: Callback<ReaderIntent>) -> Element {
    let id = item.id.clone();
    let (class, current) = if item.active {
        ("sidebar__item sidebar__item--active", "page")
    } else {
        ("sidebar__item", "false")
    };

    rsx! {
        li {
            button {
                class: "{class}",
                r#type: "button",
                aria_current: "{current}",
                onclick: move |_| on_intent.call(ReaderIntent::SelectSection(id.clone())),
                "{item.label}"
            }
        }
    }
}
