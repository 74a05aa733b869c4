use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::views::blocks::BlockList;
use crate::views::sidebar::Sidebar;
use crate::vm::{ReaderIntent, apply_intent, map_page, map_sidebar, markdown_to_html};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// The whole reader window: sidebar navigation plus the current section.
///
/// Each mounted view owns one `ReaderSession`; child blocks read it through
/// context and change it only by dispatching a `ReaderIntent`.
#[component]
pub fn ReaderView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_signal(|| ctx.start_session());
    use_context_provider(|| session);
    let mut error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: ReaderIntent| {
        let result = apply_intent(&mut session.write(), intent);
        error.set(result.err());
    });

    #[cfg(test)]
    {
        if let Some(handles) = try_consume_context::<ReaderTestHandles>() {
            handles.register(dispatch_intent);
        }
    }

    let snapshot = session.read();
    let catalog = snapshot.catalog();
    let meta = catalog.meta().clone();
    let current = snapshot.current_section();
    let groups = map_sidebar(catalog, current);
    let page = map_page(catalog, current);
    let footer_html = meta.footer.as_deref().map(markdown_to_html);
    drop(snapshot);

    rsx! {
        div { class: "reader",
            Sidebar { groups, notes: meta.sidebar_notes.clone(), on_intent: dispatch_intent }

            main { class: "reader-main",
                header { class: "reader-header",
                    h1 { class: "reader-header__title", "{meta.title}" }
                    if let Some(subtitle) = meta.subtitle.clone() {
                        p { class: "reader-header__subtitle", "{subtitle}" }
                    }
                }

                if let Some(err) = error() {
                    p { class: "reader-error", role: "alert", "{err.message()}" }
                }

                article { class: "page",
                    p { class: "page__group", "{page.group}" }
                    if let Some(title) = page.title.clone() {
                        h2 { class: "page__title", "{title}" }
                    }
                    BlockList { blocks: page.blocks.clone(), on_intent: dispatch_intent }
                }

                if let Some(html) = footer_html {
                    footer { class: "reader-footer", dangerous_inner_html: "{html}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ReaderTestHandles {
    dispatch: Rc<RefCell<Option<Callback<ReaderIntent>>>>,
}

#[cfg(test)]
impl ReaderTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<ReaderIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<ReaderIntent> {
        (*self.dispatch.borrow()).expect("reader dispatch registered")
    }
}
