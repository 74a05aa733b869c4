use std::sync::Arc;

use content::{BuiltinCatalog, CatalogSource};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use reader_core::Catalog;
use reader_core::time::fixed_clock;
use services::{ReaderServices, ReaderSession};

use crate::context::{UiApp, build_app_context};
use crate::views::ReaderView;
use crate::views::reader::ReaderTestHandles;
use crate::vm::ReaderIntent;

struct TestApp {
    services: ReaderServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn start_session(&self) -> ReaderSession {
        self.services.start_session()
    }
}

#[derive(Props, Clone)]
struct ReaderHarnessProps {
    app: Arc<TestApp>,
    handles: ReaderTestHandles,
}

impl PartialEq for ReaderHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ReaderHarness(props: ReaderHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
    use_context_provider(|| props.handles.clone());
    rsx! { ReaderView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: ReaderTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn dispatch(&mut self, intent: ReaderIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(manual: BuiltinCatalog) -> ViewHarness {
    let catalog = manual.load().expect("built-in catalog");
    let services = ReaderServices::from_catalog(Arc::new(catalog), fixed_clock());
    let handles = ReaderTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ReaderHarness,
        ReaderHarnessProps {
            app: Arc::new(TestApp { services }),
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, handles };
    harness.rebuild();
    harness
}
