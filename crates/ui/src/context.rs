use std::sync::Arc;

use reader_core::Catalog;
use services::ReaderSession;

/// What the presentation layer needs from the composition root.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;

    /// A fresh, independent session for one window.
    fn start_session(&self) -> ReaderSession;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: Arc<dyn UiApp>) -> Self {
        Self { app }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        self.app.catalog()
    }

    #[must_use]
    pub fn start_session(&self) -> ReaderSession {
        self.app.start_session()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
