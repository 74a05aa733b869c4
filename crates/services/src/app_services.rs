use std::sync::Arc;

use content::CatalogSource;
use reader_core::Catalog;
use tracing::{error, info};

use crate::Clock;
use crate::error::AppServicesError;
use crate::sessions::ReaderSession;

/// Holds the validated catalog and hands out independent reader sessions.
#[derive(Debug, Clone)]
pub struct ReaderServices {
    catalog: Arc<Catalog>,
    clock: Clock,
}

impl ReaderServices {
    /// Load and validate the catalog once.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Content` if the source cannot be read or the
    /// catalog breaks a validation rule; the app must not start in that case.
    pub fn load(source: &dyn CatalogSource, clock: Clock) -> Result<Self, AppServicesError> {
        let source_name = source.describe();
        let catalog = source.load().map_err(|error| {
            error!(source = %source_name, %error, "catalog rejected");
            AppServicesError::Content { source_name: source_name.clone(), error }
        })?;
        info!(
            source = %source_name,
            title = catalog.title(),
            sections = catalog.len(),
            "catalog loaded"
        );
        Ok(Self::from_catalog(Arc::new(catalog), clock))
    }

    #[must_use]
    pub fn from_catalog(catalog: Arc<Catalog>, clock: Clock) -> Self {
        Self { catalog, clock }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// A fresh session on the default section with nothing expanded or answered.
    #[must_use]
    pub fn start_session(&self) -> ReaderSession {
        ReaderSession::new(Arc::clone(&self.catalog), self.clock)
    }
}
