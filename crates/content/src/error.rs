use std::path::PathBuf;

use reader_core::CatalogError;
use thiserror::Error;

/// Errors surfaced while loading a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("cannot read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog failed validation: {0}")]
    Invalid(#[from] CatalogError),

    #[error("unknown manual `{0}` (expected `residents` or `nursing`)")]
    UnknownManual(String),
}
