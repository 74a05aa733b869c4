//! Catalog sources: the embedded manuals, JSON files on disk and in-memory drafts.
//!
//! Every source hands back a validated [`reader_core::Catalog`] or refuses.

#![forbid(unsafe_code)]

pub mod error;
pub mod source;

pub use error::ContentError;
pub use source::{BuiltinCatalog, CatalogSource, InMemoryCatalog, JsonFileCatalog, parse_catalog};
