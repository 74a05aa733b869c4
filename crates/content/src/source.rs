use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use reader_core::{Catalog, CatalogDraft};
use tracing::debug;

use crate::error::ContentError;

const RESIDENTS_MANUAL_JSON: &str = include_str!("../catalogs/residents_manual.json");
const NURSING_GUIDE_JSON: &str = include_str!("../catalogs/nursing_guide.json");

/// Anything that can produce a validated catalog.
pub trait CatalogSource: Send + Sync {
    /// Human-readable origin, used in logs and error reports.
    fn describe(&self) -> String;

    /// Read, parse and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the catalog cannot be read, parsed or validated.
    fn load(&self) -> Result<Catalog, ContentError>;
}

/// Parse a JSON catalog draft and validate it.
///
/// # Errors
///
/// Returns `ContentError::Parse` for malformed JSON and
/// `ContentError::Invalid` for a well-formed catalog that breaks an invariant.
pub fn parse_catalog(json: &str) -> Result<Catalog, ContentError> {
    let draft: CatalogDraft = serde_json::from_str(json)?;
    Ok(draft.validate()?)
}

//
// ─── BUILT-IN MANUALS ──────────────────────────────────────────────────────────
//

/// The two manuals shipped inside the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuiltinCatalog {
    /// Training manual in psycho-oncology for psychiatry residents.
    #[default]
    ResidentsManual,
    /// Psychosocial care guide for oncology nurses.
    NursingGuide,
}

impl BuiltinCatalog {
    pub const ALL: [BuiltinCatalog; 2] = [Self::ResidentsManual, Self::NursingGuide];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::ResidentsManual => "residents",
            Self::NursingGuide => "nursing",
        }
    }

    fn json(self) -> &'static str {
        match self {
            Self::ResidentsManual => RESIDENTS_MANUAL_JSON,
            Self::NursingGuide => NURSING_GUIDE_JSON,
        }
    }
}

impl fmt::Display for BuiltinCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BuiltinCatalog {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "residents" | "residents-manual" => Ok(Self::ResidentsManual),
            "nursing" | "nursing-guide" => Ok(Self::NursingGuide),
            other => Err(ContentError::UnknownManual(other.to_string())),
        }
    }
}

impl CatalogSource for BuiltinCatalog {
    fn describe(&self) -> String {
        format!("built-in manual `{}`", self.key())
    }

    fn load(&self) -> Result<Catalog, ContentError> {
        let catalog = parse_catalog(self.json())?;
        debug!(manual = self.key(), sections = catalog.len(), "loaded built-in catalog");
        Ok(catalog)
    }
}

//
// ─── JSON FILE ─────────────────────────────────────────────────────────────────
//

/// A catalog authored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalog {
    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }

    fn load(&self) -> Result<Catalog, ContentError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| ContentError::Io {
            path: self.path.clone(),
            source,
        })?;
        let catalog = parse_catalog(&json)?;
        debug!(path = %self.path.display(), sections = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }
}

//
// ─── IN MEMORY ─────────────────────────────────────────────────────────────────
//

/// A draft built in code, validated on every load. Mostly useful in tests.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    draft: CatalogDraft,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(draft: CatalogDraft) -> Self {
        Self { draft }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn describe(&self) -> String {
        format!("in-memory catalog `{}`", self.draft.title)
    }

    fn load(&self) -> Result<Catalog, ContentError> {
        Ok(self.draft.clone().validate()?)
    }
}
