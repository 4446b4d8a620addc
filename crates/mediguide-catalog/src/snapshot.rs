//! The validated catalog snapshot.
//!
//! A `Catalog` is built once — from in-memory entries or from a TOML
//! document — and never mutates afterwards. Construction enforces the one
//! catalog invariant (entry IDs are unique) and derives the selectable
//! category set, so every later filter call runs against known-good data.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use mediguide_contracts::{
    catalog::CatalogEntry,
    error::{MediGuideError, MediGuideResult},
    query::FilterQuery,
};

use crate::filter;

/// The top-level structure deserialized from a TOML catalog document.
///
/// Example:
/// ```toml
/// [[entries]]
/// id = "med-paracetamol"
/// name = "Paracetamol"
/// brand = "Crocin"
/// category = "Pain Relief"
/// price = 30.0
/// description = "Used for fever and mild to moderate pain relief."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Ordered list of entries. Catalog order is this declaration order.
    pub entries: Vec<CatalogEntry>,
}

/// An immutable, validated catalog snapshot.
///
/// The snapshot owns its entries in insertion order, which is the order
/// every filter result preserves. The distinct category labels are derived
/// from the entries at construction time in first-occurrence order —
/// replacing the catalog means constructing a new snapshot, so the derived
/// set can never go stale.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    categories: Vec<String>,
}

impl Catalog {
    /// Build a snapshot from entries already in memory.
    ///
    /// Returns `MediGuideError::DuplicateEntryId` if two entries share an
    /// ID. An empty entry list is a valid (empty) catalog.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> MediGuideResult<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.0.as_str()) {
                return Err(MediGuideError::DuplicateEntryId {
                    id: entry.id.0.clone(),
                });
            }
        }

        let categories = derive_categories(&entries);

        debug!(
            entries = entries.len(),
            categories = categories.len(),
            "catalog snapshot constructed"
        );

        Ok(Self { entries, categories })
    }

    /// Parse `s` as a TOML catalog document and build a snapshot.
    ///
    /// Returns `MediGuideError::ConfigError` if the TOML is malformed or
    /// does not match the expected `CatalogDocument` schema.
    pub fn from_toml_str(s: &str) -> MediGuideResult<Self> {
        let document: CatalogDocument =
            toml::from_str(s).map_err(|e| MediGuideError::ConfigError {
                reason: format!("failed to parse catalog TOML: {}", e),
            })?;
        Self::from_entries(document.entries)
    }

    /// Read the file at `path` and parse it as a TOML catalog document.
    ///
    /// Returns `MediGuideError::ConfigError` if the file cannot be read or
    /// its contents are not a valid catalog document.
    pub fn from_file(path: &Path) -> MediGuideResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MediGuideError::ConfigError {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// All entries, in catalog order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of entries in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The distinct category labels, in first-occurrence order.
    ///
    /// This is the set UI shells build their category chips from; it is
    /// never hard-coded, so a new label in the data file shows up as a new
    /// chip rather than a silently dead filter.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Apply `query` to this snapshot. See [`crate::filter::filter`].
    pub fn filter(&self, query: &FilterQuery) -> Vec<&CatalogEntry> {
        filter::filter(&self.entries, query)
    }
}

/// Collect distinct category labels in first-occurrence order.
fn derive_categories(entries: &[CatalogEntry]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut categories = Vec::new();
    for entry in entries {
        if seen.insert(entry.category.as_str()) {
            categories.push(entry.category.clone());
        }
    }
    categories
}
