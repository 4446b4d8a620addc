//! Medicine catalog entry types.
//!
//! A catalog is a static in-memory snapshot: entries are created once at
//! load time and never mutate. The snapshot type itself (with its
//! uniqueness validation and derived category set) lives in
//! mediguide-catalog; this module only defines the record.

use serde::{Deserialize, Serialize};

/// Stable, unique identifier for a catalog entry.
///
/// IDs come from the catalog data document and are opaque to the filter;
/// uniqueness within a snapshot is enforced at load time.
/// Example: EntryId("med-paracetamol")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub String);

impl EntryId {
    /// Construct an entry ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One medicine record in the catalog.
///
/// The `category` label is a free-form string; the set of selectable
/// categories is derived from the catalog contents at load time rather
/// than fixed in an enum, so new data never requires a code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique within the snapshot.
    pub id: EntryId,
    /// Display name, e.g. "Paracetamol". Non-empty.
    pub name: String,
    /// Manufacturer/brand name, e.g. "Crocin". May be empty.
    pub brand: String,
    /// Free-form category label, e.g. "Pain Relief".
    pub category: String,
    /// Retail price. Non-negative.
    pub price: f64,
    /// Free-text description shown on the entry card.
    pub description: String,
}
