//! The catalog filter: pure predicate evaluation over an entry sequence.
//!
//! Evaluation per entry:
//!
//! 1. Text test — `query.text` matched case-insensitively as a substring
//!    against `name` and `brand`; either field matching passes. Empty text
//!    passes everything.
//! 2. Category test — passes if the selection is empty or the entry's
//!    category is a selected label.
//! 3. Price test — inclusive `min <= price <= max`, evaluated exactly as
//!    given (an inverted range matches nothing).
//!
//! The three tests are ANDed. The filter is a total, side-effect-free
//! function of its inputs: it never mutates the catalog, never sorts, and
//! never fails — malformed constraints produce empty or permissive match
//! sets, not errors.

use tracing::debug;

use mediguide_contracts::{
    catalog::CatalogEntry,
    query::{CategorySelection, FilterQuery},
};

/// Return true if `entry` satisfies every constraint in `query`.
pub fn entry_matches(entry: &CatalogEntry, query: &FilterQuery) -> bool {
    matches_text(entry, &query.text)
        && matches_category(entry, &query.categories)
        && query.price_range.contains(entry.price)
}

/// Produce the ordered sub-sequence of `entries` matching `query`.
///
/// The result preserves the relative order of `entries` (stable filter,
/// never a sort) and borrows from the input slice — the catalog is never
/// cloned or mutated. Safe to call on every keystroke.
pub fn filter<'a>(entries: &'a [CatalogEntry], query: &FilterQuery) -> Vec<&'a CatalogEntry> {
    let matched: Vec<&CatalogEntry> = entries
        .iter()
        .filter(|entry| entry_matches(entry, query))
        .collect();

    debug!(
        total = entries.len(),
        matched = matched.len(),
        text = %query.text,
        selected_categories = query.categories.len(),
        "catalog filtered"
    );

    matched
}

/// Case-insensitive substring test against name and brand.
fn matches_text(entry: &CatalogEntry, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    entry.name.to_lowercase().contains(&needle) || entry.brand.to_lowercase().contains(&needle)
}

/// Empty selection means no restriction; otherwise exact label membership.
fn matches_category(entry: &CatalogEntry, selection: &CategorySelection) -> bool {
    selection.is_empty() || selection.contains(&entry.category)
}
