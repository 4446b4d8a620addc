//! # mediguide-catalog
//!
//! The medicine-catalog snapshot and filter engine for MediGuide.
//!
//! ## Overview
//!
//! This crate provides [`Catalog`], an immutable validated snapshot loaded
//! from a TOML document or built from in-memory entries, and the pure
//! filter in [`filter`] that evaluates a
//! [`FilterQuery`](mediguide_contracts::query::FilterQuery) against it.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use mediguide_catalog::Catalog;
//! use mediguide_contracts::query::FilterQuery;
//!
//! let catalog = Catalog::from_file(Path::new("data/catalog.toml"))?;
//! let results = catalog.filter(&FilterQuery::new().with_text("cro"));
//! ```
//!
//! ## Filter semantics
//!
//! Text, category, and price constraints are ANDed; output preserves
//! catalog order; the filter is total and never fails. See
//! [`filter::entry_matches`] for the per-entry predicate.

pub mod filter;
pub mod snapshot;

pub use filter::{entry_matches, filter};
pub use snapshot::{Catalog, CatalogDocument};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use mediguide_contracts::{
        catalog::{CatalogEntry, EntryId},
        error::MediGuideError,
        query::{FilterQuery, PriceRange},
    };

    use crate::{filter, Catalog};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn entry(id: &str, name: &str, brand: &str, category: &str, price: f64) -> CatalogEntry {
        CatalogEntry {
            id: EntryId::new(id),
            name: name.to_string(),
            brand: brand.to_string(),
            category: category.to_string(),
            price,
            description: format!("{} ({})", name, brand),
        }
    }

    /// The two-entry catalog from the worked filter examples.
    fn example_catalog() -> Vec<CatalogEntry> {
        vec![
            entry("1", "Paracetamol", "Crocin", "Pain Relief", 30.0),
            entry("2", "Cetirizine", "Alerid", "Antihistamine", 45.0),
        ]
    }

    /// A wider catalog for order/monotonicity properties.
    fn wide_catalog() -> Vec<CatalogEntry> {
        vec![
            entry("1", "Paracetamol", "Crocin", "Pain Relief", 30.0),
            entry("2", "Cetirizine", "Alerid", "Antihistamine", 45.0),
            entry("3", "Amoxicillin", "Mox", "Antibiotics", 85.0),
            entry("4", "Ibuprofen", "Brufen", "Pain Relief", 40.0),
            entry("5", "Omeprazole", "Omez", "Antacids", 60.0),
        ]
    }

    fn ids(results: &[&CatalogEntry]) -> Vec<String> {
        results.iter().map(|e| e.id.0.clone()).collect()
    }

    // ── 1. worked examples ────────────────────────────────────────────────────

    /// "cro" matches entry 1 by brand substring, case-insensitively.
    #[test]
    fn test_brand_substring_match_is_case_insensitive() {
        let catalog = example_catalog();
        let query = FilterQuery::new()
            .with_text("cro")
            .with_price_range(PriceRange::new(0.0, 1000.0));

        let results = filter(&catalog, &query);
        assert_eq!(ids(&results), vec!["1"]);
    }

    /// Selecting "Antihistamine" alone yields entry 2.
    #[test]
    fn test_category_selection_restricts_to_members() {
        let catalog = example_catalog();
        let query = FilterQuery::new()
            .with_category("Antihistamine")
            .with_price_range(PriceRange::new(0.0, 1000.0));

        let results = filter(&catalog, &query);
        assert_eq!(ids(&results), vec!["2"]);
    }

    /// Price band [40, 50] excludes entry 1 (price 30) and keeps entry 2.
    #[test]
    fn test_price_band_is_inclusive() {
        let catalog = example_catalog();
        let query = FilterQuery::new().with_price_range(PriceRange::new(40.0, 50.0));

        let results = filter(&catalog, &query);
        assert_eq!(ids(&results), vec!["2"]);
    }

    // ── 2. permissive query is the identity ───────────────────────────────────

    /// Empty text, empty selection, default range: the whole catalog comes
    /// back unchanged, in order.
    #[test]
    fn test_permissive_query_returns_catalog_unchanged() {
        let catalog = wide_catalog();
        let results = filter(&catalog, &FilterQuery::new());

        assert_eq!(results.len(), catalog.len());
        assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let results = filter(&[], &FilterQuery::new().with_text("anything"));
        assert!(results.is_empty());
    }

    // ── 3. output is an ordered sub-sequence ──────────────────────────────────

    /// Whatever the constraints, the result preserves the catalog's
    /// relative order — the filter never reorders.
    #[test]
    fn test_result_preserves_catalog_order() {
        let catalog = wide_catalog();
        let query = FilterQuery::new()
            .with_category("Pain Relief")
            .with_category("Antacids");

        let results = filter(&catalog, &query);
        assert_eq!(ids(&results), vec!["1", "4", "5"]);
    }

    // ── 4. idempotence ────────────────────────────────────────────────────────

    /// Filtering the result again with the same query yields the same
    /// result.
    #[test]
    fn test_filter_is_idempotent_on_its_own_output() {
        let catalog = wide_catalog();
        let query = FilterQuery::new()
            .with_text("o")
            .with_price_range(PriceRange::new(0.0, 70.0));

        let once: Vec<CatalogEntry> = filter(&catalog, &query).into_iter().cloned().collect();
        let twice: Vec<CatalogEntry> = filter(&once, &query).into_iter().cloned().collect();

        assert_eq!(once, twice);
    }

    // ── 5. category monotonicity ──────────────────────────────────────────────

    /// Adding a category to the selection never shrinks the result set
    /// (union semantics over selected labels).
    #[test]
    fn test_adding_a_category_never_shrinks_results() {
        let catalog = wide_catalog();

        let one = FilterQuery::new().with_category("Pain Relief");
        let two = FilterQuery::new()
            .with_category("Pain Relief")
            .with_category("Antibiotics");

        let one_ids = ids(&filter(&catalog, &one));
        let two_results = filter(&catalog, &two);

        assert!(two_results.len() >= one_ids.len());
        for id in &one_ids {
            assert!(
                two_results.iter().any(|e| &e.id.0 == id),
                "entry {} lost after widening the selection",
                id
            );
        }
    }

    // ── 6. inverted price range ───────────────────────────────────────────────

    /// min > max is evaluated as-is and matches nothing.
    #[test]
    fn test_inverted_price_range_matches_nothing() {
        let catalog = wide_catalog();
        let query = FilterQuery::new().with_price_range(PriceRange::new(50.0, 40.0));

        assert!(filter(&catalog, &query).is_empty());
    }

    // ── 7. constraint conjunction ─────────────────────────────────────────────

    /// All three constraints must hold at once; a text match alone does
    /// not survive a non-member category selection.
    #[test]
    fn test_constraints_are_anded() {
        let catalog = wide_catalog();
        let query = FilterQuery::new()
            .with_text("paracetamol")
            .with_category("Antacids");

        assert!(filter(&catalog, &query).is_empty());
    }

    /// An unknown category label is not an error — it is just a selection
    /// no entry belongs to.
    #[test]
    fn test_unknown_category_yields_empty_not_error() {
        let catalog = wide_catalog();
        let query = FilterQuery::new().with_category("Homeopathy");

        assert!(filter(&catalog, &query).is_empty());
    }

    /// Name matching is as case-insensitive as brand matching.
    #[test]
    fn test_name_substring_match_is_case_insensitive() {
        let catalog = wide_catalog();
        let query = FilterQuery::new().with_text("IBUPRO");

        assert_eq!(ids(&filter(&catalog, &query)), vec!["4"]);
    }

    // ── Catalog snapshot ──────────────────────────────────────────────────────

    #[test]
    fn test_duplicate_entry_id_is_rejected() {
        let entries = vec![
            entry("1", "Paracetamol", "Crocin", "Pain Relief", 30.0),
            entry("1", "Cetirizine", "Alerid", "Antihistamine", 45.0),
        ];

        match Catalog::from_entries(entries) {
            Err(MediGuideError::DuplicateEntryId { id }) => assert_eq!(id, "1"),
            other => panic!("expected DuplicateEntryId, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_entries(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }

    /// Categories come back deduplicated, in first-occurrence order.
    #[test]
    fn test_categories_first_occurrence_order() {
        let catalog = Catalog::from_entries(wide_catalog()).unwrap();
        assert_eq!(
            catalog.categories(),
            &["Pain Relief", "Antihistamine", "Antibiotics", "Antacids"]
        );
    }

    #[test]
    fn test_from_toml_str_parses_a_catalog_document() {
        let toml = r#"
            [[entries]]
            id = "med-paracetamol"
            name = "Paracetamol"
            brand = "Crocin"
            category = "Pain Relief"
            price = 30.0
            description = "Used for fever and mild to moderate pain relief."

            [[entries]]
            id = "med-cetirizine"
            name = "Cetirizine"
            brand = "Alerid"
            category = "Antihistamine"
            price = 45.0
            description = "Antiallergic medication for relief from allergies."
        "#;

        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.categories(), &["Pain Relief", "Antihistamine"]);

        let results = catalog.filter(&FilterQuery::new().with_text("alerid"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Cetirizine");
    }

    /// Malformed TOML must produce a `MediGuideError::ConfigError`.
    #[test]
    fn test_toml_parse_error() {
        let bad_toml = r#"
            this is not valid toml ][[[
        "#;

        match Catalog::from_toml_str(bad_toml) {
            Err(MediGuideError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse catalog TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_missing_path_is_config_error() {
        let result = Catalog::from_file(std::path::Path::new("/nonexistent/catalog.toml"));
        match result {
            Err(MediGuideError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read catalog file"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
