//! # mediguide-contracts
//!
//! Shared types and contracts for the MediGuide core.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod analysis;
pub mod catalog;
pub mod directory;
pub mod error;
pub mod profile;
pub mod query;

#[cfg(test)]
mod tests {
    use super::*;
    use analysis::RequestId;
    use directory::{BedStatus, BedSummary, HospitalBed};
    use error::MediGuideError;
    use profile::{ProfileMenuItem, UserProfile};
    use query::{CategorySelection, FilterQuery, PriceRange};

    // ── CategorySelection ────────────────────────────────────────────────────

    #[test]
    fn category_selection_select_and_contains() {
        let mut selection = CategorySelection::default();
        assert!(selection.is_empty());
        assert!(!selection.contains("Pain Relief"));

        selection.select("Pain Relief");
        assert!(selection.contains("Pain Relief"));
        assert!(!selection.contains("Antacids"));

        selection.select("Antacids");
        assert!(selection.contains("Pain Relief"));
        assert!(selection.contains("Antacids"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn category_selection_duplicate_select_is_idempotent() {
        let mut selection = CategorySelection::default();
        selection.select("Antibiotics");
        selection.select("Antibiotics");

        // HashSet semantics: duplicates are silently dropped.
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn category_selection_toggle_is_an_involution() {
        let mut selection = CategorySelection::default();

        selection.toggle("Antihistamine");
        assert!(selection.contains("Antihistamine"));

        selection.toggle("Antihistamine");
        assert!(!selection.contains("Antihistamine"));
        assert!(selection.is_empty());
    }

    #[test]
    fn category_selection_all_returns_all_selected() {
        let mut selection = CategorySelection::default();
        selection.select("a");
        selection.select("b");
        selection.select("c");

        let names: std::collections::HashSet<&str> = selection.all().collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains("a"));
        assert!(names.contains("b"));
        assert!(names.contains("c"));
    }

    // ── PriceRange ───────────────────────────────────────────────────────────

    #[test]
    fn price_range_default_covers_all_prices() {
        let range = PriceRange::default();
        assert!(range.contains(0.0));
        assert!(range.contains(30.0));
        assert!(range.contains(1_000_000.0));
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let range = PriceRange::new(40.0, 50.0);
        assert!(range.contains(40.0));
        assert!(range.contains(45.0));
        assert!(range.contains(50.0));
        assert!(!range.contains(39.99));
        assert!(!range.contains(50.01));
    }

    #[test]
    fn price_range_inverted_bounds_match_nothing() {
        // min > max is evaluated as-is, not reordered.
        let range = PriceRange::new(50.0, 40.0);
        assert!(!range.contains(45.0));
        assert!(!range.contains(40.0));
        assert!(!range.contains(50.0));
    }

    // ── FilterQuery builder ──────────────────────────────────────────────────

    #[test]
    fn filter_query_builder_assembles_all_constraints() {
        let query = FilterQuery::new()
            .with_text("cro")
            .with_category("Pain Relief")
            .with_price_range(PriceRange::new(0.0, 100.0));

        assert_eq!(query.text, "cro");
        assert!(query.categories.contains("Pain Relief"));
        assert!(query.price_range.contains(100.0));
        assert!(!query.price_range.contains(100.5));
    }

    #[test]
    fn filter_query_serde_round_trips() {
        let query = FilterQuery::new()
            .with_text("para")
            .with_category("Antacids")
            .with_price_range(PriceRange::new(10.0, 90.0));

        let json = serde_json::to_string(&query).unwrap();
        let decoded: FilterQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(query, decoded);
    }

    // ── RequestId ────────────────────────────────────────────────────────────

    #[test]
    fn request_id_new_produces_unique_values() {
        let ids: Vec<RequestId> = (0..100).map(|_| RequestId::new()).collect();

        // All 100 IDs should be distinct.
        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── SymptomReport ────────────────────────────────────────────────────────

    #[test]
    fn symptom_report_blank_detection() {
        assert!(analysis::SymptomReport::new("").is_blank());
        assert!(analysis::SymptomReport::new("   \n\t").is_blank());
        assert!(!analysis::SymptomReport::new("headache and mild fever").is_blank());
    }

    // ── BedSummary ───────────────────────────────────────────────────────────

    fn bed(id: &str, status: BedStatus) -> HospitalBed {
        HospitalBed {
            id: id.to_string(),
            name: format!("Bed {}", id),
            status,
            checked_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn bed_summary_counts_availability() {
        let beds = vec![
            bed("a", BedStatus::Available),
            bed("b", BedStatus::Occupied),
            bed("c", BedStatus::Available),
        ];

        let summary = BedSummary::of(&beds);
        assert_eq!(summary.available, 2);
        assert_eq!(summary.occupied, 1);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn bed_summary_of_empty_directory() {
        let summary = BedSummary::of(&[]);
        assert_eq!(summary, BedSummary::default());
        assert_eq!(summary.total(), 0);
    }

    // ── Profile ──────────────────────────────────────────────────────────────

    #[test]
    fn profile_initials() {
        let profile = UserProfile {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
        };
        assert_eq!(profile.initials(), "JD");
    }

    #[test]
    fn profile_menu_order_and_copy() {
        let titles: Vec<&str> = ProfileMenuItem::ALL.iter().map(|m| m.title()).collect();
        assert_eq!(
            titles,
            vec!["Settings", "History", "Notifications", "Help & Support"]
        );
        assert_eq!(
            ProfileMenuItem::History.subtitle(),
            "View your symptom check history"
        );
    }

    // ── MediGuideError display messages ──────────────────────────────────────

    #[test]
    fn error_config_error_display() {
        let err = MediGuideError::ConfigError {
            reason: "missing field `price`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing field `price`"));
    }

    #[test]
    fn error_duplicate_entry_id_display() {
        let err = MediGuideError::DuplicateEntryId {
            id: "med-paracetamol".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("duplicate catalog entry id"));
        assert!(msg.contains("med-paracetamol"));
    }

    #[test]
    fn error_analysis_failed_display() {
        let err = MediGuideError::AnalysisFailed {
            reason: "worker disconnected".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("symptom analysis failed"));
        assert!(msg.contains("worker disconnected"));
    }
}
