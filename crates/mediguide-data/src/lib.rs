//! # mediguide-data
//!
//! Reference data crate for the MediGuide core.
//!
//! Provides everything the UI shells consume that a production deployment
//! would source externally:
//!
//! - the embedded mock medicine catalog (TOML, loaded through
//!   `mediguide-catalog` so the category set derives from the data)
//! - the mock hospital bed directory
//! - the static user profile and app copy
//! - [`MockAnalyzer`], the fixed-delay stand-in for the medical AI API
//!
//! All data is hardcoded and fictional. No external API calls are made.

pub mod analyzer;
pub mod mock_data;

pub use analyzer::{canned_analysis, MockAnalyzer, DEFAULT_DELAY};
pub use mock_data::{
    mock_beds, mock_catalog, mock_profile, FeatureCard, APP_NAME, APP_TAGLINE, CATALOG_TOML,
    DISCLAIMER, FEATURES,
};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mediguide_analysis::SymptomAnalyzer;
    use mediguide_contracts::{
        analysis::{RequestId, SymptomReport},
        directory::BedSummary,
        query::{FilterQuery, PriceRange},
    };

    use crate::{analyzer, mock_data, MockAnalyzer};

    // ── Embedded catalog ──────────────────────────────────────────────────────

    /// The embedded document parses and carries the full mock inventory.
    #[test]
    fn test_mock_catalog_loads() {
        let catalog = mock_data::mock_catalog().unwrap();
        assert_eq!(catalog.len(), 10);
    }

    /// Category chips derive from the data file, in first-occurrence
    /// order — the same four the search screen has always offered.
    #[test]
    fn test_mock_catalog_categories() {
        let catalog = mock_data::mock_catalog().unwrap();
        assert_eq!(
            catalog.categories(),
            &["Pain Relief", "Antihistamine", "Antibiotics", "Antacids"]
        );
    }

    /// The worked example still holds against the full mock catalog:
    /// "cro" matches only the Crocin-branded entry.
    #[test]
    fn test_mock_catalog_brand_search() {
        let catalog = mock_data::mock_catalog().unwrap();
        let results = catalog.filter(&FilterQuery::new().with_text("cro"));

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Paracetamol");
        assert_eq!(results[0].brand, "Crocin");
    }

    #[test]
    fn test_mock_catalog_price_band() {
        let catalog = mock_data::mock_catalog().unwrap();
        let results = catalog.filter(&FilterQuery::new().with_price_range(PriceRange::new(40.0, 50.0)));

        // Cetirizine (45), Ibuprofen (40), Famotidine (48) — catalog order.
        let names: Vec<&str> = results.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Cetirizine", "Ibuprofen", "Famotidine"]);
    }

    // ── Bed directory ─────────────────────────────────────────────────────────

    #[test]
    fn test_mock_beds_summary() {
        let beds = mock_data::mock_beds();
        let summary = BedSummary::of(&beds);

        assert_eq!(summary.total(), 6);
        assert_eq!(summary.available, 3);
        assert_eq!(summary.occupied, 3);
    }

    // ── Mock analyzer ─────────────────────────────────────────────────────────

    /// A short-delay analyzer delivers the canned suggestion pair.
    #[test]
    fn test_mock_analyzer_delivers_canned_response() {
        let analyzer = MockAnalyzer::with_delay(Duration::from_millis(10));
        let report = SymptomReport::new("headache and mild fever since yesterday");

        let analysis = analyzer.analyze(&report).wait().unwrap();

        assert_eq!(analysis.suggested_medicines.len(), 2);
        assert_eq!(analysis.suggested_medicines[0].name, "Paracetamol");
        assert_eq!(analysis.suggested_medicines[1].name, "Ibuprofen");
        assert!(analysis.advice.contains("rest well and stay hydrated"));
    }

    /// Blank reports get generic advice and no suggestions.
    #[test]
    fn test_canned_analysis_for_blank_report() {
        let analysis =
            analyzer::canned_analysis(RequestId::new(), &SymptomReport::new("   "));

        assert!(analysis.suggested_medicines.is_empty());
        assert!(analysis.advice.contains("describe your symptoms"));
    }

    // ── App copy ──────────────────────────────────────────────────────────────

    #[test]
    fn test_feature_grid_order() {
        let titles: Vec<&str> = mock_data::FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "AI-Powered Analysis",
                "Safe & Reliable",
                "Comprehensive Database",
                "Detailed Information"
            ]
        );
    }
}
