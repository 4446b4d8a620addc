//! Simulated MediGuide data.
//!
//! All data in this module is hardcoded and fictional. No external systems
//! are contacted. This module stands in for the catalog service, hospital
//! availability feed, and account store a production deployment would talk
//! to.

use chrono::Utc;

use mediguide_catalog::Catalog;
use mediguide_contracts::{
    directory::{BedStatus, HospitalBed},
    error::MediGuideResult,
    profile::UserProfile,
};

// ── Medicine catalog (mock) ───────────────────────────────────────────────────

/// The embedded catalog document.
///
/// The selectable category set is derived from this file at load time; it
/// is never hard-coded anywhere else in the workspace.
pub const CATALOG_TOML: &str = include_str!("../data/catalog.toml");

/// Load the embedded mock catalog.
pub fn mock_catalog() -> MediGuideResult<Catalog> {
    Catalog::from_toml_str(CATALOG_TOML)
}

// ── Hospital bed directory (mock) ─────────────────────────────────────────────

/// Return the mock hospital bed directory.
///
/// Availability is fixed; `checked_at` is stamped at call time to mimic a
/// freshly polled feed.
pub fn mock_beds() -> Vec<HospitalBed> {
    let checked_at = Utc::now();
    let beds = [
        ("bed-a", "Bed A", BedStatus::Available),
        ("bed-b", "Bed B", BedStatus::Occupied),
        ("bed-c", "Bed C", BedStatus::Available),
        ("bed-d", "Bed D", BedStatus::Occupied),
        ("bed-e", "Bed E", BedStatus::Available),
        ("bed-f", "Bed F", BedStatus::Occupied),
    ];

    beds.into_iter()
        .map(|(id, name, status)| HospitalBed {
            id: id.to_string(),
            name: name.to_string(),
            status,
            checked_at,
        })
        .collect()
}

// ── User profile (mock) ───────────────────────────────────────────────────────

/// Return the static mock profile shown on the profile screen.
pub fn mock_profile() -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
    }
}

// ── App copy ──────────────────────────────────────────────────────────────────

pub const APP_NAME: &str = "MediGuide";
pub const APP_TAGLINE: &str = "Your Trusted Health Companion";

/// Shown alongside every analysis result, on every shell.
pub const DISCLAIMER: &str = "This app is for informational purposes only and should not \
     replace professional medical advice. Always consult a healthcare provider for medical \
     decisions.";

/// One card in the home screen's "Why Choose MediGuide?" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed feature grid, in display order.
pub const FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "AI-Powered Analysis",
        description: "Advanced medical AI analyzes your symptoms for accurate medicine suggestions",
    },
    FeatureCard {
        title: "Safe & Reliable",
        description: "All suggestions are based on verified medical databases and guidelines",
    },
    FeatureCard {
        title: "Comprehensive Database",
        description: "Access information about thousands of medicines and their uses",
    },
    FeatureCard {
        title: "Detailed Information",
        description: "Get complete details including dosage, warnings, and precautions",
    },
];
