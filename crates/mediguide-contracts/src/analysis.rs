//! Symptom analysis request and response types.
//!
//! The analysis service is a stand-in for a future external medical API.
//! These types define the boundary: a free-text `SymptomReport` goes in,
//! an `Analysis` with suggested medicines and advice comes back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a single analysis request.
///
/// Generated per invocation and carried through worker logs and the
/// response, so a shell can correlate what it rendered with what it asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub uuid::Uuid);

impl RequestId {
    /// Create a new, unique request ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The user's free-text symptom description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomReport {
    pub text: String,
}

impl SymptomReport {
    /// Construct a report from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Return true if the report is empty or whitespace-only.
    ///
    /// Shells refuse to start an analysis for a blank report; the analyze
    /// button stays disabled until this is false.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One medicine suggestion within an analysis response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedMedicine {
    pub name: String,
    /// Dosage instruction, e.g. "500mg twice daily".
    pub dosage: String,
    /// Optional caution shown with the suggestion.
    pub warning: Option<String>,
}

/// The full response produced by a symptom analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// The request this response answers.
    pub request_id: RequestId,
    pub suggested_medicines: Vec<SuggestedMedicine>,
    /// General advice text rendered below the suggestions.
    pub advice: String,
    /// Wall-clock time the response was produced (UTC).
    pub generated_at: DateTime<Utc>,
}
