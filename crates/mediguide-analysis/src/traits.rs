//! The analyzer seam.
//!
//! `SymptomAnalyzer` is the single trait the UI shells depend on. Today the
//! only implementation is the fixed-delay mock in mediguide-data; a real
//! deployment would implement this trait over a medical API client, and no
//! rendering code changes.

use mediguide_contracts::analysis::SymptomReport;

use crate::handle::AnalysisHandle;

/// A service that turns a symptom report into medicine suggestions.
///
/// `analyze()` must return immediately: the actual work happens on the
/// analyzer's own worker, and the response is delivered through the
/// returned [`AnalysisHandle`]. Implementations must answer every report —
/// including blank ones — with a response or a dropped channel; they never
/// panic across the boundary.
pub trait SymptomAnalyzer: Send + Sync {
    /// Start one analysis and return the handle its response arrives on.
    fn analyze(&self, report: &SymptomReport) -> AnalysisHandle;
}
