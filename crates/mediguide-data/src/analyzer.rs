//! Fixed-delay mock symptom analyzer.
//!
//! Stands in for a future external medical AI API. The response is canned;
//! the delay reproduces the feel of a network round trip so shells exercise
//! their in-flight rendering. No analysis of the report text happens here.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use tracing::info;

use mediguide_analysis::{spawn_analysis, AnalysisHandle, SymptomAnalyzer};
use mediguide_contracts::analysis::{Analysis, RequestId, SuggestedMedicine, SymptomReport};

/// The delay the original mock uses before answering.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// A `SymptomAnalyzer` that answers every report with the canned response
/// after a fixed delay.
pub struct MockAnalyzer {
    delay: Duration,
}

impl MockAnalyzer {
    /// Mock analyzer with the standard 2 second delay.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_DELAY)
    }

    /// Mock analyzer with a custom delay. Tests use a short one.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SymptomAnalyzer for MockAnalyzer {
    fn analyze(&self, report: &SymptomReport) -> AnalysisHandle {
        let request_id = RequestId::new();
        info!(
            request_id = %request_id,
            blank = report.is_blank(),
            delay_ms = self.delay.as_millis() as u64,
            "mock analysis requested"
        );

        let delay = self.delay;
        let report = report.clone();
        spawn_analysis(request_id, move || {
            thread::sleep(delay);
            canned_analysis(request_id, &report)
        })
    }
}

/// Build the canned response for `report`.
///
/// Non-blank reports get the fixed suggestion pair; blank reports (only
/// reachable when a caller bypasses the shell's disabled button) get
/// generic advice with no suggestions.
pub fn canned_analysis(request_id: RequestId, report: &SymptomReport) -> Analysis {
    if report.is_blank() {
        return Analysis {
            request_id,
            suggested_medicines: vec![],
            advice: "Please describe your symptoms to receive suggestions. If you feel \
                     unwell, consult a healthcare professional."
                .to_string(),
            generated_at: Utc::now(),
        };
    }

    Analysis {
        request_id,
        suggested_medicines: vec![
            SuggestedMedicine {
                name: "Paracetamol".to_string(),
                dosage: "500mg twice daily".to_string(),
                warning: Some("Take after food".to_string()),
            },
            SuggestedMedicine {
                name: "Ibuprofen".to_string(),
                dosage: "400mg as needed".to_string(),
                warning: Some("Not recommended for stomach ulcer patients".to_string()),
            },
        ],
        advice: "Please ensure to rest well and stay hydrated. If symptoms persist for \
                 more than 3 days, consult a healthcare professional."
            .to_string(),
        generated_at: Utc::now(),
    }
}
