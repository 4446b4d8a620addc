//! # mediguide-analysis
//!
//! The symptom-analysis task boundary for MediGuide.
//!
//! This crate provides:
//! - The [`SymptomAnalyzer`] trait — the seam a real medical-API client
//!   would implement later
//! - The [`AnalysisHandle`] channel receipt and the [`spawn_analysis`]
//!   worker helper
//!
//! The boundary is deliberately explicit: `analyze()` returns a handle at
//! once, the response crosses a channel, and the rendering side only ever
//! polls or waits. Swapping the mock for a real client touches nothing but
//! the trait implementation.

pub mod handle;
pub mod traits;

pub use handle::{spawn_analysis, AnalysisHandle};
pub use traits::SymptomAnalyzer;

// ── Tests ─────────────────────────────────────────────────────────────────────
