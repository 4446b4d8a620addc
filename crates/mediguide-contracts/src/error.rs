//! Error types for the MediGuide core.
//!
//! All fallible operations in the workspace return `MediGuideResult<T>`.
//! The catalog filter itself is total and never produces an error; these
//! variants cover data loading and the analysis channel boundary.

use thiserror::Error;

/// The unified error type for the MediGuide core.
#[derive(Debug, Error)]
pub enum MediGuideError {
    /// A catalog data document could not be read or parsed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// Two catalog entries were loaded with the same ID.
    ///
    /// IDs must be unique within a catalog snapshot; this is rejected at
    /// construction time so a filter never observes a duplicate.
    #[error("duplicate catalog entry id '{id}'")]
    DuplicateEntryId { id: String },

    /// The symptom-analysis worker went away before delivering a response.
    #[error("symptom analysis failed: {reason}")]
    AnalysisFailed { reason: String },
}

/// Convenience alias used throughout the MediGuide crates.
pub type MediGuideResult<T> = Result<T, MediGuideError>;
