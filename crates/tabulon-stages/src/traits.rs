//! Stage trait + common error type.
//!
//! The view engine walks the stages in pipeline order (filter → sort →
//! page) on every state change; export consumes the sorted order out of
//! band.
//!
//! Invariants:
//! - Stages must be deterministic given the same inputs.
//! - Stages never mutate records; derived sets are index vectors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageError {
    #[error("filter error: {0}")]
    Filter(String),

    #[error("sort error: {0}")]
    Sort(String),

    #[error("page error: {0}")]
    Page(String),

    #[error("export error: {0}")]
    Export(String),
}

/// Trait that all stages implement.
pub trait Stage {
    /// Human-readable stage name (stable), used for diagnostics.
    fn name(&self) -> &'static str;
}
