//! Errors raised at the crate's fallible edges.
//!
//! The probability engine itself is total over valid inputs; only scenario
//! loading and caller-supplied parameters can fail.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown category '{0}' (expected A, E or T)")]
    UnknownCategory(String),

    #[error("Quantile must be in (0, 1], got {0}")]
    InvalidQuantile(f64),
}

/// Reject quantiles outside `(0, 1]`.
pub fn validate_quantile(q: f64) -> Result<f64, PlanError> {
    if q.is_finite() && q > 0.0 && q <= 1.0 {
        Ok(q)
    } else {
        Err(PlanError::InvalidQuantile(q))
    }
}
