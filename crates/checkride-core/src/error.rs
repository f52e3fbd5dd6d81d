//! Grading error types.
//!
//! Defined in `checkride-core` so collaborators (store, HTTP layer) can
//! classify failures into validation responses without string matching.

use thiserror::Error;

/// Errors that can occur while grading a session.
#[derive(Debug, Error)]
pub enum GradingError {
    /// A supplied safety score was outside the 1..=5 grade scale.
    #[error("invalid safety score {value} for student '{student}': must be between 1 and 5")]
    InvalidSafetyScore { student: String, value: i64 },
}
