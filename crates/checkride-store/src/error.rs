//! Store error types.

use thiserror::Error;
use uuid::Uuid;

use checkride_core::error::GradingError;

/// Errors that can occur when operating on stored sessions.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No session with the given id.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// No exercise with the given id in any session.
    #[error("exercise not found: {0}")]
    ExerciseNotFound(Uuid),

    /// No observation with the given id under the given exercise.
    #[error("observation not found: {0}")]
    ObservationNotFound(Uuid),

    /// The named student is not enrolled in the session.
    #[error("student '{student}' not found in session {session}")]
    StudentNotInSession { student: String, session: Uuid },

    /// Report grading rejected the supplied input.
    #[error(transparent)]
    Grading(#[from] GradingError),
}

impl StoreError {
    /// Returns `true` if this error means a referenced object does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::SessionNotFound(_)
                | StoreError::ExerciseNotFound(_)
                | StoreError::ObservationNotFound(_)
        )
    }
}
