//! The in-memory session store.

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use uuid::Uuid;

use checkride_core::catalog::generate_observations;
use checkride_core::model::{Competency, Exercise, Observation, Session, Student};
use checkride_core::report::{build_report, StudentReport};

use crate::error::StoreError;

/// Holds every session for the lifetime of the process.
///
/// All methods are synchronous; reports are computed from the live data on
/// every call, so a checklist update is reflected by the next report with no
/// cached state in between.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given students, dated now.
    pub fn create_session(&mut self, students: Vec<Student>) -> Session {
        let session = Session {
            id: Uuid::new_v4(),
            date: Utc::now(),
            students,
            exercises: Vec::new(),
        };
        tracing::info!(session = %session.id, students = session.students.len(), "session created");
        self.sessions.insert(session.id, session.clone());
        session
    }

    /// All sessions, ordered by creation date (then id for ties).
    pub fn list_sessions(&self) -> Vec<&Session> {
        let mut sessions: Vec<&Session> = self.sessions.values().collect();
        sessions.sort_by_key(|s| (s.date, s.id));
        sessions
    }

    /// Number of stored sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Look up a session by id.
    pub fn session(&self, id: Uuid) -> Result<&Session, StoreError> {
        self.sessions.get(&id).ok_or(StoreError::SessionNotFound(id))
    }

    /// Create an exercise inside a session and generate its checklist.
    ///
    /// Rejects a student not enrolled in the session before creating any
    /// state. One observation is instantiated per catalog OB under each
    /// selected competency.
    pub fn create_exercise(
        &mut self,
        session_id: Uuid,
        name: &str,
        student_name: &str,
        competences: Vec<Competency>,
    ) -> Result<Exercise, StoreError> {
        let session = self
            .sessions
            .get_mut(&session_id)
            .ok_or(StoreError::SessionNotFound(session_id))?;

        if !session.has_student(student_name) {
            return Err(StoreError::StudentNotInSession {
                student: student_name.to_string(),
                session: session_id,
            });
        }

        let observations = generate_observations(student_name, &competences);
        let exercise = Exercise {
            id: Uuid::new_v4(),
            name: name.to_string(),
            date: Utc::now(),
            is_completed: false,
            competences,
            observations,
        };
        tracing::info!(
            session = %session_id,
            exercise = %exercise.id,
            student = student_name,
            observations = exercise.observations.len(),
            "exercise created"
        );
        session.exercises.push(exercise.clone());
        Ok(exercise)
    }

    fn exercise_mut(&mut self, exercise_id: Uuid) -> Result<&mut Exercise, StoreError> {
        self.sessions
            .values_mut()
            .flat_map(|s| s.exercises.iter_mut())
            .find(|e| e.id == exercise_id)
            .ok_or(StoreError::ExerciseNotFound(exercise_id))
    }

    /// Toggle a single observation's checked flag.
    pub fn set_checked(
        &mut self,
        exercise_id: Uuid,
        observation_id: Uuid,
        is_checked: bool,
    ) -> Result<Observation, StoreError> {
        let exercise = self.exercise_mut(exercise_id)?;
        let observation = exercise
            .observations
            .iter_mut()
            .find(|o| o.id == observation_id)
            .ok_or(StoreError::ObservationNotFound(observation_id))?;
        observation.is_checked = is_checked;
        Ok(observation.clone())
    }

    /// Mark an exercise completed. Idempotent; completion never reverts.
    pub fn complete_exercise(&mut self, exercise_id: Uuid) -> Result<Exercise, StoreError> {
        let exercise = self.exercise_mut(exercise_id)?;
        exercise.is_completed = true;
        Ok(exercise.clone())
    }

    /// Build the grade report for a session.
    pub fn report(
        &self,
        session_id: Uuid,
        safety_scores: &HashMap<String, i64>,
    ) -> Result<BTreeMap<String, StudentReport>, StoreError> {
        let session = self.session(session_id)?;
        Ok(build_report(session, safety_scores)?)
    }
}
