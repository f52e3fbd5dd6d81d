//! The report assembler: per-student, per-competency grade reports.
//!
//! Output ordering is deterministic: student and competency keys are sorted
//! (BTreeMap), observation lists stay in first-seen order. Identical inputs
//! serialize byte-identically.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::GradingError;
use crate::grading;
use crate::model::{Competency, Observation, Session};

/// Safety score used when a student has no entry in the supplied map.
pub const DEFAULT_SAFETY_SCORE: u8 = 5;

/// An observation as listed under a competency grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSummary {
    pub text: String,
    pub ob_code: Option<String>,
}

/// An observation the instructor never checked off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncheckedObservation {
    pub text: String,
    pub ob_code: Option<String>,
    pub competence: Option<Competency>,
}

/// The grade block for one competency in a student's report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyGrade {
    pub how_many: u8,
    pub how_often: u8,
    pub safety_score: u8,
    pub final_grade: u8,
    /// Deduplicated observations behind this grade, in first-seen order.
    pub observations: Vec<ObservationSummary>,
}

/// One student's full report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentReport {
    /// Grades keyed by competency code, ascending.
    pub report: BTreeMap<Competency, CompetencyGrade>,
    /// Every unchecked observation for the student, across all competencies.
    pub unchecked_observations: Vec<UncheckedObservation>,
}

/// Resolve and validate one student's safety score.
fn safety_score_for(
    safety_scores: &HashMap<String, i64>,
    student: &str,
) -> Result<u8, GradingError> {
    match safety_scores.get(student) {
        None => Ok(DEFAULT_SAFETY_SCORE),
        Some(&value) if (1..=5).contains(&value) => Ok(value as u8),
        Some(&value) => Err(GradingError::InvalidSafetyScore {
            student: student.to_string(),
            value,
        }),
    }
}

/// Build the full session report.
///
/// For each student: collect their observations across every exercise, grade
/// each competency that actually has observations (nominally selected
/// competencies with zero rows never appear), and list all unchecked
/// observations. Students missing from `safety_scores` default to
/// [`DEFAULT_SAFETY_SCORE`]; out-of-range entries are rejected.
pub fn build_report(
    session: &Session,
    safety_scores: &HashMap<String, i64>,
) -> Result<BTreeMap<String, StudentReport>, GradingError> {
    let mut full_report = BTreeMap::new();

    for student in &session.students {
        let safety_score = safety_score_for(safety_scores, &student.name)?;

        let observations: Vec<Observation> = session
            .exercises
            .iter()
            .flat_map(|e| e.observations.iter())
            .filter(|o| o.student_name == student.name)
            .cloned()
            .collect();

        let evaluated: HashSet<Competency> =
            observations.iter().filter_map(|o| o.competence).collect();

        let unchecked_observations: Vec<UncheckedObservation> = observations
            .iter()
            .filter(|o| !o.is_checked)
            .map(|o| UncheckedObservation {
                text: o.text.clone(),
                ob_code: o.ob_code.clone(),
                competence: o.competence,
            })
            .collect();

        let mut report = BTreeMap::new();
        for competence in evaluated {
            let score = grading::score(&observations, competence, safety_score);

            let mut seen: HashSet<(&str, Option<&str>, Competency)> = HashSet::new();
            let mut comp_observations = Vec::new();
            for o in observations.iter().filter(|o| o.competence == Some(competence)) {
                let key = (o.text.as_str(), o.ob_code.as_deref(), competence);
                if seen.insert(key) {
                    comp_observations.push(ObservationSummary {
                        text: o.text.clone(),
                        ob_code: o.ob_code.clone(),
                    });
                }
            }

            report.insert(
                competence,
                CompetencyGrade {
                    how_many: score.how_many,
                    how_often: score.how_often,
                    safety_score,
                    final_grade: score.final_grade,
                    observations: comp_observations,
                },
            );
        }

        tracing::debug!(
            student = %student.name,
            competencies = report.len(),
            unchecked = unchecked_observations.len(),
            "assembled student report"
        );

        full_report.insert(
            student.name.clone(),
            StudentReport {
                report,
                unchecked_observations,
            },
        );
    }

    Ok(full_report)
}
