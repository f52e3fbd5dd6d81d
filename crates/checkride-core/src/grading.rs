//! The grading engine: checked-fraction scoring on the 1..=5 grade scale.
//!
//! HOW MANY and HOW OFTEN are both the bucketed fraction of checked
//! observations for one competency. The two named sub-scores use the same
//! formula over the same filtered set and are therefore always equal; the
//! duplication is part of the grading scheme's published behavior, not an
//! implementation accident to be differentiated.

use serde::{Deserialize, Serialize};

use crate::model::{Competency, Observation};

/// The grade scale bands:
/// 1 = <40% (Ineffective), 2 = 40-59% (Minimum Acceptable),
/// 3 = 60-74% (Adequate), 4 = 75-89% (Effective), 5 = 90%+ (Exemplary).
pub fn bucket(fraction: f64) -> u8 {
    if fraction >= 0.90 {
        5
    } else if fraction >= 0.75 {
        4
    } else if fraction >= 0.60 {
        3
    } else if fraction >= 0.40 {
        2
    } else {
        1
    }
}

/// The checked fraction of `observations` under `competence`, bucketed.
///
/// Zero observations for the competency is not an error: it grades 1, the
/// "no data" floor.
fn checked_fraction_score(observations: &[Observation], competence: Competency) -> u8 {
    let total = observations
        .iter()
        .filter(|o| o.competence == Some(competence))
        .count();
    if total == 0 {
        return 1;
    }
    let checked = observations
        .iter()
        .filter(|o| o.competence == Some(competence) && o.is_checked)
        .count();
    bucket(checked as f64 / total as f64)
}

/// HOW MANY: how many of the competency's behaviors were observed.
pub fn how_many(observations: &[Observation], competence: Competency) -> u8 {
    checked_fraction_score(observations, competence)
}

/// HOW OFTEN: how often the competency's behaviors were observed.
///
/// Same formula as [`how_many`]; the two always agree.
pub fn how_often(observations: &[Observation], competence: Competency) -> u8 {
    checked_fraction_score(observations, competence)
}

/// The grade for one student in one competency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyScore {
    pub how_many: u8,
    pub how_often: u8,
    pub safety_score: u8,
    pub final_grade: u8,
}

/// Grade one competency from a student's full observation list.
///
/// `safety_score` must already be validated to 1..=5; the final grade is the
/// worst of the three components.
pub fn score(
    observations: &[Observation],
    competence: Competency,
    safety_score: u8,
) -> CompetencyScore {
    let how_many = how_many(observations, competence);
    let how_often = how_often(observations, competence);
    CompetencyScore {
        how_many,
        how_often,
        safety_score,
        final_grade: how_many.min(how_often).min(safety_score),
    }
}
