//! Core data model types for checkride.
//!
//! These are the fundamental types the entire checkride system uses to
//! represent evaluation sessions, exercises, and observed behaviors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One of the nine fixed pilot competency areas.
///
/// Variants are declared in lexicographic code order so the derived `Ord`
/// matches the ascending code ordering used for report keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Competency {
    /// Communication.
    Com,
    /// Flight path management, automation.
    Fpa,
    /// Flight path management, manual control.
    Fpm,
    /// Application of knowledge.
    Kno,
    /// Leadership and teamwork.
    Ltw,
    /// Application of procedures and compliance with regulations.
    Pro,
    /// Problem solving and decision making.
    Psd,
    /// Situation awareness and management of information.
    Saw,
    /// Workload management.
    Wlm,
}

impl Competency {
    /// The competency code as it appears on the wire and in reports.
    pub fn code(self) -> &'static str {
        match self {
            Competency::Com => "COM",
            Competency::Fpa => "FPA",
            Competency::Fpm => "FPM",
            Competency::Kno => "KNO",
            Competency::Ltw => "LTW",
            Competency::Pro => "PRO",
            Competency::Psd => "PSD",
            Competency::Saw => "SAW",
            Competency::Wlm => "WLM",
        }
    }
}

impl fmt::Display for Competency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Competency {
    type Err = String;

    // Codes are case-sensitive: "kno" is not a competency.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COM" => Ok(Competency::Com),
            "FPA" => Ok(Competency::Fpa),
            "FPM" => Ok(Competency::Fpm),
            "KNO" => Ok(Competency::Kno),
            "LTW" => Ok(Competency::Ltw),
            "PRO" => Ok(Competency::Pro),
            "PSD" => Ok(Competency::Psd),
            "SAW" => Ok(Competency::Saw),
            "WLM" => Ok(Competency::Wlm),
            other => Err(format!("unknown competency code: {other}")),
        }
    }
}

/// A single checklist entry: one observable behavior instantiated for one
/// student.
///
/// Everything except `is_checked` is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Unique identifier.
    pub id: Uuid,
    /// The canonical OB description text.
    pub text: String,
    /// When the observation row was created.
    pub timestamp: DateTime<Utc>,
    /// Stable OB code (e.g. "OB 5.3"), if the text classified.
    pub ob_code: Option<String>,
    /// Competency this observation counts toward, if classified.
    pub competence: Option<Competency>,
    /// The student being observed.
    pub student_name: String,
    /// Whether the instructor has observed this behavior.
    pub is_checked: bool,
}

/// One graded activity within a session, tagged with a set of competencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier.
    pub id: Uuid,
    /// Human-readable exercise name.
    pub name: String,
    /// When the exercise was created.
    pub date: DateTime<Utc>,
    /// Whether the exercise has been marked complete. Transitions
    /// false -> true once and never reverts.
    pub is_completed: bool,
    /// The competencies selected when the exercise was created.
    pub competences: Vec<Competency>,
    /// Generated checklist, one entry per catalog OB per selected competency.
    pub observations: Vec<Observation>,
}

/// A student enrolled in a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Student name, unique within a session.
    pub name: String,
}

/// One evaluation event spanning one or more students and exercises.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier.
    pub id: Uuid,
    /// When the session was created.
    pub date: DateTime<Utc>,
    /// Enrolled students, in enrollment order.
    pub students: Vec<Student>,
    /// Exercises, in creation order.
    pub exercises: Vec<Exercise>,
}

impl Session {
    /// Whether `name` is enrolled in this session.
    pub fn has_student(&self, name: &str) -> bool {
        self.students.iter().any(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn competency_display_and_parse() {
        assert_eq!(Competency::Kno.to_string(), "KNO");
        assert_eq!(Competency::Wlm.to_string(), "WLM");
        assert_eq!("COM".parse::<Competency>().unwrap(), Competency::Com);
        assert_eq!("FPM".parse::<Competency>().unwrap(), Competency::Fpm);
        assert!("kno".parse::<Competency>().is_err());
        assert!("XYZ".parse::<Competency>().is_err());
    }

    #[test]
    fn competency_ord_is_lexicographic() {
        let mut codes: Vec<Competency> = vec![
            Competency::Wlm,
            Competency::Kno,
            Competency::Com,
            Competency::Saw,
        ];
        codes.sort();
        let as_str: Vec<&str> = codes.iter().map(|c| c.code()).collect();
        assert_eq!(as_str, vec!["COM", "KNO", "SAW", "WLM"]);
    }

    #[test]
    fn competency_serde_uses_code() {
        let json = serde_json::to_string(&Competency::Psd).unwrap();
        assert_eq!(json, "\"PSD\"");
        let back: Competency = serde_json::from_str("\"LTW\"").unwrap();
        assert_eq!(back, Competency::Ltw);
    }

    #[test]
    fn observation_serde_roundtrip() {
        let obs = Observation {
            id: Uuid::new_v4(),
            text: "Engages others in planning".into(),
            timestamp: Utc::now(),
            ob_code: Some("OB 5.3".into()),
            competence: Some(Competency::Ltw),
            student_name: "Student A".into(),
            is_checked: true,
        };
        let json = serde_json::to_string(&obs).unwrap();
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ob_code.as_deref(), Some("OB 5.3"));
        assert_eq!(back.competence, Some(Competency::Ltw));
        assert!(back.is_checked);
    }

    #[test]
    fn session_has_student() {
        let session = Session {
            id: Uuid::new_v4(),
            date: Utc::now(),
            students: vec![Student {
                name: "Student A".into(),
            }],
            exercises: vec![],
        };
        assert!(session.has_student("Student A"));
        assert!(!session.has_student("Student B"));
    }
}
