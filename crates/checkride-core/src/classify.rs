//! Observation-text classification.
//!
//! Maps free-text observation descriptions to their canonical OB code and
//! competency by exact, case-sensitive lookup against the catalog. Anything
//! that is not byte-identical to a catalog description is unclassified; the
//! caller stores null fields and the observation drops out of grading.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::catalog::{behaviors, COMPETENCIES};
use crate::model::Competency;

/// The canonical identity of a classified observation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Stable OB code, e.g. "OB 6.4".
    pub ob_code: &'static str,
    /// The competency the behavior belongs to.
    pub competence: Competency,
}

static MAPPING: OnceLock<HashMap<&'static str, Classification>> = OnceLock::new();

fn mapping() -> &'static HashMap<&'static str, Classification> {
    MAPPING.get_or_init(|| {
        let mut map = HashMap::new();
        // Catalog order matters: three descriptions are shared between FPA
        // and FPM, and the later insertion (FPM) wins.
        for competency in COMPETENCIES {
            for def in behaviors(competency) {
                map.insert(
                    def.description,
                    Classification {
                        ob_code: def.code,
                        competence: competency,
                    },
                );
            }
        }
        map
    })
}

/// Classify an observation text by exact match against the catalog.
///
/// Returns `None` for any text not verbatim equal to a catalog description;
/// no normalization or fuzzy matching is applied.
pub fn classify(text: &str) -> Option<Classification> {
    mapping().get(text).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_classifies() {
        let c = classify("Engages others in planning").unwrap();
        assert_eq!(c.ob_code, "OB 5.3");
        assert_eq!(c.competence, Competency::Ltw);
    }

    #[test]
    fn extended_year_code() {
        let c = classify("Keeps track of time and fuel").unwrap();
        assert_eq!(c.ob_code, "EY OB 7.8");
        assert_eq!(c.competence, Competency::Saw);
    }

    #[test]
    fn case_deviation_is_unclassified() {
        assert!(classify("engages others in planning").is_none());
    }

    #[test]
    fn whitespace_deviation_is_unclassified() {
        assert!(classify("Engages others in planning ").is_none());
        assert!(classify(" Engages others in planning").is_none());
    }

    #[test]
    fn unknown_text_is_unclassified() {
        assert!(classify("Flies the aircraft upside down").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn shared_descriptions_resolve_to_fpm() {
        // These three texts appear under both FPA and FPM in the catalog;
        // the classifier resolves them to the FPM codes.
        let c = classify(
            "Monitors and detects deviations from the intended flight path and takes appropriate action",
        )
        .unwrap();
        assert_eq!(c.ob_code, "OB 4.2");
        assert_eq!(c.competence, Competency::Fpm);

        let c = classify("Contains the aircraft within the normal flight envelope").unwrap();
        assert_eq!(c.ob_code, "EY OB 4.8");
        assert_eq!(c.competence, Competency::Fpm);
    }
}
