//! The competency catalog: static, process-wide observable-behavior data.
//!
//! For each of the nine competencies this module holds the ordered list of
//! canonical observable behaviors (OBs), each with its stable code. The
//! catalog drives exercise generation (which checklist rows to instantiate)
//! and implicitly defines the set of valid OB codes.
//!
//! Codes follow the ICAO numbering; "EY OB x.y" marks extended-year variants.

use chrono::Utc;
use uuid::Uuid;

use crate::model::{Competency, Observation};

/// A canonical observable behavior: stable code plus description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObDefinition {
    /// Stable OB code, e.g. "OB 5.3" or "EY OB 7.8".
    pub code: &'static str,
    /// Canonical description text. Classification is exact-match on this.
    pub description: &'static str,
}

const fn ob(code: &'static str, description: &'static str) -> ObDefinition {
    ObDefinition { code, description }
}

/// All nine competencies in catalog order.
///
/// This is the order the original evaluation tables list them in, and the
/// order classifier entries are inserted in (later competencies win for
/// descriptions shared between FPA and FPM).
pub const COMPETENCIES: [Competency; 9] = [
    Competency::Kno,
    Competency::Ltw,
    Competency::Psd,
    Competency::Saw,
    Competency::Wlm,
    Competency::Pro,
    Competency::Com,
    Competency::Fpa,
    Competency::Fpm,
];

const KNO: &[ObDefinition] = &[
    ob("OB 0.1", "Demonstrates knowledge and understanding of relevant information, operating instructions, aircraft systems and the operating environment"),
    ob("OB 0.2", "Demonstrates practical and applicable knowledge of limitations and systems and their interaction"),
    ob("OB 0.3", "Demonstrates the required knowledge of published operating instructions"),
    ob("OB 0.4", "Demonstrates appropriate knowledge of the air traffic environment and the operational infrastructure (including air traffic routings, weather, and NOTAMs)"),
    ob("OB 0.5", "Demonstrates appropriate knowledge of applicable legislation"),
    ob("OB 0.6", "Knows where to source required information"),
    ob("OB 0.7", "Demonstrates a positive interest in acquiring knowledge"),
    ob("OB 0.8", "Is able to apply knowledge effectively"),
];

const LTW: &[ObDefinition] = &[
    ob("OB 5.1", "Influences others to contribute to a shared purpose. Collaborates to accomplish the goals of the team"),
    ob("OB 5.2", "Encourages team participation and open communication"),
    ob("OB 5.3", "Engages others in planning"),
    ob("OB 5.4", "Demonstrates initiative and provides direction when required"),
    ob("OB 5.5", "Considers inputs from others"),
    ob("OB 5.6", "Gives and receives feedback constructively and admits mistakes"),
    ob("OB 5.7", "Addresses and resolves conflicts and disagreements in a constructive manner"),
    ob("OB 5.8", "Exercises decisive leadership when required"),
    ob("OB 5.9", "Uses initiative, gives direction and takes responsibility when required. Accepts responsibility for decisions and actions"),
    ob("OB 5.10", "Carries out instructions when directed"),
    ob("OB 5.11", "Applies effective intervention strategies to resolve identified deviations"),
    ob("OB 5.12", "Manages cultural and language challenges, as applicable"),
    ob("EY OB 5.13", "Confidently says and does what is important for safety, resolving deviations identified while monitoring using appropriate escalation of communication"),
    ob("EY OB 5.14", "Demonstrates empathy, respect and tolerance for other people"),
];

const PSD: &[ObDefinition] = &[
    ob("OB 6.1", "Identifies, assesses and manages threats and errors in a timely manner"),
    ob("OB 6.2", "Seeks accurate and adequate information from appropriate sources"),
    ob("OB 6.3", "Identifies and verifies what and why things have gone wrong, if appropriate"),
    ob("OB 6.4", "Perseveres in working through problems whilst prioritising safety"),
    ob("OB 6.5", "Identifies and considers appropriate options"),
    ob("OB 6.6", "Applies appropriate and timely decision-making techniques"),
    ob("OB 6.7", "Monitors, reviews and adapts decisions as required"),
    ob("OB 6.8", "Adapts when faced with situations where no guidance or procedure exists"),
    ob("OB 6.9", "Demonstrates resilience when encountering an unexpected event"),
    ob("EY OB 6.10", "Considers risks but does not take unnecessary risks"),
];

const SAW: &[ObDefinition] = &[
    ob("OB 7.1", "Monitors and assesses the state of the aeroplane and its systems"),
    ob("OB 7.2", "Monitors and assesses the aeroplane's energy state, and its anticipated flight path"),
    ob("OB 7.3", "Monitors and assesses the general environment as it may affect the operation"),
    ob("OB 7.4", "Validates the accuracy of information and checks for gross errors"),
    ob("OB 7.5", "Maintains awareness of the people involved in or affected by the operation and their capacity to perform as expected"),
    ob("OB 7.6", "Develops effective contingency plans for threats, associated risks and potential errors"),
    ob("OB 7.7", "Responds to indications of reduced situation awareness"),
    ob("EY OB 7.8", "Keeps track of time and fuel"),
];

const WLM: &[ObDefinition] = &[
    ob("OB 8.1", "Exercises self-control in all situations"),
    ob("OB 8.2", "Plans, prioritises and schedules appropriate tasks effectively"),
    ob("OB 8.3", "Manages time efficiently when carrying out tasks"),
    ob("OB 8.4", "Offers and gives assistance"),
    ob("OB 8.5", "Delegates tasks"),
    ob("OB 8.6", "Seeks and accepts assistance, when appropriate"),
    ob("OB 8.7", "Monitors, reviews and cross-checks actions conscientiously"),
    ob("OB 8.8", "Verifies that tasks are completed to the expected outcome"),
    ob("OB 8.9", "Manages and recovers from interruptions, distractions, variations and failures effectively while performing tasks"),
];

const PRO: &[ObDefinition] = &[
    ob("OB 1.1", "Identifies where to find procedures and regulations"),
    ob("OB 1.2", "Applies relevant operating instructions, procedures and techniques in a timely manner"),
    ob("OB 1.3", "Follows SOPs unless a higher degree of safety dictates an appropriate deviation"),
    ob("OB 1.4", "Operates aircraft systems and associated equipment correctly"),
    ob("OB 1.5", "Monitors aircraft systems status"),
    ob("OB 1.6", "Complies with applicable regulations"),
    ob("OB 1.7", "Applies relevant procedural knowledge"),
    ob("EY OB 1.8", "Safely manages the aircraft to achieve best value for the operation, including fuel, the environment, passenger comfort and punctuality"),
];

const COM: &[ObDefinition] = &[
    ob("OB 2.1", "Determines that the recipient is ready and able to receive information"),
    ob("OB 2.2", "Selects appropriately what, when, how and with whom to communicate"),
    ob("OB 2.3", "Conveys messages clearly, accurately, timely and concisely"),
    ob("OB 2.4", "Confirms that the recipient demonstrates understanding of important information"),
    ob("OB 2.5", "Listens actively and demonstrates understanding when receiving information"),
    ob("OB 2.6", "Asks relevant and effective questions"),
    ob("OB 2.7", "Uses appropriate escalation in communication to resolve identified deviations"),
    ob("OB 2.8", "Uses and interprets non-verbal communication in a manner appropriate to the organisational and social culture"),
    ob("OB 2.9", "Adheres to standard radiotelephony phraseology and procedures"),
    ob("OB 2.10", "Reads, interprets, constructs and responds to datalink messages in English"),
    ob("EY OB 2.11", "Is receptive to other people's views and is willing to compromise"),
];

const FPA: &[ObDefinition] = &[
    ob("OB 3.1", "Uses appropriate flight management, guidance systems and automation, as installed and applicable to the conditions"),
    ob("OB 3.2", "Monitors and detects deviations from the intended flight path and takes appropriate action"),
    ob("OB 3.3", "Manages the flight path to achieve optimum operational performance"),
    ob("OB 3.4", "Maintains the intended flight path during flight using automation whilst monitoring and managing other tasks and distractions"),
    ob("OB 3.5", "Selects appropriate level and mode of automation in a timely manner considering phase of flight and workload"),
    ob("OB 3.6", "Effectively monitors automation, including engagement and automatic mode transitions"),
    ob("EY OB 3.7", "Contains the aircraft within the normal flight envelope"),
];

const FPM: &[ObDefinition] = &[
    ob("OB 4.1", "Controls the aircraft manually with accuracy and smoothness as appropriate to the situation"),
    ob("OB 4.2", "Monitors and detects deviations from the intended flight path and takes appropriate action"),
    ob("OB 4.3", "Manually controls the aeroplane using the relationship between aeroplane attitude, speed and thrust, and navigation signals or visual information"),
    ob("OB 4.4", "Manages the flight path to achieve optimum operational performance"),
    ob("OB 4.5", "Maintains the intended flight path during manual flight whilst monitoring and managing other tasks and distractions"),
    ob("OB 4.6", "Uses appropriate flight management and guidance systems, as installed and applicable to the conditions"),
    ob("OB 4.7", "Effectively monitors flight guidance systems including engaging and automatic mode transitions"),
    ob("EY OB 4.8", "Contains the aircraft within the normal flight envelope"),
];

/// The ordered observable behaviors for one competency.
pub fn behaviors(competency: Competency) -> &'static [ObDefinition] {
    match competency {
        Competency::Kno => KNO,
        Competency::Ltw => LTW,
        Competency::Psd => PSD,
        Competency::Saw => SAW,
        Competency::Wlm => WLM,
        Competency::Pro => PRO,
        Competency::Com => COM,
        Competency::Fpa => FPA,
        Competency::Fpm => FPM,
    }
}

/// Instantiate the checklist for one student across the selected
/// competencies: one unchecked `Observation` per catalog OB, in catalog
/// order.
///
/// The OB code and competency are taken from the catalog entry being
/// instantiated rather than re-derived through the classifier, so the
/// descriptions shared between FPA and FPM keep the code of the competency
/// they were generated under.
pub fn generate_observations(student_name: &str, competences: &[Competency]) -> Vec<Observation> {
    let mut observations = Vec::new();
    for &competence in competences {
        for def in behaviors(competence) {
            observations.push(Observation {
                id: Uuid::new_v4(),
                text: def.description.to_string(),
                timestamp: Utc::now(),
                ob_code: Some(def.code.to_string()),
                competence: Some(competence),
                student_name: student_name.to_string(),
                is_checked: false,
            });
        }
    }
    observations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_competency_has_behaviors() {
        for competency in COMPETENCIES {
            let obs = behaviors(competency);
            assert!(
                (7..=14).contains(&obs.len()),
                "{competency}: unexpected OB count {}",
                obs.len()
            );
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(behaviors(Competency::Kno).len(), 8);
        assert_eq!(behaviors(Competency::Ltw).len(), 14);
        assert_eq!(behaviors(Competency::Psd).len(), 10);
        assert_eq!(behaviors(Competency::Saw).len(), 8);
        assert_eq!(behaviors(Competency::Wlm).len(), 9);
        assert_eq!(behaviors(Competency::Pro).len(), 8);
        assert_eq!(behaviors(Competency::Com).len(), 11);
        assert_eq!(behaviors(Competency::Fpa).len(), 7);
        assert_eq!(behaviors(Competency::Fpm).len(), 8);
    }

    #[test]
    fn codes_unique_within_competency() {
        for competency in COMPETENCIES {
            let codes: HashSet<&str> = behaviors(competency).iter().map(|o| o.code).collect();
            assert_eq!(codes.len(), behaviors(competency).len(), "{competency}");
        }
    }

    #[test]
    fn generation_instantiates_one_row_per_catalog_ob() {
        let observations =
            generate_observations("Student A", &[Competency::Kno, Competency::Com]);
        assert_eq!(observations.len(), 8 + 11);
        assert!(observations.iter().all(|o| !o.is_checked));
        assert!(observations.iter().all(|o| o.student_name == "Student A"));
        assert_eq!(observations[0].ob_code.as_deref(), Some("OB 0.1"));
        assert_eq!(observations[8].competence, Some(Competency::Com));
    }

    #[test]
    fn generation_keeps_selected_competency_for_shared_descriptions() {
        let observations = generate_observations("Student A", &[Competency::Fpa]);
        assert_eq!(observations.len(), 7);
        let shared = observations
            .iter()
            .find(|o| o.text == "Contains the aircraft within the normal flight envelope")
            .unwrap();
        assert_eq!(shared.ob_code.as_deref(), Some("EY OB 3.7"));
        assert_eq!(shared.competence, Some(Competency::Fpa));
    }

    #[test]
    fn descriptions_unique_within_competency() {
        for competency in COMPETENCIES {
            let texts: HashSet<&str> =
                behaviors(competency).iter().map(|o| o.description).collect();
            assert_eq!(texts.len(), behaviors(competency).len(), "{competency}");
        }
    }
}
