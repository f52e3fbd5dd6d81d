//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn checkride() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("checkride").unwrap()
}

#[test]
fn catalog_lists_all_competencies() {
    checkride()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("KNO"))
        .stdout(predicate::str::contains("FPM"))
        .stdout(predicate::str::contains("Engages others in planning"));
}

#[test]
fn catalog_filters_to_one_competency() {
    checkride()
        .arg("catalog")
        .arg("--competence")
        .arg("SAW")
        .assert()
        .success()
        .stdout(predicate::str::contains("Keeps track of time and fuel"))
        .stdout(predicate::str::contains("OB 7.1"))
        .stdout(predicate::str::contains("OB 8.1").not());
}

#[test]
fn catalog_rejects_unknown_competency() {
    checkride()
        .arg("catalog")
        .arg("--competence")
        .arg("XYZ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown competency code"));
}

#[test]
fn catalog_codes_are_case_sensitive() {
    checkride()
        .arg("catalog")
        .arg("--competence")
        .arg("kno")
        .assert()
        .failure();
}

#[test]
fn report_grades_session_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, make_test_session()).unwrap();

    checkride()
        .arg("report")
        .arg("--session")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Student A"))
        .stdout(predicate::str::contains("KNO"))
        .stdout(predicate::str::contains("Unchecked (1)"));
}

#[test]
fn report_applies_safety_scores() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, make_test_session()).unwrap();

    checkride()
        .arg("report")
        .arg("--session")
        .arg(&path)
        .arg("--safety-scores")
        .arg(r#"{"Student A": 9}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid safety score"));
}

#[test]
fn report_nonexistent_session_file() {
    checkride()
        .arg("report")
        .arg("--session")
        .arg("no_such_session.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn help_output() {
    checkride()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flight-training evaluation recorder"));
}

#[test]
fn version_output() {
    checkride()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("checkride"));
}

/// A minimal serialized session: one student, one exercise, two KNO
/// observations with one checked.
fn make_test_session() -> &'static str {
    r#"{
    "id": "11111111-1111-1111-1111-111111111111",
    "date": "2025-01-01T00:00:00Z",
    "students": [{ "name": "Student A" }],
    "exercises": [{
        "id": "22222222-2222-2222-2222-222222222222",
        "name": "LOFT 1",
        "date": "2025-01-01T00:00:00Z",
        "is_completed": true,
        "competences": ["KNO"],
        "observations": [
            {
                "id": "33333333-3333-3333-3333-333333333333",
                "text": "Knows where to source required information",
                "timestamp": "2025-01-01T00:00:00Z",
                "ob_code": "OB 0.6",
                "competence": "KNO",
                "student_name": "Student A",
                "is_checked": true
            },
            {
                "id": "44444444-4444-4444-4444-444444444444",
                "text": "Is able to apply knowledge effectively",
                "timestamp": "2025-01-01T00:00:00Z",
                "ob_code": "OB 0.8",
                "competence": "KNO",
                "student_name": "Student A",
                "is_checked": false
            }
        ]
    }]
}"#
}
