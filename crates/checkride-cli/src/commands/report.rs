//! The `checkride report` command: grade a session JSON file offline.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use checkride_core::model::Session;
use checkride_core::report::build_report;

pub fn execute(session_path: PathBuf, safety_scores: Option<String>) -> Result<()> {
    let content = std::fs::read_to_string(&session_path)
        .with_context(|| format!("failed to read session from {}", session_path.display()))?;
    let session: Session =
        serde_json::from_str(&content).context("failed to parse session JSON")?;

    let safety_scores: HashMap<String, i64> = match &safety_scores {
        Some(raw) => serde_json::from_str(raw).context("malformed safety scores")?,
        None => HashMap::new(),
    };

    let report = build_report(&session, &safety_scores)?;

    for (student, student_report) in &report {
        println!("\n{student}");

        let mut table = Table::new();
        table.set_header(vec![
            "Competency",
            "How many",
            "How often",
            "Safety",
            "Final grade",
        ]);
        for (competency, grade) in &student_report.report {
            table.add_row(vec![
                Cell::new(competency),
                Cell::new(grade.how_many),
                Cell::new(grade.how_often),
                Cell::new(grade.safety_score),
                Cell::new(grade.final_grade),
            ]);
        }
        println!("{table}");

        if !student_report.unchecked_observations.is_empty() {
            println!("Unchecked ({}):", student_report.unchecked_observations.len());
            for obs in &student_report.unchecked_observations {
                let code = obs.ob_code.as_deref().unwrap_or("-");
                println!("  [{code}] {}", obs.text);
            }
        }
    }

    Ok(())
}
