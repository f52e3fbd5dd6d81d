//! The `checkride catalog` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use checkride_core::catalog::{behaviors, COMPETENCIES};
use checkride_core::model::Competency;

pub fn execute(competence: Option<String>) -> Result<()> {
    let selected: Vec<Competency> = match competence {
        Some(code) => vec![code
            .parse::<Competency>()
            .map_err(|e| anyhow::anyhow!(e))?],
        None => COMPETENCIES.to_vec(),
    };

    let mut table = Table::new();
    table.set_header(vec!["Competency", "OB code", "Observable behavior"]);
    for competency in selected {
        for def in behaviors(competency) {
            table.add_row(vec![
                Cell::new(competency),
                Cell::new(def.code),
                Cell::new(def.description),
            ]);
        }
    }

    println!("{table}");
    Ok(())
}
