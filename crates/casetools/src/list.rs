use crate::prelude::{eprintln, println, *};
use casetools_core::{Operation, OperationInfo};
use colored::Colorize;

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let operations = list_data();

    if global.verbose {
        eprintln!("{} operations available", operations.len());
        eprintln!();
    }

    if options.json {
        println!("{}", format_list_json(&operations)?);
    } else {
        output_table(&Operation::ALL);
    }

    Ok(())
}

/// Metadata for every operation, in catalogue order.
pub fn list_data() -> Vec<OperationInfo> {
    Operation::ALL.into_iter().map(Operation::info).collect()
}

fn format_list_json(operations: &[OperationInfo]) -> Result<String> {
    serde_json::to_string_pretty(operations).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

const SAMPLE: &str = "Crème Brûlée!";

fn output_table(operations: &[Operation]) {
    println!("{}", format!("OPERATIONS (sample input: {SAMPLE:?})").bold().cyan());
    println!();

    let mut table = new_table();
    table.add_row(prettytable::row!["Operation", "Summary", "Sample"]);

    for op in operations {
        table.add_row(prettytable::row![op.name(), op.summary(), op.execute(SAMPLE)]);
    }

    table.printstd();
}
