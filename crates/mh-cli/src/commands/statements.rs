//! Statements command implementation

use anyhow::Result;
use mh_core::Statement;
use serde::Serialize;
use std::io::Write;

use crate::cli::{GlobalArgs, StatementsArgs, StatementsOutput};
use crate::commands::common::{load_config, load_migration};

/// JSON report for `mh statements --output json`
#[derive(Debug, Serialize)]
struct StatementsReport<'a> {
    path: String,
    checksum: String,
    statement_count: usize,
    statements: &'a [Statement],
}

/// Execute the statements command
pub fn execute(args: &StatementsArgs, global: &GlobalArgs, out: &mut impl Write) -> Result<()> {
    let config = load_config(global)?;
    let migration = load_migration(args.path.as_deref(), &config, global)?;
    let statements = migration.statements();

    let text = match args.output {
        StatementsOutput::Json => {
            let report = StatementsReport {
                path: migration.path.display().to_string(),
                checksum: migration.checksum(),
                statement_count: statements.len(),
                statements: &statements,
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        StatementsOutput::Table => format_table(&migration.path.display().to_string(), &statements),
    };

    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn format_table(path: &str, statements: &[Statement]) -> String {
    let total = statements.len();
    let mut text = format!(
        "📋 Found {} SQL statement{} in {}\n\n",
        total,
        if total == 1 { "" } else { "s" },
        path
    );

    for stmt in statements {
        text.push_str(&format!("  [{}/{}] {}", stmt.index, total, stmt.headline()));
        if stmt.skipped {
            text.push_str("  (comment, skipped)");
        }
        text.push('\n');
    }

    let skipped = statements.iter().filter(|s| s.skipped).count();
    if total > 0 {
        text.push('\n');
    }
    text.push_str(&format!(
        "{} to apply, {} comment statement{} skipped\n",
        total - skipped,
        skipped,
        if skipped == 1 { "" } else { "s" }
    ));
    text
}

#[cfg(test)]
#[path = "statements_test.rs"]
mod tests;
