//! Output formatting for analysis results.
//!
//! Two formats:
//! - JSON: an array of `{function_name, line_count, code}` objects,
//!   2-space indented, in result order - the persisted form is
//!   identical to the printed form.
//! - Pretty: colored terminal output for human readability.

use std::fs;
use std::path::Path;

use colored::*;
use thiserror::Error;

use crate::analysis::ResultSet;

/// Failure to serialize or write results.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Render the result set as 2-space-indented JSON.
///
/// The record order is the set's order; nothing is re-sorted here.
pub fn to_json(results: &ResultSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(results)
}

/// Write the JSON form to `destination`, overwriting any existing
/// content. UTF-8, same structure and ordering as the in-memory set.
pub fn persist(results: &ResultSet, destination: &Path) -> Result<(), PersistError> {
    let json = to_json(results)?;
    fs::write(destination, json)?;
    Ok(())
}

/// Write results as JSON to stdout.
pub fn write_json(results: &ResultSet) -> Result<(), serde_json::Error> {
    println!("{}", to_json(results)?);
    Ok(())
}

/// Write results in pretty (human-readable) format.
pub fn write_pretty(path: &str, min_lines: usize, results: &ResultSet) {
    // Header
    println!();
    print!("  ");
    print!("{}", "bloatcheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Scanning:  ".dimmed());
    println!("{}", path);
    print!("  {}", "Threshold: ".dimmed());
    println!("{} lines", min_lines);
    println!();

    if results.is_empty() {
        println!("  {}", "✓ No oversized functions found".green());
        println!();
        return;
    }

    println!(
        "  {} ({}):",
        "Oversized functions".bold(),
        results.len()
    );
    println!();

    for record in results {
        print!("    {:<30}", record.name.blue());
        println!("{}", format!("{:>5} lines", record.line_count).yellow());
    }

    println!();
    println!(
        "  {}",
        format!(
            "{} function(s) at or above {} lines - consider splitting them up",
            results.len(),
            min_lines
        )
        .dimmed()
    );
    println!();
}
