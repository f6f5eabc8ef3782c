//! Command-line interface for bloatcheck.

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::engine;
use crate::format::format_source;
use crate::lint::{self, Linter};
use crate::report;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Refactoring aid - finds oversized top-level functions in Python sources.
///
/// Bloatcheck parses a Python file, locates every function defined at
/// the top level (methods inside classes don't count), and reports the
/// ones whose definitions run longer than a line threshold, largest
/// first, with their source reproduced verbatim.
#[derive(Parser)]
#[command(name = "bloatcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report oversized top-level functions in a Python file
    #[command(visible_alias = "check")]
    Extract(ExtractArgs),
    /// Run third-party linters over files or directories
    Lint(LintArgs),
    /// Pipe a source file through the formatting chain
    Fmt(FmtArgs),
}

/// Arguments for the extract command.
#[derive(Parser)]
pub struct ExtractArgs {
    /// Python source file to analyze
    pub path: PathBuf,

    /// Minimum size, in lines, for a function to be reported
    #[arg(short, long)]
    pub min_lines: Option<usize>,

    /// Write results as JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the lint command.
#[derive(Parser)]
pub struct LintArgs {
    /// File or directory to lint
    pub path: PathBuf,

    /// Linters to run (ruff, black, isort)
    #[arg(short, long, value_delimiter = ',')]
    pub linters: Vec<String>,

    /// Automatically fix issues where possible
    #[arg(long)]
    pub fix: bool,

    /// Don't recurse into subdirectories
    #[arg(long)]
    pub no_recursive: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the fmt command.
#[derive(Parser)]
pub struct FmtArgs {
    /// Python source file to format
    pub path: PathBuf,

    /// Write the result back to the file instead of printing it
    #[arg(long)]
    pub write: bool,
}

/// Run the extract command.
pub fn run_extract(args: &ExtractArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let config = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: invalid config: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let min_lines = args.min_lines.unwrap_or(config.min_lines);
    if min_lines == 0 {
        eprintln!("Error: --min-lines must be a positive integer");
        return Ok(EXIT_ERROR);
    }

    let results = match engine::analyze_file(&args.path, min_lines, args.output.as_deref()) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    match args.format.as_str() {
        "json" => report::write_json(&results)?,
        _ => report::write_pretty(&args.path.display().to_string(), min_lines, &results),
    }

    // Quality-gate semantics: finding oversized functions is a failure.
    if results.is_empty() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Run the lint command.
pub fn run_lint(args: &LintArgs) -> anyhow::Result<i32> {
    let config = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: invalid config: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let linters = match resolve_linters(&args.linters, &config) {
        Some(linters) => linters,
        None => {
            eprintln!("Error: no known linters selected");
            return Ok(EXIT_ERROR);
        }
    };

    let reports = match lint::lint_path(
        &args.path,
        &linters,
        args.fix,
        !args.no_recursive,
        &config,
    ) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    lint::write_reports(&reports, args.verbose);
    let summary = lint::summarize(&reports);
    lint::write_summary(&summary);

    if summary.files_with_issues == 0 {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Resolve linter names from the command line, falling back to config.
///
/// Unknown names warn and are skipped, matching the tolerant behavior
/// of the lint orchestrator itself.
fn resolve_linters(names: &[String], config: &Config) -> Option<Vec<Linter>> {
    if names.is_empty() {
        return Some(config.linters.clone());
    }

    let mut linters = Vec::new();
    for name in names {
        match Linter::from_name(name) {
            Some(linter) => linters.push(linter),
            None => eprintln!("Warning: unknown linter {:?}, skipping", name),
        }
    }

    if linters.is_empty() {
        None
    } else {
        Some(linters)
    }
}

/// Run the fmt command.
pub fn run_fmt(args: &FmtArgs) -> anyhow::Result<i32> {
    let source = match fs::read_to_string(&args.path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read {}: {}", args.path.display(), e);
            return Ok(EXIT_ERROR);
        }
    };

    let formatted = format_source(&source);

    if args.write {
        if let Err(e) = fs::write(&args.path, &formatted) {
            eprintln!("Error: cannot write {}: {}", args.path.display(), e);
            return Ok(EXIT_ERROR);
        }
        println!("Formatted {}", args.path.display());
    } else {
        print!("{}", formatted);
    }

    Ok(EXIT_SUCCESS)
}
