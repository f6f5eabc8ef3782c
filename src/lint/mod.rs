//! Orchestration of third-party Python linters.
//!
//! Runs a set of external tools (ruff, black, isort) over files or
//! directories, captures per-tool pass/fail plus output, and tallies a
//! summary. A missing executable is a failed outcome, not a crash;
//! per-file failures never abort the run.

mod tools;

pub use tools::Linter;

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use colored::*;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::Config;

/// Result of running one tool over one file.
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    pub linter: Linter,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// All tool outcomes for one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcomes: Vec<ToolOutcome>,
}

impl FileReport {
    pub fn has_issues(&self) -> bool {
        self.outcomes.iter().any(|outcome| !outcome.success)
    }
}

/// Tallied results across a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintSummary {
    pub files_processed: usize,
    pub files_with_issues: usize,
    /// One issue per failed tool run.
    pub total_issues: usize,
}

/// Tally reports into a summary.
pub fn summarize(reports: &[FileReport]) -> LintSummary {
    let files_with_issues = reports.iter().filter(|r| r.has_issues()).count();
    let total_issues = reports
        .iter()
        .flat_map(|r| &r.outcomes)
        .filter(|outcome| !outcome.success)
        .count();

    LintSummary {
        files_processed: reports.len(),
        files_with_issues,
        total_issues,
    }
}

/// Run one linter over one file.
pub fn run_tool(linter: Linter, file: &Path, auto_fix: bool) -> ToolOutcome {
    let mut cmd = linter.command(file, auto_fix);
    let (success, stdout, stderr) = run_command(&mut cmd);
    ToolOutcome {
        linter,
        success,
        stdout,
        stderr,
    }
}

fn run_command(cmd: &mut Command) -> (bool, String, String) {
    match cmd.output() {
        Ok(output) => (
            output.status.success(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ),
        Err(e) if e.kind() == io::ErrorKind::NotFound => (
            false,
            String::new(),
            format!(
                "command not found: {}",
                cmd.get_program().to_string_lossy()
            ),
        ),
        Err(e) => (false, String::new(), e.to_string()),
    }
}

/// Lint a single Python file with the given tools.
pub fn lint_file(path: &Path, linters: &[Linter], auto_fix: bool) -> anyhow::Result<FileReport> {
    if !path.exists() {
        anyhow::bail!("file does not exist: {}", path.display());
    }
    if path.extension().and_then(|e| e.to_str()) != Some("py") {
        anyhow::bail!("not a Python file: {}", path.display());
    }

    let outcomes = linters
        .iter()
        .map(|&linter| run_tool(linter, path, auto_fix))
        .collect();

    Ok(FileReport {
        path: path.to_path_buf(),
        outcomes,
    })
}

/// Collect Python files under `root`.
///
/// Hidden files and directories are skipped, as are paths matching the
/// config's excluded_paths globs.
pub fn collect_python_files(
    root: &Path,
    recursive: bool,
    config: &Config,
) -> anyhow::Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .max_depth(max_depth)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            // Keep the root itself even when its name starts with '.'
            if e.depth() == 0 {
                return true;
            }
            !e.file_name().to_string_lossy().starts_with('.')
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("py") {
            continue;
        }
        if config.is_path_excluded(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Lint a file or directory.
///
/// Directories fan out over rayon, one task per file; results are
/// sorted by path so output stays deterministic regardless of
/// scheduling. Files that fail to lint are warned about and skipped,
/// never fatal for the rest of the run.
pub fn lint_path(
    path: &Path,
    linters: &[Linter],
    auto_fix: bool,
    recursive: bool,
    config: &Config,
) -> anyhow::Result<Vec<FileReport>> {
    if path.is_file() {
        return Ok(vec![lint_file(path, linters, auto_fix)?]);
    }

    if !path.is_dir() {
        anyhow::bail!("not a file or directory: {}", path.display());
    }

    let files = collect_python_files(path, recursive, config)?;
    if files.is_empty() {
        eprintln!("Warning: no Python files found in {}", path.display());
        return Ok(Vec::new());
    }

    let results: Vec<_> = files
        .par_iter()
        .map(|file| lint_file(file, linters, auto_fix))
        .collect();

    let mut reports = Vec::new();
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => eprintln!("Warning: failed to lint file: {}", e),
        }
    }

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(reports)
}

/// Print per-file tool results.
///
/// Quiet mode only shows failures; verbose shows everything.
pub fn write_reports(reports: &[FileReport], verbose: bool) {
    for report in reports {
        for outcome in &report.outcomes {
            if !verbose && outcome.success {
                continue;
            }

            let status = if outcome.success {
                "✓".green()
            } else {
                "✗".red()
            };
            let name = report
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| report.path.display().to_string());
            println!("  {} {}: {}", status, outcome.linter, name);

            if !outcome.success {
                if !outcome.stdout.trim().is_empty() {
                    println!("    Output: {}", outcome.stdout.trim());
                }
                if !outcome.stderr.trim().is_empty() {
                    println!("    Errors: {}", outcome.stderr.trim());
                }
            }
        }
    }
}

/// Print the tallied summary block.
pub fn write_summary(summary: &LintSummary) {
    println!();
    println!("{}", "Summary:".bold());
    println!("  Files processed: {}", summary.files_processed);
    println!("  Files with issues: {}", summary.files_with_issues);
    println!("  Total issues: {}", summary.total_issues);

    if summary.files_with_issues == 0 {
        println!("  {}", "✓ All files passed linting!".green());
    } else {
        println!(
            "  {}",
            format!(
                "✗ {} file(s) had linting issues.",
                summary.files_with_issues
            )
            .red()
        );
    }
}
