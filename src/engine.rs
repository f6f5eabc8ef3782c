//! End-to-end analysis of a single source file.
//!
//! The engine is the one seam callers see: it reads input, drives the
//! analysis pipeline, optionally persists the result, and folds every
//! internal failure into `AnalysisError` with file-path context. No
//! bare module error ever crosses this boundary.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::analysis::{
    build, extract, rank, top_level_functions, ExtractionError, ParseError, ResultSet,
    SourceDocument,
};
use crate::report::{self, PersistError};

/// Minimum size, in lines, for a function to be reported by default.
pub const DEFAULT_MIN_LINES: usize = 50;

/// Path context used for the raw-text entry point.
const SOURCE_PSEUDO_PATH: &str = "<source>";

/// The single externally-visible error for a failed analysis.
///
/// Every variant embeds the file path and the root cause in its
/// message, so callers can diagnose without knowing which internal
/// layer failed.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("error processing file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("error processing file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },
    #[error("error processing file {path}: {source}")]
    Extract {
        path: String,
        #[source]
        source: ExtractionError,
    },
    #[error("error writing results to {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: PersistError,
    },
}

/// A pipeline failure before path context is attached.
#[derive(Debug, Error)]
enum StepError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Extract(#[from] ExtractionError),
}

impl StepError {
    fn with_path(self, path: &str) -> AnalysisError {
        let path = path.to_string();
        match self {
            StepError::Parse(source) => AnalysisError::Parse { path, source },
            StepError::Extract(source) => AnalysisError::Extract { path, source },
        }
    }
}

/// Analyze one file and return its oversized top-level functions.
///
/// Reads the file, parses it, collects top-level function definitions,
/// extracts each verbatim, filters by `min_lines` (inclusive), and
/// sorts largest first. When `output` is given the result is persisted
/// there as JSON; persistence happens only after the full result
/// exists, so a failed analysis never leaves a file behind.
pub fn analyze_file(
    path: &Path,
    min_lines: usize,
    output: Option<&Path>,
) -> Result<ResultSet, AnalysisError> {
    let display = path.display().to_string();

    let text = fs::read_to_string(path).map_err(|source| AnalysisError::Io {
        path: display.clone(),
        source,
    })?;

    let results = run_pipeline(&text, min_lines).map_err(|e| e.with_path(&display))?;

    if let Some(destination) = output {
        report::persist(&results, destination).map_err(|source| AnalysisError::Persist {
            path: destination.display().to_string(),
            source,
        })?;
    }

    Ok(results)
}

/// Analyze already-loaded source text.
pub fn analyze_source(source: &str, min_lines: usize) -> Result<ResultSet, AnalysisError> {
    run_pipeline(source, min_lines).map_err(|e| e.with_path(SOURCE_PSEUDO_PATH))
}

fn run_pipeline(text: &str, min_lines: usize) -> Result<ResultSet, StepError> {
    let document = SourceDocument::new(text);
    let tree = build(text)?;

    let mut records = Vec::new();
    for node in top_level_functions(&tree.root) {
        records.push(extract(node, &document)?);
    }

    Ok(rank(records, min_lines))
}
