//! Verbatim extraction of function source ranges.
//!
//! Extraction maps a node's line span back onto the document's line
//! array and slices the original text out unchanged: comments, blank
//! lines, and indentation survive byte-for-byte. Nothing is ever
//! re-rendered from the tree.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::source::SourceDocument;
use super::tree::SyntaxNode;

/// One extracted function, ready for reporting.
///
/// Immutable once created; the record owns its text and shares nothing
/// with the syntax tree. Field order here is the serialized field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    /// The function's identifier.
    #[serde(rename = "function_name")]
    pub name: String,
    /// Inclusive line count of the full definition.
    pub line_count: usize,
    /// Verbatim source text of the definition.
    pub code: String,
}

/// Internal invariant violation: the tree's positions do not agree with
/// the document. Always fatal; never a user error.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("span {start_line}..{end_line} exceeds document length {line_count}")]
    OutOfRange {
        start_line: usize,
        end_line: usize,
        line_count: usize,
    },
    #[error("function definition at {line}:{column} has no name")]
    Unnamed { line: usize, column: usize },
}

/// Slice a function node's lines out of the document.
pub fn extract(
    node: &SyntaxNode,
    document: &SourceDocument,
) -> Result<FunctionRecord, ExtractionError> {
    let span = node.span;

    let name = node.name.clone().ok_or(ExtractionError::Unnamed {
        line: span.start_line,
        column: span.start_col,
    })?;

    let code = document
        .slice_lines(span.start_line, span.end_line)
        .ok_or(ExtractionError::OutOfRange {
            start_line: span.start_line,
            end_line: span.end_line,
            line_count: document.line_count(),
        })?;

    Ok(FunctionRecord {
        name,
        line_count: span.line_span(),
        code,
    })
}
