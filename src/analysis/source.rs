//! Source document handling.
//!
//! A `SourceDocument` owns the original input text plus a derived line
//! array so that node spans can be mapped back onto the exact bytes the
//! author wrote. Line numbers are 1-indexed throughout, matching the
//! convention the tree builder reports spans in.

/// An immutable source file loaded for analysis.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    text: String,
    /// Line contents without terminators, in file order.
    lines: Vec<String>,
    /// The newline sequence used when rejoining extracted ranges.
    newline: &'static str,
}

impl SourceDocument {
    /// Create a document from source text.
    ///
    /// The newline convention is taken from the text itself: documents
    /// containing `\r\n` rejoin with `\r\n`, everything else with `\n`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
        let lines = text.lines().map(str::to_string).collect();
        Self {
            text,
            lines,
            newline,
        }
    }

    /// The full original text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The newline sequence used for rejoining.
    pub fn newline(&self) -> &'static str {
        self.newline
    }

    /// A single line by 1-indexed number.
    pub fn line(&self, number: usize) -> Option<&str> {
        if number == 0 {
            return None;
        }
        self.lines.get(number - 1).map(String::as_str)
    }

    /// The verbatim text of lines `start..=end` (1-indexed, inclusive),
    /// rejoined with the document's newline convention.
    ///
    /// Returns None when the range falls outside the document.
    pub fn slice_lines(&self, start: usize, end: usize) -> Option<String> {
        if start == 0 || end < start || end > self.lines.len() {
            return None;
        }
        Some(self.lines[start - 1..end].join(self.newline))
    }
}
