//! Source-structure analysis core.
//!
//! The pipeline for one file:
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌────────────┐   ┌────────────┐
//! │ tree       │──▶│ walk       │──▶│ extract    │──▶│ rank       │
//! │ (CST →     │   │ (top-level │   │ (verbatim  │   │ (threshold │
//! │  tagged    │   │  functions)│   │  line      │   │  + stable  │
//! │  tree)     │   │            │   │  slices)   │   │  ordering) │
//! └────────────┘   └────────────┘   └────────────┘   └────────────┘
//! ```
//!
//! `source` supplies the document the extractor slices from. The
//! `engine` module drives the pipeline end to end.

pub mod extract;
pub mod rank;
pub mod source;
pub mod tree;
pub mod walk;

pub use extract::{extract, ExtractionError, FunctionRecord};
pub use rank::{rank, ResultSet};
pub use source::SourceDocument;
pub use tree::{build, NodeKind, ParseError, Span, SyntaxNode, SyntaxTree};
pub use walk::top_level_functions;
