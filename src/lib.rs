//! Bloatcheck - oversized function detector for Python codebases.
//!
//! Bloatcheck parses Python source with tree-sitter, finds top-level
//! function definitions (methods nested in classes don't count), and
//! reports the ones whose definitions exceed a line threshold - largest
//! first, with the original source reproduced verbatim. The output is a
//! refactoring queue: the functions most worth splitting up, in order.
//!
//! # Architecture
//!
//! - `analysis`: the core pipeline - tree building, scope-aware
//!   traversal, verbatim range extraction, filtering and ranking
//! - `engine`: per-file orchestration and the `AnalysisError` boundary
//! - `report`: JSON and pretty output
//! - `config`: optional YAML configuration
//! - `lint`: orchestration of third-party Python linters
//! - `format`: best-effort formatting pipeline over external tools
//! - `webhook`: HMAC signature verification for webhook deliveries

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod lint;
pub mod report;
pub mod webhook;

pub use analysis::{FunctionRecord, NodeKind, ResultSet, Span, SyntaxNode};
pub use config::Config;
pub use engine::{analyze_file, analyze_source, AnalysisError, DEFAULT_MIN_LINES};
pub use lint::Linter;
pub use webhook::SignatureVerifier;
