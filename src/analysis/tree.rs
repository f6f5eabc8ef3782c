//! Tree builder: parses Python source with tree-sitter and lowers the
//! CST into an owned, kind-tagged syntax tree.
//!
//! The lowered tree carries an explicit `NodeKind` tag on every node so
//! traversal can match exhaustively instead of dispatching on grammar
//! strings, and a 1-indexed `Span` so later stages can map nodes back
//! onto the document's line array.

use std::fmt;

use once_cell::sync::Lazy;
use thiserror::Error;
use tree_sitter::{Language, Node, Parser};

static PYTHON: Lazy<Language> = Lazy::new(|| tree_sitter_python::LANGUAGE.into());

/// Source location span with byte offsets and line/column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (0-indexed).
    pub start_byte: usize,
    /// End byte offset (0-indexed, exclusive).
    pub end_byte: usize,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// Start column (1-indexed).
    pub start_col: usize,
    /// End line (1-indexed).
    pub end_line: usize,
    /// End column (1-indexed).
    pub end_col: usize,
}

impl Span {
    /// Create a span from a tree-sitter node.
    pub fn from_node(node: Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start_line: start.row + 1, // tree-sitter is 0-indexed
            start_col: start.column + 1,
            end_line: end.row + 1,
            end_col: end.column + 1,
        }
    }

    /// Number of lines the span covers, inclusive of both ends.
    pub fn line_span(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// Kind tag for a lowered syntax node.
///
/// Only the distinctions the traverser needs survive lowering: function
/// definitions (candidates), type definitions (scopes that exclude their
/// members), and everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Function,
    Type,
    Other,
}

/// A node in the lowered syntax tree.
///
/// Nodes own their children; there is no aliasing back into the
/// tree-sitter CST, which is dropped once lowering completes.
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Identifier for function and type definitions.
    pub name: Option<String>,
    pub span: Span,
    pub children: Vec<SyntaxNode>,
}

/// The lowered tree for one source file.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub root: SyntaxNode,
}

/// Failure to produce a usable tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source is not syntactically valid Python. tree-sitter reports
    /// recoverable errors in-tree; any error node fails the build so no
    /// partial tree is ever analyzed.
    #[error("invalid syntax at line {line}, column {column}")]
    Syntax { line: usize, column: usize },
    #[error("failed to load python grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    #[error("parser produced no tree")]
    NoTree,
}

/// Parse source text and lower it into a kind-tagged tree.
///
/// Pure function over the input text. Spans are 1-indexed, matching the
/// `SourceDocument` line convention.
pub fn build(source: &str) -> Result<SyntaxTree, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&PYTHON)?;

    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
    let root = tree.root_node();

    if root.has_error() {
        let (line, column) = first_error_position(root);
        return Err(ParseError::Syntax { line, column });
    }

    Ok(SyntaxTree {
        root: lower(root, source.as_bytes()),
    })
}

/// Locate the first error or missing node in a tree that has errors.
fn first_error_position(node: Node) -> (usize, usize) {
    if node.is_error() || node.is_missing() {
        let pos = node.start_position();
        return (pos.row + 1, pos.column + 1);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            return first_error_position(child);
        }
    }

    // The error flag is set but no descendant carries it; report the
    // node's own position rather than guessing.
    let pos = node.start_position();
    (pos.row + 1, pos.column + 1)
}

fn lower(node: Node, source: &[u8]) -> SyntaxNode {
    match node.kind() {
        "function_definition" => SyntaxNode {
            kind: NodeKind::Function,
            name: identifier(node, source),
            span: Span::from_node(node),
            children: lower_children(node, source),
        },
        "class_definition" => SyntaxNode {
            kind: NodeKind::Type,
            name: identifier(node, source),
            span: Span::from_node(node),
            children: lower_children(node, source),
        },
        "decorated_definition" => lower_decorated(node, source),
        _ => SyntaxNode {
            kind: NodeKind::Other,
            name: None,
            span: Span::from_node(node),
            children: lower_children(node, source),
        },
    }
}

/// A decorated definition collapses into the wrapped definition's node,
/// widened to cover the decorators, so the decorated form reads as one
/// construct with one span.
fn lower_decorated(node: Node, source: &[u8]) -> SyntaxNode {
    let Some(definition) = node.child_by_field_name("definition") else {
        return SyntaxNode {
            kind: NodeKind::Other,
            name: None,
            span: Span::from_node(node),
            children: lower_children(node, source),
        };
    };

    let kind = match definition.kind() {
        "function_definition" => NodeKind::Function,
        "class_definition" => NodeKind::Type,
        _ => NodeKind::Other,
    };

    SyntaxNode {
        kind,
        name: identifier(definition, source),
        span: Span::from_node(node),
        children: lower_children(definition, source),
    }
}

fn lower_children(node: Node, source: &[u8]) -> Vec<SyntaxNode> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .map(|child| lower(child, source))
        .collect()
}

fn identifier(node: Node, source: &[u8]) -> Option<String> {
    node.child_by_field_name("name")
        .and_then(|name| name.utf8_text(source).ok())
        .map(str::to_string)
}
