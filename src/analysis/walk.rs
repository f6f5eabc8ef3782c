//! Scope-aware traversal.
//!
//! Finds function definitions that are top level in the scope sense:
//! not lexically inside a class. A function nested inside another
//! function still qualifies; only type-definition nesting excludes a
//! candidate. The walk is pre-order, so results come out in source
//! order, and lazy, so callers that stop early pay nothing for the
//! rest of the tree.

use super::tree::{NodeKind, SyntaxNode};

/// Iterate over the top-level function definitions under `root`.
pub fn top_level_functions(root: &SyntaxNode) -> TopLevelFunctions<'_> {
    TopLevelFunctions {
        stack: vec![(root, 0)],
    }
}

/// Lazy pre-order iterator over top-level functions.
///
/// Each work-stack entry carries the class-nesting depth its node was
/// encountered at. Threading the depth through the stack instead of
/// mutating a shared counter keeps enter/leave symmetric on every exit
/// path, including early termination.
pub struct TopLevelFunctions<'a> {
    stack: Vec<(&'a SyntaxNode, u32)>,
}

impl<'a> Iterator for TopLevelFunctions<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<&'a SyntaxNode> {
        while let Some((node, depth)) = self.stack.pop() {
            let child_depth = match node.kind {
                NodeKind::Type => depth + 1,
                NodeKind::Function | NodeKind::Other => depth,
            };

            // Reverse push keeps pre-order: the first child is popped next.
            for child in node.children.iter().rev() {
                self.stack.push((child, child_depth));
            }

            if node.kind == NodeKind::Function && depth == 0 {
                return Some(node);
            }
        }
        None
    }
}
