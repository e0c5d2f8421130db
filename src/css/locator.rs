//! Node locator
//!
//! Finds the innermost node of a syntax tree that covers a byte offset.

use tree_sitter::Node;

use crate::language::tree_utils::children;

/// Whether `offset` touches the node, a cursor right after the last character counts
fn touches(node: Node, offset: usize) -> bool {
    node.start_byte() <= offset && offset <= node.end_byte()
}

/// Find the innermost node covering a byte offset
///
/// Returns `None` if the offset lies outside the root's range. When the offset sits
/// on the boundary between two siblings, the one starting at the offset wins, so a
/// cursor placed right before a token is on that token.
///
/// tree-sitter starts the root of a tree at its first token, a tree root is taken to
/// cover the leading whitespace as well.
pub fn locate(root: Node<'_>, offset: usize) -> Option<Node<'_>> {
    let start = if root.parent().is_none() { 0 } else { root.start_byte() };
    if offset < start || offset > root.end_byte() {
        return None;
    }

    let mut current = root;
    loop {
        let mut candidate = None;
        for child in children(current) {
            if child.start_byte() > offset {
                break;
            }
            // Zero width nodes are recovery artifacts (missing tokens), never a hover target
            if child.start_byte() == child.end_byte() {
                continue;
            }
            if touches(child, offset) {
                candidate = Some(child);
                if child.start_byte() == offset {
                    break;
                }
            }
        }

        match candidate {
            Some(child) => current = child,
            None => return Some(current),
        }
    }
}
