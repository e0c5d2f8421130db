use tower_lsp::lsp_types::Range;
use tree_sitter::Node;

use crate::language::document::TextDocument;

/// Convert tree-sitter node to LSP range
pub(crate) fn node_to_range(node: Node, document: &TextDocument) -> Range {
    document.byte_range_to_range(node.start_byte(), node.end_byte())
}

/// Source text covered by a node, empty if the node does not fit the source
pub(crate) fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Iterate over the direct children of a node, anonymous tokens included
pub(crate) fn children<'a>(node: Node<'a>) -> impl Iterator<Item = Node<'a>> {
    (0..node.child_count()).filter_map(move |i| node.child(i))
}

/// Find the first node of a specific type in the syntax tree
/// Performs a depth-first search to locate a node with the target type
pub fn find_node_by_type<'a>(node: Node<'a>, target_type: &str) -> Option<Node<'a>> {
    if node.kind() == target_type {
        return Some(node);
    }

    for child in children(node) {
        if let Some(found) = find_node_by_type(child, target_type) {
            return Some(found);
        }
    }
    None
}
