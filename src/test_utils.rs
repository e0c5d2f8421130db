//! Test utilities shared across the codebase

use std::env;
use std::path::PathBuf;

use tree_sitter::Tree;

use crate::css::parser::CssParser;
use crate::language::document::TextDocument;

/// Cursor marker used in test sources
pub const CURSOR: char = '|';

/// Root directory of the package, where `Cargo.toml` and `data/` live
pub fn get_project_root() -> PathBuf {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        return PathBuf::from(manifest_dir);
    }

    let current_dir = env::current_dir().expect("Failed to get current directory");
    current_dir
        .ancestors()
        .find(|dir| dir.join("Cargo.toml").exists())
        .map(PathBuf::from)
        .expect("Could not find project root (Cargo.toml not found)")
}

/// Remove the first `|` from a source and return the source with the byte offset of the marker
pub fn split_cursor(marked: &str) -> (String, usize) {
    let offset = marked
        .find(CURSOR)
        .expect("Test source should contain a '|' cursor marker");
    let mut source = marked.to_string();
    source.remove(offset);
    (source, offset)
}

/// Parse a source into a document snapshot and its syntax tree
pub fn parse_document(source: &str) -> (TextDocument, Tree) {
    let mut parser = CssParser::new().expect("Failed to create CSS parser");
    let tree = parser.parse_required(source).expect("Failed to parse CSS");
    (TextDocument::new(source), tree)
}
