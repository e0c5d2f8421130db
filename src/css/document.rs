//! Stylesheet Document
//!
//! Represents a single open stylesheet with its content, dialect, syntax tree and version.

use tower_lsp::lsp_types::{Range, TextDocumentContentChangeEvent, Url};
use tree_sitter::{InputEdit, Tree};

use crate::css::parser::{CssParser, Dialect};
use crate::language::document::TextDocument;

/// An open stylesheet
#[derive(Debug, Clone)]
pub struct StyleDocument {
    /// Document URI
    pub uri: Url,
    /// Stylesheet language, from the language id the client opened it with
    pub dialect: Dialect,
    /// Document version for LSP synchronization
    pub version: i32,
    text: TextDocument,
    tree: Option<Tree>,
}

impl StyleDocument {
    /// Create a new, unparsed document
    pub fn new(uri: Url, dialect: Dialect, content: String, version: i32) -> Self {
        Self {
            uri,
            dialect,
            version,
            text: TextDocument::new(content),
            tree: None,
        }
    }

    /// Parse the document content and store the syntax tree
    pub fn parse(&mut self, parser: &mut CssParser) {
        self.tree = parser.parse(self.text.content(), None);
        if self.tree.is_none() {
            log::warn!("Failed to parse {}", self.uri);
        }
    }

    /// Apply content changes, incremental or full, and reparse
    pub fn apply_changes(
        &mut self,
        changes: Vec<TextDocumentContentChangeEvent>,
        new_version: i32,
        parser: &mut CssParser,
    ) {
        self.version = new_version;

        for change in changes {
            match change.range {
                Some(range) => self.apply_incremental_change(range, &change.text),
                None => {
                    self.text = TextDocument::new(change.text);
                    self.tree = None;
                }
            }
        }

        self.tree = parser.parse(self.text.content(), self.tree.as_ref());
    }

    fn apply_incremental_change(&mut self, range: Range, text: &str) {
        let content = self.text.content();
        let (Some(start_byte), Some(old_end_byte)) = (
            self.text.position_to_byte(range.start),
            self.text.position_to_byte(range.end),
        ) else {
            log::warn!("Ignoring change outside of {}: {:?}", self.uri, range);
            return;
        };
        let old_end_byte = old_end_byte.max(start_byte);

        let new_content = format!(
            "{}{}{}",
            &content[..start_byte],
            text,
            &content[old_end_byte..]
        );
        let start_position = self.text.byte_to_point(start_byte);
        let old_end_position = self.text.byte_to_point(old_end_byte);

        self.text = TextDocument::new(new_content);
        let new_end_byte = start_byte + text.len();

        if let Some(tree) = self.tree.as_mut() {
            tree.edit(&InputEdit {
                start_byte,
                old_end_byte,
                new_end_byte,
                start_position,
                old_end_position,
                new_end_position: self.text.byte_to_point(new_end_byte),
            });
        }
    }

    /// The current text snapshot
    pub fn text(&self) -> &TextDocument {
        &self.text
    }

    pub fn content(&self) -> &str {
        self.text.content()
    }

    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_lsp::lsp_types::Position;

    fn create_test_document() -> StyleDocument {
        let uri = Url::parse("file:///test.css").unwrap();
        StyleDocument::new(uri, Dialect::Css, ".test { color: red; }".to_string(), 1)
    }

    #[test]
    fn test_document_parsing() {
        let mut doc = create_test_document();
        assert!(doc.tree().is_none());

        let mut parser = CssParser::new().unwrap();
        doc.parse(&mut parser);
        assert!(doc.tree().is_some());
    }

    #[test]
    fn test_incremental_changes() {
        let mut doc = create_test_document();
        let mut parser = CssParser::new().unwrap();
        doc.parse(&mut parser);

        // Replace "red" (positions 15-18) with "blue"
        let changes = vec![TextDocumentContentChangeEvent {
            range: Some(Range {
                start: Position::new(0, 15),
                end: Position::new(0, 18),
            }),
            range_length: Some(3),
            text: "blue".to_string(),
        }];

        doc.apply_changes(changes, 2, &mut parser);
        assert_eq!(doc.version, 2);
        assert_eq!(doc.content(), ".test { color: blue; }");

        let tree = doc.tree().unwrap();
        assert!(!tree.root_node().has_error());
        assert_eq!(tree.root_node().end_byte(), doc.content().len());
    }

    #[test]
    fn test_multiline_incremental_change() {
        let mut doc = create_test_document();
        let mut parser = CssParser::new().unwrap();
        doc.parse(&mut parser);

        let changes = vec![TextDocumentContentChangeEvent {
            range: Some(Range {
                start: Position::new(0, 21),
                end: Position::new(0, 21),
            }),
            range_length: None,
            text: "\n.other {\n  margin: 0;\n}".to_string(),
        }];
        doc.apply_changes(changes, 2, &mut parser);

        assert_eq!(doc.text().line_count(), 4);
        let root = doc.tree().unwrap().root_node();
        assert_eq!(root.named_child_count(), 2);
    }

    #[test]
    fn test_full_change() {
        let mut doc = create_test_document();
        let mut parser = CssParser::new().unwrap();
        doc.parse(&mut parser);

        let changes = vec![TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "a {}".to_string(),
        }];
        doc.apply_changes(changes, 3, &mut parser);
        assert_eq!(doc.content(), "a {}");
        assert_eq!(doc.tree().unwrap().root_node().end_byte(), 4);
    }
}
