//! Stylesheet parser using tree-sitter-css
//!
//! The grammar accepts rule nesting and unknown at-rules, so SCSS and Less sources
//! produce a usable tree too, with preprocessor-only syntax ending up in error nodes.

use tree_sitter::{Parser, Tree};

use crate::error::{HoverError, HoverResult};

/// Stylesheet language of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    Css,
    Scss,
    Less,
}

impl Dialect {
    /// Dialect for an LSP language id, plain CSS for anything unknown
    pub fn from_language_id(language_id: &str) -> Self {
        match language_id.to_ascii_lowercase().as_str() {
            "scss" | "sass" => Dialect::Scss,
            "less" => Dialect::Less,
            _ => Dialect::Css,
        }
    }
}

/// Stylesheet parser wrapper around tree-sitter-css
pub struct CssParser {
    parser: Parser,
}

impl CssParser {
    /// Create a new stylesheet parser
    pub fn new() -> HoverResult<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_css::LANGUAGE.into())?;

        Ok(Self { parser })
    }

    /// Parse stylesheet content and return the syntax tree
    pub fn parse(&mut self, content: &str, old_tree: Option<&Tree>) -> Option<Tree> {
        self.parser.parse(content, old_tree)
    }

    /// Parse stylesheet content, treating a missing tree as an error
    pub fn parse_required(&mut self, content: &str) -> HoverResult<Tree> {
        self.parse(content, None).ok_or(HoverError::Parse)
    }
}
