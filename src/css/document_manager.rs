//! Stylesheet Document Manager
//!
//! Manages the open stylesheets and their lifecycle.

use std::collections::HashMap;
use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url};

use super::document::StyleDocument;
use crate::css::parser::{CssParser, Dialect};
use crate::error::HoverResult;

/// Document manager for stylesheets
pub struct StyleDocumentManager {
    documents: HashMap<Url, StyleDocument>,
    parser: CssParser,
}

impl StyleDocumentManager {
    /// Create a new document manager
    pub fn new() -> HoverResult<Self> {
        Ok(Self {
            documents: HashMap::new(),
            parser: CssParser::new()?,
        })
    }

    /// Open a new document
    pub fn open_document(&mut self, uri: Url, language_id: &str, content: String, version: i32) {
        let dialect = Dialect::from_language_id(language_id);
        let mut document = StyleDocument::new(uri.clone(), dialect, content, version);
        document.parse(&mut self.parser);
        self.documents.insert(uri, document);
    }

    /// Update an existing document
    pub fn update_document(
        &mut self,
        uri: &Url,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) {
        match self.documents.get_mut(uri) {
            Some(document) => document.apply_changes(changes, version, &mut self.parser),
            None => log::warn!("Change for a document that is not open: {}", uri),
        }
    }

    /// Close a document
    pub fn close_document(&mut self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// Get a document reference
    pub fn get_document(&self, uri: &Url) -> Option<&StyleDocument> {
        self.documents.get(uri)
    }

    /// Number of open documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
