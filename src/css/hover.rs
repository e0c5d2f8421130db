//! CSS Hover Provider
//!
//! Answers hover requests for stylesheets:
//! - Documentation of properties, pseudo-classes, pseudo-elements and at-rules
//! - Specificity and a markup preview for selectors

use std::sync::Arc;

use tower_lsp::lsp_types::{Hover, HoverContents, Position};
use tree_sitter::Tree;

use crate::css::classifier::{Subject, classify};
use crate::css::data::CssDataset;
use crate::css::locator::locate;
use crate::css::markup::{empty_content, entry_content, selector_content};
use crate::css::parser::Dialect;
use crate::css::resolver::{entry_kind, resolve};
use crate::css::settings::{HoverCapabilities, HoverSettings};
use crate::css::specificity::analyze_selector;
use crate::language::document::TextDocument;
use crate::language::tree_utils::node_to_range;

/// Provides hover information for stylesheets
#[derive(Debug, Clone)]
pub struct CssHoverProvider {
    dataset: Arc<CssDataset>,
    capabilities: HoverCapabilities,
    settings: HoverSettings,
}

impl CssHoverProvider {
    /// Creates a hover provider with the builtin data for a markdown capable client
    pub fn new() -> Self {
        Self::with_config(
            Arc::new(CssDataset::builtin().clone()),
            HoverCapabilities::default(),
            HoverSettings::default(),
        )
    }

    pub fn with_config(
        dataset: Arc<CssDataset>,
        capabilities: HoverCapabilities,
        settings: HoverSettings,
    ) -> Self {
        Self {
            dataset,
            capabilities,
            settings,
        }
    }

    pub fn capabilities(&self) -> HoverCapabilities {
        self.capabilities
    }

    pub fn settings(&self) -> HoverSettings {
        self.settings
    }

    /// Compute the hover for a UTF-16 offset into a parsed document
    ///
    /// Returns `None` when the offset is outside the document or no node covers
    /// it. Constructs without documentation give a hover with empty contents.
    pub fn compute_hover(
        &self,
        document: &TextDocument,
        offset: usize,
        tree: &Tree,
        dialect: Dialect,
    ) -> Option<Hover> {
        let source = document.content();
        let byte = document.offset_to_byte(offset)?;
        let node = locate(tree.root_node(), byte)?;
        let subject = classify(node, source);

        let contents = match subject {
            Subject::Selector { selector } => {
                let report = analyze_selector(selector, source, dialect);
                log::debug!(
                    "Selector specificity {} (cumulative {})",
                    report.specificity,
                    report.cumulative
                );
                selector_content(&report, self.capabilities, self.settings)
            }
            _ => self
                .documentation(&subject, source)
                .unwrap_or_else(empty_content),
        };

        Some(Hover {
            contents,
            range: Some(node_to_range(subject.node(), document)),
        })
    }

    /// Compute the hover for an LSP position
    pub fn hover(
        &self,
        document: &TextDocument,
        position: Position,
        tree: &Tree,
        dialect: Dialect,
    ) -> Option<Hover> {
        let offset = document.position_to_offset(position)?;
        self.compute_hover(document, offset, tree, dialect)
    }

    fn documentation(&self, subject: &Subject, source: &str) -> Option<HoverContents> {
        let kind = entry_kind(subject)?;
        let name = subject.name(source)?;
        let Some(entry) = resolve(&self.dataset, kind, name) else {
            log::debug!("No documentation for {:?} '{}'", kind, name);
            return None;
        };
        Some(entry_content(entry, kind, self.capabilities, self.settings))
    }
}

impl Default for CssHoverProvider {
    fn default() -> Self {
        Self::new()
    }
}
