//! Stylesheet hover engine
//!
//! Hover for CSS, SCSS and Less using:
//! - tree-sitter-css for parsing
//! - a JSON reference dataset for documentation
//! - tower-lsp for the Language Server Protocol implementation

pub mod classifier;
pub mod constants;
pub mod data;
pub mod document;
pub mod document_manager;
pub mod hover;
pub mod locator;
pub mod markup;
pub mod parser;
pub mod preview;
pub mod resolver;
pub mod selector;
pub mod server;
pub mod settings;
pub mod specificity;
pub mod syntax;

#[cfg(test)]
mod hover_tests;
#[cfg(test)]
mod specificity_tests;
