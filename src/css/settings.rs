//! Hover configuration
//!
//! Settings arrive from the client as JSON in the `initializationOptions` of the
//! initialize request:
//!
//! ```json
//! { "hover": { "documentation": true, "references": false }, "customData": ["./css-data.json"] }
//! ```

use serde::Deserialize;
use std::path::PathBuf;
use tower_lsp::lsp_types::{ClientCapabilities, MarkupKind};

/// Which parts of the documentation a hover shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoverSettings {
    /// Show descriptions and syntax
    pub documentation: bool,
    /// Show links to reference documentation
    pub references: bool,
}

impl Default for HoverSettings {
    fn default() -> Self {
        Self {
            documentation: true,
            references: true,
        }
    }
}

/// Everything the client can configure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerOptions {
    pub hover: HoverSettings,
    /// Extra documentation data files, merged over the builtin data
    pub custom_data: Vec<PathBuf>,
}

impl ServerOptions {
    /// Read the initialization options, falling back to defaults when they are unusable
    pub fn from_initialization_options(options: Option<serde_json::Value>) -> Self {
        let Some(options) = options else {
            return Self::default();
        };
        match serde_json::from_value(options) {
            Ok(options) => options,
            Err(e) => {
                log::warn!("Invalid initialization options, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

/// Content formats the client can display in a hover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverCapabilities {
    pub supports_markdown: bool,
}

impl HoverCapabilities {
    /// A client that renders markdown
    pub const LATEST: Self = Self {
        supports_markdown: true,
    };

    /// A client that only shows plain text
    pub const PLAIN_TEXT: Self = Self {
        supports_markdown: false,
    };

    /// Capabilities advertised by the client
    ///
    /// Markdown is only used when `textDocument.hover.contentFormat` lists it.
    pub fn from_client(capabilities: &ClientCapabilities) -> Self {
        let supports_markdown = capabilities
            .text_document
            .as_ref()
            .and_then(|text_document| text_document.hover.as_ref())
            .and_then(|hover| hover.content_format.as_ref())
            .is_some_and(|formats| formats.contains(&MarkupKind::Markdown));
        Self { supports_markdown }
    }
}

impl Default for HoverCapabilities {
    fn default() -> Self {
        Self::LATEST
    }
}
