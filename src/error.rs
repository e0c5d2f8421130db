//! Error types for the hover engine
//!
//! The hover path itself never fails, errors only come from setting things up:
//! creating the parser, loading documentation data and opening the log file.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for setup operations
#[derive(Error, Debug)]
pub enum HoverError {
    /// IO errors (reading custom data, creating the log file, etc.)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON errors while reading a documentation dataset
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Tree-sitter language setup errors
    #[error("Failed to set up tree-sitter language: {0}")]
    TreeSitterLanguage(#[from] tree_sitter::LanguageError),

    /// The parser gave up without producing a tree
    #[error("Failed to parse stylesheet")]
    Parse,

    /// A custom data file could not be used
    #[error("Invalid custom data file {file:?}: {message}")]
    CustomData { file: PathBuf, message: String },

    /// The logger could not be installed
    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

/// Result type alias for hover setup operations
pub type HoverResult<T> = Result<T, HoverError>;

impl From<std::io::Error> for HoverError {
    fn from(err: std::io::Error) -> Self {
        HoverError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

impl From<serde_json::Error> for HoverError {
    fn from(err: serde_json::Error) -> Self {
        HoverError::Json {
            source: err,
            message: "JSON operation failed".to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> HoverResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> HoverResult<T> {
        self.map_err(|e| HoverError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: &str) -> HoverResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: &str) -> HoverResult<T> {
        self.map_err(|e| HoverError::Json {
            message: message.to_string(),
            source: e,
        })
    }
}
