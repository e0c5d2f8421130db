//! Style Hover Library
//!
//! Hover information for stylesheets: documentation of properties, pseudo selectors
//! and at-rules, and the specificity of selectors.

pub mod css;
pub mod error;
pub mod language;
pub mod logging;
#[cfg(test)]
pub mod test_utils;
