//! This module includes common things we can reuse across different languages

pub mod document;
pub mod tree_utils;
