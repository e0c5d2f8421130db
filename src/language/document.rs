//! Text Document Model
//!
//! Tree-sitter reports byte offsets, while hover offsets and LSP positions count
//! UTF-16 code units. `TextDocument` keeps the text together with a line index so
//! the three coordinate systems can be converted into each other.

use tower_lsp::lsp_types::{Position, Range};
use tree_sitter::Point;

/// An immutable snapshot of a document's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    content: String,
    /// Byte offset of the first character of every line
    line_starts: Vec<usize>,
}

impl TextDocument {
    /// Create a snapshot from document text
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let line_starts = Self::calculate_line_starts(&content);
        Self {
            content,
            line_starts,
        }
    }

    /// The document text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines, an empty document has one line
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Length of the document in UTF-16 code units
    pub fn len_utf16(&self) -> usize {
        self.content.encode_utf16().count()
    }

    /// Convert a UTF-16 offset into a byte offset
    ///
    /// An offset pointing into the middle of a surrogate pair maps to the start of
    /// that character. Returns `None` for offsets past the end of the text.
    pub fn offset_to_byte(&self, offset: usize) -> Option<usize> {
        let mut units = 0;
        for (i, ch) in self.content.char_indices() {
            if units + ch.len_utf16() > offset {
                return Some(i);
            }
            units += ch.len_utf16();
        }
        (units == offset).then_some(self.content.len())
    }

    /// Convert a byte offset into a UTF-16 offset, clamping to the text
    pub fn byte_to_offset(&self, byte: usize) -> usize {
        let byte = self.floor_char_boundary(byte);
        self.content[..byte].encode_utf16().count()
    }

    /// Convert a byte offset into an LSP position
    pub fn byte_to_position(&self, byte: usize) -> Position {
        let byte = self.floor_char_boundary(byte);
        let line = match self.line_starts.binary_search(&byte) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let character = self.content[line_start..byte].encode_utf16().count();

        Position {
            line: line as u32,
            character: character as u32,
        }
    }

    /// Convert an LSP position into a byte offset
    ///
    /// A column past the end of its line resolves to the end of that line, as LSP
    /// requires. Returns `None` when the line does not exist.
    pub fn position_to_byte(&self, position: Position) -> Option<usize> {
        let line_start = *self.line_starts.get(position.line as usize)?;
        let line_end = self
            .line_starts
            .get(position.line as usize + 1)
            .copied()
            .unwrap_or(self.content.len());

        let mut units = 0;
        for (i, ch) in self.content[line_start..line_end].char_indices() {
            if units >= position.character as usize || ch == '\n' || ch == '\r' {
                return Some(line_start + i);
            }
            units += ch.len_utf16();
        }
        Some(line_end)
    }

    /// Convert an LSP position into a UTF-16 offset
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        self.position_to_byte(position)
            .map(|byte| self.byte_to_offset(byte))
    }

    /// Convert a UTF-16 offset into an LSP position
    pub fn offset_to_position(&self, offset: usize) -> Option<Position> {
        self.offset_to_byte(offset)
            .map(|byte| self.byte_to_position(byte))
    }

    /// Convert a byte range into an LSP range
    pub fn byte_range_to_range(&self, start: usize, end: usize) -> Range {
        Range {
            start: self.byte_to_position(start),
            end: self.byte_to_position(end),
        }
    }

    /// Convert a byte offset into a tree-sitter point, whose column counts bytes
    pub fn byte_to_point(&self, byte: usize) -> Point {
        let byte = byte.min(self.content.len());
        let row = match self.line_starts.binary_search(&byte) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        Point {
            row,
            column: byte - self.line_starts[row],
        }
    }

    fn floor_char_boundary(&self, byte: usize) -> usize {
        let mut byte = byte.min(self.content.len());
        while !self.content.is_char_boundary(byte) {
            byte -= 1;
        }
        byte
    }

    fn calculate_line_starts(content: &str) -> Vec<usize> {
        let mut line_starts = vec![0];
        for (i, ch) in content.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }
        line_starts
    }
}
