//! Source location tracking

use serde::Serialize;
use std::fmt;

/// Source position (line, column, and byte offset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number in characters (1-indexed)
    pub column: usize,
    /// Byte offset from start of source
    pub offset: usize,
}

impl Position {
    /// Create a new position
    #[inline]
    pub fn new(
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            line,
            column,
            offset: 0,
        }
    }

    /// Create a new position with offset
    #[inline]
    pub fn with_offset(
        line: usize,
        column: usize,
        offset: usize,
    ) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Position of the first character of a source
    #[inline]
    pub fn start() -> Self {
        Self::with_offset(1, 1, 0)
    }

    /// Position reached after consuming `text` starting from `self`
    pub fn advance(
        &self,
        text: &str,
    ) -> Self {
        let offset = self.offset + text.len();
        match text.rfind('\n') {
            Some(index) => Self {
                line: self.line + text.matches('\n').count(),
                column: text[index + 1..].chars().count() + 1,
                offset,
            },
            None => Self {
                line: self.line,
                column: self.column + text.chars().count(),
                offset,
            },
        }
    }
}

impl fmt::Display for Position {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
