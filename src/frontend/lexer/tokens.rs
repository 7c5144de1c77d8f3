//! Token types

use crate::util::span::Position;
use serde::Serialize;
use std::fmt;

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// `/*` ... `*/` block, including the newlines that follow it
    Comment,
    /// One of `[ ] ( ) { } . , =`
    Delimiter,
    /// Identifiers, including the notation's keywords
    Identifier,
    /// `// Section` marker
    Note,
    /// Quoted text
    Text,

    // Special
    Eof,
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            TokenKind::Comment => "Comment",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Identifier => "Identifier",
            TokenKind::Note => "Note",
            TokenKind::Text => "Text",
            TokenKind::Eof => "EOF",
            TokenKind::Error => "Error",
        };
        f.write_str(name)
    }
}

/// Token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
    /// Raw source text of the token
    pub value: String,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        position: Position,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            position,
            value: value.into(),
        }
    }

    /// Check kind and, when given, the exact value
    pub fn is(
        &self,
        kind: TokenKind,
        value: Option<&str>,
    ) -> bool {
        self.kind == kind && value.map_or(true, |v| self.value == v)
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Value with non-printable characters replaced by placeholders
    pub fn printable_value(&self) -> String {
        printable(&self.value)
    }
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "Token [type: {}, line: {}, position: {}]: {}",
            self.kind,
            self.position.line,
            self.position.column,
            self.printable_value()
        )
    }
}

/// Substitute symbolic placeholders for control characters
pub fn printable(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\0' => output.push_str("<NULL>"),
            '\x07' => output.push_str("<BELL>"),
            '\x08' => output.push_str("<BKSP>"),
            '\t' => output.push_str("<HTAB>"),
            '\x0c' => output.push_str("<FMFD>"),
            '\n' => output.push_str("<EOLN>"),
            '\r' => output.push_str("<CRTN>"),
            '\x0b' => output.push_str("<VTAB>"),
            c => output.push(c),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_placeholders() {
        assert_eq!(printable("\r"), "<CRTN>");
        assert_eq!(printable("a\tb\n"), "a<HTAB>b<EOLN>");
        assert_eq!(printable("\0\x07\x08\x0b\x0c"), "<NULL><BELL><BKSP><VTAB><FMFD>");
    }

    #[test]
    fn test_display_does_not_alter_value() {
        let token = Token::new(TokenKind::Error, Position::new(2, 5), "\r");
        assert_eq!(token.value, "\r");
        assert_eq!(
            token.to_string(),
            "Token [type: Error, line: 2, position: 5]: <CRTN>"
        );
    }

    #[test]
    fn test_is_matches_kind_and_value() {
        let token = Token::new(TokenKind::Identifier, Position::start(), "type");
        assert!(token.is(TokenKind::Identifier, None));
        assert!(token.is(TokenKind::Identifier, Some("type")));
        assert!(!token.is(TokenKind::Identifier, Some("func")));
        assert!(!token.is(TokenKind::Delimiter, None));
    }
}
