//! Scanner producing tokens from source text

use super::patterns::match_at;
use super::tokens::{Token, TokenKind};
use crate::util::span::Position;
use crossbeam::channel::Sender;
use tracing::trace;

/// Pull-based scanner over a source text.
///
/// Yields every significant token followed by exactly one `Eof`. When no
/// pattern matches, a single-character `Error` token is yielded and the scan
/// ends with `Eof`.
pub struct Lexer<'a> {
    source: &'a str,
    position: Position,
    finished: bool,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: Position::start(),
            finished: false,
            failed: false,
        }
    }

    /// Current scan position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the scan hit an unrecognized character
    pub fn failed(&self) -> bool {
        self.failed
    }

    fn eof(&mut self) -> Token {
        self.finished = true;
        Token::new(TokenKind::Eof, self.position, "")
    }

    /// Scan the next token
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        if self.failed {
            return Some(self.eof());
        }

        loop {
            let rest = &self.source[self.position.offset..];
            if rest.is_empty() {
                return Some(self.eof());
            }

            match match_at(rest) {
                Some((kind, len)) => {
                    let value = &rest[..len];
                    let start = self.position;
                    self.position = start.advance(value);
                    if let Some(kind) = kind {
                        return Some(Token::new(kind, start, value));
                    }
                }
                None => {
                    let c = rest.chars().next()?;
                    let start = self.position;
                    self.position = start.advance(&rest[..c.len_utf8()]);
                    self.failed = true;
                    return Some(Token::new(TokenKind::Error, start, c.to_string()));
                }
            }
        }
    }

    /// Push every token into `sender`. Stops early, without error, once the
    /// receiving side has been dropped.
    pub fn scan_into(
        mut self,
        sender: Sender<Token>,
    ) {
        while let Some(token) = self.next_token() {
            trace!("token {}", token);
            if sender.send(token).is_err() {
                trace!("token consumer gone, scanner stopping");
                return;
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
