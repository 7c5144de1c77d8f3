//! Parser state: token queue plus pushback stack

use super::error::ParseError;
use super::grammar::Rule;
use crate::frontend::lexer::{Token, TokenKind};
use crossbeam::channel::Receiver;
use smallvec::SmallVec;
use tracing::trace;

/// Consumer side of a parse.
///
/// Tokens are taken from the pushback stack first, then from the queue fed
/// by the tokenizer. Dropping the state drops the receiver, which stops a
/// tokenizer still waiting to push.
pub struct ParserState<'a> {
    source: &'a str,
    tokens: Receiver<Token>,
    pushback: SmallVec<[Token; 4]>,
}

impl<'a> ParserState<'a> {
    pub fn new(
        source: &'a str,
        tokens: Receiver<Token>,
    ) -> Self {
        Self {
            source,
            tokens,
            pushback: SmallVec::new(),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Number of tokens waiting on the pushback stack
    pub fn pending(&self) -> usize {
        self.pushback.len()
    }

    /// Next token, pushed-back tokens first
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        if let Some(token) = self.pushback.pop() {
            return Ok(token);
        }
        let token = self.tokens.recv().map_err(|_| ParseError::StreamClosed)?;
        if token.kind == TokenKind::Error {
            return Err(ParseError::lexical(self.source, token));
        }
        Ok(token)
    }

    /// Return a token to be read again
    pub fn push_back(
        &mut self,
        token: Token,
    ) {
        trace!("push back {}", token);
        self.pushback.push(token);
    }

    /// Look at the next token without consuming it
    pub fn peek(&mut self) -> Result<&Token, ParseError> {
        let token = self.next_token()?;
        self.pushback.push(token);
        // The stack was just pushed, so it is never empty here.
        self.pushback.last().ok_or(ParseError::StreamClosed)
    }

    /// Consume the next token if it has `kind` and, when given, `value`.
    /// Anything else is pushed back.
    pub fn take(
        &mut self,
        kind: TokenKind,
        value: Option<&str>,
    ) -> Result<Option<Token>, ParseError> {
        let token = self.next_token()?;
        if token.is(kind, value) {
            Ok(Some(token))
        } else {
            self.push_back(token);
            Ok(None)
        }
    }

    /// Consume an identifier
    pub fn take_identifier(&mut self) -> Result<Option<String>, ParseError> {
        Ok(self.take(TokenKind::Identifier, None)?.map(|t| t.value))
    }

    /// Consume a specific keyword
    pub fn take_keyword(
        &mut self,
        keyword: &str,
    ) -> Result<bool, ParseError> {
        Ok(self.take(TokenKind::Identifier, Some(keyword))?.is_some())
    }

    /// Consume a specific delimiter
    pub fn take_delimiter(
        &mut self,
        delimiter: &str,
    ) -> Result<bool, ParseError> {
        Ok(self.take(TokenKind::Delimiter, Some(delimiter))?.is_some())
    }

    /// Consume a specific section note
    pub fn take_note(
        &mut self,
        note: &str,
    ) -> Result<bool, ParseError> {
        Ok(self.take(TokenKind::Note, Some(note))?.is_some())
    }

    /// Consume a token that must be there
    pub fn expect(
        &mut self,
        kind: TokenKind,
        value: Option<&str>,
        expected: &str,
        rules: &[Rule],
    ) -> Result<Token, ParseError> {
        match self.take(kind, value)? {
            Some(token) => Ok(token),
            None => Err(self.unexpected(expected, rules)),
        }
    }

    pub fn expect_identifier(
        &mut self,
        rules: &[Rule],
    ) -> Result<String, ParseError> {
        Ok(self.expect(TokenKind::Identifier, None, "IDENTIFIER", rules)?.value)
    }

    pub fn expect_keyword(
        &mut self,
        keyword: &str,
        rules: &[Rule],
    ) -> Result<(), ParseError> {
        let expected = format!("\"{}\"", keyword);
        self.expect(TokenKind::Identifier, Some(keyword), &expected, rules)?;
        Ok(())
    }

    pub fn expect_delimiter(
        &mut self,
        delimiter: &str,
        rules: &[Rule],
    ) -> Result<(), ParseError> {
        self.expect(TokenKind::Delimiter, Some(delimiter), delimiter, rules)?;
        Ok(())
    }

    /// Require a rule that returned `None` to have matched
    pub fn require<T>(
        &mut self,
        node: Option<T>,
        expected: &str,
        rules: &[Rule],
    ) -> Result<T, ParseError> {
        match node {
            Some(node) => Ok(node),
            None => Err(self.unexpected(expected, rules)),
        }
    }

    /// Syntax error at the next token. A lexical error found while looking
    /// for that token takes precedence.
    pub fn unexpected(
        &mut self,
        expected: &str,
        rules: &[Rule],
    ) -> ParseError {
        match self.peek() {
            Ok(token) => {
                let token = token.clone();
                ParseError::syntax(self.source, token, expected, rules)
            }
            Err(err) => err,
        }
    }
}
