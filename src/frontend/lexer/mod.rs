//! Lexer module
//!
//! Splits notation source into comment, delimiter, identifier, note and
//! text tokens. Whitespace separates tokens and is never emitted.

pub mod patterns;
pub mod tokenizer;
pub mod tokens;

#[cfg(test)]
mod tests;

pub use tokenizer::Lexer;
pub use tokens::{printable, Token, TokenKind};

/// Tokenize source text synchronously.
///
/// The result always ends with an `Eof` token; an unrecognized character
/// shows up as an `Error` token right before it.
pub fn tokenize(source: &str) -> Vec<Token> {
    tracing::debug!("Starting lexical analysis ({} bytes)", source.len());

    let tokens: Vec<Token> = Lexer::new(source).collect();

    tracing::debug!("Lexical analysis produced {} tokens", tokens.len());
    tokens
}
