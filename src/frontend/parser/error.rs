//! Parse errors

use super::grammar::Rule;
use crate::frontend::lexer::Token;
use crate::util::diagnostic::render_context;
use thiserror::Error;

/// Fatal parse failure. The message is self-contained: it quotes the
/// offending token and the surrounding source lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The tokenizer hit a character no pattern accepts
    #[error("{message}")]
    Lexical { token: Token, message: String },

    /// A token did not fit the rule being parsed
    #[error("{message}")]
    Syntax {
        token: Token,
        expected: String,
        rules: Vec<Rule>,
        message: String,
    },

    /// The token queue closed before an end-of-file marker arrived
    #[error("The token stream terminated without an EOF token.")]
    StreamClosed,
}

impl ParseError {
    pub fn lexical(
        source: &str,
        token: Token,
    ) -> Self {
        let message = describe(source, &token);
        ParseError::Lexical { token, message }
    }

    pub fn syntax(
        source: &str,
        token: Token,
        expected: &str,
        rules: &[Rule],
    ) -> Self {
        let mut message = describe(source, &token);
        message.push_str(&format!("Was expecting '{}' from:\n", expected));
        for rule in rules {
            message.push_str(&format!("  {}: {}\n\n", rule.symbol(), rule.text()));
        }
        ParseError::Syntax {
            token,
            expected: expected.to_string(),
            rules: rules.to_vec(),
            message,
        }
    }

    /// Offending token, if any
    pub fn token(&self) -> Option<&Token> {
        match self {
            ParseError::Lexical { token, .. } | ParseError::Syntax { token, .. } => Some(token),
            ParseError::StreamClosed => None,
        }
    }

    /// First line of the message
    pub fn headline(&self) -> String {
        self.to_string().lines().next().unwrap_or_default().to_string()
    }
}

fn describe(
    source: &str,
    token: &Token,
) -> String {
    format!(
        "An unexpected token was received by the parser: {}\n{}",
        token,
        render_context(source, token.position)
    )
}
