//! Parser module
//!
//! Recursive descent over the token queue. The tokenizer runs on a scoped
//! worker thread and feeds a bounded channel; the parser consumes it on the
//! calling thread, returning tokens it cannot use to a pushback stack.

pub mod ast;
pub mod error;
pub mod grammar;
pub mod ordering;
mod rules;
pub mod state;

#[cfg(test)]
mod tests;

pub use ast::*;
pub use error::ParseError;
pub use grammar::Rule;
pub use state::ParserState;

use crate::frontend::lexer::Lexer;
use crossbeam::channel::bounded;
use std::thread;
use tracing::debug;

/// Default capacity of the token queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

/// Parse a source text into a declaration tree
pub fn parse(source: &str) -> Result<Document, ParseError> {
    parse_with_capacity(source, DEFAULT_QUEUE_CAPACITY)
}

/// Parse with a specific token queue capacity (values below 1 are raised
/// to 1).
pub fn parse_with_capacity(
    source: &str,
    capacity: usize,
) -> Result<Document, ParseError> {
    debug!(
        "Starting parse ({} bytes, queue capacity {})",
        source.len(),
        capacity
    );

    let (sender, receiver) = bounded(capacity.max(1));
    let result = thread::scope(|scope| {
        scope.spawn(move || Lexer::new(source).scan_into(sender));

        // The state owns the receiver; it is dropped before the scope joins
        // the tokenizer, which unblocks a pending send.
        let mut state = ParserState::new(source, receiver);
        state.parse_source()
    });

    match &result {
        Ok(document) => debug!("Parsed package {}", document.header.identifier),
        Err(err) => debug!("Parse failed: {}", err.headline()),
    }
    result
}
