//! Lexer tests module
//!
//! - basic: token kinds, keywords, whitespace
//! - positions: line and column tracking
//! - errors: unrecognized input
//! - channel: producer side of the token queue

mod positions;
