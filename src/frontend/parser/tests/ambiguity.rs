//! Backtracking between abstractions and member names

use super::instance_source;
use crate::frontend::lexer::{tokenize, TokenKind};
use crate::frontend::parser::*;
use crossbeam::channel::bounded;

/// State fed from a pre-scanned token list
fn state_for(text: &str) -> ParserState<'_> {
    let tokens = tokenize(text);
    let (sender, receiver) = bounded(tokens.len());
    for token in tokens {
        sender.send(token).unwrap();
    }
    ParserState::new(text, receiver)
}

#[test]
fn test_identifier_before_paren_is_not_an_abstraction() {
    let mut state = state_for("SetName(name string)");
    assert_eq!(state.parse_abstraction().unwrap(), None);

    // Both tokens are back on the stack, identifier on top.
    assert_eq!(state.pending(), 2);
    assert_eq!(state.next_token().unwrap().value, "SetName");
    assert_eq!(state.next_token().unwrap().value, "(");
}

#[test]
fn test_bracket_without_close_is_not_an_array_prefix() {
    let mut state = state_for("[T]");
    assert_eq!(state.parse_prefix().unwrap(), None);
    assert_eq!(state.next_token().unwrap().value, "[");
    assert_eq!(state.next_token().unwrap().value, "T");
}

#[test]
fn test_identifier_without_dot_is_not_an_alias() {
    let mut state = state_for("Item ]");
    assert_eq!(state.parse_prefix().unwrap(), None);
    let abstraction = state.parse_abstraction().unwrap();
    assert_eq!(abstraction, Some(Abstraction::named("Item")));
    assert_eq!(state.next_token().unwrap().value, "]");
}

#[test]
fn test_prefixes() {
    let mut state = state_for("[]a map[K]b chan c x.d");
    let prefixes: Vec<Option<Prefix>> = (0..4)
        .map(|_| state.parse_abstraction().unwrap().unwrap().prefix)
        .collect();
    assert_eq!(
        prefixes,
        vec![
            Some(Prefix::Array),
            Some(Prefix::Map("K".to_string())),
            Some(Prefix::Channel),
            Some(Prefix::Alias("x".to_string())),
        ]
    );
    assert_eq!(state.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_attribute_without_result_precedes_next_attribute() {
    let document = parse(&instance_source(
        "\n\t// Attributes\n\tSetSize(size int)\n\tGetSize() int",
    ))
    .unwrap();
    let attributes = &document.instances()[0].attributes;
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes[0].identifier, "SetSize");
    assert!(attributes[0].abstraction.is_none());
    assert_eq!(attributes[1].identifier, "GetSize");
}

#[test]
fn test_method_without_result_precedes_next_method() {
    let document = parse(&instance_source(
        "\n\t// Methods\n\tClose()\n\tOpen(path string) error",
    ))
    .unwrap();
    let methods = &document.instances()[0].methods;
    assert!(methods[0].result.is_none());
    assert_eq!(
        methods[1].result,
        Some(ResultType::Abstraction(Abstraction::named("error")))
    );
}
