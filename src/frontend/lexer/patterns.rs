//! Token patterns, tried in priority order at the scan position

use super::tokens::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Kind a pattern produces; `None` marks whitespace, which is consumed but
/// never emitted.
pub type PatternKind = Option<TokenKind>;

static COMMENT: Lazy<Regex> = Lazy::new(|| compile(r"/\*\n(?s:.*?)\n\*/\n+"));
static DELIMITER: Lazy<Regex> = Lazy::new(|| compile(r"[\[\](){}.,=]"));
static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| compile(r"(?:\p{Ll}|\p{Lu}|_)(?:\p{Ll}|\p{Lu}|_|\p{Nd})*"));
static NOTE: Lazy<Regex> = Lazy::new(|| compile(r"// [^\p{Cc}]*"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| compile(r"[ \t\n]+"));
static TEXT: Lazy<Regex> = Lazy::new(|| compile(r#""(?s:.*?)""#));

fn compile(pattern: &str) -> Regex {
    // Patterns are fixed at build time; anchoring keeps matches at the scan
    // position.
    match Regex::new(&format!("^(?:{})", pattern)) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid token pattern {:?}: {}", pattern, err),
    }
}

/// All patterns in priority order
fn patterns() -> [(&'static Lazy<Regex>, PatternKind); 6] {
    [
        (&COMMENT, Some(TokenKind::Comment)),
        (&DELIMITER, Some(TokenKind::Delimiter)),
        (&IDENTIFIER, Some(TokenKind::Identifier)),
        (&NOTE, Some(TokenKind::Note)),
        (&WHITESPACE, None),
        (&TEXT, Some(TokenKind::Text)),
    ]
}

/// Match the first applicable pattern at the start of `rest`, returning the
/// kind and the matched length in bytes.
pub fn match_at(rest: &str) -> Option<(PatternKind, usize)> {
    patterns().into_iter().find_map(|(regex, kind)| {
        regex
            .find(rest)
            .filter(|m| !m.as_str().is_empty())
            .map(|m| (kind, m.end()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_takes_trailing_newlines() {
        let source = "/*\nA widget.\n*/\n\n\ntype";
        let (kind, len) = match_at(source).unwrap();
        assert_eq!(kind, Some(TokenKind::Comment));
        assert_eq!(&source[..len], "/*\nA widget.\n*/\n\n\n");
    }

    #[test]
    fn test_comment_is_shortest() {
        let source = "/*\none\n*/\n/*\ntwo\n*/\n";
        let (_, len) = match_at(source).unwrap();
        assert_eq!(&source[..len], "/*\none\n*/\n");
    }

    #[test]
    fn test_note_stops_at_newline() {
        let source = "// Methods\n\tGetName() string";
        let (kind, len) = match_at(source).unwrap();
        assert_eq!(kind, Some(TokenKind::Note));
        assert_eq!(&source[..len], "// Methods");
    }

    #[test]
    fn test_identifier_allows_digits_after_first() {
        let (kind, len) = match_at("Vector3D[").unwrap();
        assert_eq!(kind, Some(TokenKind::Identifier));
        assert_eq!(len, 8);
        assert!(match_at("3D").is_none());
    }

    #[test]
    fn test_text_is_shortest() {
        let source = r#""fmt" "os""#;
        let (kind, len) = match_at(source).unwrap();
        assert_eq!(kind, Some(TokenKind::Text));
        assert_eq!(&source[..len], r#""fmt""#);
    }

    #[test]
    fn test_whitespace_has_no_kind() {
        assert_eq!(match_at(" \t\n x"), Some((None, 4)));
    }

    #[test]
    fn test_unmatched_characters() {
        assert!(match_at("\r").is_none());
        assert!(match_at("/x").is_none());
        assert!(match_at("\"unterminated").is_none());
    }
}
