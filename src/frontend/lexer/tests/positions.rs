//! Line and column tracking

use crate::frontend::lexer::tokenize;

#[cfg(test)]
mod position_tests {
    use super::*;

    #[test]
    fn test_first_token_at_origin() {
        let tokens = tokenize("package");
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
    }

    #[test]
    fn test_columns_on_one_line() {
        let tokens = tokenize("type Name string");
        let columns: Vec<usize> = tokens.iter().map(|t| t.column()).collect();
        assert_eq!(columns, vec![1, 6, 11, 17]);
    }

    #[test]
    fn test_position_after_comment() {
        let tokens = tokenize("/*\none\n*/\n\ntype");
        assert_eq!((tokens[1].line(), tokens[1].column()), (5, 1));
    }

    #[test]
    fn test_tab_counts_as_one_column() {
        let tokens = tokenize("// Methods\n\tGetName() string");
        assert_eq!((tokens[1].line(), tokens[1].column()), (2, 2));
        assert_eq!(tokens[1].value, "GetName");
    }

    #[test]
    fn test_eof_position() {
        let tokens = tokenize("ab\ncd");
        let eof = tokens.last().unwrap();
        assert_eq!((eof.line(), eof.column()), (2, 3));
    }

    #[test]
    fn test_offsets_are_bytes() {
        let tokens = tokenize("é x");
        assert_eq!(tokens[1].position.offset, 3);
        assert_eq!(tokens[1].column(), 3);
    }
}
