use brt::{
    error::LexError,
    interpreter::{
        lexer::{Lexer, significant_tokens, tokenize},
        token::{Token, TokenKind},
    },
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn significant(source: &str) -> Vec<Token> {
    significant_tokens(tokenize(source.as_bytes()).unwrap()).unwrap()
}

#[test]
fn token_dump_format() {
    let lines: Vec<String> = significant("var name = \"bo\"; print 3;").iter()
                                                                    .map(ToString::to_string)
                                                                    .collect();
    assert_eq!(lines,
               ["VAR var null",
                "IDENTIFIER name null",
                "EQUAL = null",
                "STRING \"bo\" bo",
                "SEMICOLON ; null",
                "PRINT print null",
                "NUMBER 3 3.0",
                "SEMICOLON ; null",
                "EOF  null"]);
}

#[test]
fn lexer_keeps_going_after_errors() {
    let results: Vec<_> = Lexer::new(b"1. x \"open").collect();
    assert!(matches!(results[0], Err(LexError::UnterminatedNumber { .. })));
    assert!(results.iter()
                   .any(|r| matches!(r, Ok(t) if t.kind == TokenKind::Identifier && t.lexeme == "x")));
    assert!(results.iter().any(|r| matches!(r, Err(LexError::UnterminatedString { .. }))));
    assert!(matches!(results.last(), Some(Ok(t)) if t.kind == TokenKind::Eof));
}

#[test]
fn illegal_character_message() {
    let err = significant_tokens(tokenize(b"\n#ok | x").unwrap()).unwrap_err();
    assert_eq!(err.to_string(), "[line 2] Error: Unexpected character: |");
}

proptest! {
    #[test]
    fn integers_gain_a_fraction(digits in "[0-9]{1,12}") {
        let tokens = significant(&digits);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].lexeme, &digits);
        prop_assert_eq!(&tokens[0].literal, &format!("{digits}.0"));
    }

    #[test]
    fn decimals_keep_their_spelling(number in "[0-9]{1,6}\\.[0-9]{1,6}") {
        let tokens = significant(&number);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].literal, &number);
    }

    #[test]
    fn strings_lose_their_quotes(body in "[^\"\n]{0,24}") {
        let source = format!("\"{body}\"");
        let tokens = significant(&source);
        prop_assert_eq!(tokens[0].kind, TokenKind::String);
        prop_assert_eq!(&tokens[0].lexeme, &source);
        prop_assert_eq!(&tokens[0].literal, &body);
    }

    #[test]
    fn unclosed_strings_are_rejected(body in "[^\"\n]{0,24}") {
        let source = format!("\"{body}");
        let is_unterminated = matches!(tokenize(source.as_bytes()),
                                       Err(LexError::UnterminatedString { line: 1, .. }));
        prop_assert!(is_unterminated);
    }

    #[test]
    fn lines_count_newlines(newlines in 0usize..20) {
        let source = format!("{}x", "\n".repeat(newlines));
        let tokens = significant(&source);
        prop_assert_eq!(tokens[0].line, newlines + 1);
    }

    #[test]
    fn any_input_ends_with_one_eof(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let eofs = Lexer::new(&bytes).filter(|r| matches!(r, Ok(t) if t.kind == TokenKind::Eof))
                                     .count();
        prop_assert_eq!(eofs, 1);
    }
}
