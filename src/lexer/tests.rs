//! Unit tests for the lexer.

use super::*;
use crate::token::{Token, TokenKind};

/// Helper function to tokenize input and return only the kinds.
fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Tokenization failed for input {:?}: {}", input, e))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Helper function to tokenize input and return the tokens with spans.
fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    lexer
        .tokenize()
        .unwrap_or_else(|e| panic!("Tokenization failed for input {:?}: {}", input, e))
}

/// Helper function to tokenize input and return the error.
fn tokenize_error(input: &str) -> LexError {
    let mut lexer = Lexer::new(input);
    match lexer.tokenize() {
        Ok(tokens) => panic!(
            "Expected tokenization to fail for input {:?}, but it succeeded with {} tokens",
            input,
            tokens.len()
        ),
        Err(e) => e,
    }
}

// ===================
// Basic tokens
// ===================

#[test]
fn test_empty_input() {
    let kinds = tokenize_kinds("");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_whitespace_only() {
    let kinds = tokenize_kinds("   \n\t");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_single_char_punctuators() {
    let kinds = tokenize_kinds("+-*/(){};=<>");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Semicolon,
            TokenKind::Equals,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_two_char_punctuators() {
    let kinds = tokenize_kinds("== != <= >=");
    assert_eq!(
        kinds,
        vec![
            TokenKind::EqualEqual,
            TokenKind::BangEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_two_char_before_one_char() {
    // "<=" must never lex as "<" followed by "="
    let kinds = tokenize_kinds("<=");
    assert_eq!(kinds, vec![TokenKind::LessEqual, TokenKind::Eof]);

    // but separated by whitespace the characters are two tokens
    let kinds = tokenize_kinds("< =");
    assert_eq!(
        kinds,
        vec![TokenKind::LessThan, TokenKind::Equals, TokenKind::Eof]
    );
}

#[test]
fn test_triple_equals() {
    // greedy matching takes "==" first, leaving "="
    let kinds = tokenize_kinds("===");
    assert_eq!(
        kinds,
        vec![TokenKind::EqualEqual, TokenKind::Equals, TokenKind::Eof]
    );
}

// ===================
// Numeric literals
// ===================

#[test]
fn test_number() {
    let kinds = tokenize_kinds("42");
    assert_eq!(kinds, vec![TokenKind::Num(42), TokenKind::Eof]);
}

#[test]
fn test_number_zero() {
    let kinds = tokenize_kinds("0");
    assert_eq!(kinds, vec![TokenKind::Num(0), TokenKind::Eof]);
}

#[test]
fn test_number_longest_run() {
    // digits stop at the first non-digit; "123abc" is a number then a word
    let kinds = tokenize_kinds("123abc");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Num(123),
            TokenKind::Identifier("abc".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_number_i64_max() {
    let kinds = tokenize_kinds("9223372036854775807");
    assert_eq!(kinds, vec![TokenKind::Num(i64::MAX), TokenKind::Eof]);
}

#[test]
fn test_number_wraps_to_i64_min() {
    // 2^63 does not fit in i64; the two's-complement bit pattern is kept
    let kinds = tokenize_kinds("9223372036854775808");
    assert_eq!(kinds, vec![TokenKind::Num(i64::MIN), TokenKind::Eof]);
}

#[test]
fn test_number_wraps_past_u64() {
    // 2^64 wraps all the way to zero
    let kinds = tokenize_kinds("18446744073709551616");
    assert_eq!(kinds, vec![TokenKind::Num(0), TokenKind::Eof]);
}

// ===================
// Identifiers and keywords
// ===================

#[test]
fn test_identifier() {
    let kinds = tokenize_kinds("abc");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier("abc".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_identifier_with_underscore_and_digits() {
    let kinds = tokenize_kinds("_foo1");
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier("_foo1".to_string()), TokenKind::Eof]
    );
}

#[test]
fn test_keywords_reclassified() {
    let kinds = tokenize_kinds("return if else for");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Return,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_keyword_prefix_stays_identifier() {
    let kinds = tokenize_kinds("returnx fork iffy");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier("returnx".to_string()),
            TokenKind::Identifier("fork".to_string()),
            TokenKind::Identifier("iffy".to_string()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_statement_stream() {
    let kinds = tokenize_kinds("{ a = 1; return a; }");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LeftBrace,
            TokenKind::Identifier("a".to_string()),
            TokenKind::Equals,
            TokenKind::Num(1),
            TokenKind::Semicolon,
            TokenKind::Return,
            TokenKind::Identifier("a".to_string()),
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Eof
        ]
    );
}

// ===================
// Spans
// ===================

#[test]
fn test_spans_slice_to_lexemes() {
    let input = "{ count = 12; }";
    let tokens = tokenize(input);
    let lexemes: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| &input[t.span.start..t.span.end])
        .collect();
    assert_eq!(lexemes, vec!["{", "count", "=", "12", ";", "}"]);
}

#[test]
fn test_keyword_span_survives_reclassification() {
    let input = "return 1;";
    let tokens = tokenize(input);
    assert_eq!(tokens[0].kind, TokenKind::Return);
    assert_eq!(&input[tokens[0].span.start..tokens[0].span.end], "return");
}

#[test]
fn test_eof_span_at_end_of_input() {
    let input = "ab ";
    let tokens = tokenize(input);
    let eof = tokens.last().expect("token stream is never empty");
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.span.start, input.len());
    assert_eq!(eof.span.end, input.len());
}

#[test]
fn test_line_and_column_tracking() {
    let tokens = tokenize("a\n  b");
    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[0].span.column, 1);
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[1].span.column, 3);
}

/// Every byte of the input is either covered by exactly one token span, in
/// order, or is whitespace. Re-slicing the spans therefore reproduces the
/// input minus the whitespace between tokens.
#[test]
fn test_round_trip_through_spans() {
    let inputs = [
        "{ return 42; }",
        "{ i=0; s=0; for(i=1;i<=10;i=i+1) s=s+i; return s; }",
        "{ x=10; if (x>5) return 1; else return 0; }",
        "a==b != c",
    ];

    for input in inputs {
        let tokens = tokenize(input);
        let mut pos = 0;
        for token in tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
            assert!(
                input[pos..token.span.start]
                    .chars()
                    .all(|c| c.is_ascii_whitespace()),
                "Non-whitespace bytes between tokens in {:?} at {}..{}",
                input,
                pos,
                token.span.start
            );
            assert!(
                token.span.start < token.span.end,
                "Empty non-EOF token span in {:?}",
                input
            );
            pos = token.span.end;
        }
        assert!(
            input[pos..].chars().all(|c| c.is_ascii_whitespace()),
            "Non-whitespace trailing bytes in {:?}",
            input
        );
    }
}

// ===================
// Errors
// ===================

#[test]
fn test_unexpected_character() {
    let error = tokenize_error("@");
    assert!(
        error.message.contains("Unexpected character"),
        "Unexpected message: {}",
        error.message
    );
    assert_eq!(error.span.start, 0);
    assert_eq!(error.span.end, 1);
}

#[test]
fn test_unexpected_character_mid_input() {
    let error = tokenize_error("{ @; }");
    assert_eq!(error.span.start, 2);
    assert_eq!(error.span.line, 1);
    assert_eq!(error.span.column, 3);
}

#[test]
fn test_lone_bang_is_an_error() {
    // '!' only exists as part of "!="
    let error = tokenize_error("1 ! 2");
    assert_eq!(error.span.start, 2);
}

#[test]
fn test_non_ascii_character_is_an_error() {
    let error = tokenize_error("é");
    assert!(error.message.contains("Unexpected character"));
    assert_eq!(error.span.start, 0);
    assert_eq!(error.span.end, 'é'.len_utf8());
}

#[test]
fn test_error_display_includes_position() {
    let error = tokenize_error("\n  @");
    assert!(
        error.to_string().starts_with("2:3:"),
        "Unexpected display: {}",
        error
    );
}
