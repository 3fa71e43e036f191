//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the token types of the minic
//! language: numeric literals, identifiers, and punctuators. The rules are
//! tried in that order, and the two-character punctuators are matched
//! before the one-character ones.

use super::Lexer;
use super::error::LexError;
use crate::token::{Span, Token, TokenKind};

/// The two-character punctuators, matched before any single character.
const TWO_CHAR_PUNCTUATORS: [(&str, TokenKind); 4] = [
    ("==", TokenKind::EqualEqual),
    ("!=", TokenKind::BangEqual),
    ("<=", TokenKind::LessEqual),
    (">=", TokenKind::GreaterEqual),
];

impl<'a> Lexer<'a> {
    /// Reads and returns the next token from the input.
    ///
    /// This method is called repeatedly by
    /// [`tokenize`](super::Lexer::tokenize) to produce the token stream. It
    /// assumes that whitespace has already been skipped and that at least
    /// one character remains.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] if the current character starts no token.
    pub(super) fn next_token(&mut self) -> Result<Token, LexError> {
        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        // `tokenize` only calls this with input remaining.
        let Some(c) = self.current_char() else {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Err(LexError::unexpected_character('\0', span));
        };

        if c.is_ascii_digit() {
            return Ok(self.read_number(start_pos, start_line, start_column));
        }

        if c.is_ascii_alphabetic() || c == '_' {
            return Ok(self.read_identifier(start_pos, start_line, start_column));
        }

        if let Some(token) = self.read_punctuator(start_pos, start_line, start_column) {
            return Ok(token);
        }

        let span = Span::new(self.pos, self.pos + c.len_utf8(), self.line, self.column);
        Err(LexError::unexpected_character(c, span))
    }

    /// Reads a numeric literal from the input.
    ///
    /// The longest run of ASCII decimal digits is consumed. The value is
    /// accumulated with wrapping unsigned base-10 arithmetic and stored as a
    /// 64-bit two's-complement integer, so a literal wider than 64 bits
    /// wraps around instead of failing.
    fn read_number(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        let mut value: u64 = 0;

        while let Some(c) = self.current_char() {
            let Some(digit) = c.to_digit(10) else {
                break;
            };
            value = value.wrapping_mul(10).wrapping_add(u64::from(digit));
            self.advance();
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Num(value as i64), span)
    }

    /// Reads an identifier from the input.
    ///
    /// Identifiers consist of an ASCII alphabetic character or underscore
    /// followed by any number of ASCII alphanumeric characters or
    /// underscores. Keywords are not recognized here; every word is emitted
    /// as [`TokenKind::Identifier`] and reclassified afterwards by
    /// [`super::keywords::convert_keywords`].
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let value = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Identifier(value), span)
    }

    /// Reads a punctuator from the input, or returns `None` if the current
    /// character starts none.
    ///
    /// The two-character punctuators (`==`, `!=`, `<=`, `>=`) are tried
    /// first so that `<=` never lexes as `<` followed by `=`.
    fn read_punctuator(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Option<Token> {
        for (text, kind) in TWO_CHAR_PUNCTUATORS {
            if self.starts_with(text) {
                self.advance();
                self.advance();
                let span = Span::new(start_pos, self.pos, start_line, start_column);
                return Some(Token::new(kind, span));
            }
        }

        let kind = match self.current_char()? {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ';' => TokenKind::Semicolon,
            '=' => TokenKind::Equals,
            '<' => TokenKind::LessThan,
            '>' => TokenKind::GreaterThan,
            _ => return None,
        };

        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Some(Token::new(kind, span))
    }
}
