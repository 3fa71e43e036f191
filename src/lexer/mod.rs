//! Lexical analyzer for the minic language.
//!
//! This module provides the [`Lexer`] struct which converts source code text
//! into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character
//! - Recognizes numeric literals, identifiers, and punctuators
//! - Tracks source positions for error reporting
//! - Skips whitespace
//! - Reclassifies keyword identifiers in a post-pass
//!
//! # Supported Tokens
//!
//! - **Numeric literals**: the longest run of ASCII decimal digits, converted
//!   with wrapping unsigned base-10 accumulation and stored as `i64`. A
//!   literal wider than 64 bits wraps around rather than erroring.
//! - **Identifiers**: start with an ASCII alphabetic character or underscore,
//!   contain ASCII alphanumerics and underscores.
//! - **Keywords**: `return`, `if`, `else`, `for`. Keyword recognition runs as
//!   a separate pass over the finished token stream rather than inside the
//!   identifier rule; it is easier to get right that way, and the scanning
//!   rules stay independent of the keyword set.
//! - **Punctuators**: the two-character operators `==`, `!=`, `<=`, `>=`
//!   (matched before the one-character ones) and the single characters
//!   `+ - * / ( ) { } ; = < >`.
//!
//! Any other character is a lex error anchored at the offending byte.
//!
//! # Examples
//!
//! ```
//! use minic::lexer::Lexer;
//! use minic::token::TokenKind;
//!
//! let mut lexer = Lexer::new("a = 1;");
//! let tokens = lexer.tokenize().unwrap();
//!
//! assert!(matches!(tokens[0].kind, TokenKind::Identifier(_)));
//! assert!(matches!(tokens[1].kind, TokenKind::Equals));
//! assert!(matches!(tokens[2].kind, TokenKind::Num(1)));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for lexical analysis
//! - [`cursor`] - Position tracking and character navigation
//! - [`tokens`] - Token recognition and reading
//! - [`keywords`] - Keyword reclassification post-pass
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod error;
mod keywords;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::LexError;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes minic source code.
///
/// The `Lexer` maintains its position within the input and tracks line/column
/// numbers for error reporting. It is designed to be used once per source
/// string.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with line and column
    /// numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// This method consumes the input from start to end, producing tokens
    /// until the end of input is reached. The returned vector always ends
    /// with an [`TokenKind::Eof`] token. After scanning, identifiers whose
    /// text matches a keyword are reclassified in place by
    /// [`keywords::convert_keywords`].
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Token>)` - A vector of tokens ending with `Eof`
    /// * `Err(LexError)` - If an unrecognized character is encountered
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_eof() {
                let span = Span::new(self.pos, self.pos, self.line, self.column);
                tokens.push(Token::new(TokenKind::Eof, span));
                break;
            }

            let token = self.next_token()?;
            tokens.push(token);
        }

        keywords::convert_keywords(&mut tokens);

        Ok(tokens)
    }

    /// Skips consecutive ASCII whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }
}
