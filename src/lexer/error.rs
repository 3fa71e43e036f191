//! Lexical analysis error types.
//!
//! This module defines [`LexError`], which represents errors that can occur
//! during tokenization.

use crate::token::Span;

/// An error that occurred during lexical analysis.
///
/// `LexError` contains a human-readable message and the source location
/// where the error occurred, enabling rich error reporting with tools
/// like [`ariadne`].
///
/// The only lexical failure mode in minic is an unrecognized character;
/// numeric literals cannot fail (overflow wraps) and identifiers have no
/// malformed shape.
///
/// [`ariadne`]: https://docs.rs/ariadne
#[derive(Debug)]
pub struct LexError {
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred.
    pub span: Span,
}

impl LexError {
    /// Creates an error for a character the scanner has no rule for.
    pub(super) fn unexpected_character(c: char, span: Span) -> Self {
        LexError {
            message: format!("Unexpected character '{}'", c),
            span,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for LexError {}
