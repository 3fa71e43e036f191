//! Parser helper methods for token navigation and variable lookup.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Var, VarId};
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a user-friendly display string for a token kind.
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::Identifier(s) => format!("identifier '{}'", s),
            TokenKind::Num(n) => format!("number '{}'", n),
            TokenKind::Return => "'return' keyword".to_string(),
            TokenKind::If => "'if' keyword".to_string(),
            TokenKind::Else => "'else' keyword".to_string(),
            TokenKind::For => "'for' keyword".to_string(),
            TokenKind::LeftParen => "'('".to_string(),
            TokenKind::RightParen => "')'".to_string(),
            TokenKind::LeftBrace => "'{'".to_string(),
            TokenKind::RightBrace => "'}'".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Star => "'*'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::EqualEqual => "'=='".to_string(),
            TokenKind::BangEqual => "'!='".to_string(),
            TokenKind::LessThan => "'<'".to_string(),
            TokenKind::GreaterThan => "'>'".to_string(),
            TokenKind::LessEqual => "'<='".to_string(),
            TokenKind::GreaterEqual => "'>='".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }

    /// Returns a reference to the current token.
    ///
    /// This method is safe to call at any time - if the position is past
    /// the end, it returns the last token (which is always `Eof`).
    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Expects the current token to match `expected` and advances.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the current token matches and was consumed
    /// * `Err(ParseError)` - If the current token does not match
    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<(), ParseError> {
        if self.current_kind() == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                &Self::token_kind_display(expected),
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Returns the id of the named variable, creating it on first use.
    ///
    /// There are no declarations in minic; any identifier appearing in an
    /// expression is a local of the function. Lookup is by exact name so
    /// every name maps to exactly one [`Var`].
    pub(super) fn find_or_create_var(&mut self, name: &str) -> VarId {
        if let Some(index) = self.locals.iter().position(|var| var.name == name) {
            return VarId(index);
        }

        self.locals.push(Var::new(name));
        VarId(self.locals.len() - 1)
    }
}
