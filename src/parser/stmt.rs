//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Stmt, StmtKind};
use crate::token::TokenKind;

impl Parser {
    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// stmt → "return" expr ";"
    ///      | "if" "(" expr ")" stmt ("else" stmt)?
    ///      | "for" "(" expr-stmt expr? ";" expr? ")" stmt
    ///      | "{" compound-stmt
    ///      | expr-stmt
    /// ```
    pub(super) fn stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Return => self.return_stmt(),
            TokenKind::If => self.if_stmt(),
            TokenKind::For => self.for_stmt(),
            TokenKind::LeftBrace => {
                let start_span = self.current_span();
                self.advance();
                let body = self.compound_stmt()?;
                let end_span = body.last().map(|s| s.span).unwrap_or(start_span);
                let span = start_span.to(end_span);
                Ok(Stmt::new(StmtKind::Block(body), span))
            }
            _ => self.expr_stmt(),
        }
    }

    /// Parses the statements of a block up to and including the closing
    /// brace. The opening brace has already been consumed.
    ///
    /// # Grammar
    ///
    /// ```text
    /// compound-stmt → stmt* "}"
    /// ```
    pub(super) fn compound_stmt(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut body = Vec::new();

        while !matches!(self.current_kind(), TokenKind::RightBrace) && !self.is_eof() {
            body.push(self.stmt()?);
        }

        self.expect(&TokenKind::RightBrace)?;
        Ok(body)
    }

    /// Parses an expression statement, including the empty one.
    ///
    /// A lone `;` becomes an empty block, which gives code generation a
    /// no-op with zero register effect.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expr-stmt → expr? ";"
    /// ```
    pub(super) fn expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();

        if matches!(self.current_kind(), TokenKind::Semicolon) {
            self.advance();
            return Ok(Stmt::new(StmtKind::Block(Vec::new()), start_span));
        }

        let expr = self.expr()?;
        self.expect(&TokenKind::Semicolon)?;

        let span = start_span.to(expr.span);
        Ok(Stmt::new(StmtKind::Expr(expr), span))
    }

    /// Parses a return statement.
    fn return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Return)?;

        let value = self.expr()?;
        self.expect(&TokenKind::Semicolon)?;

        let span = start_span.to(value.span);
        Ok(Stmt::new(StmtKind::Return(value), span))
    }

    /// Parses an if statement with its optional else branch.
    ///
    /// `else` binds to the nearest unmatched `if`, which falls out of the
    /// recursion: the inner `stmt` call consumes the `else` first.
    fn if_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::If)?;
        self.expect(&TokenKind::LeftParen)?;
        let cond = self.expr()?;
        self.expect(&TokenKind::RightParen)?;

        let then = self.stmt()?;

        let els = if matches!(self.current_kind(), TokenKind::Else) {
            self.advance();
            Some(Box::new(self.stmt()?))
        } else {
            None
        };

        let end_span = els
            .as_deref()
            .map(|stmt| stmt.span)
            .unwrap_or(then.span);
        let span = start_span.to(end_span);

        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then: Box::new(then),
                els,
            },
            span,
        ))
    }

    /// Parses a for statement.
    ///
    /// The initializer is an expression statement (its `;` belongs to it),
    /// while the condition and increment are optional bare expressions with
    /// explicit terminators. Leaving out the condition produces a loop that
    /// only a `return` exits.
    fn for_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::For)?;
        self.expect(&TokenKind::LeftParen)?;

        let init = self.expr_stmt()?;

        let cond = if matches!(self.current_kind(), TokenKind::Semicolon) {
            None
        } else {
            Some(self.expr()?)
        };
        self.expect(&TokenKind::Semicolon)?;

        let inc = if matches!(self.current_kind(), TokenKind::RightParen) {
            None
        } else {
            Some(self.expr()?)
        };
        self.expect(&TokenKind::RightParen)?;

        let body = self.stmt()?;
        let span = start_span.to(body.span);

        Ok(Stmt::new(
            StmtKind::For {
                init: Box::new(init),
                cond,
                inc,
                body: Box::new(body),
            },
            span,
        ))
    }
}
