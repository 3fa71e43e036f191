//! Expression parsing.
//!
//! This module implements the precedence ladder of the grammar: each
//! precedence level is its own method, and each method loops over the
//! operators of its level while delegating operands to the next-tighter
//! level. Assignment is the one right-associative level and recurses into
//! itself instead of looping.

use super::Parser;
use super::error::ParseError;
use crate::ast::{BinaryOp, Expr, ExprKind};
use crate::token::TokenKind;

impl Parser {
    /// Parses an expression.
    ///
    /// # Grammar
    ///
    /// ```text
    /// expr → assign
    /// ```
    pub(super) fn expr(&mut self) -> Result<Expr, ParseError> {
        self.assign()
    }

    /// Parses an assignment.
    ///
    /// Right-associative: the right-hand side recurses into `assign`, so
    /// `a = b = 1` assigns 1 to `b` and the result to `a`. Whether the
    /// left-hand side is actually storable is checked during code
    /// generation, not here.
    ///
    /// # Grammar
    ///
    /// ```text
    /// assign → equality ("=" assign)?
    /// ```
    fn assign(&mut self) -> Result<Expr, ParseError> {
        let node = self.equality()?;

        if matches!(self.current_kind(), TokenKind::Equals) {
            self.advance();
            let value = self.assign()?;
            let span = node.span.to(value.span);
            return Ok(Expr::new(
                ExprKind::Assign {
                    target: Box::new(node),
                    value: Box::new(value),
                },
                span,
            ));
        }

        Ok(node)
    }

    /// Parses an equality comparison chain.
    ///
    /// # Grammar
    ///
    /// ```text
    /// equality → relational (("==" | "!=") relational)*
    /// ```
    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.relational()?;

        loop {
            let op = match self.current_kind() {
                TokenKind::EqualEqual => BinaryOp::Eq,
                TokenKind::BangEqual => BinaryOp::Ne,
                _ => return Ok(node),
            };
            self.advance();
            let rhs = self.relational()?;
            node = Self::new_binary(op, node, rhs);
        }
    }

    /// Parses a relational comparison chain.
    ///
    /// `>` and `>=` have no node kinds of their own: `a > b` is built as
    /// `b < a` and `a >= b` as `b <= a` by swapping the operands. The
    /// right-hand operand of the source text is therefore evaluated first
    /// in the generated code.
    ///
    /// # Grammar
    ///
    /// ```text
    /// relational → add (("<" | "<=" | ">" | ">=") add)*
    /// ```
    fn relational(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.add()?;

        loop {
            let (op, swap) = match self.current_kind() {
                TokenKind::LessThan => (BinaryOp::Lt, false),
                TokenKind::LessEqual => (BinaryOp::Le, false),
                TokenKind::GreaterThan => (BinaryOp::Lt, true),
                TokenKind::GreaterEqual => (BinaryOp::Le, true),
                _ => return Ok(node),
            };
            self.advance();
            let rhs = self.add()?;
            node = if swap {
                Self::new_binary_spanning(op, rhs, node)
            } else {
                Self::new_binary(op, node, rhs)
            };
        }
    }

    /// Parses an additive chain.
    ///
    /// # Grammar
    ///
    /// ```text
    /// add → mul (("+" | "-") mul)*
    /// ```
    fn add(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.mul()?;

        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(node),
            };
            self.advance();
            let rhs = self.mul()?;
            node = Self::new_binary(op, node, rhs);
        }
    }

    /// Parses a multiplicative chain.
    ///
    /// # Grammar
    ///
    /// ```text
    /// mul → unary (("*" | "/") unary)*
    /// ```
    fn mul(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.unary()?;

        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => return Ok(node),
            };
            self.advance();
            let rhs = self.unary()?;
            node = Self::new_binary(op, node, rhs);
        }
    }

    /// Parses a unary expression.
    ///
    /// Unary `+x` is just `x`; unary `-x` is desugared to `0 - x`, with the
    /// synthetic zero carrying the span of the minus sign.
    ///
    /// # Grammar
    ///
    /// ```text
    /// unary → ("+" | "-") unary | primary
    /// ```
    fn unary(&mut self) -> Result<Expr, ParseError> {
        match self.current_kind() {
            TokenKind::Plus => {
                self.advance();
                self.unary()
            }
            TokenKind::Minus => {
                let op_span = self.current_span();
                self.advance();
                let operand = self.unary()?;
                let span = op_span.to(operand.span);
                let zero = Expr::new(ExprKind::Num(0), op_span);
                Ok(Expr::new(
                    ExprKind::Binary {
                        op: BinaryOp::Sub,
                        lhs: Box::new(zero),
                        rhs: Box::new(operand),
                    },
                    span,
                ))
            }
            _ => self.primary(),
        }
    }

    /// Parses a primary expression.
    ///
    /// An identifier looks up the locals by name and creates a fresh
    /// variable on the first use. Any token that starts no primary is
    /// reported as "number expected", the last alternative of the
    /// production.
    ///
    /// # Grammar
    ///
    /// ```text
    /// primary → "(" expr ")" | identifier | number
    /// ```
    fn primary(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();

        match self.current_kind() {
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.expr()?;
                let close_span = self.current_span();
                self.expect(&TokenKind::RightParen)?;
                // Keep the inner node but widen its span over the parens.
                let span = start_span.to(close_span);
                Ok(Expr::new(inner.kind, span))
            }
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                let id = self.find_or_create_var(&name);
                Ok(Expr::new(ExprKind::Var(id), start_span))
            }
            TokenKind::Num(value) => {
                let value = *value;
                self.advance();
                Ok(Expr::new(ExprKind::Num(value), start_span))
            }
            other => Err(ParseError::number_expected(
                &Self::token_kind_display(other),
                start_span,
            )),
        }
    }

    /// Builds a binary node spanning from `lhs` to `rhs`.
    fn new_binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        let span = lhs.span.to(rhs.span);
        Expr::new(
            ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            span,
        )
    }

    /// Builds a binary node for swapped operands, spanning the source
    /// range from `rhs` to `lhs` (which is their textual order).
    fn new_binary_spanning(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        let span = rhs.span.to(lhs.span);
        Expr::new(
            ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            span,
        )
    }
}
