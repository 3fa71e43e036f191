//! Statement nodes for the minic AST.

use crate::token::Span;

use super::expr::Expr;

/// The kind of a statement in the minic language.
///
/// This enum represents the different types of statements without source
/// location information. Use [`Stmt`] for the full AST node with span
/// information.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// An expression statement.
    ///
    /// Evaluates the expression for its side effects and discards the
    /// result.
    Expr(Expr),

    /// A return statement.
    ///
    /// Evaluates the expression and jumps to the function epilogue with the
    /// value in the return register.
    Return(Expr),

    /// A lexical block `{ ... }`.
    ///
    /// The empty block doubles as the empty statement (a lone `;`), giving
    /// code generation a no-op with zero register effect.
    Block(Vec<Stmt>),

    /// A conditional statement with optional `else` branch.
    If {
        /// The condition expression; zero is false, anything else true.
        cond: Expr,
        /// The statement executed when the condition is true.
        then: Box<Stmt>,
        /// The statement executed when the condition is false.
        els: Option<Box<Stmt>>,
    },

    /// A C-style for loop.
    ///
    /// `init` is always present as a statement (the empty statement when
    /// the source leaves it out), while `cond` and `inc` are optional
    /// expressions. A `for` with absent `init` and `inc` is exactly a
    /// while loop; with absent `cond` the loop only exits via `return`.
    For {
        /// The initializer, run once before the loop.
        init: Box<Stmt>,
        /// The loop condition, tested before each iteration.
        cond: Option<Expr>,
        /// The increment, evaluated and discarded after each iteration.
        inc: Option<Expr>,
        /// The loop body.
        body: Box<Stmt>,
    },
}

/// A statement in the minic language with source location.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}
