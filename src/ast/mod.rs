//! Abstract Syntax Tree definitions for the minic language.
//!
//! This module defines the data structures that represent parsed minic
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::codegen`].
//!
//! # Structure
//!
//! The AST has a hierarchical structure:
//! - [`Function`] - The root node: the body of `main` plus its locals
//! - [`Stmt`] - Individual statements (return, blocks, conditionals, loops,
//!   expression statements)
//! - [`Expr`] - Expressions (numeric literals, variable uses, binary
//!   operations, assignments)
//!
//! Each AST node includes source location information
//! ([`Span`](crate::token::Span)) for error reporting. Children are owned by
//! their parent; no node is shared. Variables are the one cross-cutting
//! piece of data — they are kept in an arena on [`Function`] and referenced
//! by [`VarId`] from both the locals list and the `Var` expression nodes.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes and kinds
//! - [`stmt`] - Statement nodes and kinds
//! - [`function`] - The function root, variable arena, and ids
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::codegen`] - Generates x86-64 assembly from the AST

mod expr;
mod function;
mod stmt;


pub use expr::{BinaryOp, Expr, ExprKind};
pub use function::{Function, Var, VarId};
pub use stmt::{Stmt, StmtKind};
