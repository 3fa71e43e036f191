//! Code generation error types.
//!
//! This module defines [`CodegenError`], which represents the user-facing
//! errors that can occur while lowering the AST to assembly. Internal
//! invariant violations (register-stack imbalance) are assertions instead;
//! see [`crate::codegen`].

use crate::token::Span;

/// The kind of a code generation error, usable for programmatic matching
/// in tests and the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodegenErrorKind {
    /// The target of an assignment does not designate a storage location.
    NotAnLvalue,
    /// An expression was deep enough to exhaust the register pool.
    RegisterOutOfRange,
}

/// An error that occurred during code generation.
///
/// Contains a kind, a human-readable message, and optionally the source
/// location where the error occurred, enabling rich error reporting.
#[derive(Debug)]
pub struct CodegenError {
    kind: CodegenErrorKind,
    /// A human-readable description of the error.
    pub message: String,
    /// The source location where the error occurred, if available.
    pub span: Option<Span>,
}

impl CodegenError {
    /// Creates an error for an assignment target that is not a variable.
    pub(super) fn not_an_lvalue(span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::NotAnLvalue,
            message: "Not an lvalue".to_string(),
            span: Some(span),
        }
    }

    /// Creates an error for an expression that needs more registers than
    /// the pool holds.
    pub(super) fn register_out_of_range(span: Span) -> Self {
        CodegenError {
            kind: CodegenErrorKind::RegisterOutOfRange,
            message: "Register out of range: expression is too deeply nested".to_string(),
            span: Some(span),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> CodegenErrorKind {
        self.kind
    }
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(span) = &self.span {
            write!(f, "{}:{}: {}", span.line, span.column, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for CodegenError {}
