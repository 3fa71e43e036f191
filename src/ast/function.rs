//! The function root of the minic AST and its variable arena.

use super::stmt::Stmt;

/// A local variable of the compiled function.
///
/// All locals live in a single flat list on [`Function`], in order of first
/// appearance in the source. The stack offset is 0 while parsing and is
/// filled in by the driver before code generation as a positive multiple
/// of 8 measured down from the frame base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Var {
    /// The variable name.
    pub name: String,
    /// Offset from `%rbp`, addressed as `-offset(%rbp)`.
    pub offset: usize,
}

impl Var {
    /// Creates a variable with the given name and no offset yet.
    pub fn new(name: impl Into<String>) -> Self {
        Var {
            name: name.into(),
            offset: 0,
        }
    }
}

/// An index into the variable arena of a [`Function`].
///
/// Both the locals list and the `Var` expression nodes refer to variables
/// through this id, so there is exactly one [`Var`] per name and no shared
/// ownership between the AST and the locals list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarId(pub usize);

/// The root node of a minic program's AST: the single function `main`.
///
/// Owns the body statements and the variable arena. `stack_size` is 0
/// until the driver lays out the frame.
#[derive(Debug)]
pub struct Function {
    /// The statements of the top-level block.
    pub body: Vec<Stmt>,
    /// The variable arena, in order of first appearance.
    pub locals: Vec<Var>,
    /// Total frame reservation in bytes, 16-byte aligned. Assigned by the
    /// driver after parsing.
    pub stack_size: usize,
}

impl Function {
    /// Returns the variable behind an id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this function's arena. Ids are
    /// only ever minted by the parser for the arena it builds, so an
    /// out-of-range id is a compiler bug.
    pub fn var(&self, id: VarId) -> &Var {
        &self.locals[id.0]
    }
}
