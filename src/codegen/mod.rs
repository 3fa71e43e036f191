//! x86-64 assembly generation for the minic language.
//!
//! This module provides the [`Codegen`] struct which lowers a minic AST
//! into AT&T-syntax x86-64 assembly text for the System V AMD64 calling
//! convention.
//!
//! # Overview
//!
//! The generator treats a fixed pool of six general-purpose registers
//! (`%r10` through `%r15`) as a virtual evaluation stack, indexed by a
//! depth counter. Lowering an expression pushes exactly one result onto
//! that stack; lowering a statement leaves the depth unchanged. Tree-shaped
//! expressions thereby flatten into linear code without ever spilling - an
//! expression deep enough to need a seventh register is a compile-time
//! error instead.
//!
//! The emitted program defines one global function `main`. Its prologue
//! establishes the frame, reserves [`Function::stack_size`] bytes and saves
//! the callee-saved half of the register pool (`%r12`-`%r15`, which the
//! ABI requires preserving) into the first 32 bytes of the frame; the
//! epilogue at the label `.L.return` restores them. `return` statements
//! move their value into `%rax` and jump to that label. A body that falls
//! off the end reaches the epilogue with whatever `%rax` last held; the
//! result of such a program is deliberately left unspecified.
//!
//! Conditionals and loops are named by a counter starting at 1:
//! `.L.else.N`/`.L.end.N` for `if`, `.L.begin.N`/`.L.end.N` for `for`.
//!
//! # Example
//!
//! ```
//! use minic::codegen::Codegen;
//! use minic::lexer::Lexer;
//! use minic::parser::Parser;
//! use minic::driver;
//!
//! let tokens = Lexer::new("{ return 42; }").tokenize().unwrap();
//! let mut function = Parser::new(tokens).parse().unwrap();
//! driver::assign_offsets(&mut function);
//!
//! let assembly = Codegen::new().generate(&function).unwrap();
//! assert!(assembly.contains("mov $42, %r10"));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for code generation
//! - `expr` - Expression lowering
//! - `stmt` - Statement lowering
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::ast`] - The AST types consumed by this module
//! * [`crate::driver`] - Assigns the stack offsets this module relies on

mod error;
mod expr;
mod stmt;


pub use error::{CodegenError, CodegenErrorKind};

use crate::ast::Function;
use crate::token::Span;

/// The register pool used as the virtual evaluation stack, in push order.
///
/// `%r10` and `%r11` are caller-saved scratch; `%r12`-`%r15` are
/// callee-saved and therefore preserved by the prologue before use.
const REGISTERS: [&str; 6] = ["%r10", "%r11", "%r12", "%r13", "%r14", "%r15"];

/// An x86-64 assembly generator for minic programs.
///
/// `Codegen` accumulates the output text and tracks the register-stack
/// depth and the label counter. Construct one fresh per compilation with
/// [`Codegen::new`], then call [`Codegen::generate`].
pub struct Codegen {
    /// The assembly text accumulated so far.
    output: String,
    /// Current depth of the register stack: the index of the next free
    /// register in [`REGISTERS`].
    top: usize,
    /// Number of labels handed out so far; the next `if` or `for` gets
    /// `label_count + 1`.
    label_count: usize,
}

impl Codegen {
    /// Creates a new code generator with an empty output buffer.
    pub fn new() -> Self {
        Codegen {
            output: String::new(),
            top: 0,
            label_count: 0,
        }
    }

    /// Lowers a whole function to assembly text.
    ///
    /// Emits the prologue, the body statements in order, and the epilogue,
    /// and returns the finished text. The caller must have laid out the
    /// frame first ([`crate::driver::assign_offsets`]); `stack_size` and
    /// the per-variable offsets are read verbatim.
    ///
    /// # Errors
    ///
    /// Returns a [`CodegenError`] if an expression needs more than six
    /// registers or assigns to something that is not a variable.
    ///
    /// # Panics
    ///
    /// Panics if the register stack is not empty after lowering the body.
    /// Statement lowering is depth-neutral by construction, so a non-zero
    /// depth here is a compiler bug, not a user error.
    pub fn generate(mut self, function: &Function) -> Result<String, CodegenError> {
        self.emit_line(".globl main");
        self.emit_label("main");

        // Prologue: establish the frame and save the callee-saved part of
        // the register pool below %rbp.
        self.emit("push %rbp");
        self.emit("mov %rsp, %rbp");
        self.emit(format!("sub ${}, %rsp", function.stack_size));
        self.emit("mov %r12, -8(%rbp)");
        self.emit("mov %r13, -16(%rbp)");
        self.emit("mov %r14, -24(%rbp)");
        self.emit("mov %r15, -32(%rbp)");

        for stmt in &function.body {
            self.gen_stmt(stmt, function)?;
        }

        assert_eq!(
            self.top, 0,
            "register stack not empty after lowering the function body"
        );

        // Epilogue: every `return` jumps here.
        self.emit_label(".L.return");
        self.emit("mov -8(%rbp), %r12");
        self.emit("mov -16(%rbp), %r13");
        self.emit("mov -24(%rbp), %r14");
        self.emit("mov -32(%rbp), %r15");
        self.emit("mov %rbp, %rsp");
        self.emit("pop %rbp");
        self.emit("ret");

        Ok(self.output)
    }

    /// Appends one indented instruction line to the output.
    pub(super) fn emit(&mut self, instruction: impl AsRef<str>) {
        self.output.push_str("  ");
        self.output.push_str(instruction.as_ref());
        self.output.push('\n');
    }

    /// Appends one unindented line to the output.
    fn emit_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// Appends a label definition line to the output.
    pub(super) fn emit_label(&mut self, name: impl AsRef<str>) {
        self.output.push_str(name.as_ref());
        self.output.push_str(":\n");
    }

    /// Pushes one value onto the register stack and returns the register
    /// that now holds it.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenErrorKind::RegisterOutOfRange`] when the pool is
    /// exhausted - the expression at `span` is too deep for six registers.
    pub(super) fn push(&mut self, span: Span) -> Result<&'static str, CodegenError> {
        if self.top >= REGISTERS.len() {
            return Err(CodegenError::register_out_of_range(span));
        }
        let register = REGISTERS[self.top];
        self.top += 1;
        Ok(register)
    }

    /// Pops the top of the register stack and returns the register that
    /// held it.
    ///
    /// # Panics
    ///
    /// Panics on underflow. Expression lowering always pushes before the
    /// matching pop, so underflow is a compiler bug.
    pub(super) fn pop(&mut self) -> &'static str {
        assert!(self.top > 0, "register stack underflow");
        self.top -= 1;
        REGISTERS[self.top]
    }

    /// Returns the register currently on top of the stack without popping.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty; see [`Codegen::pop`].
    pub(super) fn top_register(&self) -> &'static str {
        assert!(self.top > 0, "register stack underflow");
        REGISTERS[self.top - 1]
    }

    /// Hands out the next label number.
    pub(super) fn next_label(&mut self) -> usize {
        self.label_count += 1;
        self.label_count
    }
}

impl Default for Codegen {
    fn default() -> Self {
        Codegen::new()
    }
}
