//! The compilation pipeline.
//!
//! This module chains the compiler phases - lexing, parsing, stack frame
//! layout, and code generation - and unifies their errors behind
//! [`CompileError`]. The pipeline is strictly sequential and each phase
//! owns its output until handing it to the next; nothing is mutated after
//! handoff except the frame layout pass, which fills in the offsets the
//! parser left at zero.
//!
//! # Frame layout
//!
//! The first 32 bytes below the frame base are reserved for the saved
//! callee-saved registers `%r12`-`%r15`. Locals follow at offsets 40, 48,
//! and so on, 8 bytes each, in order of first appearance. The total is
//! rounded up to a multiple of 16 to keep `%rsp` aligned per the System V
//! AMD64 ABI.
//!
//! # See Also
//!
//! * [`crate::lexer`], [`crate::parser`], [`crate::codegen`] - The phases

use crate::ast::Function;
use crate::codegen::{Codegen, CodegenError};
use crate::lexer::{LexError, Lexer};
use crate::parser::{ParseError, Parser};
use crate::token::Span;

/// Bytes reserved below `%rbp` for the saved `%r12`-`%r15`.
const SAVED_REGISTER_AREA: usize = 32;

/// Stack slot size of a local; everything is a machine word.
const WORD_SIZE: usize = 8;

/// Required alignment of the total frame reservation.
const FRAME_ALIGNMENT: usize = 16;

/// A compilation error from any phase of the compiler.
///
/// This enum unifies errors from lexical analysis, parsing, and code
/// generation to simplify error handling in the binary and in tests.
#[derive(Debug)]
pub enum CompileError {
    /// An error during lexical analysis.
    Lex(LexError),
    /// An error during parsing.
    Parse(ParseError),
    /// An error during code generation.
    Codegen(CodegenError),
}

impl CompileError {
    /// Returns the source location of the error, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            CompileError::Lex(error) => Some(error.span),
            CompileError::Parse(error) => Some(error.span),
            CompileError::Codegen(error) => error.span,
        }
    }

    /// Returns the human-readable message of the error.
    pub fn message(&self) -> &str {
        match self {
            CompileError::Lex(error) => &error.message,
            CompileError::Parse(error) => &error.message,
            CompileError::Codegen(error) => &error.message,
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Lex(error) => write!(f, "{}", error),
            CompileError::Parse(error) => write!(f, "{}", error),
            CompileError::Codegen(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<LexError> for CompileError {
    fn from(error: LexError) -> Self {
        CompileError::Lex(error)
    }
}

impl From<ParseError> for CompileError {
    fn from(error: ParseError) -> Self {
        CompileError::Parse(error)
    }
}

impl From<CodegenError> for CompileError {
    fn from(error: CodegenError) -> Self {
        CompileError::Codegen(error)
    }
}

/// Rounds `n` up to the nearest multiple of `align`. For example,
/// `align_to(5, 8)` returns 8 and `align_to(11, 8)` returns 16.
fn align_to(n: usize, align: usize) -> usize {
    n.div_ceil(align) * align
}

/// Assigns a stack offset to every local and computes the frame size.
///
/// Offsets count down from `%rbp`: the first local lands just past the
/// saved-register area, each further local one word deeper. The parser
/// leaves all offsets at zero, so this must run before
/// [`Codegen::generate`].
pub fn assign_offsets(function: &mut Function) {
    let mut offset = SAVED_REGISTER_AREA;
    for var in &mut function.locals {
        offset += WORD_SIZE;
        var.offset = offset;
    }
    function.stack_size = align_to(offset, FRAME_ALIGNMENT);
}

/// Compiles one source string to x86-64 assembly text.
///
/// This is the whole pipeline: tokenize, parse, lay out the frame,
/// generate. The first error of any phase aborts the compilation.
///
/// # Examples
///
/// ```
/// let assembly = minic::driver::compile("{ return 42; }").unwrap();
/// assert!(assembly.contains("mov $42, %r10"));
/// ```
pub fn compile(source: &str) -> Result<String, CompileError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize()?;

    let mut parser = Parser::new(tokens);
    let mut function = parser.parse()?;

    assign_offsets(&mut function);

    let assembly = Codegen::new().generate(&function)?;
    Ok(assembly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_to() {
        assert_eq!(align_to(5, 8), 8);
        assert_eq!(align_to(11, 8), 16);
        assert_eq!(align_to(32, 16), 32);
        assert_eq!(align_to(40, 16), 48);
    }

    #[test]
    fn test_assign_offsets_walks_past_saved_area() {
        let source = "{ a=1; b=2; c=3; }";
        let tokens = Lexer::new(source).tokenize().unwrap();
        let mut function = Parser::new(tokens).parse().unwrap();
        assign_offsets(&mut function);

        let offsets: Vec<usize> = function.locals.iter().map(|v| v.offset).collect();
        assert_eq!(offsets, vec![40, 48, 56]);
        assert_eq!(function.stack_size, 64);
    }

    #[test]
    fn test_assign_offsets_without_locals() {
        let tokens = Lexer::new("{}").tokenize().unwrap();
        let mut function = Parser::new(tokens).parse().unwrap();
        assign_offsets(&mut function);
        assert_eq!(function.stack_size, 32);
    }

    #[test]
    fn test_compile_happy_path() {
        let assembly = compile("{ return 42; }").unwrap();
        assert!(assembly.starts_with(".globl main"));
        assert!(assembly.contains("jmp .L.return"));
    }

    #[test]
    fn test_compile_surfaces_lex_errors() {
        let error = compile("{ @; }").unwrap_err();
        assert!(matches!(error, CompileError::Lex(_)));
        assert_eq!(error.span().map(|s| s.start), Some(2));
    }

    #[test]
    fn test_compile_surfaces_parse_errors() {
        let error = compile("{ return 1 }").unwrap_err();
        assert!(matches!(error, CompileError::Parse(_)));
    }

    #[test]
    fn test_compile_surfaces_codegen_errors() {
        let error = compile("{ 1 = 2; }").unwrap_err();
        assert!(matches!(error, CompileError::Codegen(_)));
    }
}
