//! Parser for the minic language.
//!
//! This module provides the [`Parser`] struct which transforms a token
//! stream into an Abstract Syntax Tree ([`Function`]).
//!
//! # Overview
//!
//! The parser implements recursive descent with one method per grammar
//! production. It consumes tokens produced by the [`crate::lexer`] and
//! builds an AST suitable for code generation. There are no declarations:
//! the first use of an identifier creates a local variable, accumulated on
//! the parser and handed to the resulting [`Function`].
//!
//! # Grammar
//!
//! ```text
//! program       → "{" compound-stmt EOF
//! compound-stmt → stmt* "}"
//! stmt          → "return" expr ";"
//!               | "if" "(" expr ")" stmt ("else" stmt)?
//!               | "for" "(" expr-stmt expr? ";" expr? ")" stmt
//!               | "{" compound-stmt
//!               | expr-stmt
//! expr-stmt     → expr? ";"
//! expr          → assign
//! assign        → equality ("=" assign)?
//! equality      → relational (("==" | "!=") relational)*
//! relational    → add (("<" | "<=" | ">" | ">=") add)*
//! add           → mul (("+" | "-") mul)*
//! mul           → unary (("*" | "/") unary)*
//! unary         → ("+" | "-") unary | primary
//! primary       → "(" expr ")" | identifier | number
//! ```
//!
//! # Examples
//!
//! ```
//! use minic::lexer::Lexer;
//! use minic::parser::Parser;
//!
//! let mut lexer = Lexer::new("{ a = 3; return a; }");
//! let tokens = lexer.tokenize().unwrap();
//!
//! let mut parser = Parser::new(tokens);
//! let function = parser.parse().unwrap();
//!
//! assert_eq!(function.body.len(), 2);
//! assert_eq!(function.locals.len(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `helpers` - Token navigation and variable lookup
//! - `stmt` - Statement parsing
//! - `expr` - Expression parsing (the precedence ladder)
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::codegen`] - Consumes the AST to generate assembly

mod error;
mod expr;
mod helpers;
mod stmt;


pub use error::{ParseError, ParseErrorKind};

use crate::ast::{Function, Var};
use crate::token::{Token, TokenKind};

/// A recursive descent parser for the minic language.
///
/// The parser maintains a position within the token stream and the list of
/// local variables encountered so far. Construct one fresh per compilation
/// with [`Parser::new`], then call [`Parser::parse`] to produce the AST.
pub struct Parser {
    /// The token stream to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    /// Local variables in order of first appearance. Moved into the
    /// [`Function`] when parsing finishes.
    locals: Vec<Var>,
}

impl Parser {
    /// Creates a new parser from a token list.
    ///
    /// # Panics
    ///
    /// Panics if the token list is empty. The lexer always produces at
    /// least an `Eof` token.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "Token list must not be empty");
        Parser {
            tokens,
            pos: 0,
            locals: Vec::new(),
        }
    }

    /// Parses the entire token stream into a [`Function`].
    ///
    /// The program is a single braced block; everything after its closing
    /// brace must be the end of input. The returned function carries the
    /// accumulated locals with all offsets still zero — frame layout is the
    /// driver's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not start with `{`, if any
    /// statement inside fails to parse, or if tokens remain after the
    /// closing brace.
    pub fn parse(&mut self) -> Result<Function, ParseError> {
        self.expect(&TokenKind::LeftBrace)?;
        let body = self.compound_stmt()?;

        if !self.is_eof() {
            return Err(ParseError::unexpected_token(
                "end of input",
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ));
        }

        Ok(Function {
            body,
            locals: std::mem::take(&mut self.locals),
            stack_size: 0,
        })
    }
}
