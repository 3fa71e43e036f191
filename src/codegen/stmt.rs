//! Statement lowering.
//!
//! Lowering a statement emits code with no net register-stack effect:
//! whatever an inner expression pushes is consumed or discarded before the
//! statement ends. The final depth-zero assertion in
//! [`generate`](super::Codegen::generate) rests on this.

use super::Codegen;
use super::error::CodegenError;
use crate::ast::{Expr, Function, Stmt, StmtKind};

impl Codegen {
    /// Lowers one statement. Net register-stack effect: 0.
    pub(super) fn gen_stmt(
        &mut self,
        stmt: &Stmt,
        function: &Function,
    ) -> Result<(), CodegenError> {
        match &stmt.kind {
            StmtKind::Expr(expr) => {
                self.gen_expr(expr, function)?;
                // Evaluated for side effects only; drop the value.
                self.pop();
                Ok(())
            }
            StmtKind::Return(expr) => {
                self.gen_expr(expr, function)?;
                let register = self.pop();
                self.emit(format!("mov {}, %rax", register));
                self.emit("jmp .L.return");
                Ok(())
            }
            StmtKind::Block(body) => {
                for stmt in body {
                    self.gen_stmt(stmt, function)?;
                }
                Ok(())
            }
            StmtKind::If { cond, then, els } => self.gen_if(cond, then, els.as_deref(), function),
            StmtKind::For {
                init,
                cond,
                inc,
                body,
            } => self.gen_for(init, cond.as_ref(), inc.as_ref(), body, function),
        }
    }

    /// Lowers an if statement.
    ///
    /// The else label is emitted even without an else branch; the then
    /// branch jumps over it to `.L.end.N` either way.
    fn gen_if(
        &mut self,
        cond: &Expr,
        then: &Stmt,
        els: Option<&Stmt>,
        function: &Function,
    ) -> Result<(), CodegenError> {
        let label = self.next_label();

        self.gen_expr(cond, function)?;
        let register = self.pop();
        self.emit(format!("cmp $0, {}", register));
        self.emit(format!("je .L.else.{}", label));

        self.gen_stmt(then, function)?;
        self.emit(format!("jmp .L.end.{}", label));

        self.emit_label(format!(".L.else.{}", label));
        if let Some(els) = els {
            self.gen_stmt(els, function)?;
        }
        self.emit_label(format!(".L.end.{}", label));

        Ok(())
    }

    /// Lowers a for statement.
    ///
    /// An absent condition emits no exit test, producing a loop that only
    /// a `return` inside the body leaves. The increment value is discarded
    /// like any expression statement's.
    fn gen_for(
        &mut self,
        init: &Stmt,
        cond: Option<&Expr>,
        inc: Option<&Expr>,
        body: &Stmt,
        function: &Function,
    ) -> Result<(), CodegenError> {
        let label = self.next_label();

        self.gen_stmt(init, function)?;
        self.emit_label(format!(".L.begin.{}", label));

        if let Some(cond) = cond {
            self.gen_expr(cond, function)?;
            let register = self.pop();
            self.emit(format!("cmp $0, {}", register));
            self.emit(format!("je .L.end.{}", label));
        }

        self.gen_stmt(body, function)?;

        if let Some(inc) = inc {
            self.gen_expr(inc, function)?;
            self.pop();
        }

        self.emit(format!("jmp .L.begin.{}", label));
        self.emit_label(format!(".L.end.{}", label));

        Ok(())
    }
}
