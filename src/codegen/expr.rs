//! Expression lowering.
//!
//! Lowering an expression emits code that leaves exactly one new value on
//! the register stack. Binary operations lower the left operand, then the
//! right, then fold the two top registers into one; this is what bounds
//! the register need of an expression by its nesting depth.

use super::Codegen;
use super::error::CodegenError;
use crate::ast::{BinaryOp, Expr, ExprKind, Function};

impl Codegen {
    /// Lowers one expression. Net register-stack effect: +1.
    pub(super) fn gen_expr(
        &mut self,
        expr: &Expr,
        function: &Function,
    ) -> Result<(), CodegenError> {
        match &expr.kind {
            ExprKind::Num(value) => {
                let register = self.push(expr.span)?;
                self.emit(format!("mov ${}, {}", value, register));
                Ok(())
            }
            ExprKind::Var(_) => {
                self.gen_addr(expr, function)?;
                self.load();
                Ok(())
            }
            ExprKind::Assign { target, value } => {
                self.gen_expr(value, function)?;
                self.gen_addr(target, function)?;
                self.store();
                Ok(())
            }
            ExprKind::Binary { op, lhs, rhs } => {
                self.gen_expr(lhs, function)?;
                self.gen_expr(rhs, function)?;
                self.gen_binary(*op);
                Ok(())
            }
        }
    }

    /// Lowers an expression as an address and pushes it.
    ///
    /// Only variables designate storage; anything else as an assignment
    /// target is rejected here, which is why `1 = 2` parses but does not
    /// compile.
    pub(super) fn gen_addr(
        &mut self,
        expr: &Expr,
        function: &Function,
    ) -> Result<(), CodegenError> {
        if let ExprKind::Var(id) = expr.kind {
            let offset = function.var(id).offset;
            let register = self.push(expr.span)?;
            self.emit(format!("lea -{}(%rbp), {}", offset, register));
            return Ok(());
        }

        Err(CodegenError::not_an_lvalue(expr.span))
    }

    /// Replaces the address on top of the stack with the value it points
    /// at. Net register-stack effect: 0.
    fn load(&mut self) {
        let register = self.top_register();
        self.emit(format!("mov ({0}), {0}", register));
    }

    /// Stores the second-from-top value through the address on top, then
    /// pops the address. The stored value stays on the stack as the result
    /// of the assignment. Net register-stack effect: -1.
    fn store(&mut self) {
        let address = self.pop();
        let value = self.top_register();
        self.emit(format!("mov {}, ({})", value, address));
    }

    /// Folds the two topmost registers with a binary operator, leaving the
    /// result in the lower one. Net register-stack effect: -1.
    ///
    /// Comparisons materialize their truth value as 0 or 1 via a `set`
    /// instruction on `%al`. Division widens the dividend into
    /// `%rdx:%rax` with `cqo` because `idiv` takes it there.
    fn gen_binary(&mut self, op: BinaryOp) {
        let rs = self.pop();
        let rd = self.top_register();

        match op {
            BinaryOp::Add => self.emit(format!("add {}, {}", rs, rd)),
            BinaryOp::Sub => self.emit(format!("sub {}, {}", rs, rd)),
            BinaryOp::Mul => self.emit(format!("imul {}, {}", rs, rd)),
            BinaryOp::Div => {
                self.emit(format!("mov {}, %rax", rd));
                self.emit("cqo");
                self.emit(format!("idiv {}", rs));
                self.emit(format!("mov %rax, {}", rd));
            }
            BinaryOp::Eq => self.gen_compare("sete", rs, rd),
            BinaryOp::Ne => self.gen_compare("setne", rs, rd),
            BinaryOp::Lt => self.gen_compare("setl", rs, rd),
            BinaryOp::Le => self.gen_compare("setle", rs, rd),
        }
    }

    /// Emits a comparison of `rd` against `rs` and widens the flag into
    /// `rd` as 0 or 1.
    fn gen_compare(&mut self, set_instruction: &str, rs: &str, rd: &str) {
        self.emit(format!("cmp {}, {}", rs, rd));
        self.emit(format!("{} %al", set_instruction));
        self.emit(format!("movzb %al, {}", rd));
    }
}
