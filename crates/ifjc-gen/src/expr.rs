//! Expression and builtin-call emission.
//!
//! Every expression evaluates into a caller-supplied destination
//! operand. Binary operands go through the `GF@tmp_l` / `GF@tmp_r`
//! scratch pair; when the right subtree itself needs the scratch pair,
//! the finished left value is parked on the data stack around it.

use ifjc_par::ast::{Arg, BinOp, CallExpr, Expr, UnOp};
use ifjc_util::{CompileError, Result, Span};

use crate::asm::{format_literal, format_var};
use crate::Emitter;

/// Formats a call argument operand (literal or variable).
fn format_arg(arg: &Arg) -> String {
    match arg {
        Arg::Literal(literal, _) => format_literal(literal),
        Arg::Ident(name, _) => format_var(name),
    }
}

impl<'ast> Emitter<'ast> {
    /// Evaluates `expr` into the destination operand.
    pub(crate) fn emit_expr(&mut self, expr: &'ast Expr, dest: &str) -> Result<()> {
        match expr {
            Expr::Literal(literal, _) => {
                self.out
                    .line(format!("MOVE {} {}", dest, format_literal(literal)));
                Ok(())
            }

            Expr::Ident(name, _) => {
                self.out
                    .line(format!("MOVE {} {}", dest, format_var(name)));
                Ok(())
            }

            Expr::Binary { op, lhs, rhs, .. } => {
                self.emit_expr(lhs, "GF@tmp_l")?;

                // A compound right subtree reuses the scratch pair;
                // park the left value on the data stack around it.
                let protect = !matches!(**rhs, Expr::Literal(..) | Expr::Ident(..));
                if protect {
                    self.out.line("PUSHS GF@tmp_l");
                }
                self.emit_expr(rhs, "GF@tmp_r")?;
                if protect {
                    self.out.line("POPS GF@tmp_l");
                }

                self.emit_binop(*op, dest);
                Ok(())
            }

            Expr::Unary { op, operand, .. } => {
                self.emit_expr(operand, "GF@tmp_op")?;
                match op {
                    UnOp::Not => self.out.line(format!("NOT {} GF@tmp_op", dest)),
                }
                Ok(())
            }

            Expr::Call(call) => {
                self.emit_user_call_expr(call);
                self.out.line(format!("MOVE {} GF@fn_ret", dest));
                Ok(())
            }

            Expr::BuiltinCall(call) => {
                self.emit_builtin(&call.name, &call.args, Some(dest), call.span)
            }
        }
    }

    /// Emits the instruction(s) for one binary operator, reading
    /// `GF@tmp_l` and `GF@tmp_r` and writing `dest`.
    fn emit_binop(&mut self, op: BinOp, dest: &str) {
        match op {
            BinOp::Add => self.out.line(format!("ADD {} GF@tmp_l GF@tmp_r", dest)),
            BinOp::Sub => self.out.line(format!("SUB {} GF@tmp_l GF@tmp_r", dest)),
            BinOp::Mul => self.out.line(format!("MUL {} GF@tmp_l GF@tmp_r", dest)),
            BinOp::Div => self.out.line(format!("DIV {} GF@tmp_l GF@tmp_r", dest)),
            BinOp::Lt => self.out.line(format!("LT {} GF@tmp_l GF@tmp_r", dest)),
            BinOp::Gt => self.out.line(format!("GT {} GF@tmp_l GF@tmp_r", dest)),
            BinOp::EqEq => self.out.line(format!("EQ {} GF@tmp_l GF@tmp_r", dest)),
            // `is` observes as identity comparison on the target.
            BinOp::Is => self.out.line(format!("EQ {} GF@tmp_l GF@tmp_r", dest)),
            BinOp::NotEq => {
                self.out.line(format!("EQ {} GF@tmp_l GF@tmp_r", dest));
                self.out.line(format!("NOT {} {}", dest, dest));
            }
            // <= and >= are synthesized as (LT or EQ) / (GT or EQ).
            BinOp::LtEq => {
                self.out.line("LT GF@tmp1 GF@tmp_l GF@tmp_r");
                self.out.line("EQ GF@tmp2 GF@tmp_l GF@tmp_r");
                self.out.line(format!("OR {} GF@tmp1 GF@tmp2", dest));
            }
            BinOp::GtEq => {
                self.out.line("GT GF@tmp1 GF@tmp_l GF@tmp_r");
                self.out.line("EQ GF@tmp2 GF@tmp_l GF@tmp_r");
                self.out.line(format!("OR {} GF@tmp1 GF@tmp2", dest));
            }
        }
    }

    /// Statement-position user call: push arguments, call.
    pub(crate) fn emit_user_call(&mut self, call: &'ast ifjc_par::ast::CallStmt) {
        for arg in &call.args {
            self.out.line(format!("PUSHS {}", format_arg(arg)));
        }
        self.out.line(format!("CALL {}", call.name));
    }

    /// Expression-position user call; the result lands in `GF@fn_ret`.
    fn emit_user_call_expr(&mut self, call: &'ast CallExpr) {
        for arg in &call.args {
            self.out.line(format!("PUSHS {}", format_arg(arg)));
        }
        self.out.line(format!("CALL {}", call.name));
    }

    /// Dispatches one `Ifj.name(...)` builtin.
    ///
    /// In statement position the result sink is `GF@tmp_ifj`; in
    /// expression position the caller supplies the destination.
    pub(crate) fn emit_builtin(
        &mut self,
        name: &str,
        args: &[Arg],
        dest: Option<&str>,
        span: Span,
    ) -> Result<()> {
        let out = dest.unwrap_or("GF@tmp_ifj");

        match (name, args.len()) {
            ("write", 1) => {
                self.out.line(format!("WRITE {}", format_arg(&args[0])));
            }
            ("length", 1) => {
                self.out
                    .line(format!("STRLEN {} {}", out, format_arg(&args[0])));
            }
            ("floor", 1) => {
                self.out
                    .line(format!("FLOAT2INT {} {}", out, format_arg(&args[0])));
            }
            ("str", 1) => {
                self.out
                    .line(format!("FLOAT2CHAR {} {}", out, format_arg(&args[0])));
            }
            ("ord", 2) => {
                self.out.line(format!(
                    "GETCHAR GF@tmp_ifj {} {}",
                    format_arg(&args[0]),
                    format_arg(&args[1])
                ));
                self.out.line(format!("STRING2INT {} GF@tmp_ifj", out));
            }
            ("read_num", 0) => {
                self.out.line(format!("READ {} float", out));
            }
            ("read_str", 0) => {
                self.out.line(format!("READ {} string", out));
            }
            ("strcmp", 2) => {
                self.out.line(format!(
                    "EQ {} {} {}",
                    out,
                    format_arg(&args[0]),
                    format_arg(&args[1])
                ));
            }
            _ => {
                return Err(CompileError::internal(
                    format!("unchecked builtin 'Ifj.{}' reached the emitter", name),
                    span,
                ));
            }
        }
        Ok(())
    }
}
