//! ifjc-gen - IFJcode25 emitter.
//!
//! Walks the AST and emits the textual instruction stream for the
//! target VM: the `.IFJcode25` header and the scratch global
//! definitions once up front, then statements in depth-first prefix
//! order with expression operands evaluated in post-order.
//!
//! The emitter is stateless between top-level statements apart from the
//! label counter (which keeps every `ifEnd<N>` / `conditionEnd<N>` /
//! `whileStart<N>` / `whileEnd<N>` unique within the translation unit)
//! and the loop stack that gives `break` and `continue` their jump
//! targets.

pub mod asm;

mod edge_cases;
mod expr;

use ifjc_par::ast::{Block, Program, Stmt};
use ifjc_util::{CompileError, Result};

use crate::asm::{format_var, AsmWriter};

/// Scratch globals defined by the preamble.
const SCRATCH_GLOBALS: [&str; 9] = [
    "GF@tmp_if",
    "GF@tmp_while",
    "GF@tmp_l",
    "GF@tmp_r",
    "GF@tmp_op",
    "GF@tmp_ifj",
    "GF@tmp1",
    "GF@tmp2",
    "GF@fn_ret",
];

/// Emits the whole program and returns the instruction text.
pub fn generate(program: &Program) -> Result<String> {
    let mut emitter = Emitter::new();
    emitter.emit_program(program)?;
    Ok(emitter.out.into_output())
}

/// Enclosing loop context for break/continue emission.
struct LoopCtx<'ast> {
    start_label: String,
    end_label: String,
    cond: &'ast ifjc_par::ast::Expr,
}

/// AST walker that writes instructions into an output buffer.
pub(crate) struct Emitter<'ast> {
    pub(crate) out: AsmWriter,
    label_counter: u32,
    loops: Vec<LoopCtx<'ast>>,
}

impl<'ast> Emitter<'ast> {
    fn new() -> Self {
        Self {
            out: AsmWriter::new(),
            label_counter: 0,
            loops: Vec::new(),
        }
    }

    /// Next value of the monotonically increasing label counter.
    fn next_label(&mut self) -> u32 {
        self.label_counter += 1;
        self.label_counter
    }

    fn emit_program(&mut self, program: &'ast Program) -> Result<()> {
        self.out.line(".IFJcode25");
        for global in SCRATCH_GLOBALS {
            self.out.line(format!("DEFVAR {}", global));
        }

        for class in &program.classes {
            self.emit_block(&class.body)?;
        }
        Ok(())
    }

    fn emit_block(&mut self, block: &'ast Block) -> Result<()> {
        for stmt in &block.stmts {
            self.emit_stmt(stmt)?;
        }
        Ok(())
    }

    fn emit_stmt(&mut self, stmt: &'ast Stmt) -> Result<()> {
        match stmt {
            Stmt::Block(block) => self.emit_block(block),

            Stmt::VarDecl(decl) => {
                let var = format_var(&decl.name);
                self.out.line(format!("DEFVAR {}", var));
                if let Some(init) = &decl.init {
                    self.emit_expr(init, &var)?;
                }
                Ok(())
            }

            Stmt::Assign(assign) => {
                let var = format_var(&assign.name);
                self.emit_expr(&assign.value, &var)
            }

            Stmt::If(stmt) => {
                let n = self.next_label();
                let else_label = format!("conditionEnd{}", n);
                let end_label = format!("ifEnd{}", n);

                self.emit_expr(&stmt.cond, "GF@tmp_if")?;
                self.out
                    .line(format!("JUMPIFEQ {} GF@tmp_if bool@false", else_label));
                self.emit_block(&stmt.then_block)?;
                self.out.line(format!("JUMP {}", end_label));
                // Without an else branch the two labels coincide.
                self.out.line(format!("LABEL {}", else_label));
                if let Some(else_block) = &stmt.else_block {
                    self.emit_block(else_block)?;
                }
                self.out.line(format!("LABEL {}", end_label));
                Ok(())
            }

            Stmt::While(stmt) => {
                let n = self.next_label();
                let start_label = format!("whileStart{}", n);
                let end_label = format!("whileEnd{}", n);

                self.emit_expr(&stmt.cond, "GF@tmp_while")?;
                self.out
                    .line(format!("JUMPIFEQ {} GF@tmp_while bool@false", end_label));
                self.out.line(format!("LABEL {}", start_label));

                self.loops.push(LoopCtx {
                    start_label: start_label.clone(),
                    end_label: end_label.clone(),
                    cond: &stmt.cond,
                });
                let body = self.emit_block(&stmt.body);
                self.loops.pop();
                body?;

                self.emit_expr(&stmt.cond, "GF@tmp_while")?;
                self.out
                    .line(format!("JUMPIFNEQ {} GF@tmp_while bool@false", start_label));
                self.out.line(format!("LABEL {}", end_label));
                Ok(())
            }

            Stmt::Break(span) => {
                let Some(ctx) = self.loops.last() else {
                    return Err(CompileError::internal(
                        "'break' outside a loop reached the emitter",
                        *span,
                    ));
                };
                let end_label = ctx.end_label.clone();
                self.out.line(format!("JUMP {}", end_label));
                Ok(())
            }

            Stmt::Continue(span) => {
                // Continue re-checks the loop condition in place: jump
                // back to the body on true, past the loop on false. No
                // extra label is needed at the re-evaluation point.
                let Some(ctx) = self.loops.last() else {
                    return Err(CompileError::internal(
                        "'continue' outside a loop reached the emitter",
                        *span,
                    ));
                };
                let (start_label, end_label, cond) =
                    (ctx.start_label.clone(), ctx.end_label.clone(), ctx.cond);
                self.emit_expr(cond, "GF@tmp_while")?;
                self.out
                    .line(format!("JUMPIFNEQ {} GF@tmp_while bool@false", start_label));
                self.out.line(format!("JUMP {}", end_label));
                Ok(())
            }

            Stmt::Function(func) => {
                self.emit_function(&func.name, &func.params, &func.body)
            }

            // Getters emit as zero-parameter functions, setters as
            // one-parameter functions under a `$set` label so a
            // getter/setter pair cannot collide.
            Stmt::Getter(getter) => self.emit_function(&getter.name, &[], &getter.body),

            Stmt::Setter(setter) => {
                let label = format!("{}$set", setter.name);
                self.emit_function(&label, std::slice::from_ref(&setter.param), &setter.body)
            }

            Stmt::Call(call) => {
                self.emit_user_call(call);
                Ok(())
            }

            Stmt::IfjCall(call) => self.emit_builtin(&call.name, &call.args, None, call.span),

            Stmt::Return(stmt) => {
                if let Some(value) = &stmt.value {
                    self.emit_expr(value, "GF@fn_ret")?;
                }
                self.out.line("POPFRAME");
                self.out.line("RETURN");
                Ok(())
            }

            Stmt::Expr(expr) => self.emit_expr(expr, "GF@tmp_op"),
        }
    }

    /// Function prologue, parameter pops, body, epilogue.
    ///
    /// The caller pushed arguments in source order, so the callee pops
    /// formal parameters in reverse. `main` additionally exits the VM.
    fn emit_function(
        &mut self,
        label: &str,
        params: &'ast [String],
        body: &'ast Block,
    ) -> Result<()> {
        self.out.line(format!("LABEL {}", label));
        self.out.line("CREATEFRAME");
        self.out.line("PUSHFRAME");

        for param in params.iter().rev() {
            let var = format_var(param);
            self.out.line(format!("DEFVAR {}", var));
            self.out.line(format!("POPS {}", var));
        }

        self.emit_block(body)?;

        self.out.line("POPFRAME");
        if label == "main" {
            self.out.line("EXIT int@0");
        }
        Ok(())
    }
}
