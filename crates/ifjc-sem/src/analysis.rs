//! The semantic pass: one top-down walk of the AST.
//!
//! Frames are pushed on entry to class bodies, function bodies, loop
//! bodies, and condition branches. Variable declarations register in
//! the current frame; identifier occurrences resolve through the scope
//! stack. Class member functions are registered up front so a call may
//! textually precede its callee.

use indexmap::IndexMap;

use ifjc_par::ast::{
    Arg, Block, CallExpr, CallStmt, Class, Expr, Literal, Program, Stmt,
};
use ifjc_util::{CompileError, Result, Span};

use crate::scope::ScopeStack;
use crate::types::{DataType, SymbolInfo};

/// Builtin functions reachable through `Ifj.name(...)`, with arity.
const BUILTINS: &[(&str, usize)] = &[
    ("write", 1),
    ("length", 1),
    ("floor", 1),
    ("str", 1),
    ("ord", 2),
    ("read_num", 0),
    ("read_str", 0),
    ("strcmp", 2),
];

/// Registry key for a setter; the `=` cannot appear in a source
/// identifier, so getters and setters of one member coexist without
/// clashing.
fn setter_key(name: &str) -> String {
    format!("{}=", name)
}

/// Looks up a builtin's arity.
pub fn builtin_arity(name: &str) -> Option<usize> {
    BUILTINS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, arity)| *arity)
}

/// A registered class member function.
#[derive(Debug)]
struct FunctionInfo {
    arity: usize,
    span: Span,
}

/// Checks the whole program. The first violation aborts the walk.
pub fn analyze(program: &Program) -> Result<()> {
    let mut analyzer = Analyzer::new();

    for class in &program.classes {
        analyzer.register_members(class)?;
    }
    for class in &program.classes {
        analyzer.scopes.push();
        analyzer.walk_block(&class.body)?;
        analyzer.scopes.pop();
    }
    Ok(())
}

struct Analyzer {
    scopes: ScopeStack,
    /// Program-wide function registry, name to arity.
    functions: IndexMap<String, FunctionInfo>,
    /// Nesting depth of `while` bodies, for break/continue placement.
    loop_depth: usize,
}

impl Analyzer {
    fn new() -> Self {
        Self {
            scopes: ScopeStack::new(),
            functions: IndexMap::new(),
            loop_depth: 0,
        }
    }

    /// Registers the `static` members of a class before its body is
    /// walked. A second member under the same registry key reports a
    /// redefinition.
    fn register_members(&mut self, class: &Class) -> Result<()> {
        for stmt in &class.body.stmts {
            let (key, arity, span) = match stmt {
                Stmt::Function(func) => (func.name.clone(), func.params.len(), func.span),
                Stmt::Getter(getter) => (getter.name.clone(), 0, getter.span),
                Stmt::Setter(setter) => (setter_key(&setter.name), 1, setter.span),
                _ => continue,
            };

            if let Some(existing) = self.functions.get(&key) {
                return Err(CompileError::redefinition(
                    format!(
                        "member '{}' is already defined at line {}",
                        key.trim_end_matches('='),
                        existing.span.line
                    ),
                    span,
                ));
            }
            self.functions.insert(key, FunctionInfo { arity, span });
        }
        Ok(())
    }

    fn walk_block(&mut self, block: &Block) -> Result<()> {
        for stmt in &block.stmts {
            self.walk_stmt(stmt)?;
        }
        Ok(())
    }

    fn walk_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::Block(block) => {
                self.scopes.push();
                self.walk_block(block)?;
                self.scopes.pop();
                Ok(())
            }

            Stmt::VarDecl(decl) => {
                // The initializer is checked before the name becomes
                // visible, so `var x = x` is use-before-declare.
                if let Some(init) = &decl.init {
                    self.check_expr(init)?;
                }
                let info = SymbolInfo::variable(
                    decl.init.as_ref().and_then(literal_type),
                    decl.name.starts_with("__"),
                    decl.init.is_some(),
                );
                if !self.scopes.declare_local(&decl.name, info) {
                    return Err(CompileError::redefinition(
                        format!("variable '{}' is already declared in this block", decl.name),
                        decl.span,
                    ));
                }
                Ok(())
            }

            Stmt::Assign(assign) => {
                self.check_expr(&assign.value)?;
                match self.scopes.lookup_anywhere_mut(&assign.name) {
                    Some(info) => {
                        info.defined = true;
                        Ok(())
                    }
                    None => Err(CompileError::undefined(
                        format!("assignment to undeclared variable '{}'", assign.name),
                        assign.span,
                    )),
                }
            }

            Stmt::If(stmt) => {
                self.check_expr(&stmt.cond)?;
                self.scopes.push();
                self.walk_block(&stmt.then_block)?;
                self.scopes.pop();
                if let Some(else_block) = &stmt.else_block {
                    self.scopes.push();
                    self.walk_block(else_block)?;
                    self.scopes.pop();
                }
                Ok(())
            }

            Stmt::While(stmt) => {
                self.check_expr(&stmt.cond)?;
                self.scopes.push();
                self.loop_depth += 1;
                self.walk_block(&stmt.body)?;
                self.loop_depth -= 1;
                self.scopes.pop();
                Ok(())
            }

            Stmt::Break(span) => {
                if self.loop_depth == 0 {
                    return Err(CompileError::semantic("'break' outside of a loop", *span));
                }
                Ok(())
            }

            Stmt::Continue(span) => {
                if self.loop_depth == 0 {
                    return Err(CompileError::semantic(
                        "'continue' outside of a loop",
                        *span,
                    ));
                }
                Ok(())
            }

            Stmt::Return(stmt) => match &stmt.value {
                Some(value) => self.check_expr(value),
                None => Ok(()),
            },

            Stmt::Expr(expr) => self.check_expr(expr),

            Stmt::Function(func) => {
                self.scopes.push();
                for param in &func.params {
                    if !self
                        .scopes
                        .declare_local(param, SymbolInfo::variable(None, false, true))
                    {
                        self.scopes.pop();
                        return Err(CompileError::redefinition(
                            format!("duplicate parameter '{}'", param),
                            func.span,
                        ));
                    }
                }
                let result = self.walk_block(&func.body);
                self.scopes.pop();
                result
            }

            Stmt::Getter(getter) => {
                self.scopes.push();
                let result = self.walk_block(&getter.body);
                self.scopes.pop();
                result
            }

            Stmt::Setter(setter) => {
                self.scopes.push();
                self.scopes
                    .declare_local(&setter.param, SymbolInfo::variable(None, false, true));
                let result = self.walk_block(&setter.body);
                self.scopes.pop();
                result
            }

            Stmt::Call(call) => self.check_user_call(call.name.as_str(), &call.args, call.span),

            Stmt::IfjCall(call) => self.check_builtin_call(call),
        }
    }

    fn check_expr(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Literal(..) => Ok(()),

            Expr::Ident(name, span) => match self.scopes.lookup_anywhere(name) {
                Some(_) => Ok(()),
                None => Err(CompileError::undefined(
                    format!("undefined variable '{}'", name),
                    *span,
                )),
            },

            Expr::Binary { lhs, rhs, .. } => {
                self.check_expr(lhs)?;
                self.check_expr(rhs)
            }

            Expr::Unary { operand, .. } => self.check_expr(operand),

            Expr::Call(call) => self.check_user_call(call.name.as_str(), &call.args, call.span),

            Expr::BuiltinCall(call) => self.check_builtin_expr(call),
        }
    }

    fn check_user_call(&mut self, name: &str, args: &[Arg], span: Span) -> Result<()> {
        let Some(info) = self.functions.get(name) else {
            return Err(CompileError::undefined(
                format!("undefined function '{}'", name),
                span,
            ));
        };
        if info.arity != args.len() {
            return Err(CompileError::argument_count(
                format!(
                    "function '{}' takes {} argument(s), {} given",
                    name,
                    info.arity,
                    args.len()
                ),
                span,
            ));
        }
        self.check_args(args)
    }

    fn check_builtin_call(&mut self, call: &CallStmt) -> Result<()> {
        self.check_builtin(&call.name, &call.args, call.span)
    }

    fn check_builtin_expr(&mut self, call: &CallExpr) -> Result<()> {
        self.check_builtin(&call.name, &call.args, call.span)
    }

    fn check_builtin(&mut self, name: &str, args: &[Arg], span: Span) -> Result<()> {
        let Some(arity) = builtin_arity(name) else {
            return Err(CompileError::undefined(
                format!("unknown builtin 'Ifj.{}'", name),
                span,
            ));
        };
        if arity != args.len() {
            return Err(CompileError::argument_count(
                format!(
                    "builtin 'Ifj.{}' takes {} argument(s), {} given",
                    name,
                    arity,
                    args.len()
                ),
                span,
            ));
        }
        self.check_args(args)
    }

    /// Identifier arguments must resolve; literals always pass.
    fn check_args(&mut self, args: &[Arg]) -> Result<()> {
        for arg in args {
            if let Arg::Ident(name, span) = arg {
                if self.scopes.lookup_anywhere(name).is_none() {
                    return Err(CompileError::undefined(
                        format!("undefined variable '{}'", name),
                        *span,
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Data type of a literal initializer, if the expression is one.
fn literal_type(expr: &Expr) -> Option<DataType> {
    match expr {
        Expr::Literal(literal, _) => Some(match literal {
            Literal::Int(_) => DataType::Int,
            Literal::Float(_) => DataType::Double,
            Literal::Str(_) => DataType::String,
            Literal::Bool(_) => DataType::Bool,
            Literal::Null => DataType::Null,
        }),
        _ => None,
    }
}
