//! AST node definitions for IFJ25 programs.
//!
//! The tree is built in one forward pass over the token stream and never
//! mutated afterwards; the semantic pass and the emitter only read it.
//! Every node exclusively owns its children, so dropping the `Program`
//! releases the whole tree. Lexical enclosure of blocks is recovered by
//! the semantic pass's scope stack rather than stored as parent links.

use ifjc_util::Span;

/// AST root: the optional import descriptor and the class list.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The `import "ifj25" for Ifj` declaration, if present.
    pub import: Option<Import>,
    /// Classes in source order.
    pub classes: Vec<Class>,
}

/// The import descriptor. Path and alias are fixed by the grammar
/// (`"ifj25"` and `Ifj`); they are stored anyway so the node is
/// self-describing.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub path: String,
    pub alias: String,
    pub span: Span,
}

/// A class definition: a name and one top-level block.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: String,
    pub body: Block,
    pub span: Span,
}

/// An ordered list of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

/// Statement variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A nested `{ ... }` block.
    Block(Block),
    /// `if (cond) { ... } else { ... }`
    If(IfStmt),
    /// `while (cond) { ... }`
    While(WhileStmt),
    /// `break`
    Break(Span),
    /// `continue`
    Continue(Span),
    /// An expression in statement position.
    Expr(Expr),
    /// `var name` with an optional initializer.
    VarDecl(VarDeclStmt),
    /// `name = expression`
    Assign(AssignStmt),
    /// `static name(params) { ... }`
    Function(FunctionStmt),
    /// `name(args)` in statement position.
    Call(CallStmt),
    /// `return` with an optional value.
    Return(ReturnStmt),
    /// `static name { ... }`
    Getter(GetterStmt),
    /// `static name = (param) { ... }`
    Setter(SetterStmt),
    /// `Ifj.name(args)` in statement position.
    IfjCall(CallStmt),
}

/// Conditional statement. The condition is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub cond: Expr,
    pub then_block: Block,
    pub else_block: Option<Block>,
    pub span: Span,
}

/// Loop statement. The condition is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub cond: Expr,
    pub body: Block,
    pub span: Span,
}

/// Variable declaration.
///
/// `var x = e` folds the declaration and the initializing assignment
/// into one node carrying the optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub name: String,
    pub init: Option<Expr>,
    pub span: Span,
}

/// Assignment to an existing variable.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStmt {
    pub name: String,
    pub value: Expr,
    pub span: Span,
}

/// Function definition. Parameters are formal names in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStmt {
    pub name: String,
    pub params: Vec<String>,
    pub body: Block,
    pub span: Span,
}

/// Getter definition: a member with a body and no parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GetterStmt {
    pub name: String,
    pub body: Block,
    pub span: Span,
}

/// Setter definition: always exactly one parameter name.
#[derive(Debug, Clone, PartialEq)]
pub struct SetterStmt {
    pub name: String,
    pub param: String,
    pub body: Block,
    pub span: Span,
}

/// A call in statement position, user-defined or builtin.
#[derive(Debug, Clone, PartialEq)]
pub struct CallStmt {
    pub name: String,
    pub args: Vec<Arg>,
    pub span: Span,
}

/// Return statement with an optional value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// A call-site argument: the grammar allows literals and identifiers
/// only. Formal parameter lists use plain `String` names instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Literal(Literal, Span),
    /// Identifier argument; global names keep their `__` prefix.
    Ident(String, Span),
}

/// Expression variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A value literal.
    Literal(Literal, Span),
    /// An identifier occurrence; global names keep their `__` prefix.
    Ident(String, Span),
    /// A binary operation; children evaluate left to right.
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        span: Span,
    },
    /// A unary operation.
    Unary {
        op: UnOp,
        operand: Box<Expr>,
        span: Span,
    },
    /// `Ifj.name(args)` in expression position.
    BuiltinCall(CallExpr),
    /// `name(args)` in expression position.
    Call(CallExpr),
}

impl Expr {
    /// Source position of the expression's first token.
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(_, span) | Expr::Ident(_, span) => *span,
            Expr::Binary { span, .. } | Expr::Unary { span, .. } => *span,
            Expr::BuiltinCall(call) | Expr::Call(call) => call.span,
        }
    }
}

/// A call in expression position.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub args: Vec<Arg>,
    pub span: Span,
}

/// Literal values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Null,
}

/// Binary operators of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    LtEq,
    Gt,
    GtEq,
    EqEq,
    NotEq,
    Is,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Not,
}
