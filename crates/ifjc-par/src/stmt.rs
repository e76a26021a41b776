//! Statement parsing.
//!
//! Dispatch is driven by the first token of the statement, with one
//! token of lookahead for the three `static` member forms (getter,
//! setter, function) and for the two identifier forms (assignment,
//! call). `Ifj.name(...)` is recognized only when the program carries
//! the `ifj25` import; without it, `Ifj` is an ordinary identifier and
//! the dot after it fits no rule.

use ifjc_lex::TokenKind;
use ifjc_util::Result;

use crate::ast::{
    Arg, AssignStmt, CallStmt, FunctionStmt, GetterStmt, IfStmt, Literal, ReturnStmt,
    SetterStmt, Stmt, VarDeclStmt, WhileStmt,
};
use crate::Parser;

impl Parser {
    /// Parses one statement; the cursor stands on its first token.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt> {
        match self.kind() {
            TokenKind::Var => self.parse_var_decl(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Static => self.parse_static_member(),
            TokenKind::Break => {
                let span = self.span();
                self.advance();
                Ok(Stmt::Break(span))
            }
            TokenKind::Continue => {
                let span = self.span();
                self.advance();
                Ok(Stmt::Continue(span))
            }
            TokenKind::LBrace => Ok(Stmt::Block(self.parse_body()?)),
            TokenKind::Ident(name) if self.is_builtin_receiver(name) => self.parse_ifj_call(),
            TokenKind::Ident(_) | TokenKind::GlobalIdent(_) => self.parse_ident_stmt(),
            other => Err(self.syntax_error(format!(
                "unexpected {} at start of statement",
                other
            ))),
        }
    }

    /// True when `name` begins a builtin call: the receiver must be the
    /// identifier `Ifj`, a dot must follow, and the import must exist.
    fn is_builtin_receiver(&self, name: &str) -> bool {
        name == "Ifj" && self.has_import && self.peek(1) == &TokenKind::Dot
    }

    /// `VarDecl -> "var" IDENT ("=" Expression)?`
    fn parse_var_decl(&mut self) -> Result<Stmt> {
        let span = self.span();
        self.advance();

        let name = match self.kind() {
            TokenKind::Ident(name) | TokenKind::GlobalIdent(name) => {
                let name = name.clone();
                self.advance();
                name
            }
            other => {
                return Err(
                    self.syntax_error(format!("expected variable name, found {}", other))
                );
            }
        };

        let init = if self.match_kind(&TokenKind::Assign) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(Stmt::VarDecl(VarDeclStmt { name, init, span }))
    }

    /// `If -> "if" "(" Expression ")" Body ("else" Body)?`
    fn parse_if(&mut self) -> Result<Stmt> {
        let span = self.span();
        self.advance();
        self.expect(&TokenKind::LParen)?;
        let cond = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        let then_block = self.parse_body()?;

        // `else` may open on the line after the closing brace.
        if self.kind().is_eol() && self.peek_kind_ignoring_eol() == &TokenKind::Else {
            self.skip_eols();
        }
        let else_block = if self.match_kind(&TokenKind::Else) {
            Some(self.parse_body()?)
        } else {
            None
        };

        Ok(Stmt::If(IfStmt {
            cond,
            then_block,
            else_block,
            span,
        }))
    }

    /// `While -> "while" "(" Expression ")" Body`
    fn parse_while(&mut self) -> Result<Stmt> {
        let span = self.span();
        self.advance();
        self.expect(&TokenKind::LParen)?;
        let cond = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;
        let body = self.parse_body()?;

        Ok(Stmt::While(WhileStmt { cond, body, span }))
    }

    /// `Return -> "return" Expression?`
    ///
    /// A bare `return` is permitted at the end of a line.
    fn parse_return(&mut self) -> Result<Stmt> {
        let span = self.span();
        self.advance();

        let value = match self.kind() {
            TokenKind::Eol | TokenKind::RBrace | TokenKind::Eof => None,
            _ => Some(self.parse_expression()?),
        };

        Ok(Stmt::Return(ReturnStmt { value, span }))
    }

    /// Parses the three `static` member forms, disambiguated by one
    /// token of lookahead after the name: `(` begins a function
    /// definition, `{` a getter, `=` a setter.
    fn parse_static_member(&mut self) -> Result<Stmt> {
        let span = self.span();
        self.advance();
        let (name, _) = self.expect_ident()?;

        match self.kind() {
            TokenKind::LParen => {
                let params = self.parse_def_params()?;
                let body = self.parse_body()?;
                Ok(Stmt::Function(FunctionStmt {
                    name,
                    params,
                    body,
                    span,
                }))
            }
            TokenKind::LBrace => {
                let body = self.parse_body()?;
                Ok(Stmt::Getter(GetterStmt { name, body, span }))
            }
            TokenKind::Assign => {
                self.advance();
                self.expect(&TokenKind::LParen)?;
                let (param, _) = self.expect_ident()?;
                self.expect(&TokenKind::RParen)?;
                let body = self.parse_body()?;
                Ok(Stmt::Setter(SetterStmt {
                    name,
                    param,
                    body,
                    span,
                }))
            }
            other => Err(self.syntax_error(format!(
                "expected '(', '{{', or '=' after member name '{}', found {}",
                name, other
            ))),
        }
    }

    /// Formal parameter list of a definition: identifiers only.
    fn parse_def_params(&mut self) -> Result<Vec<String>> {
        self.expect(&TokenKind::LParen)?;

        let mut params = Vec::new();
        if self.match_kind(&TokenKind::RParen) {
            return Ok(params);
        }

        loop {
            let (param, _) = self.expect_ident()?;
            params.push(param);
            if !self.match_kind(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen)?;
        Ok(params)
    }

    /// Call-site argument list: each argument is a literal or an
    /// identifier.
    pub(crate) fn parse_call_args(&mut self) -> Result<Vec<Arg>> {
        self.expect(&TokenKind::LParen)?;

        let mut args = Vec::new();
        if self.match_kind(&TokenKind::RParen) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_call_arg()?);
            if !self.match_kind(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen)?;
        Ok(args)
    }

    fn parse_call_arg(&mut self) -> Result<Arg> {
        let span = self.span();
        let arg = match self.kind() {
            TokenKind::Ident(name) | TokenKind::GlobalIdent(name) => {
                Arg::Ident(name.clone(), span)
            }
            TokenKind::Int(value) => Arg::Literal(Literal::Int(*value), span),
            TokenKind::Float(value) => Arg::Literal(Literal::Float(*value), span),
            TokenKind::Str(value) | TokenKind::MultiStr(value) => {
                Arg::Literal(Literal::Str(value.clone()), span)
            }
            TokenKind::Bool(value) => Arg::Literal(Literal::Bool(*value), span),
            TokenKind::Null => Arg::Literal(Literal::Null, span),
            other => {
                return Err(self.syntax_error(format!(
                    "expected literal or identifier argument, found {}",
                    other
                )));
            }
        };
        self.advance();
        Ok(arg)
    }

    /// `IfjCall -> "Ifj" "." IDENT Params` in statement position.
    fn parse_ifj_call(&mut self) -> Result<Stmt> {
        let span = self.span();
        self.advance();
        self.expect(&TokenKind::Dot)?;
        let (name, _) = self.expect_ident()?;
        let args = self.parse_call_args()?;

        Ok(Stmt::IfjCall(CallStmt { name, args, span }))
    }

    /// Identifier-led statement: `IDENT = Expression` is an assignment,
    /// `IDENT ( args )` a call; anything else fits no rule.
    fn parse_ident_stmt(&mut self) -> Result<Stmt> {
        let span = self.span();
        let name = match self.kind() {
            TokenKind::Ident(name) | TokenKind::GlobalIdent(name) => name.clone(),
            _ => unreachable!("parse_ident_stmt dispatched on a non-identifier"),
        };

        match self.peek(1) {
            TokenKind::Assign => {
                self.advance();
                self.advance();
                let value = self.parse_expression()?;
                Ok(Stmt::Assign(AssignStmt { name, value, span }))
            }
            TokenKind::LParen => {
                self.advance();
                let args = self.parse_call_args()?;
                Ok(Stmt::Call(CallStmt { name, args, span }))
            }
            other => Err(self.syntax_error(format!(
                "expected '=' or '(' after identifier '{}', found {}",
                name, other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinOp, Expr, Program};
    use ifjc_lex::Lexer;
    use ifjc_util::CompileError;

    fn parse(source: &str) -> Result<Program> {
        Parser::new(Lexer::new(source).tokenize().expect("lexing failed")).parse()
    }

    fn parse_main_stmts(body: &str) -> Vec<Stmt> {
        let source = format!(
            "import \"ifj25\" for Ifj\nclass Main {{\nstatic main() {{\n{}\n}}\n}}\n",
            body
        );
        let program = parse(&source).expect("parsing failed");
        let Stmt::Function(func) = &program.classes[0].body.stmts[0] else {
            panic!("expected function");
        };
        func.body.stmts.clone()
    }

    fn parse_err(source: &str) -> CompileError {
        parse(source).expect_err("expected a syntax error")
    }

    #[test]
    fn test_var_decl_without_initializer() {
        let stmts = parse_main_stmts("var x");
        let Stmt::VarDecl(decl) = &stmts[0] else {
            panic!("expected var decl");
        };
        assert_eq!(decl.name, "x");
        assert!(decl.init.is_none());
    }

    #[test]
    fn test_var_decl_with_initializer() {
        let stmts = parse_main_stmts("var x = 1 + 2");
        let Stmt::VarDecl(decl) = &stmts[0] else {
            panic!("expected var decl");
        };
        assert_eq!(decl.name, "x");
        assert!(matches!(
            decl.init,
            Some(Expr::Binary {
                op: BinOp::Add,
                ..
            })
        ));
    }

    #[test]
    fn test_global_var_decl() {
        let stmts = parse_main_stmts("var __total = 0");
        let Stmt::VarDecl(decl) = &stmts[0] else {
            panic!("expected var decl");
        };
        assert_eq!(decl.name, "__total");
    }

    #[test]
    fn test_assignment() {
        let stmts = parse_main_stmts("x = 5");
        assert!(matches!(&stmts[0], Stmt::Assign(a) if a.name == "x"));
    }

    #[test]
    fn test_call_statement() {
        let stmts = parse_main_stmts("foo(1, x, \"s\")");
        let Stmt::Call(call) = &stmts[0] else {
            panic!("expected call");
        };
        assert_eq!(call.name, "foo");
        assert_eq!(call.args.len(), 3);
    }

    #[test]
    fn test_ifj_call_statement() {
        let stmts = parse_main_stmts("Ifj.write(\"hi\")");
        let Stmt::IfjCall(call) = &stmts[0] else {
            panic!("expected builtin call");
        };
        assert_eq!(call.name, "write");
        assert_eq!(call.args.len(), 1);
    }

    #[test]
    fn test_ifj_call_without_import_is_syntax_error() {
        // Without the import, `Ifj` is an ordinary identifier and the
        // dot after it fits no rule.
        let err = parse_err("class C {\nstatic main() {\nIfj.write(1)\n}\n}\n");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_if_without_else() {
        let stmts = parse_main_stmts("if (x < 1) {\nvar y\n}");
        let Stmt::If(stmt) = &stmts[0] else {
            panic!("expected if");
        };
        assert!(stmt.else_block.is_none());
        assert_eq!(stmt.then_block.stmts.len(), 1);
    }

    #[test]
    fn test_if_with_else() {
        let stmts = parse_main_stmts("if (x < 1) {\nvar y\n} else {\nvar z\n}");
        let Stmt::If(stmt) = &stmts[0] else {
            panic!("expected if");
        };
        assert!(stmt.else_block.is_some());
    }

    #[test]
    fn test_else_on_next_line() {
        let stmts = parse_main_stmts("if (x < 1) {\nvar y\n}\nelse {\nvar z\n}");
        let Stmt::If(stmt) = &stmts[0] else {
            panic!("expected if");
        };
        assert!(stmt.else_block.is_some());
    }

    #[test]
    fn test_while_loop() {
        let stmts = parse_main_stmts("while (i < 10) {\ni = i + 1\n}");
        let Stmt::While(stmt) = &stmts[0] else {
            panic!("expected while");
        };
        assert_eq!(stmt.body.stmts.len(), 1);
    }

    #[test]
    fn test_break_and_continue() {
        let stmts = parse_main_stmts("while (x < 1) {\nbreak\ncontinue\n}");
        let Stmt::While(stmt) = &stmts[0] else {
            panic!("expected while");
        };
        assert!(matches!(stmt.body.stmts[0], Stmt::Break(_)));
        assert!(matches!(stmt.body.stmts[1], Stmt::Continue(_)));
    }

    #[test]
    fn test_bare_return() {
        let stmts = parse_main_stmts("return");
        assert!(matches!(&stmts[0], Stmt::Return(r) if r.value.is_none()));
    }

    #[test]
    fn test_return_with_value() {
        let stmts = parse_main_stmts("return x + 1");
        assert!(matches!(&stmts[0], Stmt::Return(r) if r.value.is_some()));
    }

    #[test]
    fn test_static_function_definition() {
        let program = parse("class C {\nstatic add(a, b) {\nreturn a\n}\n}\n").unwrap();
        let Stmt::Function(func) = &program.classes[0].body.stmts[0] else {
            panic!("expected function");
        };
        assert_eq!(func.name, "add");
        assert_eq!(func.params, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_static_getter_definition() {
        let program = parse("class C {\nstatic value {\nreturn 1\n}\n}\n").unwrap();
        assert!(matches!(
            &program.classes[0].body.stmts[0],
            Stmt::Getter(getter) if getter.name == "value"
        ));
    }

    #[test]
    fn test_static_setter_definition() {
        let program = parse("class C {\nstatic value = (v) {\n}\n}\n").unwrap();
        let Stmt::Setter(setter) = &program.classes[0].body.stmts[0] else {
            panic!("expected setter");
        };
        assert_eq!(setter.name, "value");
        assert_eq!(setter.param, "v");
    }

    #[test]
    fn test_static_member_needs_one_of_three_forms() {
        let err = parse_err("class C {\nstatic value + 1\n}\n");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_identifier_alone_is_syntax_error() {
        let err = parse_err("class C {\nstatic main() {\nx\n}\n}\n");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_call_args_reject_expressions() {
        let err = parse_err("class C {\nstatic main() {\nfoo(1 + 2)\n}\n}\n");
        assert_eq!(err.exit_code(), 2);
    }
}
