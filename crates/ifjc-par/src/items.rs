//! Program structure parsing: import, class definitions, bodies.

use ifjc_lex::TokenKind;
use ifjc_util::Result;

use crate::ast::{Block, Class, Import};
use crate::Parser;

impl Parser {
    /// Parses the import declaration, or matches empty.
    ///
    /// `Import -> "import" "ifj25" "for" "Ifj"`. The path must be exactly
    /// the string `ifj25` and the alias exactly the identifier `Ifj`;
    /// any deviation is a syntax error.
    pub(crate) fn parse_import(&mut self) -> Result<Option<Import>> {
        self.skip_eols();
        if self.kind() != &TokenKind::Import {
            return Ok(None);
        }

        let span = self.span();
        self.advance();

        let path = match self.kind() {
            TokenKind::Str(path) if path == "ifj25" => {
                let path = path.clone();
                self.advance();
                path
            }
            _ => return Err(self.syntax_error("import path must be \"ifj25\"")),
        };

        self.expect(&TokenKind::For)?;

        let alias = match self.kind() {
            TokenKind::Ident(alias) if alias == "Ifj" => {
                let alias = alias.clone();
                self.advance();
                alias
            }
            _ => return Err(self.syntax_error("import alias must be 'Ifj'")),
        };

        Ok(Some(Import { path, alias, span }))
    }

    /// Parses one class definition: `ClassDef -> "class" IDENT Body`.
    pub(crate) fn parse_class(&mut self) -> Result<Class> {
        let span = self.span();
        self.expect(&TokenKind::Class)?;
        let (name, _) = self.expect_ident()?;

        self.current_class = Some(name.clone());
        let body = self.parse_body()?;
        self.current_class = None;

        Ok(Class { name, body, span })
    }

    /// Parses a body: `Body -> "{" EOL Stmt* "}"`.
    ///
    /// The opening brace must be followed by an end of line, except for
    /// the completely empty body `{ }`. Between statements EOL tokens
    /// are skipped, and every statement must end at an EOL or at the
    /// closing brace.
    pub(crate) fn parse_body(&mut self) -> Result<Block> {
        self.expect(&TokenKind::LBrace)?;

        let mut block = Block::default();

        if self.match_kind(&TokenKind::RBrace) {
            return Ok(block);
        }
        if !self.kind().is_eol() {
            return Err(self.syntax_error(format!(
                "expected end of line after '{{', found {}",
                self.kind()
            )));
        }

        loop {
            self.skip_eols();
            match self.kind() {
                TokenKind::RBrace => {
                    self.advance();
                    return Ok(block);
                }
                TokenKind::Eof => {
                    return Err(self.syntax_error("unexpected end of input, expected '}'"));
                }
                _ => {
                    block.stmts.push(self.parse_stmt()?);
                    match self.kind() {
                        TokenKind::Eol | TokenKind::RBrace => {}
                        other => {
                            return Err(self.syntax_error(format!(
                                "expected end of line after statement, found {}",
                                other
                            )));
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Stmt;
    use ifjc_lex::Lexer;
    use ifjc_util::CompileError;

    fn parse(source: &str) -> Result<crate::ast::Program> {
        Parser::new(Lexer::new(source).tokenize().expect("lexing failed")).parse()
    }

    fn parse_err(source: &str) -> CompileError {
        parse(source).expect_err("expected a syntax error")
    }

    #[test]
    fn test_empty_body_without_eol() {
        let program = parse("class C { }\n").unwrap();
        assert!(program.classes[0].body.stmts.is_empty());
    }

    #[test]
    fn test_body_requires_eol_after_brace() {
        let err = parse_err("class C { var x\n}\n");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_statements_separated_by_eols() {
        let program = parse("class C {\nvar x\nvar y\n}\n").unwrap();
        assert_eq!(program.classes[0].body.stmts.len(), 2);
    }

    #[test]
    fn test_blank_lines_between_statements() {
        let program = parse("class C {\n\n\nvar x\n\n\nvar y\n\n}\n").unwrap();
        assert_eq!(program.classes[0].body.stmts.len(), 2);
    }

    #[test]
    fn test_two_statements_on_one_line_rejected() {
        let err = parse_err("class C {\nvar x var y\n}\n");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unclosed_body() {
        let err = parse_err("class C {\nvar x\n");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_nested_block_statement() {
        let program = parse("class C {\nstatic main() {\n{\nvar x\n}\n}\n}\n").unwrap();
        let Stmt::Function(func) = &program.classes[0].body.stmts[0] else {
            panic!("expected function");
        };
        assert!(matches!(func.body.stmts[0], Stmt::Block(_)));
    }

    #[test]
    fn test_multiple_classes() {
        let program = parse("class A {\n}\nclass B {\n}\n").unwrap();
        assert_eq!(program.classes.len(), 2);
    }
}
