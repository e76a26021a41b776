//! ifjc-par - Parser for the IFJ25 language.
//!
//! Two cooperating parsers build the AST:
//!
//! - a recursive-descent statement parser over the grammar (`items`
//!   for program/import/class/body, `stmt` for statements), and
//! - a bottom-up operator-precedence expression parser driven by a
//!   9x9 relation table (`expr`).
//!
//! The statement parser owns the token cursor; tokens are consumed only
//! by successful matches, EOL tokens between statements are skipped
//! silently, and each statement must end at an end of line or a closing
//! brace. Parser context (the class currently being built, whether the
//! program carries the `ifj25` import) is explicit state on [`Parser`];
//! there are no globals.
//!
//! Any grammar violation aborts parsing with a positioned syntax error
//! (exit code 2).

pub mod ast;

mod edge_cases;
mod expr;
mod items;
mod stmt;

use ifjc_lex::{TokenKind, TokenStream};
use ifjc_util::{CompileError, Result, Span};

use crate::ast::Program;

/// Recursive-descent parser over a token stream.
pub struct Parser {
    /// Token stream; the active cursor is the parse position.
    stream: TokenStream,

    /// Whether the program carries the `ifj25` import. Gates the
    /// `Ifj.name(...)` builtin call forms.
    has_import: bool,

    /// Name of the class currently being parsed, for error messages.
    current_class: Option<String>,
}

impl Parser {
    /// Creates a parser positioned at the first token of the stream.
    pub fn new(mut stream: TokenStream) -> Self {
        stream.first();
        Self {
            stream,
            has_import: false,
            current_class: None,
        }
    }

    /// Parses a whole program: `Program -> Import ClassList`.
    pub fn parse(mut self) -> Result<Program> {
        let import = self.parse_import()?;
        self.has_import = import.is_some();

        let mut classes = Vec::new();
        loop {
            self.skip_eols();
            match self.kind() {
                TokenKind::Eof => break,
                TokenKind::Class => classes.push(self.parse_class()?),
                _ => {
                    return Err(self.syntax_error(format!(
                        "expected 'class', found {}",
                        self.kind()
                    )));
                }
            }
        }

        Ok(Program { import, classes })
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    /// Kind of the token under the cursor.
    pub(crate) fn kind(&self) -> &TokenKind {
        &self.stream.current().kind
    }

    /// Span of the token under the cursor.
    pub(crate) fn span(&self) -> Span {
        self.stream.current().span
    }

    /// Moves the cursor to the next token.
    pub(crate) fn advance(&mut self) {
        self.stream.next();
    }

    /// Kind `n` tokens ahead of the cursor.
    pub(crate) fn peek(&self, n: usize) -> &TokenKind {
        self.stream.peek(n)
    }

    /// First non-EOL kind after the cursor, without moving it.
    pub(crate) fn peek_kind_ignoring_eol(&self) -> &TokenKind {
        self.stream.peek_kind_ignoring_eol()
    }

    /// Skips EOL tokens.
    pub(crate) fn skip_eols(&mut self) {
        while self.kind().is_eol() {
            self.advance();
        }
    }

    /// Consumes the expected token or reports a syntax error.
    ///
    /// Only used with payload-free kinds, where equality is exact.
    pub(crate) fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        if self.kind() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.syntax_error(format!("expected {}, found {}", expected, self.kind())))
        }
    }

    /// Consumes the current token if it matches.
    pub(crate) fn match_kind(&mut self, expected: &TokenKind) -> bool {
        if self.kind() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a regular identifier and returns its name and span.
    pub(crate) fn expect_ident(&mut self) -> Result<(String, Span)> {
        match self.kind() {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let span = self.span();
                self.advance();
                Ok((name, span))
            }
            other => Err(self.syntax_error(format!("expected identifier, found {}", other))),
        }
    }

    /// Syntax error at the cursor position, mentioning the enclosing
    /// class when one is being parsed.
    pub(crate) fn syntax_error(&self, message: impl Into<String>) -> CompileError {
        let mut message = message.into();
        if let Some(class) = &self.current_class {
            message.push_str(&format!(" (in class '{}')", class));
        }
        CompileError::syntax(message, self.span())
    }
}
