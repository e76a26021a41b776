//! Expression parsing by operator-precedence analysis.
//!
//! The expression grammar is handled bottom-up over a fixed 9-terminal
//! alphabet: `*`/`/`, `+`/`-`, relational, `is`, `==`/`!=`, `(`, data
//! (identifier or literal), `)`, and the end marker. A 9x9 relation
//! table yields shift (`<`), reduce (`>`), match (`=`, only for the
//! parenthesis pair), or a syntax error.
//!
//! Accepted reductions: `E -> i`, `E -> ( E )`, and `E -> E op E` for
//! each binary operator. Equal-precedence operators reduce left to
//! right, so binary nodes come out left-associative.
//!
//! Boundary rules (the grammar is line-oriented):
//!
//! - an EOL is skipped while the expression cannot be complete (after an
//!   operator or an unmatched `(`) and acts as the end marker otherwise,
//! - a `)` with no unmatched `(` inside the expression acts as the end
//!   marker and is left for the statement parser,
//! - any token outside the alphabet acts as the end marker,
//! - the end marker is never consumed.

use ifjc_lex::TokenKind;
use ifjc_util::Result;

use crate::ast::{BinOp, CallExpr, Expr, Literal, UnOp};
use crate::Parser;

/// Terminal classes of the precedence grammar, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Term {
    /// `*` `/`
    MulDiv,
    /// `+` `-`
    AddSub,
    /// `<` `<=` `>` `>=`
    Rel,
    /// `is`
    Is,
    /// `==` `!=`
    Eq,
    /// `(`
    LParen,
    /// identifier or literal
    Operand,
    /// `)`
    RParen,
    /// `$`
    End,
}

/// Precedence relation between the stack top and the incoming terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Prec {
    /// `<`: shift with a handle marker.
    Shift,
    /// `>`: reduce the topmost handle.
    Reduce,
    /// `=`: shift without a marker (the `( E )` pair).
    Match,
    /// blank: syntax error.
    Err,
}

use Prec::{Err as PErr, Match, Reduce, Shift};

/// The 9x9 relation table. Rows are the topmost stack terminal, columns
/// the incoming terminal, both in [`Term`] declaration order.
const TABLE: [[Prec; 9]; 9] = [
    //             *, /    +, -    rel     is      ==,!=   (       i       )       $
    /* *, /  */ [Reduce, Reduce, Reduce, Reduce, Reduce, Shift, Shift, Reduce, Reduce],
    /* +, -  */ [Shift, Reduce, Reduce, Reduce, Reduce, Shift, Shift, Reduce, Reduce],
    /* rel   */ [Shift, Shift, Reduce, Reduce, Reduce, Shift, Shift, Reduce, Reduce],
    /* is    */ [Shift, Shift, Shift, Reduce, Reduce, Shift, Shift, Reduce, Reduce],
    /* ==,!= */ [Shift, Shift, Shift, Shift, Reduce, Shift, Shift, Reduce, Reduce],
    /* (     */ [Shift, Shift, Shift, Shift, Shift, Shift, Shift, Match, PErr],
    /* i     */ [Reduce, Reduce, Reduce, Reduce, Reduce, PErr, PErr, Reduce, Reduce],
    /* )     */ [Reduce, Reduce, Reduce, Reduce, Reduce, PErr, PErr, Reduce, Reduce],
    /* $     */ [Shift, Shift, Shift, Shift, Shift, Shift, Shift, PErr, PErr],
];

/// One entry of the analysis stack.
#[derive(Debug)]
enum Sym {
    /// Handle-start marker, written `<` in the table formalism.
    Open,
    /// A shifted terminal. Operands carry their leaf expression,
    /// operators their AST operator.
    Term(Term, Option<Expr>, Option<BinOp>),
    /// A reduced sub-expression.
    Expr(Expr),
}

impl Parser {
    /// Parses one expression starting at the cursor.
    ///
    /// Handles the two forms that sit outside the precedence alphabet
    /// before running the table: a `!` prefix, and a call in expression
    /// position (`name(args)` or `Ifj.name(args)`).
    pub fn parse_expression(&mut self) -> Result<Expr> {
        self.skip_eols();

        if self.kind() == &TokenKind::Not {
            let span = self.span();
            self.advance();
            let operand = self.parse_expression()?;
            return Ok(Expr::Unary {
                op: UnOp::Not,
                operand: Box::new(operand),
                span,
            });
        }

        if let TokenKind::Ident(name) = self.kind() {
            if name == "Ifj" && self.has_import && self.peek(1) == &TokenKind::Dot {
                let span = self.span();
                self.advance();
                self.advance();
                let (name, _) = self.expect_ident()?;
                let args = self.parse_call_args()?;
                return Ok(Expr::BuiltinCall(CallExpr { name, args, span }));
            }
        }
        if matches!(self.kind(), TokenKind::Ident(_) | TokenKind::GlobalIdent(_))
            && self.peek(1) == &TokenKind::LParen
        {
            let span = self.span();
            let name = match self.kind() {
                TokenKind::Ident(name) | TokenKind::GlobalIdent(name) => name.clone(),
                _ => unreachable!("guarded by the surrounding matches!"),
            };
            self.advance();
            let args = self.parse_call_args()?;
            return Ok(Expr::Call(CallExpr { name, args, span }));
        }

        self.precedence_parse()
    }

    /// The table-driven shift/reduce loop.
    fn precedence_parse(&mut self) -> Result<Expr> {
        let mut stack: Vec<Sym> = vec![Sym::Term(Term::End, None, None)];
        // Unmatched `(` count inside the expression; a `)` at depth zero
        // ends the expression instead of entering the table.
        let mut paren_depth = 0usize;
        // True after an operand or `)`, when the expression may end.
        let mut can_end = false;

        loop {
            // Inside unmatched parentheses the expression cannot be
            // complete, so EOLs keep being skipped there.
            let (term, leaf, op) = self.classify(paren_depth, can_end && paren_depth == 0)?;
            let top = topmost_term(&stack);

            if top == Term::End && term == Term::End {
                break;
            }

            match TABLE[term_index(top)][term_index(term)] {
                Shift => {
                    let at = topmost_term_index(&stack) + 1;
                    stack.insert(at, Sym::Open);
                    stack.push(Sym::Term(term, leaf, op));
                    if term == Term::LParen {
                        paren_depth += 1;
                    }
                    can_end = matches!(term, Term::Operand | Term::RParen);
                    self.advance();
                }
                Match => {
                    stack.push(Sym::Term(term, leaf, op));
                    if term == Term::RParen {
                        paren_depth -= 1;
                    }
                    can_end = true;
                    self.advance();
                }
                Reduce => self.reduce(&mut stack)?,
                PErr => {
                    return Err(self.syntax_error(format!(
                        "unexpected {} in expression",
                        self.kind()
                    )));
                }
            }
        }

        // Accept: the stack must hold exactly the end marker and the
        // finished expression.
        let expr = match stack.pop() {
            Some(Sym::Expr(expr)) => expr,
            _ => return Err(self.syntax_error("expected expression")),
        };
        match stack.pop() {
            Some(Sym::Term(Term::End, ..)) if stack.is_empty() => Ok(expr),
            _ => Err(self.syntax_error("malformed expression")),
        }
    }

    /// Maps the token under the cursor to a terminal of the precedence
    /// alphabet, skipping EOL tokens where the expression cannot end.
    /// The end marker is reported without consuming the token.
    fn classify(
        &mut self,
        paren_depth: usize,
        can_end: bool,
    ) -> Result<(Term, Option<Expr>, Option<BinOp>)> {
        while !can_end && self.kind().is_eol() {
            self.advance();
        }

        let span = self.span();
        let (term, leaf, op) = match self.kind() {
            TokenKind::Eol => (Term::End, None, None),
            TokenKind::Star => (Term::MulDiv, None, Some(BinOp::Mul)),
            TokenKind::Slash => (Term::MulDiv, None, Some(BinOp::Div)),
            TokenKind::Plus => (Term::AddSub, None, Some(BinOp::Add)),
            TokenKind::Minus => (Term::AddSub, None, Some(BinOp::Sub)),
            TokenKind::Lt => (Term::Rel, None, Some(BinOp::Lt)),
            TokenKind::LtEq => (Term::Rel, None, Some(BinOp::LtEq)),
            TokenKind::Gt => (Term::Rel, None, Some(BinOp::Gt)),
            TokenKind::GtEq => (Term::Rel, None, Some(BinOp::GtEq)),
            TokenKind::Is => (Term::Is, None, Some(BinOp::Is)),
            TokenKind::EqEq => (Term::Eq, None, Some(BinOp::EqEq)),
            TokenKind::NotEq => (Term::Eq, None, Some(BinOp::NotEq)),
            TokenKind::LParen => (Term::LParen, None, None),
            TokenKind::RParen => {
                if paren_depth > 0 {
                    (Term::RParen, None, None)
                } else {
                    (Term::End, None, None)
                }
            }
            TokenKind::Ident(name) | TokenKind::GlobalIdent(name) => {
                (Term::Operand, Some(Expr::Ident(name.clone(), span)), None)
            }
            TokenKind::Int(value) => (
                Term::Operand,
                Some(Expr::Literal(Literal::Int(*value), span)),
                None,
            ),
            TokenKind::Float(value) => (
                Term::Operand,
                Some(Expr::Literal(Literal::Float(*value), span)),
                None,
            ),
            TokenKind::Str(value) | TokenKind::MultiStr(value) => (
                Term::Operand,
                Some(Expr::Literal(Literal::Str(value.clone()), span)),
                None,
            ),
            TokenKind::Bool(value) => (
                Term::Operand,
                Some(Expr::Literal(Literal::Bool(*value), span)),
                None,
            ),
            TokenKind::Null => (
                Term::Operand,
                Some(Expr::Literal(Literal::Null, span)),
                None,
            ),
            _ => (Term::End, None, None),
        };
        Ok((term, leaf, op))
    }

    /// Reduces the topmost handle by the longest matching production.
    fn reduce(&mut self, stack: &mut Vec<Sym>) -> Result<()> {
        let mut handle = Vec::new();
        loop {
            match stack.pop() {
                Some(Sym::Open) => break,
                Some(sym) => handle.push(sym),
                None => {
                    return Err(self.syntax_error("malformed expression"));
                }
            }
        }
        handle.reverse();

        let reduced = match handle.as_mut_slice() {
            // E -> i
            [Sym::Term(Term::Operand, Some(leaf), _)] => std::mem::replace(
                leaf,
                Expr::Literal(Literal::Null, ifjc_util::Span::DUMMY),
            ),

            // E -> ( E )
            [Sym::Term(Term::LParen, ..), Sym::Expr(inner), Sym::Term(Term::RParen, ..)] => {
                std::mem::replace(inner, Expr::Literal(Literal::Null, ifjc_util::Span::DUMMY))
            }

            // E -> E op E
            [Sym::Expr(lhs), Sym::Term(_, _, Some(op)), Sym::Expr(rhs)] => {
                let span = lhs.span();
                let dummy = Expr::Literal(Literal::Null, ifjc_util::Span::DUMMY);
                Expr::Binary {
                    op: *op,
                    lhs: Box::new(std::mem::replace(lhs, dummy.clone())),
                    rhs: Box::new(std::mem::replace(rhs, dummy)),
                    span,
                }
            }

            _ => {
                return Err(self.syntax_error(format!(
                    "unexpected {} in expression",
                    self.kind()
                )));
            }
        };

        stack.push(Sym::Expr(reduced));
        Ok(())
    }
}

#[inline]
fn term_index(term: Term) -> usize {
    term as usize
}

/// The topmost terminal on the stack. The bottom end marker is never
/// popped before acceptance, so the fallback is unreachable in practice.
fn topmost_term(stack: &[Sym]) -> Term {
    stack
        .iter()
        .rev()
        .find_map(|sym| match sym {
            Sym::Term(term, ..) => Some(*term),
            _ => None,
        })
        .unwrap_or(Term::End)
}

/// Index of the topmost terminal on the stack.
fn topmost_term_index(stack: &[Sym]) -> usize {
    stack
        .iter()
        .rposition(|sym| matches!(sym, Sym::Term(..)))
        .unwrap_or(0)
}
