//! Operator and dot-family lexing.
//!
//! Two-character forms take precedence over their one-character
//! prefixes. A lone `&` or `|` has no meaning in the language and is a
//! lexical error.

use ifjc_util::Result;

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lexes the operators starting with `=`, `!`, `<`, `>`, `&`, `|`.
    pub(crate) fn lex_operator(&mut self) -> Result<Token> {
        let Some(b) = self.cursor.current() else {
            return Err(self.error("unexpected end of input"));
        };
        self.cursor.advance();

        let kind = match b {
            b'=' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Assign
                }
            }
            b'!' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Not
                }
            }
            b'<' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::LtEq
                } else {
                    TokenKind::Lt
                }
            }
            b'>' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            b'&' => {
                if self.cursor.match_byte(b'&') {
                    TokenKind::AndAnd
                } else {
                    return Err(self.error("unexpected character '&'"));
                }
            }
            b'|' => {
                if self.cursor.match_byte(b'|') {
                    TokenKind::OrOr
                } else {
                    return Err(self.error("unexpected character '|'"));
                }
            }
            _ => unreachable!("lex_operator dispatched on a non-operator byte"),
        };

        Ok(self.make(kind))
    }

    /// Lexes one, two, or three dots into the three dot tokens.
    pub(crate) fn lex_dots(&mut self) -> Result<Token> {
        self.cursor.advance();
        let kind = if self.cursor.match_byte(b'.') {
            if self.cursor.match_byte(b'.') {
                TokenKind::DotDotDot
            } else {
                TokenKind::DotDot
            }
        } else {
            TokenKind::Dot
        };
        Ok(self.make(kind))
    }
}
