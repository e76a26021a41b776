//! Identifier, global identifier, and keyword lexing.

use ifjc_util::Result;

use crate::lexer::Lexer;
use crate::token::{keyword_from_ident, Token, TokenKind};

/// Returns true for bytes that may continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with a letter and continue with letters,
    /// digits, or underscores. The finished lexeme is looked up in the
    /// keyword/boolean table; on a match the keyword kind is emitted
    /// instead of `Ident`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while matches!(self.cursor.current(), Some(b) if is_ident_continue(b)) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind =
            keyword_from_ident(text).unwrap_or_else(|| TokenKind::Ident(text.to_string()));
        self.make(kind)
    }

    /// Lexes a global identifier.
    ///
    /// Requires exactly `__` followed by at least one identifier
    /// continuation character; anything else starting with `_` is a
    /// lexical error. The emitted lexeme keeps the `__` prefix.
    pub(crate) fn lex_global_identifier(&mut self) -> Result<Token> {
        self.cursor.advance();
        if self.cursor.current() != Some(b'_') {
            return Err(self.error("expected '__' to begin a global identifier"));
        }
        self.cursor.advance();

        if !matches!(self.cursor.current(), Some(b) if is_ident_continue(b)) {
            return Err(self.error("expected a name after '__'"));
        }
        while matches!(self.cursor.current(), Some(b) if is_ident_continue(b)) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        Ok(self.make(TokenKind::GlobalIdent(text.to_string())))
    }
}
