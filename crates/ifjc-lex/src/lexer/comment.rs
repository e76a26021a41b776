//! Whitespace and comment handling.
//!
//! Spaces and tabs are skipped silently. Line terminators are
//! significant: the first one crossed is remembered so the caller can
//! emit a single EOL token for the whole run. A `//` comment reads as a
//! line terminator; a `/* */` comment nests and counts as plain
//! whitespace even when it spans lines.

use ifjc_util::{Result, Span};

use crate::lexer::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments before the next token.
    ///
    /// Returns the span of the first line terminator crossed, if any;
    /// the caller turns it into one collapsed EOL token.
    pub(crate) fn skip_trivia(&mut self) -> Result<Option<Span>> {
        let mut eol: Option<Span> = None;

        loop {
            match self.cursor.current() {
                Some(b' ') | Some(b'\t') => self.cursor.advance(),
                Some(b'\n') => {
                    if eol.is_none() {
                        eol = Some(Span::new(
                            self.cursor.position(),
                            self.cursor.position() + 1,
                            self.cursor.line(),
                            self.cursor.column(),
                        ));
                    }
                    self.cursor.advance();
                }
                Some(b'/') if self.cursor.peek(1) == Some(b'/') => {
                    // A line comment stands in for its line terminator.
                    if eol.is_none() {
                        eol = Some(Span::new(
                            self.cursor.position(),
                            self.cursor.position() + 2,
                            self.cursor.line(),
                            self.cursor.column(),
                        ));
                    }
                    while !matches!(self.cursor.current(), None | Some(b'\n')) {
                        self.cursor.advance();
                    }
                }
                Some(b'/') if self.cursor.peek(1) == Some(b'*') => {
                    self.skip_block_comment()?;
                }
                _ => return Ok(eol),
            }
        }
    }

    /// Skips a block comment, handling nesting with a depth counter.
    ///
    /// Line terminators inside the comment stay hidden; the whole
    /// comment reads as a single stretch of whitespace.
    fn skip_block_comment(&mut self) -> Result<()> {
        let open = Span::new(
            self.cursor.position(),
            self.cursor.position() + 2,
            self.cursor.line(),
            self.cursor.column(),
        );
        self.cursor.advance();
        self.cursor.advance();

        let mut depth = 1u32;
        while depth > 0 {
            match self.cursor.current() {
                None => {
                    return Err(ifjc_util::CompileError::lexical(
                        "unterminated block comment",
                        open,
                    ));
                }
                Some(b'/') if self.cursor.peek(1) == Some(b'*') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    depth += 1;
                }
                Some(b'*') if self.cursor.peek(1) == Some(b'/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    depth -= 1;
                }
                Some(_) => self.cursor.advance(),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut stream = Lexer::new(source).tokenize().expect("lexing failed");
        let mut out = vec![stream.first().kind.clone()];
        while !out.last().unwrap().is_eof() {
            out.push(stream.next().kind.clone());
        }
        out
    }

    #[test]
    fn test_line_comment_becomes_eol() {
        assert_eq!(
            kinds("x // trailing words\ny"),
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::Eol,
                TokenKind::Ident("y".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_line_comment_at_eof_still_ends_line() {
        assert_eq!(
            kinds("x // no newline after"),
            vec![TokenKind::Ident("x".into()), TokenKind::Eol, TokenKind::Eof]
        );
    }

    #[test]
    fn test_line_comment_collapses_with_newlines() {
        assert_eq!(
            kinds("x // a\n\n// b\ny"),
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::Eol,
                TokenKind::Ident("y".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_block_comment_is_whitespace() {
        assert_eq!(
            kinds("a/* words */b"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Ident("b".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_nested_block_comment() {
        assert_eq!(
            kinds("a /* outer /* inner */ outer */ b"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Ident("b".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_block_comment_hides_newlines() {
        // The terminators live inside the comment, so no EOL is emitted.
        assert_eq!(
            kinds("a /* line\nline\nline */ b"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Ident("b".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = Lexer::new("a /* never closed").tokenize().unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.column, 3);
    }

    #[test]
    fn test_unterminated_nested_block_comment() {
        let err = Lexer::new("/* outer /* inner */").tokenize().unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
