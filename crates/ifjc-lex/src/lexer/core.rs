//! Core scanner: dispatch and EOL collapsing.

use ifjc_util::{CompileError, Result, Span};

use crate::cursor::Cursor;
use crate::stream::TokenStream;
use crate::token::{Token, TokenKind};

/// Streaming scanner for IFJ25 source text.
///
/// Each call to [`Lexer::next_token`] skips insignificant characters
/// (spaces, tabs, comments), collapses any crossed line terminators into
/// one EOL token, and then dispatches on the first significant character.
pub struct Lexer<'a> {
    /// Character cursor over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new scanner over the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Drains the whole input into a token stream ending with `Eof`.
    ///
    /// Stops at the first lexical error.
    pub fn tokenize(mut self) -> Result<TokenStream> {
        let mut stream = TokenStream::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind.is_eof();
            stream.insert_last(token);
            if is_eof {
                return Ok(stream);
            }
        }
    }

    /// Returns the next token from the source.
    ///
    /// Runs of line terminators (and line comments, which read as a line
    /// terminator) produce exactly one EOL token regardless of length.
    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(eol_span) = self.skip_trivia()? {
            return Ok(Token::new(TokenKind::Eol, eol_span));
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let Some(b) = self.cursor.current() else {
            return Ok(self.make(TokenKind::Eof));
        };

        match b {
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b',' => self.single(TokenKind::Comma),
            b':' => self.single(TokenKind::Colon),
            b'?' => self.single(TokenKind::Question),
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Star),
            // Comment forms were consumed as trivia, so a slash here is
            // always the division operator.
            b'/' => self.single(TokenKind::Slash),
            b'=' | b'!' | b'<' | b'>' | b'&' | b'|' => self.lex_operator(),
            b'.' => self.lex_dots(),
            b'"' => self.lex_string(),
            b'_' => self.lex_global_identifier(),
            b if b.is_ascii_alphabetic() => Ok(self.lex_identifier()),
            b if b.is_ascii_digit() => self.lex_number(),
            b => Err(self.error(format!("unexpected character '{}'", printable(b)))),
        }
    }

    /// Consumes the current byte and produces a one-character token.
    fn single(&mut self, kind: TokenKind) -> Result<Token> {
        self.cursor.advance();
        Ok(self.make(kind))
    }

    /// Builds a token spanning from the recorded start to the cursor.
    pub(crate) fn make(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_span())
    }

    /// Span from the recorded token start to the current position.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Lexical error at the start of the current token.
    pub(crate) fn error(&self, message: impl Into<String>) -> CompileError {
        CompileError::lexical(message, self.token_span())
    }

    /// Lexical error at the cursor's current position.
    pub(crate) fn error_here(&self, message: impl Into<String>) -> CompileError {
        CompileError::lexical(
            message,
            Span::new(
                self.cursor.position(),
                self.cursor.position(),
                self.cursor.line(),
                self.cursor.column(),
            ),
        )
    }
}

/// Renders a byte for an error message without emitting control bytes.
fn printable(b: u8) -> String {
    if (0x21..=0x7e).contains(&b) {
        (b as char).to_string()
    } else {
        format!("\\x{:02X}", b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<TokenKind> {
        let mut stream = Lexer::new(source).tokenize().expect("lexing failed");
        let mut kinds = vec![stream.first().kind.clone()];
        while !kinds.last().unwrap().is_eof() {
            kinds.push(stream.next().kind.clone());
        }
        kinds
    }

    fn lex_err(source: &str) -> CompileError {
        Lexer::new(source).tokenize().expect_err("expected a lexical error")
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(lex_all(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_single_eol_for_newline_run() {
        for source in ["\n", "\n\n", "\n\n\n\n", "\n \t \n"] {
            assert_eq!(lex_all(source), vec![TokenKind::Eol, TokenKind::Eof]);
        }
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            lex_all("( ) { } , : ?"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Question,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_slash_is_division_outside_comments() {
        assert_eq!(
            lex_all("1 / 2"),
            vec![
                TokenKind::Int(1),
                TokenKind::Slash,
                TokenKind::Int(2),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_token_positions() {
        let mut stream = Lexer::new("var x\n  y").tokenize().unwrap();
        let var = stream.first().clone();
        assert_eq!((var.span.line, var.span.column), (1, 1));
        let x = stream.next().clone();
        assert_eq!((x.span.line, x.span.column), (1, 5));
        stream.next(); // EOL
        let y = stream.next().clone();
        assert_eq!((y.span.line, y.span.column), (2, 3));
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex_err("var # x");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.column, 5);
    }

    #[test]
    fn test_crlf_collapses_like_lf() {
        assert_eq!(
            lex_all("a\r\n\r\nb"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Eol,
                TokenKind::Ident("b".into()),
                TokenKind::Eof,
            ]
        );
    }
}
