//! String literal lexing.
//!
//! Single-line strings live between two quotes on one line and resolve
//! the escapes `\"`, `\\`, `\n`, `\r`, `\t`, and `\xHH`. Multi-line
//! strings are delimited by `"""` and apply indentation trimming with no
//! escape processing: leading whitespace of a line is buffered and only
//! emitted once the line proves to have content, and the newline before
//! a line is pended so a closing delimiter on its own line produces no
//! trailing newline.

use ifjc_util::Result;

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Dispatches on `"` vs `"""` and lexes the string literal.
    pub(crate) fn lex_string(&mut self) -> Result<Token> {
        if self.cursor.peek(1) == Some(b'"') && self.cursor.peek(2) == Some(b'"') {
            self.lex_multiline_string()
        } else {
            self.lex_single_string()
        }
    }

    /// Lexes a single-line string literal.
    fn lex_single_string(&mut self) -> Result<Token> {
        self.cursor.advance();

        let mut content = String::new();
        loop {
            match self.cursor.current() {
                None | Some(b'\n') => {
                    return Err(self.error("unterminated string literal"));
                }
                Some(b'"') => {
                    self.cursor.advance();
                    break;
                }
                Some(b'\\') => {
                    self.cursor.advance();
                    content.push(self.lex_escape()?);
                }
                Some(b) if (b' '..=b'~').contains(&b) => {
                    content.push(b as char);
                    self.cursor.advance();
                }
                Some(b) => {
                    return Err(self
                        .error_here(format!("invalid byte 0x{:02X} in string literal", b)));
                }
            }
        }

        Ok(self.make(TokenKind::Str(content)))
    }

    /// Resolves one escape sequence, after the backslash.
    fn lex_escape(&mut self) -> Result<char> {
        let Some(b) = self.cursor.current() else {
            return Err(self.error("unterminated string literal"));
        };
        self.cursor.advance();

        match b {
            b'"' => Ok('"'),
            b'\\' => Ok('\\'),
            b'n' => Ok('\n'),
            b'r' => Ok('\r'),
            b't' => Ok('\t'),
            b'x' => {
                let mut value = 0u8;
                for _ in 0..2 {
                    let digit = match self.cursor.current() {
                        Some(d @ b'0'..=b'9') => d - b'0',
                        Some(d @ b'a'..=b'f') => d - b'a' + 10,
                        Some(d @ b'A'..=b'F') => d - b'A' + 10,
                        _ => {
                            return Err(self
                                .error_here("expected two hex digits after '\\x'"));
                        }
                    };
                    value = value * 16 + digit;
                    self.cursor.advance();
                }
                Ok(value as char)
            }
            b => Err(self.error_here(format!(
                "unknown escape sequence '\\{}'",
                if b.is_ascii_graphic() { b as char } else { '?' }
            ))),
        }
    }

    /// Lexes a multi-line string literal, after detecting `"""`.
    ///
    /// Two consecutive quotes inside the body are literal content; three
    /// end the literal. TAB and LF are permitted alongside printable
    /// ASCII, and no escapes are processed.
    fn lex_multiline_string(&mut self) -> Result<Token> {
        self.cursor.advance();
        self.cursor.advance();
        self.cursor.advance();

        let mut content = String::new();
        // Whitespace seen so far on a line with no content yet.
        let mut ws_buffer = String::new();
        // A newline owed to the output once the next line shows content.
        let mut pending_newline = false;
        let mut line_has_content = false;

        loop {
            match self.cursor.current() {
                None => {
                    return Err(self.error("unterminated multi-line string literal"));
                }
                Some(b'"')
                    if self.cursor.peek(1) == Some(b'"')
                        && self.cursor.peek(2) == Some(b'"') =>
                {
                    // Closing delimiter on a contentless line suppresses
                    // the pending newline.
                    self.cursor.advance();
                    self.cursor.advance();
                    self.cursor.advance();
                    break;
                }
                Some(b'\n') => {
                    if line_has_content {
                        pending_newline = true;
                    }
                    ws_buffer.clear();
                    line_has_content = false;
                    self.cursor.advance();
                }
                Some(b @ (b' ' | b'\t')) if !line_has_content => {
                    ws_buffer.push(b as char);
                    self.cursor.advance();
                }
                Some(b) if b == b'\t' || (b' '..=b'~').contains(&b) => {
                    if !line_has_content {
                        if pending_newline {
                            content.push('\n');
                            pending_newline = false;
                        }
                        content.push_str(&ws_buffer);
                        ws_buffer.clear();
                        line_has_content = true;
                    }
                    content.push(b as char);
                    self.cursor.advance();
                }
                Some(b) => {
                    return Err(self.error_here(format!(
                        "invalid byte 0x{:02X} in multi-line string literal",
                        b
                    )));
                }
            }
        }

        Ok(self.make(TokenKind::MultiStr(content)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_one(source: &str) -> TokenKind {
        Lexer::new(source).next_token().expect("lexing failed").kind
    }

    fn lex_fail(source: &str) -> ifjc_util::CompileError {
        Lexer::new(source)
            .tokenize()
            .expect_err("expected a lexical error")
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(lex_one("\"abc\""), TokenKind::Str("abc".into()));
        assert_eq!(lex_one("\"\""), TokenKind::Str(String::new()));
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            lex_one(r#""a\nb\tc\rd""#),
            TokenKind::Str("a\nb\tc\rd".into())
        );
        assert_eq!(lex_one(r#""\"\\""#), TokenKind::Str("\"\\".into()));
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(lex_one(r#""\x41\x0a""#), TokenKind::Str("A\n".into()));
        assert_eq!(lex_one(r#""\xFF""#), TokenKind::Str("\u{ff}".into()));
    }

    #[test]
    fn test_hex_escape_needs_two_digits() {
        assert_eq!(lex_fail(r#""\x4""#).exit_code(), 1);
        assert_eq!(lex_fail(r#""\xZZ""#).exit_code(), 1);
    }

    #[test]
    fn test_unknown_escape_rejected() {
        assert_eq!(lex_fail(r#""\q""#).exit_code(), 1);
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(lex_fail("\"abc").exit_code(), 1);
        assert_eq!(lex_fail("\"abc\ndef\"").exit_code(), 1);
    }

    #[test]
    fn test_tab_must_be_escaped_in_single_line_string() {
        assert_eq!(lex_fail("\"a\tb\"").exit_code(), 1);
    }

    #[test]
    fn test_multiline_basic() {
        assert_eq!(
            lex_one("\"\"\"\nabc\n\"\"\""),
            TokenKind::MultiStr("abc".into())
        );
    }

    #[test]
    fn test_multiline_no_trailing_newline() {
        // Closing quotes on their own line suppress the pending newline.
        assert_eq!(
            lex_one("\"\"\"\na\nb\n\"\"\""),
            TokenKind::MultiStr("a\nb".into())
        );
    }

    #[test]
    fn test_multiline_keeps_inner_indentation() {
        assert_eq!(
            lex_one("\"\"\"\n  a\n    b\n\"\"\""),
            TokenKind::MultiStr("  a\n    b".into())
        );
    }

    #[test]
    fn test_multiline_opening_line_whitespace_dropped() {
        assert_eq!(
            lex_one("\"\"\"   \t\nabc\n\"\"\""),
            TokenKind::MultiStr("abc".into())
        );
    }

    #[test]
    fn test_multiline_blank_line_discards_its_whitespace() {
        assert_eq!(
            lex_one("\"\"\"\na\n   \nb\n\"\"\""),
            TokenKind::MultiStr("a\nb".into())
        );
    }

    #[test]
    fn test_multiline_two_quotes_are_content() {
        assert_eq!(
            lex_one("\"\"\"\nsay \"\"hi\"\"\n\"\"\""),
            TokenKind::MultiStr("say \"\"hi\"\"".into())
        );
    }

    #[test]
    fn test_multiline_closing_after_content_keeps_line() {
        assert_eq!(
            lex_one("\"\"\"\nabc\"\"\""),
            TokenKind::MultiStr("abc".into())
        );
    }

    #[test]
    fn test_multiline_allows_tab_content() {
        assert_eq!(
            lex_one("\"\"\"\na\tb\n\"\"\""),
            TokenKind::MultiStr("a\tb".into())
        );
    }

    #[test]
    fn test_multiline_unterminated() {
        assert_eq!(lex_fail("\"\"\"\nabc").exit_code(), 1);
    }

    #[test]
    fn test_no_escape_processing_in_multiline() {
        assert_eq!(
            lex_one("\"\"\"\na\\nb\n\"\"\""),
            TokenKind::MultiStr("a\\nb".into())
        );
    }
}
