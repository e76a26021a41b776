//! Integer and float literal lexing.
//!
//! Decimal integers reject a leading zero followed by more digits.
//! `0x`/`0X` starts a hexadecimal integer with at least one digit.
//! A dot after the integer part opens a fraction only when a digit
//! follows it; two or three dots are the range operators and are left
//! for the operator lexer. Fraction and exponent each require at least
//! one digit.

use ifjc_util::Result;

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at the current digit.
    pub(crate) fn lex_number(&mut self) -> Result<Token> {
        if self.cursor.current() == Some(b'0') {
            self.cursor.advance();
            match self.cursor.current() {
                Some(b'x') | Some(b'X') => {
                    self.cursor.advance();
                    return self.lex_hex();
                }
                Some(b) if b.is_ascii_digit() => {
                    return Err(self.error("leading zero in integer literal"));
                }
                _ => {}
            }
        } else {
            while matches!(self.cursor.current(), Some(b) if b.is_ascii_digit()) {
                self.cursor.advance();
            }
        }

        let mut is_float = false;

        if self.cursor.current() == Some(b'.') {
            if self.cursor.peek(1) == Some(b'.') {
                // Range operator follows the integer; leave the dots.
            } else if matches!(self.cursor.peek(1), Some(b) if b.is_ascii_digit()) {
                is_float = true;
                self.cursor.advance();
                while matches!(self.cursor.current(), Some(b) if b.is_ascii_digit()) {
                    self.cursor.advance();
                }
            } else {
                return Err(self.error_here("expected digit after decimal point"));
            }
        }

        if matches!(self.cursor.current(), Some(b'e') | Some(b'E')) {
            is_float = true;
            self.cursor.advance();
            if matches!(self.cursor.current(), Some(b'+') | Some(b'-')) {
                self.cursor.advance();
            }
            if !matches!(self.cursor.current(), Some(b) if b.is_ascii_digit()) {
                return Err(self.error_here("expected digit in exponent"));
            }
            while matches!(self.cursor.current(), Some(b) if b.is_ascii_digit()) {
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        if is_float {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(self.make(TokenKind::Float(value))),
                _ => Err(self.error(format!("float literal '{}' out of range", text))),
            }
        } else {
            match text.parse::<i64>() {
                Ok(value) => Ok(self.make(TokenKind::Int(value))),
                Err(_) => Err(self.error(format!("integer literal '{}' out of range", text))),
            }
        }
    }

    /// Lexes the digits of a hexadecimal literal, after `0x`.
    fn lex_hex(&mut self) -> Result<Token> {
        let digit_start = self.cursor.position();
        while matches!(self.cursor.current(), Some(b) if b.is_ascii_hexdigit()) {
            self.cursor.advance();
        }
        if self.cursor.position() == digit_start {
            return Err(self.error_here("expected digit after hexadecimal prefix"));
        }

        let digits = self.cursor.slice_from(digit_start);
        match i64::from_str_radix(digits, 16) {
            Ok(value) => Ok(self.make(TokenKind::Int(value))),
            Err(_) => Err(self.error(format!("integer literal '0x{}' out of range", digits))),
        }
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
    fn test_decimal_integers() {
        assert_eq!(lex_one("0"), TokenKind::Int(0));
        assert_eq!(lex_one("7"), TokenKind::Int(7));
        assert_eq!(lex_one("123456"), TokenKind::Int(123456));
        assert_eq!(
            lex_one("9223372036854775807"),
            TokenKind::Int(i64::MAX)
        );
    }

    #[test]
    fn test_leading_zero_rejected() {
        assert_eq!(lex_fail("01").exit_code(), 1);
        assert_eq!(lex_fail("007").exit_code(), 1);
    }

    #[test]
    fn test_integer_overflow_rejected() {
        assert_eq!(lex_fail("9223372036854775808").exit_code(), 1);
    }

    #[test]
    fn test_hex_integers() {
        assert_eq!(lex_one("0x0"), TokenKind::Int(0));
        assert_eq!(lex_one("0xFF"), TokenKind::Int(255));
        assert_eq!(lex_one("0Xab"), TokenKind::Int(0xab));
    }

    #[test]
    fn test_hex_requires_digit() {
        assert_eq!(lex_fail("0x").exit_code(), 1);
        assert_eq!(lex_fail("0xg").exit_code(), 1);
    }

    #[test]
    fn test_floats() {
        assert_eq!(lex_one("3.25"), TokenKind::Float(3.25));
        assert_eq!(lex_one("0.5"), TokenKind::Float(0.5));
        assert_eq!(lex_one("1e3"), TokenKind::Float(1e3));
        assert_eq!(lex_one("2.5e-3"), TokenKind::Float(2.5e-3));
        assert_eq!(lex_one("1E+2"), TokenKind::Float(100.0));
    }

    #[test]
    fn test_fraction_requires_digit() {
        assert_eq!(lex_fail("1.x").exit_code(), 1);
    }

    #[test]
    fn test_exponent_requires_digit() {
        assert_eq!(lex_fail("1e").exit_code(), 1);
        assert_eq!(lex_fail("1e+").exit_code(), 1);
    }

    #[test]
    fn test_float_overflow_rejected() {
        assert_eq!(lex_fail("1e999").exit_code(), 1);
    }

    #[test]
    fn test_dots_after_integer_are_range_operators() {
        let mut stream = Lexer::new("1..5").tokenize().unwrap();
        assert_eq!(stream.first().kind, TokenKind::Int(1));
        assert_eq!(stream.next().kind, TokenKind::DotDot);
        assert_eq!(stream.next().kind, TokenKind::Int(5));

        let mut stream = Lexer::new("1...5").tokenize().unwrap();
        assert_eq!(stream.first().kind, TokenKind::Int(1));
        assert_eq!(stream.next().kind, TokenKind::DotDotDot);
        assert_eq!(stream.next().kind, TokenKind::Int(5));
    }
}
