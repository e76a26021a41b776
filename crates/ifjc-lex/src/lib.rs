//! ifjc-lex - Lexical analyzer for the IFJ25 source language.
//!
//! The scanner transforms a stream of source characters into a stream of
//! tokens. It is a streaming state machine: each call to
//! [`Lexer::next_token`] returns exactly one token, and
//! [`Lexer::tokenize`] drains the whole input into a [`TokenStream`].
//!
//! Notable IFJ25 lexical rules handled here:
//!
//! - runs of line terminators collapse into a single [`TokenKind::Eol`]
//!   token; CR and CRLF are normalized to LF first,
//! - `//` line comments replace themselves with an EOL token and `/* */`
//!   block comments nest to arbitrary depth and count as whitespace,
//! - identifiers beginning with exactly two underscores are a distinct
//!   "global" token kind; a lone `_` is a lexical error,
//! - integer literals reject a leading zero followed by more digits,
//!   `0x`/`0X` starts a hexadecimal literal,
//! - one, two, and three dots are three distinct tokens, and a dot after
//!   digits is only a decimal point when a digit follows it,
//! - single-line strings resolve escapes (`\"`, `\\`, `\n`, `\r`, `\t`,
//!   `\xHH`); triple-quoted multi-line strings apply the
//!   indentation/pending-newline trimming rules and no escape processing.
//!
//! The first malformed lexeme aborts scanning with a positioned
//! lexical error (exit code 1).

pub mod cursor;
pub mod lexer;
pub mod stream;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use stream::TokenStream;
pub use token::{Token, TokenKind};
