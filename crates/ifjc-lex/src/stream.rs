//! Token stream with an active cursor.
//!
//! The parser consumes tokens through a [`TokenStream`]: an ordered
//! sequence with a movable cursor supporting forward and backward steps
//! plus a non-destructive lookahead that skips EOL tokens. A stream
//! produced by the lexer always ends with a single `Eof` token, and the
//! cursor never moves past it.

use crate::token::{Token, TokenKind};

/// An ordered token sequence with an active cursor.
#[derive(Debug, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    active: usize,
}

impl TokenStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token at the end of the stream.
    pub fn insert_last(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Moves the cursor to the first token and returns it.
    ///
    /// # Panics
    ///
    /// Panics on an empty stream; lexed streams always hold at least
    /// the `Eof` token.
    pub fn first(&mut self) -> &Token {
        self.active = 0;
        &self.tokens[self.active]
    }

    /// Returns the token under the cursor.
    pub fn current(&self) -> &Token {
        &self.tokens[self.active]
    }

    /// Advances the cursor and returns the new current token.
    ///
    /// The cursor stops at the final token (`Eof`).
    pub fn next(&mut self) -> &Token {
        if self.active + 1 < self.tokens.len() {
            self.active += 1;
        }
        &self.tokens[self.active]
    }

    /// Moves the cursor back one token and returns the new current token.
    ///
    /// The cursor stops at the first token.
    pub fn prev(&mut self) -> &Token {
        self.active = self.active.saturating_sub(1);
        &self.tokens[self.active]
    }

    /// Returns the kind `n` tokens ahead of the cursor without moving it.
    ///
    /// Positions past the end report `Eof`.
    pub fn peek(&self, n: usize) -> &TokenKind {
        match self.tokens.get(self.active + n) {
            Some(token) => &token.kind,
            None => &TokenKind::Eof,
        }
    }

    /// Walks forward from the token after the cursor, without moving it,
    /// and returns the first kind that is not EOL.
    ///
    /// Returns `Eof` when only EOL tokens remain.
    pub fn peek_kind_ignoring_eol(&self) -> &TokenKind {
        for token in &self.tokens[(self.active + 1).min(self.tokens.len())..] {
            if !token.kind.is_eol() {
                return &token.kind;
            }
        }
        &TokenKind::Eof
    }

    /// Number of tokens in the stream.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
