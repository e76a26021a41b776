//! Byte cursor for traversing source code.
//!
//! The [`Cursor`] maintains position state while the scanner walks the
//! input one character at a time. IFJ25 source is ASCII outside string
//! literals, so the cursor works on bytes. Line terminators are
//! normalized on the fly: a lone CR and the CRLF pair both read as a
//! single LF. The C original's one-character pushback is covered by
//! [`Cursor::peek`] and by [`Cursor::snapshot`] / [`Cursor::restore`].

/// A cursor for traversing source bytes one character at a time.
///
/// # Example
///
/// ```
/// use ifjc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
/// assert_eq!(cursor.current(), Some(b'v'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(b'a'));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current byte, or `None` at end of input.
    ///
    /// CR is reported as LF so callers only ever see `\n` line
    /// terminators.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.byte_at(self.position)
    }

    /// Returns the byte `offset` positions ahead of the cursor without
    /// moving it, with the same CR normalization as [`Cursor::current`].
    ///
    /// The offset counts raw bytes, which is exact for everything except
    /// peeking across a CRLF pair; the scanner only peeks within a line.
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.byte_at(self.position + offset)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> Option<u8> {
        let b = *self.source.as_bytes().get(pos)?;
        Some(if b == b'\r' { b'\n' } else { b })
    }

    /// Advances the cursor by one character.
    ///
    /// A CRLF pair advances two bytes but counts as one line terminator.
    /// Does nothing at end of input.
    pub fn advance(&mut self) {
        let bytes = self.source.as_bytes();
        let Some(&b) = bytes.get(self.position) else {
            return;
        };

        match b {
            b'\r' => {
                self.position += 1;
                if bytes.get(self.position) == Some(&b'\n') {
                    self.position += 1;
                }
                self.line += 1;
                self.column = 1;
            }
            b'\n' => {
                self.position += 1;
                self.line += 1;
                self.column = 1;
            }
            _ => {
                // Multi-byte UTF-8 sequences advance as a unit so the
                // scanner can report one error per character.
                let len = utf8_len(b);
                self.position = (self.position + len).min(self.source.len());
                self.column += 1;
            }
        }
    }

    /// Matches and consumes the expected byte if present.
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source slice from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Creates a snapshot of the current cursor state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A saved cursor state that can be restored later.
#[derive(Clone, Copy, Debug)]
pub struct CursorSnapshot {
    position: usize,
    line: u32,
    column: u32,
}

#[inline]
fn utf8_len(first: u8) -> usize {
    match first {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}
