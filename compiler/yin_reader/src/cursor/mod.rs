//! Character cursor with line and column tracking.
//!
//! The cursor walks a `&str` one `char` at a time and keeps the 1-based line
//! and column of the current position up to date, so every node the reader
//! builds can be stamped with its location without a second pass. Runs of
//! uninteresting bytes (comment bodies, string contents) are skipped with
//! `memchr`.
//!
//! Positions are kept as `usize` so slicing is exact for any input. They are
//! narrowed to `u32` only when a [`Span`] is built; offsets past 4 GiB
//! saturate to `u32::MAX`.

use yin_ir::{FileId, Span};

/// A saved cursor position.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Mark {
    pub pos: usize,
    pub line: u32,
    pub col: u32,
}

#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor {
            src,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// The current character, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character `n` positions past the current one.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consume one character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.current().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Consume `n` bytes, which must end on a character boundary.
    fn advance_bytes(&mut self, n: usize) {
        let skipped = &self.src.as_bytes()[self.pos..self.pos + n];
        match memchr::memrchr(b'\n', skipped) {
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', skipped).count();
                self.line += to_u32(newlines);
                self.col = 1 + to_u32(self.src[self.pos + last + 1..self.pos + n].chars().count());
            }
            None => {
                self.col += to_u32(self.src[self.pos..self.pos + n].chars().count());
            }
        }
        self.pos += n;
    }

    /// Skip to the next `\n` (not consumed) or EOF.
    pub fn skip_line(&mut self) {
        let rest = self.rest().as_bytes();
        let n = memchr::memchr(b'\n', rest).unwrap_or(rest.len());
        self.advance_bytes(n);
    }

    /// Skip plain string content up to the next `"` or `\`.
    ///
    /// Returns the delimiter byte found (not consumed), or `None` at EOF.
    pub fn skip_to_string_delim(&mut self) -> Option<u8> {
        let rest = self.rest().as_bytes();
        match memchr::memchr2(b'"', b'\\', rest) {
            Some(n) => {
                let found = rest[n];
                self.advance_bytes(n);
                Some(found)
            }
            None => {
                self.advance_bytes(rest.len());
                None
            }
        }
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            col: self.col,
        }
    }

    /// Text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: Mark) -> &'a str {
        &self.src[start.pos..self.pos]
    }

    /// Span from `start` to the current position.
    #[inline]
    pub fn span_from(&self, file: FileId, start: Mark) -> Span {
        Span::new(file, to_u32(start.pos), to_u32(self.pos), start.line, start.col)
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        to_u32(self.src.len())
    }
}

impl Mark {
    /// Span of `len` bytes starting at this mark.
    #[inline]
    pub fn span(self, file: FileId, len: usize) -> Span {
        Span::new(file, to_u32(self.pos), to_u32(self.pos + len), self.line, self.col)
    }
}

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
