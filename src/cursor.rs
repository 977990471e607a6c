//! Offset-based cursor for forward byte scanning.
//!
//! The converter never builds a tree, so every piece of block and inline
//! state is keyed off this one read position. It only moves backwards
//! through [`Cursor::set_offset`], which handlers use to un-consume a marker
//! run before flushing the text in front of it.

use memchr::{memchr, memchr2};

use crate::limits;
use crate::Range;

/// A cursor over the input bytes.
///
/// # Example
/// ```
/// use sweepmark::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"**bold**");
/// assert_eq!(cursor.count_run(b'*'), 2);
/// assert_eq!(cursor.peek(), Some(b'b'));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `input`.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Create a cursor starting at an offset.
    #[inline]
    pub fn new_at(input: &'a [u8], offset: usize) -> Self {
        debug_assert!(offset <= input.len());
        Self {
            input,
            pos: offset.min(input.len()),
        }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Move to an absolute offset, clamped to the input length.
    #[inline]
    pub fn set_offset(&mut self, offset: usize) {
        self.pos = offset.min(self.input.len());
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek at byte n positions ahead.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> Option<u8> {
        self.input.get(self.pos + n).copied()
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// True at a line terminator or at end of input.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        matches!(self.peek(), None | Some(b'\n'))
    }

    /// True at a space, tab, line terminator or end of input.
    #[inline]
    pub fn at_whitespace_or_line_end(&self) -> bool {
        matches!(self.peek(), None | Some(b' ' | b'\t' | b'\n'))
    }

    /// Advance by 1 byte. No-op at EOF.
    #[inline]
    pub fn bump(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    /// Advance by n bytes, stopping at EOF.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Consume a specific byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advance while the current byte equals `c`, returning how many were consumed.
    #[inline]
    pub fn count_run(&mut self, c: u8) -> usize {
        let start = self.pos;
        while self.at(c) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance past leading spaces and tabs, returning the indentation width.
    ///
    /// A space counts 1, a tab counts [`limits::TAB_WIDTH`].
    #[inline]
    pub fn measure_indentation(&mut self) -> usize {
        let mut width = 0;
        loop {
            match self.peek() {
                Some(b' ') => width += 1,
                Some(b'\t') => width += limits::TAB_WIDTH,
                _ => return width,
            }
            self.pos += 1;
        }
    }

    /// Skip spaces and tabs without measuring them.
    #[inline]
    pub fn skip_whitespace(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b' ' | b'\t')) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Lookahead: a run of digits immediately followed by `.`.
    ///
    /// Does not move the cursor.
    #[inline]
    pub fn is_ordered_marker(&self) -> bool {
        self.ordered_marker_len().is_some()
    }

    /// Length of an ordered marker (digits plus the `.`) at the cursor.
    #[inline]
    pub fn ordered_marker_len(&self) -> Option<usize> {
        let digits = self.input[self.pos..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits > 0
            && digits <= limits::MAX_LIST_MARKER_DIGITS
            && self.peek_ahead(digits) == Some(b'.')
        {
            Some(digits + 1)
        } else {
            None
        }
    }

    /// Advance past one UTF-8 encoded character.
    #[inline]
    pub fn skip_char(&mut self) {
        let width = match self.peek() {
            None => 0,
            Some(0xc0..=0xdf) => 2,
            Some(0xe0..=0xef) => 3,
            Some(0xf0..=0xf7) => 4,
            Some(_) => 1,
        };
        self.advance(width);
    }

    /// Offset of the end of the current line (the `\n` or end of input).
    #[inline]
    pub fn line_end(&self) -> usize {
        match memchr(b'\n', self.remaining_slice()) {
            Some(pos) => self.pos + pos,
            None => self.input.len(),
        }
    }

    /// Advance to the end of the current line, leaving the terminator unconsumed.
    #[inline]
    pub fn skip_to_line_end(&mut self) {
        self.pos = self.line_end();
    }

    /// Find `needle` before the end of the current line.
    ///
    /// Returns the absolute offset.
    #[inline]
    pub fn find_in_line(&self, needle: u8) -> Option<usize> {
        match memchr2(needle, b'\n', self.remaining_slice()) {
            Some(pos) if self.input[self.pos + pos] == needle => Some(self.pos + pos),
            _ => None,
        }
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Get a range from a start offset to current position.
    #[inline]
    pub fn range_from(&self, start: usize) -> Range {
        Range::new(start, self.pos)
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
