//! The cursor scanner.
//!
//! The scanner owns nothing but a borrowed buffer and a byte offset. All
//! returned slices borrow from the buffer, so callers can keep them after
//! the scanner is gone.

use crate::pattern::Pattern;

/// A cursor over an immutable text buffer.
///
/// The cursor is a byte offset that always sits on a char boundary and
/// satisfies `0 <= pos <= text.len()`.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// The source text being scanned.
    text: &'a str,
    /// Current position in the text.
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned at the start of `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// The current cursor offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The text from the cursor to the end of the buffer.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Whether the cursor has reached the end of the buffer.
    #[inline]
    pub fn is_eos(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Whether the cursor is at the beginning of a line.
    ///
    /// Offset 0 is a line start. Any other offset counts only from 2
    /// onwards, so offset 1 after a leading `\n` is not a line start.
    pub fn is_bol(&self) -> bool {
        if self.pos == 0 {
            return true;
        }
        self.pos >= 2 && self.text.as_bytes().get(self.pos - 1) == Some(&b'\n')
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Match `pattern` starting exactly at the cursor.
    ///
    /// On success the cursor moves to the end of the match and the matched
    /// text is returned. Fails without moving at end-of-stream.
    pub fn scan(&mut self, pattern: &Pattern) -> Option<&'a str> {
        if self.is_eos() {
            return None;
        }
        let found = pattern.anchored().find(self.rest())?;
        Some(self.advance(found.end()))
    }

    /// Search for `pattern` anywhere at or after the cursor.
    ///
    /// On success the cursor moves to the end of the match, and the text
    /// from the old cursor through the match end is returned, including
    /// everything skipped over.
    pub fn scan_until(&mut self, pattern: &Pattern) -> Option<&'a str> {
        if self.is_eos() {
            return None;
        }
        let found = pattern.search().find(self.rest())?;
        Some(self.advance(found.end()))
    }

    /// Same as [`scan_until`](Self::scan_until), returning only the number
    /// of bytes consumed.
    pub fn skip_until(&mut self, pattern: &Pattern) -> Option<usize> {
        self.scan_until(pattern).map(str::len)
    }

    /// Consume one character unconditionally.
    pub fn get_char(&mut self) -> Option<&'a str> {
        let ch = self.rest().chars().next()?;
        Some(self.advance(ch.len_utf8()))
    }

    /// Up to `n` characters from the cursor, without advancing.
    pub fn peek(&self, n: usize) -> &'a str {
        let rest = self.rest();
        match rest.char_indices().nth(n) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    /// Move the cursor straight to end-of-stream.
    #[inline]
    pub fn terminate(&mut self) {
        self.pos = self.text.len();
    }

    /// Advance by `len` bytes and return the consumed slice.
    #[inline]
    fn advance(&mut self, len: usize) -> &'a str {
        let start = self.pos;
        self.pos += len;
        &self.text[start..self.pos]
    }
}
