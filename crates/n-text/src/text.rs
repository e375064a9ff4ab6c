//! Text capability: the narrow read interface every motion and object uses.
//!
//! Motions never index a concrete storage type. They go through [`Text`],
//! which only promises a size and per-byte reads, and walk it with an
//! [`Iter`]. A contiguous `str`, a `[u8]` and the rope-backed
//! [`Buffer`](crate::Buffer) all implement it.
//!
//! Offsets are **byte** offsets in `[0, size]`. `size` itself is a valid
//! position (end of buffer) but has no byte.

use std::ops::Range;

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Read-only byte access to a text buffer.
pub trait Text {
    /// Total length in bytes.
    fn size(&self) -> usize;

    /// The byte at `pos`, or `None` at or past the end of the buffer.
    fn byte(&self, pos: usize) -> Option<u8>;

    /// Append the bytes in `range` to `out`. Offsets past the end are skipped.
    fn read_into(&self, range: Range<usize>, out: &mut Vec<u8>) {
        out.extend(range.filter_map(|pos| self.byte(pos)));
    }
}

impl Text for [u8] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn byte(&self, pos: usize) -> Option<u8> {
        self.get(pos).copied()
    }

    fn read_into(&self, range: Range<usize>, out: &mut Vec<u8>) {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        out.extend_from_slice(&self[start..end]);
    }
}

impl Text for str {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn byte(&self, pos: usize) -> Option<u8> {
        self.as_bytes().get(pos).copied()
    }

    fn read_into(&self, range: Range<usize>, out: &mut Vec<u8>) {
        self.as_bytes().read_into(range, out);
    }
}

// ---------------------------------------------------------------------------
// Iter
// ---------------------------------------------------------------------------

/// A cursor over the bytes of a [`Text`].
///
/// Step operations return `true` when the cursor moved. Stepping past either
/// end leaves the cursor clamped at `0` or `size` and returns `false`.
/// Character steps treat UTF-8 continuation bytes as part of the preceding
/// character.
pub struct Iter<'a, T: Text + ?Sized> {
    text: &'a T,
    pos: usize,
}

impl<'a, T: Text + ?Sized> Iter<'a, T> {
    /// Create an iterator at `pos`, clamped to the buffer size.
    #[must_use]
    pub fn new(text: &'a T, pos: usize) -> Self {
        Self {
            text,
            pos: pos.min(text.size()),
        }
    }

    /// Current offset.
    #[inline]
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// The byte under the cursor, `None` at end of buffer.
    #[inline]
    #[must_use]
    pub fn byte(&self) -> Option<u8> {
        self.text.byte(self.pos)
    }

    /// Advance one byte.
    pub fn next_byte(&mut self) -> bool {
        if self.pos < self.text.size() {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Retreat one byte.
    pub const fn prev_byte(&mut self) -> bool {
        if self.pos > 0 {
            self.pos -= 1;
            true
        } else {
            false
        }
    }

    /// Advance to the start of the next character.
    pub fn next_char(&mut self) -> bool {
        if !self.next_byte() {
            return false;
        }
        while self.byte().is_some_and(is_continuation) {
            self.pos += 1;
        }
        true
    }

    /// Retreat to the start of the previous character.
    pub fn prev_char(&mut self) -> bool {
        if !self.prev_byte() {
            return false;
        }
        while self.pos > 0 && self.byte().is_some_and(is_continuation) {
            self.pos -= 1;
        }
        true
    }
}

impl<T: Text + ?Sized> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Text + ?Sized> Copy for Iter<'_, T> {}

/// UTF-8 continuation byte (`0b10xx_xxxx`).
#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
