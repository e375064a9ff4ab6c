//! Text buffer: rope-backed storage the text objects read from.
//!
//! A `Buffer` wraps a [`ropey::Rope`] and exposes it through the [`Text`]
//! capability, plus the coordinate conversion the command line needs.
//!
//! # Design choices
//!
//! - **ropey** gives O(log n) byte access and line indexing. Text objects
//!   only ever step through bytes, so the rope is never flattened.
//!
//! - **Offsets are bytes.** Text objects produce byte ranges; columns in
//!   [`Position`] are byte columns too, so conversion is exact.
//!
//! - **Read-only.** Editing, undo and persistence belong to whoever owns the
//!   buffer. Objects are computed from a snapshot and never mutate it.

use std::fmt;
use std::fs;
use std::io;
use std::ops::Range;
use std::path::Path;

use ropey::Rope;

use crate::position::Position;
use crate::text::Text;

/// A text buffer backed by a rope.
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// Create a buffer from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Load a buffer from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded buffer");
        Ok(Self::from_text(&text))
    }

    // -- Text access --------------------------------------------------------

    /// Total byte count.
    #[inline]
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// The text of a byte range, lossily decoded. Ranges that split a
    /// multi-byte character show the replacement character for the fragment.
    /// Returns `None` if the range is reversed or past the end.
    #[must_use]
    pub fn slice_to_string(&self, range: Range<usize>) -> Option<String> {
        if range.start > range.end || range.end > self.len_bytes() {
            return None;
        }
        let mut bytes = Vec::with_capacity(range.len());
        self.read_into(range, &mut bytes);
        Some(String::from_utf8_lossy(&bytes).into_owned())
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Convert a `Position` (line, byte col) to a byte offset.
    ///
    /// Returns `None` if the line is out of bounds or the column exceeds the
    /// line's byte length (including its line ending). A column equal to the
    /// line length is valid: it is the offset just past the line.
    #[must_use]
    pub fn offset_of(&self, pos: Position) -> Option<usize> {
        if pos.line >= self.rope.len_lines() {
            return None;
        }
        let line_start = self.rope.line_to_byte(pos.line);
        let line_len = self.rope.line(pos.line).len_bytes();
        if pos.col > line_len {
            return None;
        }
        Some(line_start + pos.col)
    }

    /// Convert a byte offset to a `Position`.
    ///
    /// Returns `None` if `offset > len_bytes()`. The end-of-buffer offset maps
    /// to the position just past the last byte.
    #[must_use]
    pub fn position_of(&self, offset: usize) -> Option<Position> {
        if offset > self.rope.len_bytes() {
            return None;
        }
        let line = self.rope.byte_to_line(offset);
        let line_start = self.rope.line_to_byte(line);
        Some(Position::new(line, offset - line_start))
    }
}

impl Text for Buffer {
    #[inline]
    fn size(&self) -> usize {
        self.rope.len_bytes()
    }

    #[inline]
    fn byte(&self, pos: usize) -> Option<u8> {
        (pos < self.rope.len_bytes()).then(|| self.rope.byte(pos))
    }

    fn read_into(&self, range: Range<usize>, out: &mut Vec<u8>) {
        let end = range.end.min(self.rope.len_bytes());
        let start = range.start.min(end);
        out.extend(self.rope.bytes_at(start).take(end - start));
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &self.rope.len_lines())
            .field("bytes", &self.len_bytes())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
