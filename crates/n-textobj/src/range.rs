//! Byte ranges and their linewise / inner transforms.
//!
//! A [`Range`] is half-open: `[start, end)`. Object queries return
//! [`Range::EMPTY`] when nothing is found; it is distinct from a located
//! zero-width range such as `Range::new(4, 4)`. Check [`Range::valid`] (or
//! use [`Range::ok`]) before reading the bounds.

use std::fmt;

use n_text::Text;
use n_text::class::is_space;
use n_text::motion::{line_begin, line_next};

/// A half-open byte range in a text buffer: `[start, end)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// The "no object here" sentinel.
    pub const EMPTY: Self = Self {
        start: usize::MAX,
        end: usize::MAX,
    };

    /// Create a range. No clamping or ordering is applied.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// True for a located range: not the sentinel and `start <= end`.
    #[inline]
    #[must_use]
    pub const fn valid(self) -> bool {
        self.start != usize::MAX && self.end != usize::MAX && self.start <= self.end
    }

    /// Length in bytes. Zero for invalid ranges.
    #[inline]
    #[must_use]
    pub const fn size(self) -> usize {
        if self.valid() { self.end - self.start } else { 0 }
    }

    /// True when `pos` falls within `[start, end)`.
    #[inline]
    #[must_use]
    pub const fn contains(self, pos: usize) -> bool {
        self.valid() && self.start <= pos && pos < self.end
    }

    /// `Some(self)` for a valid range, `None` for the sentinel.
    #[inline]
    #[must_use]
    pub const fn ok(self) -> Option<Self> {
        if self.valid() { Some(self) } else { None }
    }

    /// As a `std::ops::Range`, for slicing. `None` for invalid ranges.
    #[must_use]
    pub const fn as_span(self) -> Option<std::ops::Range<usize>> {
        if self.valid() { Some(self.start..self.end) } else { None }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid() {
            write!(f, "Range({}..{})", self.start, self.end)
        } else {
            f.write_str("Range(empty)")
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid() {
            write!(f, "{}..{}", self.start, self.end)
        } else {
            f.write_str("empty")
        }
    }
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

/// Extend `range` to whole lines.
///
/// `start` moves back to its line start. `end` moves forward to the start of
/// the next line, unless it already sits on a line start.
#[must_use]
pub fn to_linewise<T: Text + ?Sized>(text: &T, range: Range) -> Range {
    if !range.valid() {
        return range;
    }
    let start = line_begin(text, range.start);
    let end = if range.end == line_begin(text, range.end) {
        range.end
    } else {
        line_next(text, range.end)
    };
    Range::new(start, end)
}

/// True when both ends of a valid `range` sit on line starts.
#[must_use]
pub fn is_linewise<T: Text + ?Sized>(text: &T, range: Range) -> bool {
    range.valid()
        && range.start == line_begin(text, range.start)
        && range.end == line_begin(text, range.end)
}

/// Strip leading and trailing whitespace from `range`.
///
/// The two ends never cross: a range holding only whitespace collapses to a
/// zero-width range at its end.
#[must_use]
pub fn trim_to_inner<T: Text + ?Sized>(text: &T, range: Range) -> Range {
    if !range.valid() {
        return range;
    }
    let mut start = range.start;
    while start < range.end && text.byte(start).is_some_and(is_space) {
        start += 1;
    }
    let mut end = range.end;
    while end > start && text.byte(end - 1).is_some_and(is_space) {
        end -= 1;
    }
    Range::new(start, end)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
