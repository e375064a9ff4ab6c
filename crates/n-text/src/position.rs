//! Line/column positions, the human-facing side of byte offsets.
//!
//! Text objects work on byte offsets; `line:col` is what people type and
//! read. [`Buffer`](crate::Buffer) converts between the two. The fields are
//! 0-indexed and `col` counts bytes from the start of the line, while the
//! written form is 1-indexed like an editor status line.

use std::fmt;

/// A (line, byte column) pair, both 0-indexed. Orders line-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// From a 1-indexed line and column as a user writes them. `None` when
    /// either is 0.
    #[must_use]
    pub const fn from_one_based(line: usize, col: usize) -> Option<Self> {
        if line == 0 || col == 0 {
            None
        } else {
            Some(Self::new(line - 1, col - 1))
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}
