//! Whole-word literal search.
//!
//! [`word_find_next`] and [`word_find_prev`] look for `needle` only where it
//! forms a complete word: a match inside a longer token (`foo` in `foobar`)
//! is skipped and the search continues past it.

use n_text::Text;
use n_text::search::{find_next, find_prev};

use crate::range::Range;
use crate::word::word;

/// The next occurrence of `needle` after `pos` that forms a whole word.
#[must_use]
pub fn word_find_next<T: Text + ?Sized>(text: &T, pos: usize, needle: &str) -> Range {
    let mut pos = pos;
    while let Some(found) = find_next(text, pos, needle.as_bytes()) {
        let candidate = word(text, found);
        if candidate.size() == needle.len() {
            return candidate;
        }
        tracing::trace!(found, %candidate, needle, "match is part of a longer word");
        pos = if candidate.valid() { candidate.end.max(found) } else { found };
    }
    Range::EMPTY
}

/// The previous occurrence of `needle` before `pos` that forms a whole word.
#[must_use]
pub fn word_find_prev<T: Text + ?Sized>(text: &T, pos: usize, needle: &str) -> Range {
    let mut pos = pos;
    while let Some(found) = find_prev(text, pos, needle.as_bytes()) {
        let candidate = word(text, found);
        if candidate.size() == needle.len() {
            return candidate;
        }
        tracing::trace!(found, %candidate, needle, "match is part of a longer word");
        pos = found;
    }
    Range::EMPTY
}
