//! Literal substring search.
//!
//! Searches are literal byte matches in one direction, without wrapping.
//! Forward search only reports matches starting strictly after the query
//! position and backward search only matches starting strictly before it, so
//! repeating a search from the previous result always makes progress.

use crate::text::{Iter, Text};

/// Start of the first occurrence of `needle` after `pos`.
///
/// Returns `None` when there is no further occurrence or `needle` is empty.
#[must_use]
pub fn find_next<T: Text + ?Sized>(text: &T, pos: usize, needle: &[u8]) -> Option<usize> {
    let last = last_start(text, needle)?;
    (pos.saturating_add(1)..=last).find(|&start| matches_at(text, start, needle))
}

/// Start of the last occurrence of `needle` before `pos`.
///
/// Returns `None` when there is no earlier occurrence or `needle` is empty.
#[must_use]
pub fn find_prev<T: Text + ?Sized>(text: &T, pos: usize, needle: &[u8]) -> Option<usize> {
    let last = last_start(text, needle)?;
    (0..pos.min(last + 1))
        .rev()
        .find(|&start| matches_at(text, start, needle))
}

/// The last offset at which `needle` could start.
fn last_start<T: Text + ?Sized>(text: &T, needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    text.size().checked_sub(needle.len())
}

/// True when `needle` occurs at `start`.
fn matches_at<T: Text + ?Sized>(text: &T, start: usize, needle: &[u8]) -> bool {
    let mut it = Iter::new(text, start);
    for &expected in needle {
        if it.byte() != Some(expected) {
            return false;
        }
        it.next_byte();
    }
    true
}
