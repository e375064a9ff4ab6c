//! Structural objects: lines, sentences, paragraphs, functions and the
//! whole buffer.
//!
//! Each object composes one or two motions from [`n_text::motion`] with a
//! range transform. None of them walk the text on their own.

use n_text::Text;
use n_text::class::is_newline;
use n_text::motion::{
    bracket_match, function_end_next, function_start_prev, line_begin, line_next,
    paragraph_next, paragraph_prev, sentence_next, sentence_prev,
};

use crate::range::{Range, to_linewise, trim_to_inner};

// ---------------------------------------------------------------------------
// Lines, sentences, paragraphs
// ---------------------------------------------------------------------------

/// `al`: the line holding `pos`, including its line ending.
#[must_use]
pub fn line<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    Range::new(line_begin(text, pos), line_next(text, pos))
}

/// `il`: the line without leading or trailing whitespace.
#[must_use]
pub fn line_inner<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    trim_to_inner(text, line(text, pos))
}

/// `is` / `as`: the sentence holding `pos` and the whitespace after it.
#[must_use]
pub fn sentence<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    Range::new(sentence_prev(text, pos), sentence_next(text, pos))
}

/// `ip` / `ap`: the paragraph (or run of blank lines) holding `pos`.
#[must_use]
pub fn paragraph<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    Range::new(paragraph_prev(text, pos), paragraph_next(text, pos))
}

// ---------------------------------------------------------------------------
// Whole buffer
// ---------------------------------------------------------------------------

/// `ae`: the entire buffer.
#[must_use]
pub fn entire<T: Text + ?Sized>(text: &T, _pos: usize) -> Range {
    Range::new(0, text.size())
}

/// `ie`: the buffer without leading and trailing blank lines.
///
/// Empty when the buffer holds nothing but line endings.
#[must_use]
pub fn entire_inner<T: Text + ?Sized>(text: &T, _pos: usize) -> Range {
    let size = text.size();
    let mut start = 0;
    while text.byte(start).is_some_and(is_newline) {
        start += 1;
    }
    if start == size {
        return Range::EMPTY;
    }
    let mut end = size;
    while end > start && text.byte(end - 1).is_some_and(is_newline) {
        end -= 1;
    }
    to_linewise(text, Range::new(start, end))
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

/// Start and closing brace of the function enclosing `pos`.
///
/// The closing brace found from the function start has to be the same one
/// found from `pos`, otherwise `pos` lies between two functions.
fn function_bounds<T: Text + ?Sized>(text: &T, pos: usize) -> Option<(usize, usize)> {
    let start = function_start_prev(text, pos)?;
    let end = function_end_next(text, pos)?;
    if function_end_next(text, start) == Some(end) {
        Some((start, end))
    } else {
        tracing::trace!(pos, start, end, "not inside a function");
        None
    }
}

/// `af`: the function around `pos`, as whole lines.
#[must_use]
pub fn function<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    function_bounds(text, pos).map_or(Range::EMPTY, |(start, end)| {
        to_linewise(text, Range::new(start, end + 1))
    })
}

/// `if`: the function body between its braces, without the line ending
/// before the closing brace.
#[must_use]
pub fn function_inner<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    let Some((_, end)) = function_bounds(text, pos) else {
        return Range::EMPTY;
    };
    let Some(open) = bracket_match(text, end) else {
        return Range::EMPTY;
    };
    let body = Range::new(open + 1, end - 1);
    if body.valid() { body } else { Range::EMPTY }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
