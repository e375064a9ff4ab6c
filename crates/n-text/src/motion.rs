//! Motions: where the next line, sentence, paragraph, function or word
//! boundary is, seen from a byte offset.
//!
//! Every motion is a pure function of a [`Text`] and an offset. Motions that
//! always land somewhere (a line start, a word start) return the offset;
//! motions that may find nothing (a function end, a matching bracket) return
//! `Option<usize>`.
//!
//! # Word walks
//!
//! The four `customword_*` motions take a [`Boundary`] predicate. A run is a
//! maximal stretch of non-boundary bytes, or of non-space boundary bytes
//! (punctuation). Whitespace separates runs regardless of the predicate.
//!
//! | Motion                    | Vim | Lands on                               |
//! |---------------------------|-----|----------------------------------------|
//! | [`customword_start_next`] | `w` | first byte of the next run             |
//! | [`customword_start_prev`] | `b` | first byte of the current/previous run |
//! | [`customword_end_next`]   | `e` | last byte of the current/next run      |
//! | [`customword_end_prev`]   | `ge`| last byte of the previous run          |

use crate::class::{Boundary, is_sentence_end, is_space, is_word_boundary};
use crate::text::{Iter, Text};

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

/// Start of the character after the one at `pos` (clamped to size).
#[must_use]
pub fn char_next<T: Text + ?Sized>(text: &T, pos: usize) -> usize {
    let mut it = Iter::new(text, pos);
    it.next_char();
    it.pos()
}

/// Start of the character before `pos` (clamped to 0).
#[must_use]
pub fn char_prev<T: Text + ?Sized>(text: &T, pos: usize) -> usize {
    let mut it = Iter::new(text, pos);
    it.prev_char();
    it.pos()
}

// ---------------------------------------------------------------------------
// Lines
// ---------------------------------------------------------------------------

/// Start of the line containing `pos`.
#[must_use]
pub fn line_begin<T: Text + ?Sized>(text: &T, pos: usize) -> usize {
    let mut it = Iter::new(text, pos);
    while it.prev_byte() {
        if it.byte() == Some(b'\n') {
            return it.pos() + 1;
        }
    }
    0
}

/// Start of the line after the one containing `pos`, or the buffer size when
/// there is no further line ending.
#[must_use]
pub fn line_next<T: Text + ?Sized>(text: &T, pos: usize) -> usize {
    let mut it = Iter::new(text, pos);
    while let Some(byte) = it.byte() {
        it.next_byte();
        if byte == b'\n' {
            break;
        }
    }
    it.pos()
}

/// True when the line starting at `begin` holds nothing but its line ending.
fn is_blank_line<T: Text + ?Sized>(text: &T, begin: usize) -> bool {
    match text.byte(begin) {
        Some(b'\n') => true,
        Some(b'\r') => text.byte(begin + 1) == Some(b'\n'),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Sentences
// ---------------------------------------------------------------------------

/// Start of the sentence containing `pos`.
///
/// A sentence starts at a non-space byte that follows `.`, `?` or `!` and at
/// least one whitespace byte, that follows a blank line, or that is the first
/// non-space byte of the buffer. Whitespace after a sentence belongs to it.
#[must_use]
pub fn sentence_prev<T: Text + ?Sized>(text: &T, pos: usize) -> usize {
    let mut it = Iter::new(text, pos);
    let mut start = it.byte().filter(|&b| !is_space(b)).map(|_| it.pos());
    let mut gap = false;
    let mut newlines = 0;

    while it.prev_byte() {
        let Some(byte) = it.byte() else { break };
        if is_space(byte) {
            if start.is_some() {
                gap = true;
                newlines += usize::from(byte == b'\n');
            }
            continue;
        }
        if let Some(candidate) = start {
            if gap && (is_sentence_end(byte) || newlines >= 2) {
                return candidate;
            }
        }
        start = Some(it.pos());
        gap = false;
        newlines = 0;
    }

    start.unwrap_or(0)
}

/// Start of the sentence after the one containing `pos`, or the buffer size.
#[must_use]
pub fn sentence_next<T: Text + ?Sized>(text: &T, pos: usize) -> usize {
    // Seed the scan with what precedes `pos`: the buffer start counts as a
    // sentence end, so leading whitespace is followed by a sentence start.
    let mut back = Iter::new(text, pos);
    let mut gap = false;
    let mut newlines = 0;
    let mut ended = true;
    while back.prev_byte() {
        let Some(byte) = back.byte() else { break };
        if !is_space(byte) {
            ended = is_sentence_end(byte);
            break;
        }
        gap = true;
        newlines += usize::from(byte == b'\n');
    }

    let mut it = Iter::new(text, pos);
    while let Some(byte) = it.byte() {
        if is_space(byte) {
            gap = true;
            newlines += usize::from(byte == b'\n');
        } else {
            if it.pos() > pos && gap && (ended || newlines >= 2) {
                return it.pos();
            }
            ended = is_sentence_end(byte);
            gap = false;
            newlines = 0;
        }
        it.next_byte();
    }

    text.size()
}

// ---------------------------------------------------------------------------
// Paragraphs
// ---------------------------------------------------------------------------

/// First line of the paragraph containing `pos`.
///
/// A paragraph is a maximal run of non-blank lines; a run of blank lines is
/// treated as a paragraph of its own.
#[must_use]
pub fn paragraph_prev<T: Text + ?Sized>(text: &T, pos: usize) -> usize {
    let mut begin = line_begin(text, pos);
    let blank = is_blank_line(text, begin);
    while begin > 0 {
        let prev = line_begin(text, begin - 1);
        if is_blank_line(text, prev) != blank {
            break;
        }
        begin = prev;
    }
    begin
}

/// First line after the paragraph containing `pos`, or the buffer size.
#[must_use]
pub fn paragraph_next<T: Text + ?Sized>(text: &T, pos: usize) -> usize {
    let mut begin = line_begin(text, pos);
    let blank = is_blank_line(text, begin);
    loop {
        let next = line_next(text, begin);
        if next >= text.size() || is_blank_line(text, next) != blank {
            return next;
        }
        begin = next;
    }
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

/// True when the line starting at `begin` is a closing `}` in column 0
/// followed only by blanks.
fn is_function_end<T: Text + ?Sized>(text: &T, begin: usize) -> bool {
    if text.byte(begin) != Some(b'}') {
        return false;
    }
    let mut it = Iter::new(text, begin + 1);
    while let Some(byte) = it.byte() {
        match byte {
            b'\n' => return true,
            b' ' | b'\t' | b'\r' => {}
            _ => return false,
        }
        it.next_byte();
    }
    true
}

/// The first function-closing `}` at or after `pos`.
#[must_use]
pub fn function_end_next<T: Text + ?Sized>(text: &T, pos: usize) -> Option<usize> {
    let mut begin = line_begin(text, pos);
    loop {
        if begin >= pos && is_function_end(text, begin) {
            return Some(begin);
        }
        let next = line_next(text, begin);
        if next >= text.size() {
            return None;
        }
        begin = next;
    }
}

/// The last function-closing `}` strictly before `pos`.
#[must_use]
pub fn function_end_prev<T: Text + ?Sized>(text: &T, pos: usize) -> Option<usize> {
    let mut begin = line_begin(text, pos);
    loop {
        if begin < pos && is_function_end(text, begin) {
            return Some(begin);
        }
        if begin == 0 {
            return None;
        }
        begin = line_begin(text, begin - 1);
    }
}

/// Start of the function enclosing `pos`, or of the closest one before it.
///
/// A function starts on the first line of the paragraph holding the `{` that
/// matches its closing brace, so a signature spread over several lines (and
/// any comment directly above it) is included.
#[must_use]
pub fn function_start_prev<T: Text + ?Sized>(text: &T, pos: usize) -> Option<usize> {
    let header = |end: usize| bracket_match(text, end).map(|open| paragraph_prev(text, open));

    if let Some(start) = function_end_next(text, pos).and_then(header) {
        if start <= pos {
            return Some(start);
        }
    }
    function_end_prev(text, pos).and_then(header)
}

// ---------------------------------------------------------------------------
// Brackets
// ---------------------------------------------------------------------------

/// Bytes after a quote that mark it as a closing quote.
const CLOSING_CONTEXT: &[u8] = b" \n)}]>.,:;";

/// The position of the delimiter pairing with the one at `pos`.
///
/// Brackets `()`, `{}`, `[]` and `<>` are matched with nesting. A quote
/// (`"`, `'`, `` ` ``) searches forward for its partner unless it is followed
/// by whitespace, a closing bracket, punctuation or the end of the buffer, in
/// which case it is taken to be a closing quote and searches backward. While
/// matching anything other than `"`, double-quoted spans are skipped.
#[must_use]
pub fn bracket_match<T: Text + ?Sized>(text: &T, pos: usize) -> Option<usize> {
    let current = text.byte(pos)?;
    let (search, forward) = match current {
        b'(' => (b')', true),
        b')' => (b'(', false),
        b'{' => (b'}', true),
        b'}' => (b'{', false),
        b'[' => (b']', true),
        b']' => (b'[', false),
        b'<' => (b'>', true),
        b'>' => (b'<', false),
        b'"' | b'\'' | b'`' => {
            let closing = text.byte(pos + 1).is_none_or(|b| CLOSING_CONTEXT.contains(&b));
            (current, !closing)
        }
        _ => return None,
    };

    let mut it = Iter::new(text, pos);
    let mut depth = 1usize;
    let mut in_string = false;
    loop {
        let moved = if forward { it.next_byte() } else { it.prev_byte() };
        if !moved {
            break;
        }
        let Some(byte) = it.byte() else { break };
        if byte != current && byte == b'"' {
            in_string = !in_string;
        }
        if in_string {
            continue;
        }
        if byte == search {
            depth -= 1;
            if depth == 0 {
                return Some(it.pos());
            }
        } else if byte == current {
            depth += 1;
        }
    }

    tracing::trace!(pos, delimiter = %char::from(current), "no matching delimiter");
    None
}

// ---------------------------------------------------------------------------
// Word walks
// ---------------------------------------------------------------------------

/// Whether `byte` continues a run that started on a boundary (`boundary_run`)
/// or non-boundary byte.
#[inline]
fn continues_run(boundary: Boundary, boundary_run: bool, byte: u8) -> bool {
    if boundary_run {
        boundary(byte) && !is_space(byte)
    } else {
        !boundary(byte)
    }
}

/// `w`: start of the next run: skip the current run, then any whitespace.
#[must_use]
pub fn customword_start_next<T: Text + ?Sized>(text: &T, pos: usize, boundary: Boundary) -> usize {
    let mut it = Iter::new(text, pos);
    let Some(first) = it.byte() else {
        return pos;
    };
    let boundary_run = boundary(first);
    while it.byte().is_some_and(|b| continues_run(boundary, boundary_run, b)) {
        it.next_char();
    }
    while it.byte().is_some_and(is_space) {
        it.next_char();
    }
    it.pos()
}

/// `b`: start of the current run, or of the previous one when `pos` is
/// already at a run start or in whitespace.
#[must_use]
pub fn customword_start_prev<T: Text + ?Sized>(text: &T, pos: usize, boundary: Boundary) -> usize {
    let mut it = Iter::new(text, pos);
    loop {
        if !it.prev_char() {
            return it.pos();
        }
        if !it.byte().is_some_and(is_space) {
            break;
        }
    }
    let Some(last) = it.byte() else {
        return it.pos();
    };
    let boundary_run = boundary(last);
    let mut start = it.pos();
    while it.prev_char() {
        match it.byte() {
            Some(b) if continues_run(boundary, boundary_run, b) => start = it.pos(),
            _ => break,
        }
    }
    start
}

/// `e`: last byte of the current run, or of the next one when `pos` is
/// already on a run's last character or in whitespace. Returns the buffer
/// size when no run follows.
#[must_use]
pub fn customword_end_next<T: Text + ?Sized>(text: &T, pos: usize, boundary: Boundary) -> usize {
    let mut it = Iter::new(text, pos);
    loop {
        if !it.next_char() {
            return it.pos();
        }
        if !it.byte().is_some_and(is_space) {
            break;
        }
    }
    let Some(first) = it.byte() else {
        return it.pos();
    };
    let boundary_run = boundary(first);
    let mut end = it.pos();
    while it.next_char() {
        match it.byte() {
            Some(b) if continues_run(boundary, boundary_run, b) => end = it.pos(),
            _ => break,
        }
    }
    end
}

/// `ge`: last byte of the previous run: leave the current run backward, then
/// skip whitespace. Stops at offset 0.
#[must_use]
pub fn customword_end_prev<T: Text + ?Sized>(text: &T, pos: usize, boundary: Boundary) -> usize {
    let mut it = Iter::new(text, pos);
    let Some(first) = it.byte() else {
        return pos;
    };
    let boundary_run = boundary(first);
    while it.byte().is_some_and(|b| continues_run(boundary, boundary_run, b)) {
        if !it.prev_char() {
            break;
        }
    }
    while it.byte().is_some_and(is_space) {
        if !it.prev_char() {
            break;
        }
    }
    it.pos()
}

/// `w` with the punctuation-aware word classifier.
#[must_use]
pub fn word_start_next<T: Text + ?Sized>(text: &T, pos: usize) -> usize {
    customword_start_next(text, pos, is_word_boundary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
