//! Character runs and the number object (`in`).
//!
//! [`run`] grows the maximal stretch of non-boundary bytes around the cursor.
//! [`number`] takes the run of the numeric alphabet and trims it to the
//! longest prefix that parses as an integer literal, so `42-7` yields `42`
//! and `0x1Fg` never gets as far as the `g`.

use n_text::class::{Boundary, is_number_boundary};
use n_text::number::parse_integer;
use n_text::{Iter, Text};

use crate::range::Range;

/// The run of non-boundary bytes holding `pos`.
///
/// Empty when the byte at `pos` is a boundary or `pos` is at the end of the
/// buffer.
#[must_use]
pub fn run<T: Text + ?Sized>(text: &T, pos: usize, boundary: Boundary) -> Range {
    let mut it = Iter::new(text, pos);
    if it.byte().is_none_or(boundary) {
        return Range::EMPTY;
    }

    let mut start = it.pos();
    while it.prev_char() {
        match it.byte() {
            Some(byte) if !boundary(byte) => start = it.pos(),
            _ => break,
        }
    }

    let mut it = Iter::new(text, pos);
    while it.byte().is_some_and(|byte| !boundary(byte)) {
        it.next_byte();
    }
    Range::new(start, it.pos())
}

/// `in` / `an`: the integer literal under the cursor.
///
/// Decimal, octal (leading `0`) and hexadecimal (`0x`) literals are
/// recognized, with an optional sign.
#[must_use]
pub fn number<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    let candidate = run(text, pos, is_number_boundary);
    if !candidate.valid() {
        return candidate;
    }

    let mut scratch = Vec::new();
    if scratch.try_reserve_exact(candidate.size()).is_err() {
        tracing::trace!(%candidate, "no room to copy number");
        return Range::EMPTY;
    }
    text.read_into(candidate.start..candidate.end, &mut scratch);

    match parse_integer(&scratch) {
        Ok(parsed) => Range::new(candidate.start, candidate.start + parsed.consumed),
        Err(err) => {
            tracing::trace!(%candidate, %err, "not a number");
            Range::EMPTY
        }
    }
}
