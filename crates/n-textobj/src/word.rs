//! Word objects: `iw`, `aw`, `iW`, `aW`.
//!
//! One algorithm serves both words and long words; they differ only in the
//! [`Boundary`] classifier. The byte under the cursor and its two neighbours
//! decide a [`Placement`], and each placement combines the word-walk motions
//! from [`n_text::motion`] in its own way.
//!
//! | Placement     | Inner                         | Outer end                          |
//! |---------------|-------------------------------|------------------------------------|
//! | `Gap`         | the whitespace run            | through the following run          |
//! | `BoundaryRun` | leading gap through the run   | start of the next run              |
//! | `SingleChar`  | the one byte                  | start of the next run              |
//! | `StartOfRun`  | cursor to end of run          | start of the run after this one    |
//! | `EndOfRun`    | start of run to cursor        | start of the next run              |
//! | `MidRun`      | the whole run                 | start of the run after this one    |
//!
//! Unlike `StartOfRun`, the outer object of `EndOfRun` stops at the start of
//! the next run instead of swallowing that run.

use n_text::Text;
use n_text::class::{Boundary, is_long_word_boundary, is_space, is_word_boundary};
use n_text::motion::{
    char_next, customword_end_next, customword_end_prev, customword_start_next,
    customword_start_prev, word_start_next,
};

use crate::range::Range;

/// Where the cursor sits relative to the runs around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// On whitespace between two runs.
    Gap,
    /// Inside a run of boundary bytes, with boundaries on both sides.
    BoundaryRun,
    /// A lone non-boundary byte between two boundaries.
    SingleChar,
    /// First byte of a run.
    StartOfRun,
    /// Last byte of a run.
    EndOfRun,
    /// Anywhere else inside a run.
    MidRun,
}

/// Classify the cursor at `pos`. `None` at or past the end of the buffer.
///
/// Offset 0 has a non-boundary byte before it. Past the last byte the buffer
/// reads as NUL, which the word classifier counts as a boundary.
#[must_use]
pub fn placement<T: Text + ?Sized>(text: &T, pos: usize, boundary: Boundary) -> Option<Placement> {
    let c = text.byte(pos)?;
    let prev = pos.checked_sub(1).and_then(|p| text.byte(p)).is_some_and(boundary);
    let next = boundary(text.byte(pos + 1).unwrap_or(0));

    let placement = if is_space(c) {
        Placement::Gap
    } else if prev && next {
        if boundary(c) {
            Placement::BoundaryRun
        } else {
            Placement::SingleChar
        }
    } else if prev {
        Placement::StartOfRun
    } else if next {
        Placement::EndOfRun
    } else {
        Placement::MidRun
    };
    Some(placement)
}

/// Just past the end of the run before the gap at `pos`, or the buffer start
/// when only whitespace precedes it.
///
/// Plain `char_next(customword_end_prev(..))` would start a leading gap at
/// offset 1 and leave the first blank out; here the gap starts at 0.
fn after_prev_run<T: Text + ?Sized>(text: &T, pos: usize, boundary: Boundary) -> usize {
    let end = customword_end_prev(text, pos, boundary);
    if text.byte(end).is_some_and(is_space) {
        end
    } else {
        char_next(text, end)
    }
}

/// Just past the run before the one holding `pos`. Any whitespace between
/// the two runs lies inside the result.
fn after_run_before<T: Text + ?Sized>(text: &T, pos: usize, boundary: Boundary) -> usize {
    char_next(text, customword_end_prev(text, pos, boundary))
}

/// Inner object for any classifier.
#[must_use]
pub fn customword<T: Text + ?Sized>(text: &T, pos: usize, boundary: Boundary) -> Range {
    let Some(placement) = placement(text, pos, boundary) else {
        return Range::EMPTY;
    };
    tracing::trace!(pos, ?placement, "inner word");

    let end_of_run = || char_next(text, customword_end_next(text, pos, boundary));
    match placement {
        Placement::Gap => Range::new(
            after_prev_run(text, pos, boundary),
            customword_start_next(text, pos, boundary),
        ),
        Placement::BoundaryRun => Range::new(after_run_before(text, pos, boundary), end_of_run()),
        Placement::SingleChar => Range::new(pos, char_next(text, pos)),
        Placement::StartOfRun => Range::new(pos, end_of_run()),
        Placement::EndOfRun => Range::new(
            customword_start_prev(text, pos, boundary),
            char_next(text, pos),
        ),
        Placement::MidRun => Range::new(customword_start_prev(text, pos, boundary), end_of_run()),
    }
}

/// Outer object for any classifier.
#[must_use]
pub fn customword_outer<T: Text + ?Sized>(text: &T, pos: usize, boundary: Boundary) -> Range {
    let Some(placement) = placement(text, pos, boundary) else {
        return Range::EMPTY;
    };
    tracing::trace!(pos, ?placement, "outer word");

    let run_end = || customword_end_next(text, pos, boundary);
    let next_start = |from: usize| customword_start_next(text, from, boundary);
    match placement {
        Placement::Gap => Range::new(
            after_prev_run(text, pos, boundary),
            char_next(text, run_end()),
        ),
        Placement::BoundaryRun => Range::new(
            after_run_before(text, pos, boundary),
            word_start_next(text, run_end()),
        ),
        Placement::SingleChar => Range::new(pos, next_start(pos)),
        Placement::StartOfRun => Range::new(pos, next_start(run_end())),
        Placement::EndOfRun => Range::new(
            customword_start_prev(text, pos, boundary),
            next_start(pos),
        ),
        Placement::MidRun => Range::new(
            customword_start_prev(text, pos, boundary),
            next_start(run_end()),
        ),
    }
}

/// `iw`: inner word (letters, digits, `_`; punctuation forms its own runs).
#[must_use]
pub fn word<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    customword(text, pos, is_word_boundary)
}

/// `aw`: a word, with the separator that follows it.
#[must_use]
pub fn word_outer<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    customword_outer(text, pos, is_word_boundary)
}

/// `iW`: inner long word (anything but whitespace).
#[must_use]
pub fn long_word<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    customword(text, pos, is_long_word_boundary)
}

/// `aW`: a long word, with the whitespace that follows it.
#[must_use]
pub fn long_word_outer<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    customword_outer(text, pos, is_long_word_boundary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use n_text::Buffer;
    use pretty_assertions::assert_eq;

    fn r(start: usize, end: usize) -> Range {
        Range::new(start, end)
    }

    // == Placement ===========================================================

    #[test]
    fn placement_cases() {
        let text = "hello world";
        assert_eq!(placement(text, 0, is_word_boundary), Some(Placement::MidRun));
        assert_eq!(placement(text, 2, is_word_boundary), Some(Placement::MidRun));
        assert_eq!(placement(text, 4, is_word_boundary), Some(Placement::EndOfRun));
        assert_eq!(placement(text, 5, is_word_boundary), Some(Placement::Gap));
        assert_eq!(placement(text, 6, is_word_boundary), Some(Placement::StartOfRun));
        assert_eq!(placement(text, 11, is_word_boundary), None);
    }

    #[test]
    fn placement_single_and_boundary_run() {
        assert_eq!(placement(" a ", 1, is_word_boundary), Some(Placement::SingleChar));
        assert_eq!(placement("a --- b", 3, is_word_boundary), Some(Placement::BoundaryRun));
    }

    #[test]
    fn placement_at_end_of_buffer() {
        assert_eq!(placement("f();", 3, is_word_boundary), Some(Placement::BoundaryRun));
        assert_eq!(placement("ab", 1, is_word_boundary), Some(Placement::EndOfRun));
        assert_eq!(placement("ab", 1, is_long_word_boundary), Some(Placement::MidRun));
    }

    #[test]
    fn placement_depends_on_classifier() {
        let text = "a.b";
        assert_eq!(placement(text, 1, is_word_boundary), Some(Placement::MidRun));
        assert_eq!(placement(text, 1, is_long_word_boundary), Some(Placement::MidRun));
        assert_eq!(placement(text, 0, is_word_boundary), Some(Placement::EndOfRun));
        assert_eq!(placement(text, 0, is_long_word_boundary), Some(Placement::MidRun));
    }

    // == Inner word (iw) =====================================================

    #[test]
    fn iw_start_middle_end() {
        let text = "hello world";
        assert_eq!(word(text, 0), r(0, 5));
        assert_eq!(word(text, 2), r(0, 5));
        assert_eq!(word(text, 4), r(0, 5));
        assert_eq!(word(text, 6), r(6, 11));
        assert_eq!(word(text, 10), r(6, 11));
    }

    #[test]
    fn iw_on_whitespace_selects_gap() {
        assert_eq!(word("hello world", 5), r(5, 6));
        assert_eq!(word("foo   bar", 4), r(3, 6));
    }

    #[test]
    fn iw_on_leading_whitespace() {
        assert_eq!(word("  ab", 0), r(0, 2));
        assert_eq!(word("  ab", 1), r(0, 2));
    }

    #[test]
    fn iw_single_char() {
        assert_eq!(word(" a ", 1), r(1, 2));
        assert_eq!(word("x", 0), r(0, 1));
    }

    #[test]
    fn iw_underscore_and_digits() {
        assert_eq!(word("let foo_bar2 = 1;", 6), r(4, 12));
    }

    #[test]
    fn iw_multibyte_stays_in_word() {
        let text = "café au";
        assert_eq!(word(text, 0), r(0, 5));
        assert_eq!(word(text, 6), r(6, 8));
    }

    #[test]
    fn iw_end_of_buffer_is_empty() {
        assert_eq!(word("abc", 3), Range::EMPTY);
        assert_eq!(word("", 0), Range::EMPTY);
        assert_eq!(word("abc", 99), Range::EMPTY);
    }

    #[test]
    fn iw_on_buffer() {
        let buf = Buffer::from_text("fn main() {}\n");
        assert_eq!(word(&buf, 4), r(3, 7));
    }

    #[test]
    fn iw_on_punctuation_run_takes_leading_gap() {
        let text = "a --- b";
        assert_eq!(word(text, 2), r(1, 5));
        assert_eq!(word(text, 3), r(1, 5));
        assert_eq!(word("a -> b", 2), r(1, 4));
    }

    #[test]
    fn iw_punctuation_run_after_word() {
        // No gap: the run starts right after the word.
        assert_eq!(word("f();", 2), r(1, 4));
        assert_eq!(word("x+=1", 2), r(1, 3));
    }

    #[test]
    fn iw_trailing_punctuation_at_end_of_buffer() {
        assert_eq!(word("f();", 3), word("f();", 2));
        assert_eq!(word("a --", 3), r(1, 4));
        assert_eq!(word("a --", 2), r(1, 4));
        assert_eq!(word("ab", 1), r(0, 2));
    }

    // == Outer word (aw) =====================================================

    #[test]
    fn aw_middle_includes_trailing_gap() {
        assert_eq!(word_outer("foo bar baz", 5), r(4, 8));
        assert_eq!(word_outer("foo bar baz", 0), r(0, 4));
    }

    #[test]
    fn aw_start_of_run_swallows_next_gap() {
        assert_eq!(word_outer("foo bar baz", 4), r(4, 8));
    }

    #[test]
    fn aw_end_of_run_stops_at_next_start() {
        // Last byte of "hello": back to the run start, forward only to "world".
        assert_eq!(word_outer("hello world", 4), r(0, 6));
        assert_eq!(word("hello world", 4), r(0, 5));
    }

    #[test]
    fn aw_on_gap_includes_following_word() {
        assert_eq!(word_outer("foo   bar", 4), r(3, 9));
        assert_eq!(word_outer("hello world", 5), r(5, 11));
    }

    #[test]
    fn aw_single_char() {
        assert_eq!(word_outer(" a  b", 1), r(1, 4));
    }

    #[test]
    fn aw_punctuation_run_takes_both_gaps() {
        assert_eq!(word_outer("a --- b", 3), r(1, 6));
        assert_eq!(word_outer("a -> b", 2), r(1, 5));
    }

    #[test]
    fn aw_trailing_punctuation_at_end_of_buffer() {
        assert_eq!(word_outer("f();", 3), r(1, 4));
        assert_eq!(word_outer("a --", 3), r(1, 4));
    }

    #[test]
    fn aw_last_word_has_no_trailing_gap() {
        assert_eq!(word_outer("hello world", 8), r(6, 11));
    }

    #[test]
    fn aw_end_of_buffer_is_empty() {
        assert_eq!(word_outer("abc", 3), Range::EMPTY);
    }

    // == Long words (iW, aW) =================================================

    #[test]
    fn long_word_spans_punctuation() {
        let text = "x foo.bar(1) y";
        assert_eq!(long_word(text, 5), r(2, 12));
        assert_eq!(long_word(text, 2), r(2, 12));
        assert_eq!(long_word(text, 11), r(2, 12));
    }

    #[test]
    fn long_word_outer_includes_gap() {
        let text = "x foo.bar(1) y";
        assert_eq!(long_word_outer(text, 5), r(2, 13));
    }

    #[test]
    fn long_word_on_whitespace() {
        assert_eq!(long_word("a.b  c", 3), r(3, 5));
    }

    // == Invariants ==========================================================

    const SAMPLES: &[&str] = &[
        "hello world",
        "foo.bar(baz, qux);",
        "  a -- b  ",
        "x::y->z",
        "one\ntwo  three\n\nfour",
        "é_1 +=2",
        "f();",
        "a --",
    ];

    #[test]
    fn inner_contains_cursor_off_whitespace() {
        for text in SAMPLES {
            for pos in 0..text.len() {
                if is_space(text.as_bytes()[pos]) {
                    continue;
                }
                for boundary in [is_word_boundary as Boundary, is_long_word_boundary] {
                    let range = customword(*text, pos, boundary);
                    assert!(
                        range.start <= pos && pos < range.end,
                        "{text:?} at {pos}: {range:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn outer_contains_inner() {
        for text in SAMPLES {
            for pos in 0..text.len() {
                for boundary in [is_word_boundary as Boundary, is_long_word_boundary] {
                    let inner = customword(*text, pos, boundary);
                    let outer = customword_outer(*text, pos, boundary);
                    assert!(inner.valid() && outer.valid(), "{text:?} at {pos}");
                    assert!(
                        outer.start <= inner.start && inner.end <= outer.end,
                        "{text:?} at {pos}: inner {inner:?} outer {outer:?}"
                    );
                    assert!(outer.end <= text.len());
                }
            }
        }
    }
}
