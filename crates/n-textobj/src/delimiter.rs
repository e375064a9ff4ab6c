//! Delimited objects: `i(`, `a{`, `i"` and friends.
//!
//! Brackets are matched with nesting: the result is the innermost pair that
//! encloses the cursor, and the cursor may sit on either delimiter. Quotes
//! can't nest, so a cursor on a quote asks [`bracket_match`] which quote
//! pairs with it, and a cursor between quotes takes the nearest quote on
//! each side.
//!
//! | Inner | Outer | Delimiter              |
//! |-------|-------|------------------------|
//! | `i(`  | `a(`  | [`Delimiter::Paren`]   |
//! | `i{`  | `a{`  | [`Delimiter::Brace`]   |
//! | `i[`  | `a[`  | [`Delimiter::Bracket`] |
//! | `i<`  | `a<`  | [`Delimiter::Angle`]   |
//! | `i"`  | `a"`  | [`Delimiter::DoubleQuote`] |
//! | `i'`  | `a'`  | [`Delimiter::SingleQuote`] |
//! | ``i` ``| ``a` ``| [`Delimiter::Backtick`] |

use n_text::motion::bracket_match;
use n_text::{Iter, Text};

use crate::range::Range;

/// One of the seven supported delimiter pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Paren,
    Brace,
    Bracket,
    Angle,
    DoubleQuote,
    SingleQuote,
    Backtick,
}

impl Delimiter {
    pub const ALL: [Self; 7] = [
        Self::Paren,
        Self::Brace,
        Self::Bracket,
        Self::Angle,
        Self::DoubleQuote,
        Self::SingleQuote,
        Self::Backtick,
    ];

    /// The `(open, close)` bytes. Equal for quotes.
    #[must_use]
    pub const fn pair(self) -> (u8, u8) {
        match self {
            Self::Paren => (b'(', b')'),
            Self::Brace => (b'{', b'}'),
            Self::Bracket => (b'[', b']'),
            Self::Angle => (b'<', b'>'),
            Self::DoubleQuote => (b'"', b'"'),
            Self::SingleQuote => (b'\'', b'\''),
            Self::Backtick => (b'`', b'`'),
        }
    }

    /// The delimiter that `byte` opens or closes.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'(' | b')' => Some(Self::Paren),
            b'{' | b'}' => Some(Self::Brace),
            b'[' | b']' => Some(Self::Bracket),
            b'<' | b'>' => Some(Self::Angle),
            b'"' => Some(Self::DoubleQuote),
            b'\'' => Some(Self::SingleQuote),
            b'`' => Some(Self::Backtick),
            _ => None,
        }
    }

    /// Quotes open and close with the same byte.
    #[inline]
    #[must_use]
    pub const fn is_symmetric(self) -> bool {
        matches!(self, Self::DoubleQuote | Self::SingleQuote | Self::Backtick)
    }
}

// ---------------------------------------------------------------------------
// Pair search
// ---------------------------------------------------------------------------

const fn is_quote(byte: u8) -> bool {
    matches!(byte, b'"' | b'\'' | b'`')
}

/// Scan backward from `pos` for the `open` that encloses it.
///
/// A `close` at `pos` itself doesn't count: the cursor may be on the
/// closing delimiter of the pair being searched for.
fn scan_open<T: Text + ?Sized>(text: &T, pos: usize, open: u8, close: u8) -> Option<usize> {
    let mut it = Iter::new(text, pos);
    let mut opened = 1usize;
    loop {
        let byte = it.byte()?;
        if byte == open {
            opened -= 1;
            if opened == 0 {
                return Some(it.pos());
            }
        } else if byte == close && it.pos() != pos {
            opened += 1;
        }
        if !it.prev_byte() {
            return None;
        }
    }
}

/// Scan forward from `pos` for the `close` that ends the enclosing pair.
fn scan_close<T: Text + ?Sized>(text: &T, pos: usize, open: u8, close: u8) -> Option<usize> {
    let mut it = Iter::new(text, pos);
    let mut closed = 1usize;
    loop {
        let byte = it.byte()?;
        if byte == close {
            closed -= 1;
            if closed == 0 {
                return Some(it.pos());
            }
        } else if byte == open && it.pos() != pos {
            closed += 1;
        }
        it.next_byte();
    }
}

/// Positions of the opening and closing delimiter around `pos`.
fn find_pair<T: Text + ?Sized>(
    text: &T,
    pos: usize,
    delimiter: Delimiter,
) -> Option<(usize, usize)> {
    let (open, close) = delimiter.pair();

    if delimiter.is_symmetric() {
        if let Some(c) = text.byte(pos).filter(|&b| is_quote(b)) {
            let Some(other) = bracket_match(text, pos) else {
                tracing::trace!(pos, quote = %char::from(c), "unpaired quote");
                return None;
            };
            return Some((pos.min(other), pos.max(other)));
        }
    }

    let start = scan_open(text, pos, open, close);
    let end = scan_close(text, pos, open, close);
    match (start, end) {
        (Some(start), Some(end)) if start < end => Some((start, end)),
        _ => {
            tracing::trace!(pos, ?delimiter, ?start, ?end, "no enclosing pair");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

/// Text strictly between the delimiters enclosing `pos`.
#[must_use]
pub fn delimited<T: Text + ?Sized>(text: &T, pos: usize, delimiter: Delimiter) -> Range {
    find_pair(text, pos, delimiter)
        .map_or(Range::EMPTY, |(open, close)| Range::new(open + 1, close))
}

/// The enclosing pair including both delimiters.
#[must_use]
pub fn delimited_outer<T: Text + ?Sized>(text: &T, pos: usize, delimiter: Delimiter) -> Range {
    find_pair(text, pos, delimiter)
        .map_or(Range::EMPTY, |(open, close)| Range::new(open, close + 1))
}

/// `i(`: inside parentheses.
#[must_use]
pub fn paren<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    delimited(text, pos, Delimiter::Paren)
}

/// `i{`: inside braces.
#[must_use]
pub fn brace<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    delimited(text, pos, Delimiter::Brace)
}

/// `i[`: inside square brackets.
#[must_use]
pub fn bracket<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    delimited(text, pos, Delimiter::Bracket)
}

/// `i<`: inside angle brackets.
#[must_use]
pub fn angle<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    delimited(text, pos, Delimiter::Angle)
}

/// `i"`: inside double quotes.
#[must_use]
pub fn quote<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    delimited(text, pos, Delimiter::DoubleQuote)
}

/// `i'`: inside single quotes.
#[must_use]
pub fn single_quote<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    delimited(text, pos, Delimiter::SingleQuote)
}

/// `` i` ``: inside backticks.
#[must_use]
pub fn backtick<T: Text + ?Sized>(text: &T, pos: usize) -> Range {
    delimited(text, pos, Delimiter::Backtick)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
