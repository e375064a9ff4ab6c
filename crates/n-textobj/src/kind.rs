//! Text objects by name.
//!
//! [`ObjectKind`] maps Vim's two-key names to object functions, so a caller
//! holding `"a("` or `"ip"` can resolve it against any [`Text`]:
//!
//! | Inner | Outer | Object                                   |
//! |-------|-------|------------------------------------------|
//! | `iw`  | `aw`  | word                                     |
//! | `iW`  | `aW`  | long word                                |
//! | `il`  | `al`  | line                                     |
//! | `is`  | `as`  | sentence (both names select the same)    |
//! | `ip`  | `ap`  | paragraph (both names select the same)   |
//! | `ie`  | `ae`  | entire buffer                            |
//! | `if`  | `af`  | function                                 |
//! | `in`  | `an`  | number (both names select the same)      |
//! | `i(`  | `a(`  | any delimiter: `()` `{}` `[]` `<>` `"` `'` `` ` `` |
//!
//! `ib`/`ab` and `iB`/`aB` are accepted for parentheses and braces, as in Vim.

use std::fmt;
use std::str::FromStr;

use n_text::Text;
use thiserror::Error;

use crate::delimiter::{Delimiter, delimited, delimited_outer};
use crate::number::number;
use crate::range::Range;
use crate::structure::{
    entire, entire_inner, function, function_inner, line, line_inner, paragraph, sentence,
};
use crate::word::{long_word, long_word_outer, word, word_outer};

/// Every selectable text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Word,
    WordOuter,
    LongWord,
    LongWordOuter,
    Line,
    LineInner,
    Sentence,
    Paragraph,
    Entire,
    EntireInner,
    Function,
    FunctionInner,
    Number,
    Delimited(Delimiter),
    DelimitedOuter(Delimiter),
}

/// A name that doesn't denote any text object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown text object `{0}` (expected e.g. iw, aW, ip, a(, i\")")]
pub struct UnknownObject(pub String);

impl ObjectKind {
    /// Resolve this object at `pos`.
    #[must_use]
    pub fn select<T: Text + ?Sized>(self, text: &T, pos: usize) -> Range {
        let range = match self {
            Self::Word => word(text, pos),
            Self::WordOuter => word_outer(text, pos),
            Self::LongWord => long_word(text, pos),
            Self::LongWordOuter => long_word_outer(text, pos),
            Self::Line => line(text, pos),
            Self::LineInner => line_inner(text, pos),
            Self::Sentence => sentence(text, pos),
            Self::Paragraph => paragraph(text, pos),
            Self::Entire => entire(text, pos),
            Self::EntireInner => entire_inner(text, pos),
            Self::Function => function(text, pos),
            Self::FunctionInner => function_inner(text, pos),
            Self::Number => number(text, pos),
            Self::Delimited(delimiter) => delimited(text, pos, delimiter),
            Self::DelimitedOuter(delimiter) => delimited_outer(text, pos, delimiter),
        };
        tracing::debug!(object = %self, pos, %range, "selected");
        range
    }
}

impl FromStr for ObjectKind {
    type Err = UnknownObject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "iw" => Self::Word,
            "aw" => Self::WordOuter,
            "iW" => Self::LongWord,
            "aW" => Self::LongWordOuter,
            "il" => Self::LineInner,
            "al" => Self::Line,
            "is" | "as" => Self::Sentence,
            "ip" | "ap" => Self::Paragraph,
            "ie" => Self::EntireInner,
            "ae" => Self::Entire,
            "if" => Self::FunctionInner,
            "af" => Self::Function,
            "in" | "an" => Self::Number,
            "ib" => Self::Delimited(Delimiter::Paren),
            "ab" => Self::DelimitedOuter(Delimiter::Paren),
            "iB" => Self::Delimited(Delimiter::Brace),
            "aB" => Self::DelimitedOuter(Delimiter::Brace),
            _ => match s.as_bytes() {
                [b'i', byte] => Self::Delimited(delimiter_named(s, *byte)?),
                [b'a', byte] => Self::DelimitedOuter(delimiter_named(s, *byte)?),
                _ => return Err(UnknownObject(s.to_owned())),
            },
        };
        Ok(kind)
    }
}

fn delimiter_named(name: &str, byte: u8) -> Result<Delimiter, UnknownObject> {
    Delimiter::from_byte(byte).ok_or_else(|| UnknownObject(name.to_owned()))
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Word => "iw",
            Self::WordOuter => "aw",
            Self::LongWord => "iW",
            Self::LongWordOuter => "aW",
            Self::Line => "al",
            Self::LineInner => "il",
            Self::Sentence => "is",
            Self::Paragraph => "ip",
            Self::Entire => "ae",
            Self::EntireInner => "ie",
            Self::Function => "af",
            Self::FunctionInner => "if",
            Self::Number => "in",
            Self::Delimited(d) => return write!(f, "i{}", char::from(d.pair().0)),
            Self::DelimitedOuter(d) => return write!(f, "a{}", char::from(d.pair().0)),
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kind(name: &str) -> ObjectKind {
        name.parse().unwrap()
    }

    // -- Parsing ------------------------------------------------------------

    #[test]
    fn parse_fixed_names() {
        assert_eq!(kind("iw"), ObjectKind::Word);
        assert_eq!(kind("aW"), ObjectKind::LongWordOuter);
        assert_eq!(kind("il"), ObjectKind::LineInner);
        assert_eq!(kind("as"), ObjectKind::Sentence);
        assert_eq!(kind("ip"), ObjectKind::Paragraph);
        assert_eq!(kind("ie"), ObjectKind::EntireInner);
        assert_eq!(kind("af"), ObjectKind::Function);
        assert_eq!(kind("an"), ObjectKind::Number);
    }

    #[test]
    fn parse_delimiters_from_either_side() {
        assert_eq!(kind("i("), ObjectKind::Delimited(Delimiter::Paren));
        assert_eq!(kind("i)"), ObjectKind::Delimited(Delimiter::Paren));
        assert_eq!(kind("a]"), ObjectKind::DelimitedOuter(Delimiter::Bracket));
        assert_eq!(kind("i\""), ObjectKind::Delimited(Delimiter::DoubleQuote));
        assert_eq!(kind("a`"), ObjectKind::DelimitedOuter(Delimiter::Backtick));
        assert_eq!(kind("ib"), ObjectKind::Delimited(Delimiter::Paren));
        assert_eq!(kind("aB"), ObjectKind::DelimitedOuter(Delimiter::Brace));
    }

    #[test]
    fn parse_unknown() {
        for name in ["", "i", "x(", "iz", "a(b", "iww", "w"] {
            assert_eq!(
                name.parse::<ObjectKind>(),
                Err(UnknownObject(name.to_owned())),
                "{name:?}"
            );
        }
    }

    #[test]
    fn unknown_object_message() {
        let err = "zz".parse::<ObjectKind>().unwrap_err();
        assert!(err.to_string().starts_with("unknown text object `zz`"));
    }

    #[test]
    fn display_parses_back() {
        let kinds = [
            ObjectKind::Word,
            ObjectKind::WordOuter,
            ObjectKind::LongWord,
            ObjectKind::LongWordOuter,
            ObjectKind::Line,
            ObjectKind::LineInner,
            ObjectKind::Sentence,
            ObjectKind::Paragraph,
            ObjectKind::Entire,
            ObjectKind::EntireInner,
            ObjectKind::Function,
            ObjectKind::FunctionInner,
            ObjectKind::Number,
        ];
        let delimited = Delimiter::ALL
            .into_iter()
            .flat_map(|d| [ObjectKind::Delimited(d), ObjectKind::DelimitedOuter(d)]);
        for object in kinds.into_iter().chain(delimited) {
            assert_eq!(kind(&object.to_string()), object);
        }
    }

    // -- Selection ----------------------------------------------------------

    #[test]
    fn select_dispatches() {
        let text = "call(a, \"b c\") 0x10\n";
        assert_eq!(kind("iw").select(text, 1), Range::new(0, 4));
        assert_eq!(kind("i(").select(text, 6), Range::new(5, 13));
        assert_eq!(kind("a(").select(text, 6), Range::new(4, 14));
        assert_eq!(kind("i\"").select(text, 10), Range::new(9, 12));
        assert_eq!(kind("in").select(text, 16), Range::new(15, 19));
        assert_eq!(kind("al").select(text, 3), Range::new(0, 20));
        assert_eq!(kind("ae").select(text, 3), Range::new(0, 20));
    }

    #[test]
    fn select_missing_object_is_empty() {
        assert_eq!(kind("i[").select("no brackets", 3), Range::EMPTY);
        assert_eq!(kind("if").select("no functions", 3), Range::EMPTY);
    }

    #[test]
    fn every_object_stays_in_bounds() {
        let text = "/* a */\nint f(int x)\n{\n\treturn g(x, \"s\", 'c') + 0x1F;\n}\n\nEnd. Done!\n";
        let names = [
            "iw", "aw", "iW", "aW", "il", "al", "is", "ip", "ie", "ae", "if", "af", "in",
        ];
        let delimited = Delimiter::ALL
            .into_iter()
            .flat_map(|d| [ObjectKind::Delimited(d), ObjectKind::DelimitedOuter(d)]);
        let objects: Vec<ObjectKind> = names.into_iter().map(kind).chain(delimited).collect();

        for object in objects {
            for pos in 0..=text.len() {
                let range = object.select(text, pos);
                if range == Range::EMPTY {
                    continue;
                }
                assert!(
                    range.valid() && range.end <= text.len(),
                    "{object} at {pos}: {range:?}"
                );
            }
        }
    }
}
