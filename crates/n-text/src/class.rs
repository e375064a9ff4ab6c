//! Byte classifiers.
//!
//! Word motions and objects are parametrized by a [`Boundary`] predicate: a
//! byte for which it returns `true` separates runs. The classifiers work on
//! single bytes. Non-ASCII bytes are never word boundaries, so the UTF-8
//! encoding of `é` stays inside the word `café`.

/// A boundary predicate over single bytes.
pub type Boundary = fn(u8) -> bool;

/// ASCII whitespace, as C `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
#[must_use]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Line ending bytes (`\n`, `\r`).
#[inline]
#[must_use]
pub const fn is_newline(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Word boundary: anything that isn't a letter, digit, `_` or part of a
/// multi-byte character.
#[inline]
#[must_use]
pub const fn is_word_boundary(byte: u8) -> bool {
    !(byte.is_ascii_alphanumeric() || byte == b'_' || byte >= 0x80)
}

/// Long-word (WORD) boundary: only whitespace separates long words.
#[inline]
#[must_use]
pub const fn is_long_word_boundary(byte: u8) -> bool {
    is_space(byte)
}

/// Boundary for the numeric-literal alphabet: digits, hex digits, `x`, `X`
/// and `-` belong to a number, everything else is a boundary.
#[inline]
#[must_use]
pub const fn is_number_boundary(byte: u8) -> bool {
    !(byte.is_ascii_hexdigit() || byte == b'x' || byte == b'X' || byte == b'-')
}

/// `.`, `?` or `!`: bytes that may end a sentence.
#[inline]
#[must_use]
pub const fn is_sentence_end(byte: u8) -> bool {
    matches!(byte, b'.' | b'?' | b'!')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_matches_c_isspace() {
        for byte in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
            assert!(is_space(byte), "{byte:#x} should be space");
        }
        assert!(!is_space(b'a'));
        assert!(!is_space(0));
        assert!(!is_space(0xA0));
    }

    #[test]
    fn word_boundary_chars() {
        assert!(!is_word_boundary(b'a'));
        assert!(!is_word_boundary(b'Z'));
        assert!(!is_word_boundary(b'7'));
        assert!(!is_word_boundary(b'_'));
        assert!(is_word_boundary(b'.'));
        assert!(is_word_boundary(b'('));
        assert!(is_word_boundary(b' '));
        assert!(is_word_boundary(b'\n'));
    }

    #[test]
    fn multibyte_is_word() {
        for byte in "é你".bytes() {
            assert!(!is_word_boundary(byte));
        }
    }

    #[test]
    fn long_word_boundary_is_whitespace_only() {
        assert!(is_long_word_boundary(b' '));
        assert!(is_long_word_boundary(b'\n'));
        assert!(!is_long_word_boundary(b'.'));
        assert!(!is_long_word_boundary(b'a'));
    }

    #[test]
    fn number_alphabet() {
        for byte in b"0123456789abcdefABCDEFxX-" {
            assert!(!is_number_boundary(*byte), "{} is numeric", *byte as char);
        }
        for byte in b"gG+ .z" {
            assert!(is_number_boundary(*byte), "{} is a boundary", *byte as char);
        }
    }
}
