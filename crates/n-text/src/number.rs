//! Integer literal parsing with C `strtoll` semantics.
//!
//! [`parse_integer`] reads the longest integer literal at the start of a byte
//! slice and reports how many bytes it consumed, so callers can trim a coarse
//! candidate down to the literal itself.
//!
//! | Input        | Base | Value | Consumed |
//! |--------------|------|-------|----------|
//! | `42`         | 10   | 42    | 2        |
//! | `-0x1F`      | 16   | -31   | 5        |
//! | `0755`       | 8    | 493   | 4        |
//! | `0x`         | 8    | 0     | 1        |
//! | `12-3`       | 10   | 12    | 2        |

use thiserror::Error;

/// A successfully parsed integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed {
    /// The literal's value.
    pub value: i64,
    /// Bytes consumed, including leading whitespace, sign and base prefix.
    pub consumed: usize,
}

/// Why a byte slice does not start with an integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseIntegerError {
    /// No digit follows the optional whitespace, sign and prefix.
    #[error("no digits to parse")]
    NoDigits,

    /// The literal does not fit in an `i64`.
    #[error("integer literal out of range")]
    Overflow,
}

/// Parse a signed integer literal, detecting the base from its prefix.
///
/// Leading ASCII whitespace and one `+` or `-` are accepted. `0x`/`0X`
/// selects base 16 when a hex digit follows, a leading `0` selects base 8,
/// anything else is decimal. Parsing stops at the first byte that is not a
/// digit of the base.
///
/// # Errors
///
/// [`ParseIntegerError::NoDigits`] when no digit was read,
/// [`ParseIntegerError::Overflow`] when the value is outside `i64`.
pub fn parse_integer(bytes: &[u8]) -> Result<Parsed, ParseIntegerError> {
    let at = |i: usize| bytes.get(i).copied();
    let mut i = 0;

    while at(i).is_some_and(|b| b.is_ascii_whitespace() || b == 0x0B) {
        i += 1;
    }

    let negative = match at(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let radix = if at(i) == Some(b'0')
        && matches!(at(i + 1), Some(b'x' | b'X'))
        && at(i + 2).is_some_and(|b| b.is_ascii_hexdigit())
    {
        i += 2;
        16
    } else if at(i) == Some(b'0') {
        8
    } else {
        10
    };

    let digits_start = i;
    let mut magnitude: u64 = 0;
    let mut overflow = false;
    while let Some(digit) = at(i).and_then(|b| char::from(b).to_digit(radix)) {
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(m) => magnitude = m,
            None => overflow = true,
        }
        i += 1;
    }

    if i == digits_start {
        return Err(ParseIntegerError::NoDigits);
    }

    let value = if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };

    match value {
        Some(value) if !overflow => Ok(Parsed { value, consumed: i }),
        _ => {
            tracing::trace!(consumed = i, "integer literal overflows i64");
            Err(ParseIntegerError::Overflow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(value: i64, consumed: usize) -> Result<Parsed, ParseIntegerError> {
        Ok(Parsed { value, consumed })
    }

    #[test]
    fn decimal() {
        assert_eq!(parse_integer(b"42"), ok(42, 2));
        assert_eq!(parse_integer(b"-17"), ok(-17, 3));
        assert_eq!(parse_integer(b"+5"), ok(5, 2));
    }

    #[test]
    fn hexadecimal() {
        assert_eq!(parse_integer(b"0x1F"), ok(31, 4));
        assert_eq!(parse_integer(b"-0x1F"), ok(-31, 5));
        assert_eq!(parse_integer(b"0XfF"), ok(255, 4));
    }

    #[test]
    fn octal() {
        assert_eq!(parse_integer(b"0755"), ok(493, 4));
        assert_eq!(parse_integer(b"0"), ok(0, 1));
        // '8' is not an octal digit.
        assert_eq!(parse_integer(b"08"), ok(0, 1));
    }

    #[test]
    fn prefix_without_hex_digit_is_zero() {
        assert_eq!(parse_integer(b"0x"), ok(0, 1));
        assert_eq!(parse_integer(b"0xg"), ok(0, 1));
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_integer(b"12-3"), ok(12, 2));
        assert_eq!(parse_integer(b"-0x1F-"), ok(-31, 5));
        assert_eq!(parse_integer(b"9abc"), ok(9, 1));
    }

    #[test]
    fn leading_whitespace_is_consumed() {
        assert_eq!(parse_integer(b"  7"), ok(7, 3));
    }

    #[test]
    fn no_digits() {
        assert_eq!(parse_integer(b""), Err(ParseIntegerError::NoDigits));
        assert_eq!(parse_integer(b"abc"), Err(ParseIntegerError::NoDigits));
        assert_eq!(parse_integer(b"-"), Err(ParseIntegerError::NoDigits));
        assert_eq!(parse_integer(b"--1"), Err(ParseIntegerError::NoDigits));
        assert_eq!(parse_integer(b"x1"), Err(ParseIntegerError::NoDigits));
    }

    #[test]
    fn i64_limits() {
        assert_eq!(parse_integer(b"9223372036854775807"), ok(i64::MAX, 19));
        assert_eq!(parse_integer(b"-9223372036854775808"), ok(i64::MIN, 20));
    }

    #[test]
    fn overflow() {
        assert_eq!(
            parse_integer(b"9223372036854775808"),
            Err(ParseIntegerError::Overflow)
        );
        assert_eq!(
            parse_integer(b"0xFFFFFFFFFFFFFFFFFF"),
            Err(ParseIntegerError::Overflow)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(ParseIntegerError::NoDigits.to_string(), "no digits to parse");
        assert_eq!(ParseIntegerError::Overflow.to_string(), "integer literal out of range");
    }
}
