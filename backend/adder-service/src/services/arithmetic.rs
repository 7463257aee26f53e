use num_bigint::BigInt;
use std::str::FromStr;
use thiserror::Error;

/// Amount added to every submitted number.
pub const INCREMENT: u32 = 2;

/// Longest digit string accepted as an integer (CPython's int conversion limit).
pub const MAX_DIGITS: usize = 4300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntParseError {
    #[error("Input should be a valid integer, unable to parse string as an integer")]
    Invalid,
    #[error("Unable to parse input string as an integer, exceeded maximum size")]
    TooLong,
}

impl IntParseError {
    /// Machine-readable kind reported in validation errors
    pub fn kind(&self) -> &'static str {
        match self {
            IntParseError::Invalid => "int_parsing",
            IntParseError::TooLong => "int_parsing_size",
        }
    }
}

/// Parse a query value as an unbounded integer.
///
/// Accepts surrounding whitespace, one leading sign, single underscores between
/// digits (`1_000`) and an all-zero fractional part (`5.0`, `5.`).
pub fn parse_int(raw: &str) -> Result<BigInt, IntParseError> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let without_underscores = strip_underscores(unsigned).ok_or(IntParseError::Invalid)?;
    let digits = strip_zero_fraction(&without_underscores);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IntParseError::Invalid);
    }
    if digits.len() > MAX_DIGITS {
        return Err(IntParseError::TooLong);
    }

    let magnitude = BigInt::from_str(digits).map_err(|_| IntParseError::Invalid)?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Removes underscores that sit between two digits; any other underscore is invalid.
fn strip_underscores(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let prev_digit = i > 0 && bytes[i - 1].is_ascii_digit();
        let next_digit = bytes.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        if !prev_digit || !next_digit {
            return None;
        }
    }
    Some(s.replace('_', ""))
}

fn strip_zero_fraction(s: &str) -> &str {
    match s.split_once('.') {
        Some((whole, fraction)) if fraction.bytes().all(|b| b == b'0') => whole,
        _ => s,
    }
}

/// Returns `number + 2`.
pub fn add_two(number: &BigInt) -> BigInt {
    number + INCREMENT
}
