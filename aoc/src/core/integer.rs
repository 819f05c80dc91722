//! Signed decimal parsing for tokens.

use thiserror::Error;
use tracing::trace;

use super::delimiters::Delimiters;
use super::view::InputView;

/// A token is not an optionally signed decimal integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("not an integer: empty token")]
    Empty,
    #[error("not an integer: sign without digits")]
    NoDigits,
    #[error("not an integer: unexpected byte '{}' at position {position}", .byte.escape_ascii())]
    InvalidByte { byte: u8, position: usize },
}

/// Parse an optional leading `-` followed by one or more ASCII digits.
///
/// Overflow wraps silently; negation is applied after accumulation.
pub fn parse_integer(token: &[u8]) -> Result<i64, ParseError> {
    let (negative, digits) = match token {
        [] => return Err(ParseError::Empty),
        [b'-', rest @ ..] => (true, rest),
        _ => (false, token),
    };
    if digits.is_empty() {
        return Err(ParseError::NoDigits);
    }

    let offset = usize::from(negative);
    let mut value: i64 = 0;
    for (i, &byte) in digits.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Err(ParseError::InvalidByte {
                byte,
                position: i + offset,
            });
        }
        value = value.wrapping_mul(10).wrapping_add(i64::from(byte - b'0'));
    }

    Ok(if negative { value.wrapping_neg() } else { value })
}

/// True exactly when [`parse_integer`] would succeed.
pub fn is_integer(token: &[u8]) -> bool {
    parse_integer(token).is_ok()
}

/// Every non-empty token of `input` that parses as an integer.
///
/// Tokens that fail to parse are skipped.
pub fn integers<'a, 'd, D>(
    input: InputView<'a>,
    delimiters: &'d D,
) -> impl Iterator<Item = i64>
where
    D: Delimiters + ?Sized,
{
    input
        .tokens(delimiters)
        .filter_map(|token| match parse_integer(&token) {
            Ok(value) => Some(value),
            Err(err) => {
                trace!(token = %token, error = %err, "skipping non-integer token");
                None
            }
        })
}
