//! # Helper Functions
//!
//! Strict string and number utilities shared by gateways and requests:
//! camel-casing of parameter keys, Luhn validation of card numbers and
//! decimal parsing of amounts.

use crate::error::{OmnipayError, OmnipayResult};
use serde_json::Value;

/// Convert a `snake_case` or `SCREAMING_SNAKE_CASE` key to `lowerCamelCase`.
///
/// Strings without underscores are returned as they are, so already
/// camel-cased input is left alone.
pub fn camel_case(input: &str) -> String {
    let lowered = if input.contains('_') {
        input.to_ascii_lowercase()
    } else {
        input.to_string()
    };

    let mut out = String::with_capacity(lowered.len());
    let mut chars = lowered.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' {
            if let Some(next) = chars.peek().copied().filter(char::is_ascii_lowercase) {
                out.push(next.to_ascii_uppercase());
                chars.next();
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// Upper-case the first character, leaving the rest untouched
pub fn ucfirst(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Validate a number against the Luhn (mod 10) checksum.
///
/// A missing or empty number is valid, since card numbers are often
/// optional. Any non-digit character makes the number invalid.
pub fn validate_luhn(number: Option<&str>) -> bool {
    let Some(number) = number.filter(|n| !n.is_empty()) else {
        return true;
    };

    let mut sum = 0u32;
    for (i, c) in number.chars().rev().enumerate() {
        let Some(digit) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 1 {
            let doubled = digit * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            digit
        };
    }

    sum % 10 == 0
}

/// Convert a JSON value to a float.
///
/// Numbers pass through (integers are widened). Strings must match
/// `-?[0-9]+(\.[0-9]*)?`; every other type is rejected.
pub fn to_float(value: &Value) -> OmnipayResult<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or(OmnipayError::UnsupportedDecimalType),
        Value::String(s) => parse_decimal(s),
        _ => Err(OmnipayError::UnsupportedDecimalType),
    }
}

/// Parse a decimal string with the same grammar `to_float` applies.
pub fn parse_decimal(input: &str) -> OmnipayResult<f64> {
    if !is_decimal(input) {
        return Err(OmnipayError::MalformedDecimalString);
    }

    input
        .parse::<f64>()
        .map_err(|_| OmnipayError::MalformedDecimalString)
}

fn is_decimal(input: &str) -> bool {
    let unsigned = input.strip_prefix('-').unwrap_or(input);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (unsigned, ""),
    };

    !integer.is_empty()
        && integer.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}
