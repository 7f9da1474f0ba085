// envdecl: Typed Environment Variable Declarations
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integer, big integer, and number declarations.
//!
//! ```text
//! grammar (all three):  123456  -123456  0x1E240  0o361100  0b11110001001000000
//! integer, number:      1.23456e+5  (integer: must have no fractional part)
//! number:               -1.5  Infinity
//! optional range:       .range(1..=10) / .range(0..) / .range((Excluded(0.0), Unbounded))
//! ```

use std::ops::{Bound, RangeBounds};

use super::{Declarator, Kind, Presence};
use crate::environment::Environment;
use crate::error::{SpecError, ValueError};
use crate::schema::range::{Bounded, Range};
use crate::schema::{ScalarSchema, Schema};
use crate::variable::Example;

type Bounds<T> = (Bound<T>, Bound<T>);

/// A 64-bit signed integer.
#[derive(Debug, Clone, Copy)]
pub struct Integer {
    range: Bounds<i64>,
}

/// A 128-bit signed integer.
#[derive(Debug, Clone, Copy)]
pub struct BigInteger {
    range: Bounds<i128>,
}

/// A double precision floating point number.
#[derive(Debug, Clone, Copy)]
pub struct Number {
    range: Bounds<f64>,
}

impl Default for Integer {
    fn default() -> Self {
        Self {
            range: (Bound::Unbounded, Bound::Unbounded),
        }
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self {
            range: (Bound::Unbounded, Bound::Unbounded),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self {
            range: (Bound::Unbounded, Bound::Unbounded),
        }
    }
}

impl Kind for Integer {
    type Native = i64;

    fn schema(&self) -> Result<Schema<i64>, SpecError> {
        let schema = ScalarSchema::new("integer", i64::to_string, parse_integer);
        Ok(Schema::Scalar(with_range(schema, &self.range)?))
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new("123456", "positive"),
            Example::new("-123456", "negative"),
            Example::new("1.23456e+5", "exponential"),
            Example::new("0x1E240", "hexadecimal"),
            Example::new("0o361100", "octal"),
            Example::new("0b11110001001000000", "binary"),
        ]
    }
}

impl Kind for BigInteger {
    type Native = i128;

    fn schema(&self) -> Result<Schema<i128>, SpecError> {
        let schema = ScalarSchema::new("big integer", i128::to_string, parse_big_integer);
        Ok(Schema::Scalar(with_range(schema, &self.range)?))
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new("123456", "positive"),
            Example::new("-123456", "negative"),
            Example::new("0x1E240", "hexadecimal"),
            Example::new("0o361100", "octal"),
            Example::new("0b11110001001000000", "binary"),
        ]
    }
}

impl Kind for Number {
    type Native = f64;

    fn schema(&self) -> Result<Schema<f64>, SpecError> {
        let schema = ScalarSchema::new("number", f64::to_string, |raw: &str| {
            parse_number(raw).ok_or(ValueError::NotNumeric)
        });
        Ok(Schema::Scalar(with_range(schema, &self.range)?))
    }

    fn examples(&self) -> Vec<Example> {
        vec![
            Example::new("123456", "integer"),
            Example::new("-1.5", "negative"),
            Example::new("1.23456e+5", "exponential"),
            Example::new("0x1E240", "hexadecimal"),
            Example::new("0o361100", "octal"),
            Example::new("0b11110001001000000", "binary"),
        ]
    }
}

impl<P: Presence> Declarator<'_, Integer, P> {
    /// Restricts values to `range`.
    pub fn range(mut self, range: impl RangeBounds<i64>) -> Self {
        self.kind.range = to_bounds(&range);
        self
    }
}

impl<P: Presence> Declarator<'_, BigInteger, P> {
    /// Restricts values to `range`.
    pub fn range(mut self, range: impl RangeBounds<i128>) -> Self {
        self.kind.range = to_bounds(&range);
        self
    }
}

impl<P: Presence> Declarator<'_, Number, P> {
    /// Restricts values to `range`.
    pub fn range(mut self, range: impl RangeBounds<f64>) -> Self {
        self.kind.range = to_bounds(&range);
        self
    }
}

impl Environment {
    /// Declares a 64-bit integer variable.
    pub fn integer(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Declarator<'_, Integer> {
        Declarator::new(self, name, description, Integer::default())
    }

    /// Declares a 128-bit integer variable.
    pub fn big_integer(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Declarator<'_, BigInteger> {
        Declarator::new(self, name, description, BigInteger::default())
    }

    /// Declares a floating point variable.
    pub fn number(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Declarator<'_, Number> {
        Declarator::new(self, name, description, Number::default())
    }
}

fn to_bounds<T: Copy>(range: &impl RangeBounds<T>) -> Bounds<T> {
    (range.start_bound().cloned(), range.end_bound().cloned())
}

/// Adds a range constraint unless both ends are unbounded.
fn with_range<T: Bounded>(
    schema: ScalarSchema<T>,
    bounds: &Bounds<T>,
) -> Result<ScalarSchema<T>, SpecError> {
    let range = Range::new(bounds)?;
    if range.is_unbounded() {
        Ok(schema)
    } else {
        Ok(schema.with_boxed_constraint(range.constraint()))
    }
}

/// Splits `0x`, `0o`, and `0b` literals into digits and radix.
fn split_radix(raw: &str) -> Option<(&str, u32)> {
    let (prefix, digits) = raw.split_at_checked(2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    // from_str_radix would accept a sign after the prefix
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Some(("", radix));
    }
    Some((digits, radix))
}

/// Parses decimal, exponent, `Infinity`, and prefixed integer literals.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    if let Some((digits, radix)) = split_radix(raw) {
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0, |acc, digit| {
            Some(acc * f64::from(radix) + f64::from(digit.to_digit(radix)?))
        });
    }

    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if unsigned == "Infinity" {
        return Some(if raw.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let is_decimal = !unsigned.is_empty()
        && unsigned
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal {
        return None;
    }
    raw.parse().ok()
}

/// Parses an integer, accepting exponent forms without a fractional part.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn parse_integer(raw: &str) -> Result<i64, ValueError> {
    if let Some((digits, radix)) = split_radix(raw) {
        return i64::from_str_radix(digits, radix).map_err(|_| ValueError::NotInteger);
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(value);
    }

    let value = parse_number(raw).ok_or(ValueError::NotInteger)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ValueError::NotInteger);
    }
    // i64::MAX rounds up to 2^63 as f64, so the upper bound is exclusive
    if value < -(2.0_f64.powi(63)) || value >= 2.0_f64.powi(63) {
        return Err(ValueError::OutOfRange {
            expectation: format!("between {} and {}", i64::MIN, i64::MAX),
        });
    }
    Ok(value as i64)
}

fn parse_big_integer(raw: &str) -> Result<i128, ValueError> {
    let parsed = match split_radix(raw) {
        Some((digits, radix)) => i128::from_str_radix(digits, radix).ok(),
        None => raw.parse::<i128>().ok(),
    };
    parsed.ok_or(ValueError::NotBigInteger)
}
