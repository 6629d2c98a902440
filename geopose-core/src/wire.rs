//! Serde helpers for numeric wire fields.
//!
//! The protocol writes integral numbers without a fractional part (`0`, not
//! `0.0`). Every `f64` field on the wire goes through these helpers so the
//! serialized text matches what services and fixtures expect.

use serde::{Serialize, Serializer};

/// Magnitude limit for exact integer representation in an `f64` (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// `f64` wrapper serializing through [`number`].
#[derive(Debug, Clone, Copy)]
struct Number(f64);

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        number(&self.0, serializer)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is finite, integral and within the exact integer range"
)]
fn as_integer(value: f64) -> Option<i64> {
    let integral = value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER;
    integral.then_some(value as i64)
}

/// Serialize a single number.
#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "signature is dictated by serde's serialize_with"
)]
pub(crate) fn number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    match as_integer(*value) {
        Some(integer) => serializer.serialize_i64(integer),
        None => serializer.serialize_f64(*value),
    }
}

/// Serialize a sequence of numbers.
pub(crate) fn numbers<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().copied().map(Number))
}

/// Serialize an optional `[min, max]` pair.
#[expect(
    clippy::ref_option,
    reason = "signature is dictated by serde's serialize_with"
)]
pub(crate) fn optional_pair<S: Serializer>(
    value: &Option<[f64; 2]>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(pair) => serializer.serialize_some(&pair.map(Number)),
        None => serializer.serialize_none(),
    }
}
