// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Walkview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;
use std::fmt;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An integer that may be wider than the exact integer range of an `f64`.
///
/// Protobuf-JSON encodes 64-bit integers as decimal strings, while hand-written payloads tend to
/// use plain JSON numbers; both are accepted. Values outside `i64`/`u64` are kept as their
/// canonical decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WideInt {
    Signed(i64),
    Unsigned(u64),
    Decimal(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WideIntError {
    #[error("integer literal is empty")]
    Empty,
    #[error("invalid integer literal {0:?}")]
    InvalidDigit(String),
    #[error("number {0} is not an integer")]
    NotIntegral(f64),
}

impl WideInt {
    pub const ZERO: Self = Self::Signed(0);

    /// Parses an optionally `-`-signed run of ASCII digits of any length.
    pub fn parse_decimal(raw: &str) -> Result<Self, WideIntError> {
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        if digits.is_empty() {
            return Err(WideIntError::Empty);
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WideIntError::InvalidDigit(raw.to_owned()));
        }

        if let Ok(value) = raw.parse::<i64>() {
            return Ok(Self::Signed(value));
        }
        if !negative {
            if let Ok(value) = digits.parse::<u64>() {
                return Ok(Self::Unsigned(value));
            }
        }

        let trimmed = digits.trim_start_matches('0');
        let mut canonical = String::with_capacity(trimmed.len() + 1);
        if negative {
            canonical.push('-');
        }
        canonical.push_str(trimmed);
        Ok(Self::Decimal(canonical))
    }

    fn from_f64(value: f64) -> Result<Self, WideIntError> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(WideIntError::NotIntegral(value));
        }
        if value >= i64::MIN as f64 && value < i64::MAX as f64 {
            return Ok(Self::Signed(value as i64));
        }
        if value >= 0.0 && value < u64::MAX as f64 {
            return Ok(Self::Unsigned(value as u64));
        }
        Ok(Self::Decimal(format!("{value:.0}")))
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Self::Signed(value) => *value < 0,
            Self::Unsigned(_) => false,
            Self::Decimal(text) => text.starts_with('-'),
        }
    }

    /// Exact conversion; `None` when the value is negative or wider than `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            Self::Signed(value) => u64::try_from(*value).ok(),
            Self::Unsigned(value) => Some(*value),
            Self::Decimal(_) => None,
        }
    }

    /// Narrowing conversion to the nearest `f64`.
    ///
    /// Magnitudes beyond `f64::MAX` saturate, so the result is always finite.
    pub fn to_f64_lossy(&self) -> f64 {
        let value = match self {
            Self::Signed(value) => *value as f64,
            Self::Unsigned(value) => *value as f64,
            Self::Decimal(text) => text.parse::<f64>().unwrap_or(0.0),
        };
        if value.is_infinite() {
            f64::MAX.copysign(value)
        } else {
            value
        }
    }
}

impl Default for WideInt {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for WideInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Decimal(text) => f.write_str(text),
        }
    }
}

impl From<i64> for WideInt {
    fn from(value: i64) -> Self {
        Self::Signed(value)
    }
}

impl From<u64> for WideInt {
    fn from(value: u64) -> Self {
        if let Ok(signed) = i64::try_from(value) {
            Self::Signed(signed)
        } else {
            Self::Unsigned(value)
        }
    }
}

impl Serialize for WideInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Signed(value) => serializer.serialize_i64(*value),
            Self::Unsigned(value) => serializer.serialize_u64(*value),
            Self::Decimal(text) => serializer.serialize_str(text),
        }
    }
}

struct WideIntVisitor;

impl Visitor<'_> for WideIntVisitor {
    type Value = WideInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a decimal integer string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<WideInt, E> {
        Ok(WideInt::Signed(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<WideInt, E> {
        Ok(WideInt::from(value))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<WideInt, E> {
        WideInt::parse_decimal(&value.to_string()).map_err(E::custom)
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<WideInt, E> {
        WideInt::parse_decimal(&value.to_string()).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<WideInt, E> {
        WideInt::from_f64(value).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<WideInt, E> {
        WideInt::parse_decimal(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for WideInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(WideIntVisitor)
    }
}

impl JsonSchema for WideInt {
    fn schema_name() -> Cow<'static, str> {
        "WideInt".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Integer of arbitrary width, as a JSON integer or a decimal string.",
            "oneOf": [
                { "type": "integer" },
                { "type": "string", "pattern": "^-?[0-9]+$" }
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{WideInt, WideIntError};

    #[rstest]
    #[case("0", WideInt::Signed(0))]
    #[case("-42", WideInt::Signed(-42))]
    #[case("007", WideInt::Signed(7))]
    #[case("18446744073709551615", WideInt::Unsigned(u64::MAX))]
    #[case("-0000099999999999999999999", WideInt::Decimal("-99999999999999999999".to_owned()))]
    fn parse_decimal_picks_narrowest_representation(#[case] raw: &str, #[case] expected: WideInt) {
        assert_eq!(WideInt::parse_decimal(raw), Ok(expected));
    }

    #[rstest]
    #[case("", WideIntError::Empty)]
    #[case("-", WideIntError::Empty)]
    #[case("+1", WideIntError::InvalidDigit("+1".to_owned()))]
    #[case("1.5", WideIntError::InvalidDigit("1.5".to_owned()))]
    fn parse_decimal_rejects_non_integers(#[case] raw: &str, #[case] expected: WideIntError) {
        assert_eq!(WideInt::parse_decimal(raw), Err(expected));
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let values: Vec<WideInt> =
            serde_json::from_str(r#"[12, -3, "9007199254740993", 1e21]"#).expect("wide ints");
        assert_eq!(values[0], WideInt::Signed(12));
        assert_eq!(values[1], WideInt::Signed(-3));
        assert_eq!(values[2], WideInt::Signed(9_007_199_254_740_993));
        assert_eq!(values[3], WideInt::Decimal("1000000000000000000000".to_owned()));
    }

    #[test]
    fn deserialize_rejects_fractional_numbers() {
        let result: Result<WideInt, _> = serde_json::from_str("2.5");
        assert!(result.is_err());
    }

    #[test]
    fn to_f64_lossy_saturates_instead_of_overflowing() {
        let huge = WideInt::parse_decimal(&"9".repeat(400)).expect("huge");
        assert_eq!(huge.to_f64_lossy(), f64::MAX);

        let tiny = WideInt::parse_decimal(&format!("-{}", "9".repeat(400))).expect("tiny");
        assert_eq!(tiny.to_f64_lossy(), -f64::MAX);
    }

    #[test]
    fn to_u64_rejects_negative_and_oversized_values() {
        assert_eq!(WideInt::Signed(5).to_u64(), Some(5));
        assert_eq!(WideInt::Signed(-1).to_u64(), None);
        assert_eq!(WideInt::Unsigned(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(WideInt::Decimal("18446744073709551616".to_owned()).to_u64(), None);
    }
}
