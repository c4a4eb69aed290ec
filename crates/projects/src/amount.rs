//! Lenient monetary amounts.
//!
//! Amounts are `rust_decimal::Decimal` so repeated summation stays exact
//! (binary floats drift). Source data comes from free-form user input, so
//! deserialization accepts a JSON number, a numeric string, or garbage;
//! anything unparseable becomes zero rather than an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Deserialize a debit/credit cell, degrading unparseable input to zero.
pub fn lenient<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Value(Decimal),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Value(value) => value,
        Raw::Other(_) => Decimal::ZERO,
    })
}

/// Parse a free-form amount string; unparseable input is zero.
pub fn parse_or_zero(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}
