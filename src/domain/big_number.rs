//! Wire-safe form of on-chain integers.
//!
//! On-chain amounts and prices do not fit a float, so snapshots carry them as
//! a JSON envelope `{"type": "BigNumber", "hex": "0x.."}`. The envelope can be
//! persisted and sent around freely, then restored with
//! [`SerializedBigNumber::to_u256`], [`SerializedBigNumber::to_i256`] or
//! field-wise with [`parse_big_number_obj`].

use std::collections::BTreeMap;

use alloy_primitives::{Sign, I256, U256};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum BigNumberTag {
    BigNumber,
}

/// JSON envelope for an arbitrary-precision signed integer.
///
/// The hex digits are lower-case, padded to an even count, and prefixed
/// with `-` for negative values (`-0x05`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedBigNumber {
    #[serde(rename = "type")]
    tag: BigNumberTag,
    hex: String,
}

impl SerializedBigNumber {
    #[must_use]
    pub fn zero() -> Self {
        Self::from(U256::ZERO)
    }

    /// The hex string, including sign and `0x` prefix.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    fn split(&self) -> (Sign, &str) {
        match self.hex.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, self.hex.as_str()),
        }
    }

    fn magnitude(&self) -> Option<(Sign, U256)> {
        let (sign, unsigned) = self.split();
        let digits = unsigned
            .strip_prefix("0x")
            .or_else(|| unsigned.strip_prefix("0X"))?;
        if digits.is_empty() {
            return None;
        }
        let abs = U256::from_str_radix(digits, 16).ok()?;
        Some((sign, abs))
    }

    /// Restore an unsigned value; `None` for negative or malformed hex.
    #[must_use]
    pub fn to_u256(&self) -> Option<U256> {
        match self.magnitude()? {
            (Sign::Negative, abs) if !abs.is_zero() => None,
            (_, abs) => Some(abs),
        }
    }

    /// Restore a signed value; `None` for malformed or out-of-range hex.
    #[must_use]
    pub fn to_i256(&self) -> Option<I256> {
        let (sign, abs) = self.magnitude()?;
        I256::checked_from_sign_and_abs(sign, abs)
    }
}

fn even_hex(sign: Sign, abs: U256) -> String {
    let mut digits = format!("{abs:x}");
    if digits.len() % 2 == 1 {
        digits.insert(0, '0');
    }
    if sign == Sign::Negative && !abs.is_zero() {
        format!("-0x{digits}")
    } else {
        format!("0x{digits}")
    }
}

impl From<U256> for SerializedBigNumber {
    fn from(value: U256) -> Self {
        Self {
            tag: BigNumberTag::BigNumber,
            hex: even_hex(Sign::Positive, value),
        }
    }
}

impl From<I256> for SerializedBigNumber {
    fn from(value: I256) -> Self {
        let (sign, abs) = value.into_sign_and_abs();
        Self {
            tag: BigNumberTag::BigNumber,
            hex: even_hex(sign, abs),
        }
    }
}

/// One top-level field restored by [`parse_big_number_obj`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedField {
    /// The field was a well-formed big-number envelope.
    BigNumber(I256),
    /// A well-formed envelope holding an unsigned value above `I256::MAX`.
    Unsigned(U256),
    /// Any other value, passed through untouched.
    Value(Value),
}

impl ParsedField {
    /// The restored value when it fits a signed 256-bit integer.
    #[must_use]
    pub const fn as_big_number(&self) -> Option<I256> {
        match self {
            Self::BigNumber(value) => Some(*value),
            Self::Unsigned(_) | Self::Value(_) => None,
        }
    }

    /// The restored value when it is non-negative.
    #[must_use]
    pub fn as_u256(&self) -> Option<U256> {
        match self {
            Self::BigNumber(value) if !value.is_negative() => Some(value.into_raw()),
            Self::Unsigned(value) => Some(*value),
            _ => None,
        }
    }
}

fn restore(value: &Value) -> Option<ParsedField> {
    if value.get("type").and_then(Value::as_str) != Some("BigNumber") {
        return None;
    }
    let envelope = SerializedBigNumber::deserialize(value).ok()?;
    match envelope.to_i256() {
        Some(signed) => Some(ParsedField::BigNumber(signed)),
        None => envelope.to_u256().map(ParsedField::Unsigned),
    }
}

/// Convert every top-level big-number envelope in `record` back into an
/// integer. Nested objects are not descended into.
#[must_use]
pub fn parse_big_number_obj(record: &Map<String, Value>) -> BTreeMap<String, ParsedField> {
    record
        .iter()
        .map(|(key, value)| {
            let field = restore(value).unwrap_or_else(|| ParsedField::Value(value.clone()));
            (key.clone(), field)
        })
        .collect()
}
