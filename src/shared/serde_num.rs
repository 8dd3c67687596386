//! Lenient numeric fields: indexers send decimals either as JSON numbers or strings

use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrString {
    Num(f64),
    Str(String),
}

/// `Option<f64>` from a number, a numeric string, or null. Unparseable text becomes `None`.
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<NumOrString> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(NumOrString::Num(n)) => Some(n),
        Some(NumOrString::Str(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}

/// Integer from a number or numeric string
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(u64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) => s.trim().parse::<u64>().map_err(serde::de::Error::custom),
    }
}

/// Wide integer (liquidity) from a number or numeric string.
///
/// JSON numbers above `u64::MAX` reach us as `f64` and are rejected rather than
/// rounded; send large liquidity values as decimal strings.
pub fn lenient_u128<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(U128Visitor)
}

struct U128Visitor;

impl<'de> Visitor<'de> for U128Visitor {
    type Value = u128;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an unsigned integer or a decimal string")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u128, E> {
        Ok(u128::from(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<u128, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u128, E> {
        u128::try_from(value).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<u128, E> {
        Err(E::custom(format!(
            "liquidity {} is not exact as a JSON number, send it as a string",
            value
        )))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<u128, E> {
        value.trim().parse::<u128>().map_err(E::custom)
    }
}
