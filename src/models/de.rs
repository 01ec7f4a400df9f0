//! Lenient decoders for catalog rows.
//!
//! Rows come from a hand-maintained store: numbers are sometimes strings,
//! optional columns are `null`, and `ingredients` is an untyped JSON column.

use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::recipe::Ingredient;

/// `null` decodes as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ids are opaque; numeric ids are kept as their decimal text.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("invalid recipe id: {other}"))),
    }
}

/// Whole numbers of minutes or servings.
///
/// Accepts a number, a string with a leading integer (`"15"`, `"15 min"`),
/// or `null` (zero). Anything unreadable also decodes as zero, with a
/// warning, so one bad row never rejects the whole catalog.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = match &value {
        Value::Null => Some(0),
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    };

    Ok(count.unwrap_or_else(|| {
        warn!(%value, "unreadable count in recipe row, using 0");
        0
    }))
}

/// Ingredient amounts: a number or a numeric string.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("invalid amount: {n}"))),
        Value::String(s) => s
            .trim()
            .replace(',', ".")
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid amount: {s:?}"))),
        other => Err(D::Error::custom(format!("invalid amount: {other}"))),
    }
}

/// Instruction steps. Non-string steps keep their JSON text; a non-array
/// column yields no steps.
pub(crate) fn lenient_steps<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(steps) => steps
            .into_iter()
            .map(|step| match step {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// The ingredient column. Anything that is not an array of well-formed
/// ingredients decodes as `None` so the aggregator can skip it.
pub(crate) fn lenient_ingredients<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<Ingredient>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn parse_leading_int(s: &str) -> Option<u32> {
    let digits: String = s
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
