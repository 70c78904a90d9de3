//! Tolerant number parsing for legacy form data.
//!
//! Older builds stored form inputs verbatim, so numeric fields may arrive as
//! numbers, numeric strings, empty strings, `null` or text that is not a
//! number at all. None of these may stop a whole document from loading.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

/// Deserialize an optional number that may be encoded as a string.
///
/// Empty strings and `null` become `None`. Anything else that does not
/// parse also becomes `None` and is logged.
pub(crate) fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce(value))
}

/// Deserialize a measurement where unusable input becomes NaN, so the
/// record loads and later arithmetic on it can be refused per record.
pub(crate) fn number_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?.unwrap_or(f64::NAN))
}

/// Deserialize a count where unusable input becomes 0.
pub(crate) fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_number(deserializer)?.unwrap_or(0))
}

fn coerce<T: FromStr>(value: Option<Value>) -> Option<T> {
    let text = match value {
        None | Some(Value::Null) => return None,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    };
    if text.is_empty() {
        return None;
    }

    let parsed = text.parse::<T>().ok();
    if parsed.is_none() {
        warn!(value = %text, "Ignoring unreadable number");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "optional_number")]
        reps: Option<u32>,
        #[serde(default, deserialize_with = "optional_number")]
        weight: Option<f64>,
    }

    #[derive(Deserialize)]
    struct Required {
        #[serde(deserialize_with = "number_or_nan")]
        amount: f64,
        #[serde(deserialize_with = "count_or_zero")]
        weeks: u32,
    }

    #[test]
    fn test_accepts_strings_and_numbers() {
        let f: Form = serde_json::from_str(r#"{"reps":"10","weight":185.5}"#).unwrap();
        assert_eq!(f.reps, Some(10));
        assert_eq!(f.weight, Some(185.5));
    }

    #[test]
    fn test_empty_and_missing_are_none() {
        let f: Form = serde_json::from_str(r#"{"reps":"","weight":null}"#).unwrap();
        assert_eq!(f.reps, None);
        assert_eq!(f.weight, None);

        let f: Form = serde_json::from_str("{}").unwrap();
        assert_eq!(f.reps, None);
    }

    #[test]
    fn test_garbage_is_none() {
        let f: Form = serde_json::from_str(r#"{"reps":"ten","weight":"heavy"}"#).unwrap();
        assert_eq!(f.reps, None);
        assert_eq!(f.weight, None);

        let f: Form = serde_json::from_str(r#"{"reps":2.5,"weight":true}"#).unwrap();
        assert_eq!(f.reps, None);
        assert_eq!(f.weight, None);

        let f: Form = serde_json::from_str(r#"{"reps":"8.5"}"#).unwrap();
        assert_eq!(f.reps, None);
    }

    #[test]
    fn test_required_fallbacks() {
        let r: Required = serde_json::from_str(r#"{"amount":null,"weeks":null}"#).unwrap();
        assert!(r.amount.is_nan());
        assert_eq!(r.weeks, 0);

        let r: Required = serde_json::from_str(r#"{"amount":"2.5","weeks":"3"}"#).unwrap();
        assert_eq!(r.amount, 2.5);
        assert_eq!(r.weeks, 3);

        assert!(serde_json::from_str::<Required>(r#"{"weeks":2}"#).is_err());
    }
}
