//! Scalar values that can appear in a composite primary key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use std::fmt;

/// A single key-field value.
///
/// `Display` yields the exact text that goes into the composite key:
/// strings verbatim, numbers in decimal, booleans as `true`/`false`,
/// and null as `null`. Floats with an integral value drop the fraction,
/// so a timestamp stored as `1000.0` keys the same as `1000`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl KeyValue {
    /// Convert a JSON value into a key value. Arrays and objects are not
    /// scalars and yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(KeyValue::Null),
            Value::Bool(b) => Some(KeyValue::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(KeyValue::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Some(KeyValue::UInt(u))
                } else {
                    n.as_f64().map(KeyValue::Float)
                }
            }
            Value::String(s) => Some(KeyValue::Str(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Shortest round-trip digits, laid out the way a JavaScript number
/// prints: plain decimal for exponents in `[-7, 21)`, otherwise
/// `d.ddde+x` / `d.ddde-x`.
fn fmt_float(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
    }
    // covers -0.0
    if v == 0.0 {
        return f.write_str("0");
    }
    if v < 0.0 {
        f.write_str("-")?;
        return fmt_float(-v, f);
    }

    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return write!(f, "{v}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return write!(f, "{v}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exp + 1;

    if k <= n && n <= 21 {
        write!(f, "{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        write!(f, "{int}.{frac}")
    } else if -6 < n && n <= 0 {
        write!(f, "0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if exp < 0 { '-' } else { '+' };
        if rest.is_empty() {
            write!(f, "{first}e{sign}{}", exp.abs())
        } else {
            write!(f, "{first}.{rest}e{sign}{}", exp.abs())
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Null => f.write_str("null"),
            KeyValue::Bool(b) => write!(f, "{b}"),
            KeyValue::Int(i) => write!(f, "{i}"),
            KeyValue::UInt(u) => write!(f, "{u}"),
            KeyValue::Float(v) => fmt_float(*v, f),
            KeyValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for KeyValue {
    fn from(s: &str) -> Self {
        KeyValue::Str(s.to_string())
    }
}

impl From<String> for KeyValue {
    fn from(s: String) -> Self {
        KeyValue::Str(s)
    }
}

impl From<&String> for KeyValue {
    fn from(s: &String) -> Self {
        KeyValue::Str(s.clone())
    }
}

impl From<i64> for KeyValue {
    fn from(i: i64) -> Self {
        KeyValue::Int(i)
    }
}

impl From<u64> for KeyValue {
    fn from(u: u64) -> Self {
        KeyValue::UInt(u)
    }
}

impl From<bool> for KeyValue {
    fn from(b: bool) -> Self {
        KeyValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integers_render_in_decimal() {
        assert_eq!(KeyValue::Int(1000).to_string(), "1000");
        assert_eq!(KeyValue::Int(-42).to_string(), "-42");
        assert_eq!(KeyValue::UInt(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn test_integral_float_drops_fraction() {
        assert_eq!(KeyValue::Float(1000.0).to_string(), "1000");
        assert_eq!(KeyValue::Float(-0.0).to_string(), "0");
        assert_eq!(KeyValue::Float(1.5).to_string(), "1.5");
        assert_eq!(KeyValue::Float(0.1).to_string(), "0.1");
    }

    #[test]
    fn test_float_exponent_thresholds() {
        assert_eq!(
            KeyValue::Float(123456789012345680000.0).to_string(),
            "123456789012345680000"
        );
        assert_eq!(KeyValue::Float(1e21).to_string(), "1e+21");
        assert_eq!(KeyValue::Float(1.5e300).to_string(), "1.5e+300");
        assert_eq!(KeyValue::Float(1e-6).to_string(), "0.000001");
        assert_eq!(KeyValue::Float(1e-7).to_string(), "1e-7");
        assert_eq!(KeyValue::Float(-2.5e-7).to_string(), "-2.5e-7");
        assert_eq!(KeyValue::Float(-1234.5).to_string(), "-1234.5");
    }

    #[test]
    fn test_non_numeric_scalars() {
        assert_eq!(KeyValue::Null.to_string(), "null");
        assert_eq!(KeyValue::Bool(false).to_string(), "false");
        assert_eq!(KeyValue::from("merge-bot").to_string(), "merge-bot");
    }

    #[test]
    fn test_from_json_rejects_containers() {
        assert_eq!(KeyValue::from_json(&json!(42)), Some(KeyValue::Int(42)));
        assert_eq!(KeyValue::from_json(&json!(2.5)), Some(KeyValue::Float(2.5)));
        assert_eq!(KeyValue::from_json(&json!("a")), Some(KeyValue::from("a")));
        assert_eq!(KeyValue::from_json(&json!(null)), Some(KeyValue::Null));
        assert!(KeyValue::from_json(&json!([1, 2])).is_none());
        assert!(KeyValue::from_json(&json!({"a": 1})).is_none());
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&json!([])), "array");
        assert_eq!(json_kind(&json!({})), "object");
        assert_eq!(json_kind(&json!(1)), "number");
    }
}
