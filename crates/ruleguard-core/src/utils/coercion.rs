//! Value coercion shared by the comparison rules.
//!
//! Every rule that compares a field value with a rule argument (`isEqual`,
//! `in`, `notin`, `range`) goes through this module, so that "loose"
//! comparisons behave the same way everywhere:
//!
//! | left | right | comparison |
//! |---|---|---|
//! | null | null | equal |
//! | null | string | string is empty |
//! | bool | any | truthiness of both sides |
//! | null | any other | other side is falsy |
//! | string | string | numeric when both are numeric strings, else bytes |
//! | number | string | numeric when the string is numeric, else the number's text |
//! | number | number | integers exactly, otherwise as `f64` |
//! | list/mapping | list/mapping | same size, pairwise loose equality |
//! | list/mapping | scalar | never equal |

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Number, Value};

// Surrounding whitespace is allowed, hex and `inf`/`nan` are not.
static NUMERIC_STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?[ \t\n\r\x0B\x0C]*$")
        .expect("numeric string pattern is valid")
});

/// Text form of a scalar value.
///
/// Strings are returned as is, numbers in decimal form (integral floats
/// without a fraction, `1.0` reads `"1"`), `true` as `"1"`, `false` and
/// `null` as the empty string. Lists and mappings have no text
/// form.
pub fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(number_text(n))),
        Value::Bool(true) => Some(Cow::Borrowed("1")),
        Value::Bool(false) | Value::Null => Some(Cow::Borrowed("")),
        Value::Array(_) | Value::Object(_) => None,
    }
}

// Integral floats below 1e15 render like integers.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

/// Parses a numeric string, `None` when the string is not numeric.
pub fn numeric_str(s: &str) -> Option<f64> {
    if !NUMERIC_STRING.is_match(s) {
        return None;
    }
    s.trim().parse::<f64>().ok()
}

/// Numeric reading of a value: numbers and numeric strings only.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => numeric_str(s),
        _ => None,
    }
}

pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn numbers_eq(a: &Number, b: &Number) -> bool {
    match (a.as_i64(), b.as_i64()) {
        (Some(x), Some(y)) => x == y,
        _ => match (a.as_u64(), b.as_u64()) {
            (Some(x), Some(y)) => x == y,
            _ => a.as_f64() == b.as_f64(),
        },
    }
}

/// Loose equality between two values, see the module table.
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
        (Value::Bool(b), other) | (other, Value::Bool(b)) => *b == truthy(other),
        (Value::Null, other) | (other, Value::Null) => !truthy(other),
        (Value::String(a), Value::String(b)) => match (numeric_str(a), numeric_str(b)) {
            (Some(x), Some(y)) => x == y,
            _ => a == b,
        },
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            match numeric_str(s) {
                Some(y) => n.as_f64() == Some(y),
                None => number_text(n) == *s,
            }
        }
        (Value::Number(a), Value::Number(b)) => numbers_eq(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| loose_eq(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(k, x)| b.get(k).is_some_and(|y| loose_eq(x, y)))
        }
        _ => false,
    }
}

/// Loose equality between a value and a rule argument.
pub fn loose_eq_text(value: &Value, text: &str) -> bool {
    loose_eq(value, &Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_str() {
        assert_eq!(numeric_str("42"), Some(42.0));
        assert_eq!(numeric_str(" 1.5 "), Some(1.5));
        assert_eq!(numeric_str("-.5"), Some(-0.5));
        assert_eq!(numeric_str("1e3"), Some(1000.0));
        assert_eq!(numeric_str("5."), Some(5.0));
        assert_eq!(numeric_str("."), None);
        assert_eq!(numeric_str("inf"), None);
        assert_eq!(numeric_str("0x1A"), None);
        assert_eq!(numeric_str(""), None);
        assert_eq!(numeric_str("12abc"), None);
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!("abc")).as_deref(), Some("abc"));
        assert_eq!(scalar_text(&json!(12)).as_deref(), Some("12"));
        assert_eq!(scalar_text(&json!(1.0)).as_deref(), Some("1"));
        assert_eq!(scalar_text(&json!(-3.0)).as_deref(), Some("-3"));
        assert_eq!(scalar_text(&json!(1.5)).as_deref(), Some("1.5"));
        assert_eq!(scalar_text(&json!(true)).as_deref(), Some("1"));
        assert_eq!(scalar_text(&json!(false)).as_deref(), Some(""));
        assert_eq!(scalar_text(&Value::Null).as_deref(), Some(""));
        assert!(scalar_text(&json!([1])).is_none());
        assert!(scalar_text(&json!({"a": 1})).is_none());
    }

    #[test]
    fn test_loose_eq_strings() {
        assert!(loose_eq(&json!("abc"), &json!("abc")));
        assert!(!loose_eq(&json!("abc"), &json!("ABC")));
        // Numeric strings compare by value
        assert!(loose_eq(&json!("1e3"), &json!("1000")));
        assert!(loose_eq(&json!("10"), &json!(" 10")));
        assert!(!loose_eq(&json!("abc"), &json!("0")));
    }

    #[test]
    fn test_loose_eq_numbers_and_strings() {
        assert!(loose_eq(&json!(1), &json!("1")));
        assert!(loose_eq(&json!(1.5), &json!("1.50")));
        assert!(loose_eq(&json!(2), &json!(2.0)));
        assert!(!loose_eq(&json!(0), &json!("a")));
        assert!(!loose_eq(&json!(3), &json!("4")));
    }

    #[test]
    fn test_loose_eq_null_and_bool() {
        assert!(loose_eq(&Value::Null, &json!("")));
        assert!(!loose_eq(&Value::Null, &json!("0")));
        assert!(loose_eq(&Value::Null, &json!(0)));
        assert!(loose_eq(&Value::Null, &json!([])));
        assert!(loose_eq(&json!(true), &json!("yes")));
        assert!(loose_eq(&json!(false), &json!("0")));
        assert!(!loose_eq(&json!(true), &json!("")));
        assert!(loose_eq(&json!(false), &Value::Null));
    }

    #[test]
    fn test_loose_eq_collections() {
        assert!(loose_eq(&json!([1, "2"]), &json!(["1", 2])));
        assert!(!loose_eq(&json!([1]), &json!("1")));
        assert!(loose_eq(&json!({"a": 1}), &json!({"a": "1"})));
        assert!(!loose_eq(&json!({"a": 1}), &json!({"b": 1})));
    }
}
