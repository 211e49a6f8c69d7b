use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::IgnoredAny;
use serde_json::Value;

use crate::{
    rules::Predicate,
    utils::coercion::{numeric_str, scalar_text},
};

static INT_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:0|[1-9][0-9]*)$").expect("integer pattern is valid"));

/// Fails on null, blank strings and empty lists or mappings.
pub struct Required;

impl Predicate for Required {
    fn name(&self) -> &'static str {
        "required"
    }

    fn validate(&self, value: &Value, _argument: Option<&str>) -> bool {
        match value {
            Value::Null => false,
            Value::String(s) => !s.trim().is_empty(),
            Value::Array(a) => !a.is_empty(),
            Value::Object(o) => !o.is_empty(),
            Value::Bool(_) | Value::Number(_) => true,
        }
    }
}

/// `true`, `false`, the integers 0 and 1, or the strings `"0"` and `"1"`.
pub struct IsBool;

impl Predicate for IsBool {
    fn name(&self) -> &'static str {
        "isBool"
    }

    fn validate(&self, value: &Value, _argument: Option<&str>) -> bool {
        match value {
            Value::Bool(_) => true,
            Value::Number(n) => matches!(n.as_u64(), Some(0 | 1)),
            Value::String(s) => s == "0" || s == "1",
            _ => false,
        }
    }
}

pub struct IsString;

impl Predicate for IsString {
    fn name(&self) -> &'static str {
        "isString"
    }

    fn validate(&self, value: &Value, _argument: Option<&str>) -> bool {
        value.is_string()
    }
}

/// Integer numbers, integral floats within `i64`, `true`, and integer
/// literal strings without leading zeros.
pub struct IsInt;

impl Predicate for IsInt {
    fn name(&self) -> &'static str {
        "isInt"
    }

    fn validate(&self, value: &Value, _argument: Option<&str>) -> bool {
        match value {
            Value::Number(n) => {
                if n.is_i64() {
                    true
                } else if n.is_u64() {
                    false
                } else {
                    n.as_f64().is_some_and(|f| {
                        f.is_finite()
                            && f.fract() == 0.0
                            && f >= i64::MIN as f64
                            && f < i64::MAX as f64
                    })
                }
            }
            Value::Bool(b) => *b,
            Value::String(s) => {
                let s = s.trim();
                INT_LITERAL.is_match(s) && s.parse::<i64>().is_ok()
            }
            _ => false,
        }
    }
}

pub struct IsNumeric;

impl Predicate for IsNumeric {
    fn name(&self) -> &'static str {
        "isNumeric"
    }

    fn validate(&self, value: &Value, _argument: Option<&str>) -> bool {
        match value {
            Value::Number(_) => true,
            Value::String(s) => numeric_str(s).is_some(),
            _ => false,
        }
    }
}

/// Lists and mappings.
pub struct IsArray;

impl Predicate for IsArray {
    fn name(&self) -> &'static str {
        "isArray"
    }

    fn validate(&self, value: &Value, _argument: Option<&str>) -> bool {
        value.is_array() || value.is_object()
    }
}

/// The text form of the value is well-formed JSON.
pub struct IsJson;

impl Predicate for IsJson {
    fn name(&self) -> &'static str {
        "isJson"
    }

    fn validate(&self, value: &Value, _argument: Option<&str>) -> bool {
        scalar_text(value).is_some_and(|text| serde_json::from_str::<IgnoredAny>(&text).is_ok())
    }
}
