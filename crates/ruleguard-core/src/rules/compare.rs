use serde_json::Value;

use crate::{
    rules::Predicate,
    utils::coercion::{loose_eq, loose_eq_text},
};

fn argument_value(argument: Option<&str>) -> Value {
    argument.map_or(Value::Null, |a| Value::String(a.to_string()))
}

/// Loose equality with the argument, see [`crate::utils::coercion`].
pub struct IsEqual;

impl Predicate for IsEqual {
    fn name(&self) -> &'static str {
        "isEqual"
    }

    fn validate(&self, value: &Value, argument: Option<&str>) -> bool {
        loose_eq(value, &argument_value(argument))
    }
}

/// Strict equality: the value is the argument string itself, or null when
/// the clause has no argument.
pub struct IsSame;

impl Predicate for IsSame {
    fn name(&self) -> &'static str {
        "isSame"
    }

    fn validate(&self, value: &Value, argument: Option<&str>) -> bool {
        match (value, argument) {
            (Value::String(s), Some(a)) => s == a,
            (Value::Null, None) => true,
            _ => false,
        }
    }
}

pub struct In;

impl Predicate for In {
    fn name(&self) -> &'static str {
        "in"
    }

    fn validate(&self, value: &Value, argument: Option<&str>) -> bool {
        is_member(value, argument)
    }
}

pub struct NotIn;

impl Predicate for NotIn {
    fn name(&self) -> &'static str {
        "notin"
    }

    fn validate(&self, value: &Value, argument: Option<&str>) -> bool {
        !is_member(value, argument)
    }
}

// Members are not trimmed: `in:a, b` lists "a" and " b".
fn is_member(value: &Value, argument: Option<&str>) -> bool {
    argument
        .unwrap_or("")
        .split(',')
        .any(|member| loose_eq_text(value, member))
}
