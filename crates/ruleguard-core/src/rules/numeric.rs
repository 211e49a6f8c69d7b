use serde_json::Value;
use tracing::warn;

use crate::{
    rules::Predicate,
    utils::{bounds::Bounds, coercion::numeric_value},
};

/// Numeric value within `min` or `min,max`.
///
/// Numbers and numeric strings are compared as `f64`; anything else fails.
pub struct Range;

impl Predicate for Range {
    fn name(&self) -> &'static str {
        "range"
    }

    fn validate(&self, value: &Value, argument: Option<&str>) -> bool {
        let Some(bounds) = argument.and_then(Bounds::parse) else {
            warn!(rule = self.name(), argument, "malformed range bounds");
            return false;
        };
        numeric_value(value).is_some_and(|n| bounds.contains(n))
    }
}
