use ruleguard_core::rules::{In, IsEqual, IsSame, NotIn, Predicate, Range};
use serde_json::json;

#[test]
fn test_range_bounds() {
    assert!(Range.validate(&json!(15), Some("10,20")));
    assert!(!Range.validate(&json!(25), Some("10,20")));
    // No max: unbounded above only
    assert!(!Range.validate(&json!(5), Some("10")));
    assert!(Range.validate(&json!(500), Some("10")));
}

#[test]
fn test_range_mixed_int_float_string() {
    assert!(Range.validate(&json!(10.5), Some("10,11")));
    assert!(Range.validate(&json!("10.5"), Some("10,11")));
    assert!(!Range.validate(&json!("11.01"), Some("10,11")));
}

#[test]
fn test_membership() {
    assert!(In.validate(&json!("b"), Some("a,b,c")));
    assert!(!NotIn.validate(&json!("b"), Some("a,b,c")));
    assert!(In.validate(&json!(3), Some("1,2,3")));
    assert!(NotIn.validate(&json!(4), Some("1,2,3")));
}

#[test]
fn test_equality() {
    assert!(IsEqual.validate(&json!(1), Some("1.0")));
    assert!(!IsSame.validate(&json!(1), Some("1")));
    assert!(IsSame.validate(&json!("1"), Some("1")));
}
