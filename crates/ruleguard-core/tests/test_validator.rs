use ruleguard_core::{
    compile, validate, Failure, Form, Outcome, RuleError, RuleSpec, Validator,
};
use serde_json::{json, Value};

#[test]
fn test_validate_single_value_with_rule_string() {
    let outcome = validate(&json!("test@example.com"), &RuleSpec::from("required|email")).unwrap();
    assert!(outcome.is_passed());

    let outcome = validate(&json!("test"), &RuleSpec::from("required|email|length:10,20")).unwrap();
    assert_eq!(outcome.into_pair(), (false, String::new()));
}

#[test]
fn test_validate_single_value_with_messages() {
    let rule = RuleSpec::map([
        ("required", "value is required"),
        ("email", "value must be a valid email"),
        ("length:10,20", "value length must in 10-20"),
    ]);

    let outcome = validate(&json!(""), &rule).unwrap();
    assert_eq!(outcome.message(), "value is required");

    let outcome = validate(&json!("test"), &rule).unwrap();
    assert_eq!(outcome.message(), "value must be a valid email");

    let outcome = validate(&json!("a@b.io"), &rule).unwrap();
    assert_eq!(
        outcome,
        Outcome::Failed(Failure {
            field: None,
            rule: "length:10,20".to_string(),
            message: "value length must in 10-20".to_string(),
        })
    );

    let outcome = validate(&json!("someone@example.com"), &rule).unwrap();
    assert!(outcome.is_passed());
}

#[test]
fn test_validate_broadcast_rule_string() {
    let value = json!({"aa": "hello", "bb": "world"});
    assert!(validate(&value, &RuleSpec::from("required | string"))
        .unwrap()
        .is_passed());

    let value = json!({"aa": "hello", "bb": 42});
    let outcome = validate(&value, &RuleSpec::from("required|string")).unwrap();
    assert_eq!(outcome.failure().unwrap().field.as_deref(), Some("bb"));
    assert_eq!(outcome.failure().unwrap().rule, "string");
}

#[test]
fn test_validate_per_field_without_messages() {
    let value = json!({"aa": "hello", "bb": "world"});
    let rule = RuleSpec::map([("aa", "required|string"), ("bb", "in:1,2,3")]);
    let outcome = validate(&value, &rule).unwrap();
    assert_eq!(outcome.into_pair(), (false, String::new()));
}

#[test]
fn test_validate_per_field_with_messages() {
    let value = json!({"aa": "hello", "bb": "world"});
    let rule = RuleSpec::map([
        (
            "aa",
            RuleSpec::map([("required", "aa is required"), ("string", "aa must be a string")]),
        ),
        ("bb", RuleSpec::map([("in:1,2,3", "bb must in 1,2,3")])),
    ]);
    let outcome = validate(&value, &rule).unwrap();
    assert_eq!(outcome.message(), "bb must in 1,2,3");
    assert_eq!(outcome.failure().unwrap().field.as_deref(), Some("bb"));
}

#[test]
fn test_validate_missing_field_is_null() {
    let value = json!({"aa": "hello"});
    let rule = RuleSpec::map([("bb", RuleSpec::map([("required", "bb is required")]))]);
    let outcome = validate(&value, &rule).unwrap();
    assert_eq!(outcome.message(), "bb is required");
}

#[test]
fn test_validate_first_failing_field_wins() {
    let value = json!({"aa": "", "bb": ""});
    let rule = RuleSpec::map([
        ("aa", RuleSpec::map([("required", "aa is required")])),
        ("bb", RuleSpec::map([("required", "bb is required")])),
    ]);
    let outcome = validate(&value, &rule).unwrap();
    assert_eq!(outcome.message(), "aa is required");
}

#[test]
fn test_validate_list_fields_by_index() {
    let outcome = validate(&json!(["1", "2", "x"]), &RuleSpec::from("numeric")).unwrap();
    assert_eq!(outcome.failure().unwrap().field.as_deref(), Some("2"));

    let rule = RuleSpec::map([("1", "in:a,b")]);
    assert!(validate(&json!(["zz", "b"]), &rule).unwrap().is_passed());
}

#[test]
fn test_validate_unknown_rule_is_an_error() {
    let result = validate(&json!("value"), &RuleSpec::from("bogus_rule_name"));
    assert_eq!(
        result,
        Err(RuleError::InvalidRule("bogus_rule_name".to_string()))
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "Invalid validation rule: 'bogus_rule_name'"
    );
}

#[test]
fn test_validate_unknown_rule_after_failure_is_not_reached() {
    let outcome = validate(&Value::Null, &RuleSpec::from("required|bogus")).unwrap();
    assert!(!outcome.is_passed());

    let rule_set = compile(&Value::Null, &RuleSpec::from("required|bogus"));
    assert_eq!(
        rule_set.ensure_resolved(),
        Err(RuleError::InvalidRule("bogus".to_string()))
    );
}

#[test]
fn test_validate_unknown_rule_in_later_field_raises() {
    let value = json!({"aa": "ok", "bb": "ok"});
    let rule = RuleSpec::map([("aa", "required"), ("bb", "required|nope:1")]);
    assert_eq!(
        validate(&value, &rule),
        Err(RuleError::InvalidRule("nope:1".to_string()))
    );
}

#[test]
fn test_validate_nested_message_is_invalid_rule() {
    let rule = RuleSpec::map([("required", RuleSpec::map([("oops", "x")]))]);
    assert_eq!(
        validate(&json!("x"), &rule),
        Err(RuleError::InvalidRule("required".to_string()))
    );
}

#[test]
fn test_validate_alias_and_registered_names_agree() {
    let value = json!("someone@example.com");
    let short = validate(&value, &RuleSpec::from("email")).unwrap();
    let full = validate(&value, &RuleSpec::from("isEmail")).unwrap();
    assert_eq!(short, full);
}

#[test]
fn test_validate_datetime_with_custom_format() {
    let rule = RuleSpec::map([("datetime:d/m/Y H:i", "bad datetime")]);
    assert!(validate(&json!("29/02/2024 10:15"), &rule).unwrap().is_passed());
    assert_eq!(
        validate(&json!("30/02/2024 10:15"), &rule).unwrap().message(),
        "bad datetime"
    );
}

#[test]
fn test_validate_is_idempotent() {
    let value = json!({"name": "alice", "age": "17"});
    let rule = RuleSpec::map([("name", "required|length:3"), ("age", "int|range:18")]);
    let first = validate(&value, &rule);
    let second = validate(&value, &rule);
    assert_eq!(first, second);
}

#[test]
fn test_validator_validate_nonexistent_form() {
    let validator = Validator::new();
    let result = validator.validate_form("nonexistent");
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().to_string(),
        "Form 'nonexistent' not found in Validator"
    );
}

#[test]
fn test_validator_validate_all_in_insertion_order() {
    let mut validator = Validator::new();
    validator.add_form(
        "users",
        Form::new(json!({"name": "alice"}), RuleSpec::from("required")),
    );
    validator.add_form(
        "orders",
        Form::new(json!({"qty": 0}), RuleSpec::map([("qty", "range:1")])),
    );

    let results = validator.validate_all().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].form_name, "users");
    assert!(results[0].is_passed());
    assert_eq!(results[0].field_count, 1);
    assert_eq!(results[1].form_name, "orders");
    assert!(!results[1].is_passed());
}

#[test]
fn test_validator_replaces_form_with_same_name() {
    let mut validator = Validator::new();
    validator.add_form("f", Form::new(json!(""), RuleSpec::from("required")));
    validator.add_form("f", Form::new(json!("x"), RuleSpec::from("required")));
    assert_eq!(validator.form_names().count(), 1);
    assert!(validator.validate_form("f").unwrap().is_passed());
}

#[test]
fn test_validator_strict_mode_rejects_unreached_unknown_rules() {
    let mut validator = Validator::new();
    validator.add_form("f", Form::new(Value::Null, RuleSpec::from("required|bogus")));

    // Lenient: `required` fails first, `bogus` is never reached
    assert!(!validator.validate_form("f").unwrap().is_passed());

    validator.set_strict(true);
    assert_eq!(
        validator.validate_form("f").unwrap_err(),
        RuleError::InvalidRule("bogus".to_string())
    );
}
