//! Validator entry points.
//!
//! [`validate`] checks one value against one rule specification. The
//! [`Validator`] registry holds named forms and validates them individually
//! or in batch.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::{compiler::compile, errors::RuleError, results::Outcome, RuleSpec, ValidationResult};

/// Validates `value` against `rule`.
///
/// `value` is either a scalar (one implicit field) or a mapping/list of
/// fields. Evaluation stops at the first clause that does not hold, and
/// the outcome carries that clause's message.
///
/// ```
/// use ruleguard_core::{validate, RuleSpec};
/// use serde_json::json;
///
/// let outcome = validate(
///     &json!({"aa": "hello", "bb": "world"}),
///     &RuleSpec::map([("aa", "required|string"), ("bb", "in:1,2,3")]),
/// )
/// .unwrap();
/// assert_eq!(outcome.into_pair(), (false, String::new()));
/// ```
///
/// # Errors
///
/// Returns `RuleError::InvalidRule` when evaluation reaches a clause whose
/// rule name is unknown. A value that does not satisfy its rules is never
/// an error.
pub fn validate(value: &Value, rule: &RuleSpec) -> Result<Outcome, RuleError> {
    compile(value, rule).evaluate(value)
}

/// A named value and the rules it must satisfy.
#[derive(Debug, Clone)]
pub struct Form {
    pub value: Value,
    pub rules: RuleSpec,
}

impl Form {
    pub fn new(value: Value, rules: RuleSpec) -> Self {
        Self { value, rules }
    }
}

/// Main entry point for validating forms.
///
/// - Acts as a registry of forms, kept in insertion order
/// - Each form carries its own rules
/// - In strict mode every clause of a form must name a known rule before
///   the form is evaluated
#[derive(Debug, Default)]
pub struct Validator {
    forms: IndexMap<String, Form>,
    strict: bool,
}

impl Validator {
    /// Create a new empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    /// Add a form to the validator.
    ///
    /// If a form with the same name already exists, it will be replaced.
    pub fn add_form(&mut self, name: impl Into<String>, form: Form) {
        let _ = self.forms.insert(name.into(), form);
    }

    pub fn form_names(&self) -> impl Iterator<Item = &str> {
        self.forms.keys().map(|k| k.as_str())
    }

    /// Validate a specific form by name.
    ///
    /// # Returns
    ///
    /// * `Ok(ValidationResult)` - Validation completed, may hold a failure
    /// * `Err(RuleError::FormNotFound)` - No form with this name exists
    /// * `Err(RuleError::InvalidRule)` - The form's rules name an unknown rule
    pub fn validate_form(&self, name: &str) -> Result<ValidationResult, RuleError> {
        let form = self
            .forms
            .get(name)
            .ok_or_else(|| RuleError::FormNotFound(name.to_string()))?;
        self.run(name, form)
    }

    /// Validate all forms in insertion order.
    ///
    /// The first rule error is propagated immediately and remaining forms
    /// are not validated.
    pub fn validate_all(&self) -> Result<Vec<ValidationResult>, RuleError> {
        self.forms
            .iter()
            .map(|(name, form)| self.run(name, form))
            .collect()
    }

    fn run(&self, name: &str, form: &Form) -> Result<ValidationResult, RuleError> {
        let rule_set = compile(&form.value, &form.rules);
        if self.strict {
            rule_set.ensure_resolved()?;
        }
        let outcome = rule_set.evaluate(&form.value)?;
        debug!(form = name, passed = outcome.is_passed(), "form validated");
        Ok(ValidationResult::new(
            name.to_string(),
            rule_set.fields().len(),
            outcome,
        ))
    }
}
