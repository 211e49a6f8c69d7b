//! Rule compilation module.
//!
//! Normalises a [`RuleSpec`] against the shape of the value it will check
//! and turns every clause token into a [`Clause`] bound to its predicate.
//!
//! - scalar value: the spec is the rule of a single implicit field;
//! - mapping or list with a text spec: the text is used for every field;
//! - mapping or list with a map spec: each entry is one field's rule.
//!
//! Compilation never fails. Unknown rule names and malformed messages are
//! kept as unresolved clauses and raise `RuleError::InvalidRule` only when
//! evaluation reaches them, or eagerly through `RuleSet::ensure_resolved`.

use serde_json::Value;
use tracing::trace;


use crate::{
    types::RuleSpec,
    validator::{Clause, FieldRules, RuleSet},
};

/// Compile the clauses of one field's rule specification.
///
/// A text spec is split on `|`, each clause with an empty message. A map
/// spec pairs each clause token with its message; an entry whose message is
/// not text is kept as a malformed clause.
pub fn compile_clauses(spec: &RuleSpec) -> Vec<Clause> {
    match spec {
        RuleSpec::Text(text) => text.split('|').map(|token| Clause::parse(token, "")).collect(),
        RuleSpec::Map(entries) => entries
            .iter()
            .map(|(token, message)| match message.as_text() {
                Some(message) => Clause::parse(token, message),
                None => Clause::malformed(token),
            })
            .collect(),
    }
}

fn field_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(fields) => fields.keys().cloned().collect(),
        Value::Array(items) => (0..items.len()).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Compile a rule specification for `value`.
///
/// This is the main entry point for rule compilation: the resulting
/// [`RuleSet`] can be evaluated against `value`, or against any other value
/// of the same shape.
pub fn compile(value: &Value, spec: &RuleSpec) -> RuleSet {
    let fields = match (value, spec) {
        (Value::Object(_) | Value::Array(_), RuleSpec::Text(_)) => {
            let clauses = compile_clauses(spec);
            field_keys(value)
                .into_iter()
                .map(|key| FieldRules::new(Some(key), clauses.clone()))
                .collect()
        }
        (Value::Object(_) | Value::Array(_), RuleSpec::Map(entries)) => entries
            .iter()
            .map(|(key, field_spec)| FieldRules::new(Some(key.clone()), compile_clauses(field_spec)))
            .collect(),
        (_, spec) => vec![FieldRules::new(None, compile_clauses(spec))],
    };
    let rule_set = RuleSet::new(fields);
    trace!(fields = rule_set.fields().len(), "compiled rule set");
    rule_set
}
