use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::{
    errors::RuleError,
    results::{Failure, Outcome},
    rules::{resolve, Predicate},
};

static MISSING: Value = Value::Null;

/// One `name[:argument]` clause with its failure message.
#[derive(Clone)]
pub struct Clause {
    token: String,
    name: String,
    argument: Option<String>,
    message: String,
    predicate: Option<&'static dyn Predicate>,
}

impl Clause {
    /// Parses a clause token.
    ///
    /// The predicate name is everything before the first `:` (trimmed), the
    /// argument is everything after it, untouched. A `:` in first position
    /// does not separate anything.
    pub fn parse(token: &str, message: impl Into<String>) -> Self {
        let (name, argument) = match token.find(':') {
            Some(p) if p > 0 => (token[..p].trim(), Some(token[p + 1..].to_string())),
            _ => (token.trim(), None),
        };
        Self {
            token: token.to_string(),
            name: name.to_string(),
            argument,
            message: message.into(),
            predicate: resolve(name),
        }
    }

    /// A clause that fails with `InvalidRule` once evaluation reaches it.
    pub(crate) fn malformed(token: &str) -> Self {
        Self {
            predicate: None,
            ..Self::parse(token, "")
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_resolved(&self) -> bool {
        self.predicate.is_some()
    }

    fn evaluate(&self, value: &Value) -> Result<bool, RuleError> {
        let predicate = self
            .predicate
            .ok_or_else(|| RuleError::InvalidRule(self.token.clone()))?;
        Ok(predicate.validate(value, self.argument.as_deref()))
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clause")
            .field("token", &self.token)
            .field("predicate", &self.predicate.map(|p| p.name()))
            .field("argument", &self.argument)
            .field("message", &self.message)
            .finish()
    }
}

/// Ordered clauses for one field.
#[derive(Debug, Clone)]
pub struct FieldRules {
    key: Option<String>,
    clauses: Vec<Clause>,
}

impl FieldRules {
    pub fn new(key: Option<String>, clauses: Vec<Clause>) -> Self {
        Self { key, clauses }
    }

    /// Field name, `None` for the implicit field of a scalar value.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    fn field_value<'v>(&self, value: &'v Value) -> &'v Value {
        let Some(key) = &self.key else {
            return value;
        };
        let found = match value {
            Value::Object(fields) => fields.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        found.unwrap_or(&MISSING)
    }
}

/// A normalised rule specification, ready to be evaluated.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    /// Evaluates fields in order and clauses in declaration order, stopping
    /// at the first clause that does not hold.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRule` when evaluation reaches a clause
    /// whose rule name is unknown. Clauses after a failing one are never
    /// reached, so they cannot raise.
    pub fn evaluate(&self, value: &Value) -> Result<Outcome, RuleError> {
        for field in &self.fields {
            let field_value = field.field_value(value);
            for clause in &field.clauses {
                if !clause.evaluate(field_value)? {
                    debug!(field = field.key(), rule = clause.token(), "clause failed");
                    return Ok(Outcome::Failed(Failure {
                        field: field.key.clone(),
                        rule: clause.token.clone(),
                        message: clause.message.clone(),
                    }));
                }
            }
        }
        Ok(Outcome::Passed)
    }

    /// Checks that every clause resolved to a known rule.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRule` for the first clause that did not.
    pub fn ensure_resolved(&self) -> Result<(), RuleError> {
        match self
            .fields
            .iter()
            .flat_map(|f| f.clauses.iter())
            .find(|c| !c.is_resolved())
        {
            Some(clause) => Err(RuleError::InvalidRule(clause.token.clone())),
            None => Ok(()),
        }
    }
}
