use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Caller-supplied description of which clauses apply to which field(s).
///
/// The meaning of [`RuleSpec::Map`] depends on the value being validated:
/// - for a scalar value, keys are clause tokens and values are the custom
///   failure messages (`{"length:3,10": "too short or too long"}`);
/// - for a mapping or list value, keys are field names and each value is
///   that field's own `RuleSpec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSpec {
    /// Pipe-delimited clauses, e.g. `"required|email|length:10,20"`.
    Text(String),
    /// Ordered map whose keys are clause tokens or field names.
    Map(IndexMap<String, RuleSpec>),
}

impl RuleSpec {
    /// Builds a map spec from ordered `(key, spec)` pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<RuleSpec>,
        I: IntoIterator<Item = (K, V)>,
    {
        RuleSpec::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleSpec::Text(s) => Some(s.as_str()),
            RuleSpec::Map(_) => None,
        }
    }
}

impl From<&str> for RuleSpec {
    fn from(value: &str) -> Self {
        RuleSpec::Text(value.to_string())
    }
}

impl From<String> for RuleSpec {
    fn from(value: String) -> Self {
        RuleSpec::Text(value)
    }
}

impl From<IndexMap<String, RuleSpec>> for RuleSpec {
    fn from(value: IndexMap<String, RuleSpec>) -> Self {
        RuleSpec::Map(value)
    }
}
