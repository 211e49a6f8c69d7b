pub mod rule_set;
pub mod validation;

pub use rule_set::{Clause, FieldRules, RuleSet};
pub use validation::{validate, Form, Validator};
