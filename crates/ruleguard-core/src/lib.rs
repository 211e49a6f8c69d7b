//! Declarative field validation driven by compact rule strings.
//!
//! ```
//! use ruleguard_core::{validate, RuleSpec};
//! use serde_json::json;
//!
//! let outcome = validate(&json!("user@example.com"), &RuleSpec::from("required|email")).unwrap();
//! assert!(outcome.is_passed());
//! ```

pub mod compiler;
pub mod errors;
pub mod results;
pub mod rules;
pub mod types;
pub mod utils;
pub mod validator;

pub use compiler::compile;
pub use errors::RuleError;
pub use results::{Failure, Outcome, ValidationResult};
pub use types::RuleSpec;
pub use validator::{validate, Clause, FieldRules, Form, RuleSet, Validator};
