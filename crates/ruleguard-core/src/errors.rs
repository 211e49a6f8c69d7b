use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A clause names no known predicate, or its message is not text
    #[error("Invalid validation rule: '{0}'")]
    InvalidRule(String),

    /// Form not registered in the current Validator
    #[error("Form '{0}' not found in Validator")]
    FormNotFound(String),
}
