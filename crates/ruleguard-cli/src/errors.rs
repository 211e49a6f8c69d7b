use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file contains no form")]
    NoForms,
    #[error("Input file not found for form '{form_name}': '{path}'")]
    InputNotFound { form_name: String, path: String },
    #[error("Form '{form_name}' is declared more than once")]
    DuplicateForm { form_name: String },
}
