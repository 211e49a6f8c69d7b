use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use ruleguard_core::{Form, RuleSpec};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::ConfigError;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub form: Vec<FormConfig>,
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    pub name: String,
    /// JSON input, relative paths are taken from the config file's directory.
    pub path: String,
    pub rules: RuleSpec,
}

impl Config {
    pub fn input_path(&self, form: &FormConfig) -> PathBuf {
        let path = Path::new(&form.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Reads the form's JSON input and pairs it with its rules.
    pub fn load_form(&self, form: &FormConfig) -> Result<Form> {
        let path = self.input_path(form);
        if !path.exists() {
            return Err(ConfigError::InputNotFound {
                form_name: form.name.clone(),
                path: path.display().to_string(),
            }
            .into());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse input file: {}", path.display()))?;
        Ok(Form::new(value, form.rules.clone()))
    }
}

pub fn parse_config(config_path: &str) -> Result<Config> {
    let path = PathBuf::from(config_path);
    let config_str = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    if config.form.is_empty() {
        return Err(ConfigError::NoForms.into());
    }
    let mut seen = HashSet::new();
    for form in &config.form {
        if !seen.insert(form.name.as_str()) {
            return Err(ConfigError::DuplicateForm {
                form_name: form.name.clone(),
            }
            .into());
        }
    }
    config.base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    Ok(config)
}
