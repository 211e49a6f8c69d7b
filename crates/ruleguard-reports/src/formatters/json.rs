use chrono::Local;
use ruleguard_core::{Outcome, ValidationResult};
use serde::{Deserialize, Serialize};
use serde_json::Error;

use crate::Reporter;

#[derive(Serialize, Deserialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    forms: Vec<FormFormatter>,
    passed: usize,
    failed: usize,
}

#[derive(Serialize, Deserialize)]
struct FormFormatter {
    name: String,
    n_fields: usize,
    pass: bool,
    failure: Option<FailureFormatter>,
}

#[derive(Serialize, Deserialize)]
struct FailureFormatter {
    field: Option<String>,
    rule: String,
    message: String,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            forms: Vec::new(),
            passed: 0,
            failed: 0,
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_loading(&self) {}

    fn on_form_load(&self, _current: usize, _total: usize, _name: &str) {}

    fn on_validation_start(&self) {}

    fn on_form_result(&mut self, result: &ValidationResult) {
        let failure = match &result.outcome {
            Outcome::Passed => None,
            Outcome::Failed(f) => Some(FailureFormatter {
                field: f.field.clone(),
                rule: f.rule.trim().to_string(),
                message: f.message.clone(),
            }),
        };
        self.forms.push(FormFormatter {
            name: result.form_name.clone(),
            n_fields: result.field_count,
            pass: result.is_passed(),
            failure,
        });
    }

    fn on_summary(&mut self, passed: usize, failed: usize) {
        self.passed = passed;
        self.failed = failed;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ruleguard_core::Failure;

    #[test]
    fn test_json_report_document() {
        let mut formatter = JsonFormatter::new("0.1.0".to_string());
        formatter.on_form_result(&ValidationResult::new(
            "users".to_string(),
            1,
            Outcome::Passed,
        ));
        formatter.on_form_result(&ValidationResult::new(
            "orders".to_string(),
            2,
            Outcome::Failed(Failure {
                field: Some("qty".to_string()),
                rule: "range:1".to_string(),
                message: "qty must be positive".to_string(),
            }),
        ));
        formatter.on_summary(1, 1);

        let doc: serde_json::Value = serde_json::from_str(&formatter.to_json().unwrap()).unwrap();
        assert_eq!(doc["version"], "0.1.0");
        assert_eq!(doc["passed"], 1);
        assert_eq!(doc["failed"], 1);
        assert_eq!(doc["forms"][0]["name"], "users");
        assert_eq!(doc["forms"][0]["pass"], true);
        assert!(doc["forms"][0]["failure"].is_null());
        assert_eq!(doc["forms"][1]["failure"]["field"], "qty");
        assert_eq!(doc["forms"][1]["failure"]["message"], "qty must be positive");
    }
}
