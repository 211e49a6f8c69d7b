use ruleguard_core::{Outcome, ValidationResult};

use crate::Reporter;

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("RuleGuard v{} - Validation Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    pub fn print_loading_start(&self) {
        println!("Loading forms...");
    }

    pub fn print_loading_progress(&self, current: usize, total: usize, name: &str) {
        println!("  [{}/{}] {}", current, total, name);
    }

    pub fn print_validation_start(&self) {
        println!("\nValidating...");
    }

    pub fn print_form_result(&self, result: &ValidationResult) {
        println!("{}", format_form_result(result));
    }

    pub fn print_summary(&self, passed: usize, failed: usize) {
        println!("\n{}", "=".repeat(self.intro_len));
        println!("Result: {} failed, {} passed", failed, passed);
    }
}

/// Renders one form result, with the failing field, rule and message when
/// the form did not pass.
pub fn format_form_result(result: &ValidationResult) -> String {
    let status = if result.is_passed() { "PASSED" } else { "FAILED" };
    let mut out = format!(
        "\n{} ({} fields) - {}",
        result.form_name, result.field_count, status
    );
    if let Outcome::Failed(failure) = &result.outcome {
        let field = failure.field.as_deref().unwrap_or("<value>");
        out.push_str(&format!("\n  {}: {}", field, failure.rule.trim()));
        if !failure.message.is_empty() {
            out.push_str(&format!("\n  Error: {}", failure.message));
        }
    }
    out
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        let i = "=".repeat(self.intro_len);

        println!("{}", self.intro);
        println!("{}", i);
    }

    fn on_loading(&self) {
        self.print_loading_start();
    }

    fn on_form_load(&self, current: usize, total: usize, name: &str) {
        self.print_loading_progress(current, total, name);
    }

    fn on_validation_start(&self) {
        self.print_validation_start();
    }

    fn on_form_result(&mut self, result: &ValidationResult) {
        self.print_form_result(result);
    }

    fn on_summary(&mut self, passed: usize, failed: usize) {
        self.print_summary(passed, failed);
    }
}
