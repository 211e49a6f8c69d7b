pub mod formatters;

use ruleguard_core::ValidationResult;
pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};

pub trait Reporter {
    fn on_start(&self);
    fn on_loading(&self);
    fn on_form_load(&self, current: usize, total: usize, name: &str);
    fn on_validation_start(&self);
    fn on_form_result(&mut self, result: &ValidationResult);
    fn on_summary(&mut self, passed: usize, failed: usize);
}
