use anyhow::{Context, Result};
use ruleguard_core::Validator;
use ruleguard_reports::{JsonFormatter, Reporter, StdOutFormatter};
use tracing::info;

use crate::{parser::parse_config, Args, OutputFormat};

/// Loads and validates every configured form.
///
/// Returns `Ok(true)` when every form passes.
pub fn run(args: &Args) -> Result<bool> {
    let version = env!("CARGO_PKG_VERSION").to_string();
    match args.output {
        OutputFormat::Stdout => {
            let mut formatter = StdOutFormatter::new(version);
            run_with(args, &mut formatter)
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(version);
            let passed = run_with(args, &mut formatter)?;
            let json = formatter
                .to_json()
                .context("Failed to serialize validation report")?;
            println!("{}", json);
            Ok(passed)
        }
    }
}

fn run_with<R: Reporter>(args: &Args, reporter: &mut R) -> Result<bool> {
    let config_path = args
        .config
        .as_deref()
        .context("A configuration file is required")?;

    reporter.on_start();
    reporter.on_loading();
    let config = parse_config(config_path)?;

    let mut validator = Validator::new();
    validator.set_strict(args.strict);
    let n_form = config.form.len();
    for (i, f) in config.form.iter().enumerate() {
        reporter.on_form_load(i + 1, n_form, &f.name);
        let form = config
            .load_form(f)
            .with_context(|| format!("Failed to load form: '{}'", f.name))?;
        validator.add_form(f.name.clone(), form);
    }

    reporter.on_validation_start();
    let results = validator.validate_all()?;
    for r in &results {
        reporter.on_form_result(r);
    }
    let passed = results.iter().filter(|r| r.is_passed()).count();
    let failed = results.len() - passed;
    reporter.on_summary(passed, failed);
    info!(passed, failed, "validation finished");

    Ok(failed == 0)
}
