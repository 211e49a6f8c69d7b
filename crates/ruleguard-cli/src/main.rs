mod errors;
mod parser;
mod rules_doc;
mod runner;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for validation results
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Print results to standard output (human-readable)
    Stdout,
    /// Output results in JSON format
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "ruleguard",
    version,
    author = "RuleGuard Contributors",
    about = "RuleGuard CLI - Rule-string validation for JSON forms",
    long_about = "RuleGuard validates JSON documents against compact rule strings such as \
                  \"required|email|length:10,20\". Each form of the configuration pairs an \
                  input file with its rules, and the first failing clause of a form is \
                  reported with its custom message.\n\n\
                  Example usage:\n  \
                  ruleguard --config forms.toml --output stdout"
)]
struct Args {
    /// Path to the TOML configuration file that defines the forms
    #[arg(short, long, value_name = "FILE", required_unless_present = "list_rules")]
    config: Option<String>,

    /// Output format for validation results
    #[arg(short, long, value_enum, default_value = "stdout")]
    output: OutputFormat,

    /// Reject unknown rules before validating, even when an earlier clause fails
    #[arg(short, long)]
    strict: bool,

    /// Enable debug logging and detailed error backtraces
    #[arg(short, long)]
    debug: bool,

    /// Print the available validation rules and exit
    #[arg(long)]
    list_rules: bool,
}

fn init_tracing(debug: bool) {
    let default = if debug { "ruleguard=debug" } else { "ruleguard=info" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// 0 when every form passes, 1 on a validation failure, 2 on any error.
fn exit_code(result: &Result<bool>) -> i32 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn main() {
    let args = Args::parse();

    // Enable backtraces in debug mode
    if args.debug {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
    init_tracing(args.debug);

    if args.list_rules {
        rules_doc::print_rules_documentation();
        return;
    }

    let result = runner::run(&args);
    if let Err(err) = &result {
        if std::env::var("RUST_BACKTRACE").is_ok() {
            eprintln!("Error: {:?}", err);
        } else {
            eprintln!("Error: {:#}", err);
            eprintln!("\nHint: Run with --debug flag for detailed stack traces");
        }
    }
    std::process::exit(exit_code(&result));
}
