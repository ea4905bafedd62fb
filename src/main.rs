//! Multiret demo runner
//!
//! Prints a fixed eight-line transcript showing multiple-value returns via a
//! positional tuple and a named struct. Tracing goes to stderr so stdout stays
//! byte-exact.

use clap::Parser;
use std::process::ExitCode;
use tracing::error;

/// Demonstrates returning multiple values via tuples and named structs.
#[derive(Parser)]
#[command(version, about)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    let log_level = std::env::var("MULTIRET_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout();
    match multiret::run(&mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}
