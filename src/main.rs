//! formica CLI - ant colony TSP solver
//!
//! Command-line interface for solving edge-list TSP instances.

use std::process::ExitCode;

use formica::cli::{run, Args};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    run(&args)
}
