//! CLI argument parsing.
//!
//! This module provides the argument parser for the formica CLI.
//! Extracted to enable comprehensive testing of argument parsing logic.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Solve a TSP instance from an edge-list file.
    Solve {
        /// Path to the whitespace-delimited edge list.
        input_path: PathBuf,
        /// Optional YAML configuration file.
        config_path: Option<PathBuf>,
        /// Optional seed override.
        seed_override: Option<u64>,
        /// Optional directory for per-iteration trace files.
        metrics_dir: Option<PathBuf>,
    },
    /// Show help.
    Help,
    /// Show version.
    Version,
    /// Unusable arguments, with a message for the user.
    Invalid(String),
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        match args[1].as_str() {
            "solve" => Self::parse_solve(&args[2..]),
            "help" | "--help" | "-h" => Self {
                command: Command::Help,
            },
            "version" | "--version" | "-V" => Self {
                command: Command::Version,
            },
            other => Self {
                command: Command::Invalid(format!("unknown command '{other}'")),
            },
        }
    }

    fn parse_solve(rest: &[String]) -> Self {
        let mut input_path = None;
        let mut config_path = None;
        let mut seed_override = None;
        let mut metrics_dir = None;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--config" => {
                    let Some(value) = rest.get(i + 1) else {
                        return Self::invalid("--config requires a path");
                    };
                    config_path = Some(PathBuf::from(value));
                    i += 2;
                }
                "--seed" => {
                    let Some(value) = rest.get(i + 1) else {
                        return Self::invalid("--seed requires a value");
                    };
                    let Ok(seed) = value.parse::<u64>() else {
                        return Self::invalid(format!("--seed '{value}' is not an integer"));
                    };
                    seed_override = Some(seed);
                    i += 2;
                }
                "--metrics-dir" => {
                    let Some(value) = rest.get(i + 1) else {
                        return Self::invalid("--metrics-dir requires a path");
                    };
                    metrics_dir = Some(PathBuf::from(value));
                    i += 2;
                }
                flag if flag.starts_with("--") => {
                    return Self::invalid(format!("unknown flag '{flag}'"));
                }
                positional => {
                    if input_path.is_some() {
                        return Self::invalid(format!("unexpected argument '{positional}'"));
                    }
                    input_path = Some(PathBuf::from(positional));
                    i += 1;
                }
            }
        }

        let Some(input_path) = input_path else {
            return Self::invalid("solve requires an edge-list path");
        };

        Self {
            command: Command::Solve {
                input_path,
                config_path,
                seed_override,
                metrics_dir,
            },
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            command: Command::Invalid(message.into()),
        }
    }
}

/// Help text for the CLI.
#[must_use]
pub const fn help_text() -> &'static str {
    "formica - ant colony optimization for sparse TSP instances

Usage:
  formica solve <edges.txt> [--config <config.yaml>] [--seed <n>] [--metrics-dir <dir>]
  formica help
  formica version

The edge list is whitespace-delimited text, one 'v1 v2 weight' triple per
line. Missing edges are completed with a 10x penalty weight."
}
