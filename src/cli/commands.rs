//! Command execution for the CLI.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::info;

use crate::cli::args::{help_text, Args, Command};
use crate::colony::AntColony;
use crate::config::ColonyConfig;
use crate::error::AcoResult;
use crate::graph::DistanceMatrix;
use crate::io::read_edge_list;
use crate::metrics::{FileSink, NullSink};

/// Execute a parsed command.
#[must_use]
pub fn run(args: &Args) -> ExitCode {
    match &args.command {
        Command::Help => {
            println!("{}", help_text());
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("formica v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Invalid(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{}", help_text());
            ExitCode::FAILURE
        }
        Command::Solve {
            input_path,
            config_path,
            seed_override,
            metrics_dir,
        } => match run_solve(input_path, config_path.as_deref(), *seed_override, metrics_dir) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run_solve(
    input_path: &Path,
    config_path: Option<&Path>,
    seed_override: Option<u64>,
    metrics_dir: &Option<PathBuf>,
) -> AcoResult<()> {
    let mut config = match config_path {
        Some(path) => ColonyConfig::load(path)?,
        None => ColonyConfig::default(),
    };
    if let Some(seed) = seed_override {
        config.seed = seed;
    }

    let edges = read_edge_list(input_path)?;
    let distances = DistanceMatrix::from_edges(&edges)?;
    info!(
        n = distances.n(),
        edges = edges.len(),
        seed = config.seed,
        "instance loaded"
    );

    let colony = AntColony::new(config)?;

    let solution = match metrics_dir {
        Some(dir) => {
            let mut sink = FileSink::create(dir)?;
            let solution = colony.solve(&distances, &mut sink)?;
            sink.flush()?;
            solution
        }
        None => {
            let mut sink = NullSink;
            colony.solve(&distances, &mut sink)?
        }
    };

    print_solution(&solution)
}

fn print_solution(solution: &crate::colony::Solution) -> AcoResult<()> {
    println!("Best path length: {}", solution.best_length);
    let path: Vec<String> = solution.best_tour.iter().map(ToString::to_string).collect();
    println!("Best path: {}", path.join(" -> "));
    Ok(())
}
