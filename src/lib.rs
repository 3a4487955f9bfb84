//! # formica
//!
//! Ant colony optimization for the traveling salesman problem on sparse,
//! undirected, weighted graphs.
//!
//! Missing edges are completed with a large synthetic penalty weight so any
//! instance becomes a complete-graph TSP; a colony of ants then builds tours
//! by weighted-random selection over pheromone trails and inverse-distance
//! desirability, with per-iteration evaporation and reinforcement.
//!
//! ## Example
//!
//! ```rust
//! use formica::prelude::*;
//!
//! let edges = formica::io::parse_edge_list("0 1 1\n1 2 1\n2 3 1\n3 0 1\n0 2 2\n1 3 2")?;
//! let distances = DistanceMatrix::from_edges(&edges)?;
//!
//! let config = ColonyConfig::builder().seed(42).n_ants(5).n_iterations(20).build();
//! let colony = AntColony::new(config)?;
//!
//! let mut sink = MemorySink::default();
//! let solution = colony.solve(&distances, &mut sink)?;
//! assert_eq!(solution.best_tour.len(), 4);
//! # Ok::<(), formica::AcoError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
    clippy::needless_range_loop   // Sometimes range loops are clearer
)]

pub mod cli;
pub mod colony;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod io;
pub mod metrics;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::colony::{AntColony, PheromoneMatrix, Solution, Tour};
    pub use crate::config::{ColonyConfig, ColonyConfigBuilder};
    pub use crate::engine::rng::ColonyRng;
    pub use crate::error::{AcoError, AcoResult};
    pub use crate::graph::{DistanceMatrix, Edge};
    pub use crate::metrics::{IterationMetrics, MemorySink, MetricsSink, NullSink};
}

/// Re-export for public API
pub use error::{AcoError, AcoResult};
