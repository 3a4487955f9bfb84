//! The solve loop: construct, select, update, report.
//!
//! Each iteration sends every ant out to build a tour against the same
//! frozen distance and pheromone matrices, picks the iteration-best tour,
//! folds it into the running global best, then evaporates and reinforces
//! the pheromone matrix with all of the iteration's tours. The pheromone
//! matrix is the sole carrier of memory between iterations.
//!
//! Ants within one iteration share only read-only state, so the construct
//! phase could run concurrently; the reference loop is sequential, and
//! parallelizing it without changing output would need one RNG stream per
//! ant.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::colony::pheromone::PheromoneMatrix;
use crate::colony::tour::Tour;
use crate::config::ColonyConfig;
use crate::engine::rng::ColonyRng;
use crate::error::AcoResult;
use crate::graph::DistanceMatrix;
use crate::metrics::{IterationMetrics, MetricsSink};

/// Final output of a solve run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Shortest tour found, as a visit order over all vertices.
    pub best_tour: Vec<usize>,
    /// Length of the best tour, closing arc included.
    pub best_length: f64,
    /// Iteration-best length for every iteration, in order.
    pub iteration_best_lengths: Vec<f64>,
}

/// Ant colony solver for complete-graph TSP instances.
#[derive(Debug, Clone)]
pub struct AntColony {
    config: ColonyConfig,
}

impl AntColony {
    /// Create a solver from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any parameter is out of range.
    pub fn new(config: ColonyConfig) -> AcoResult<Self> {
        config.validate_all()?;
        Ok(Self { config })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Run the full iteration loop with an RNG seeded from the config.
    ///
    /// # Errors
    ///
    /// Propagates invariant violations from tour construction and pheromone
    /// update. Sink failures are logged and do not abort the run.
    pub fn solve(
        &self,
        distances: &DistanceMatrix,
        sink: &mut dyn MetricsSink,
    ) -> AcoResult<Solution> {
        let mut rng = ColonyRng::new(self.config.seed);
        self.solve_with_rng(distances, &mut rng, sink)
    }

    /// Run the full iteration loop with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// Propagates invariant violations from tour construction and pheromone
    /// update. Sink failures are logged and do not abort the run.
    pub fn solve_with_rng(
        &self,
        distances: &DistanceMatrix,
        rng: &mut ColonyRng,
        sink: &mut dyn MetricsSink,
    ) -> AcoResult<Solution> {
        let n = distances.n();
        let mut pheromone = PheromoneMatrix::uniform(n);

        let mut best_tour: Option<Tour> = None;
        let mut best_length = f64::INFINITY;
        let mut iteration_best_lengths = Vec::with_capacity(self.config.n_iterations);

        for iteration in 0..self.config.n_iterations {
            // Construct: one tour per ant against frozen matrices.
            let mut tours = Vec::with_capacity(self.config.n_ants);
            for _ in 0..self.config.n_ants {
                tours.push(Tour::construct(
                    distances,
                    &pheromone,
                    self.config.alpha,
                    self.config.beta,
                    rng,
                )?);
            }

            // Select: iteration best, then fold into the global best.
            // Strict < on both comparisons keeps the earliest tour on ties.
            let mut iteration_best: Option<(usize, f64)> = None;
            for (i, tour) in tours.iter().enumerate() {
                let length = tour.length(distances);
                if iteration_best.map_or(true, |(_, best)| length < best) {
                    iteration_best = Some((i, length));
                }
            }
            let Some((best_idx, iteration_best_length)) = iteration_best else {
                // n_ants >= 1 is enforced by config validation.
                continue;
            };

            if iteration_best_length < best_length {
                best_length = iteration_best_length;
                best_tour = Some(tours[best_idx].clone());
            }
            iteration_best_lengths.push(iteration_best_length);

            // Diagnostics are only meaningful once a global best exists.
            let (avg_pheromone, avg_probability) = best_tour.as_ref().map_or((None, None), |best| {
                (
                    Some(pheromone.average_on(best.vertices())),
                    Some(tours[best_idx].average_choice_probability()),
                )
            });

            // Update: evaporate, then reinforce with all tours.
            pheromone.update(&tours, distances, self.config.decay)?;

            debug!(
                iteration,
                iteration_best_length, global_best_length = best_length, "iteration complete"
            );

            let metrics = IterationMetrics {
                iteration,
                iteration_best_length,
                global_best_length: best_length,
                avg_pheromone_on_best: avg_pheromone,
                avg_choice_probability: avg_probability,
            };
            if let Err(e) = sink.record(&metrics) {
                // Reporting must never abort a solve in flight.
                warn!(iteration, error = %e, "metrics sink failed; continuing");
            }
        }

        Ok(Solution {
            best_tour: best_tour.map(|t| t.vertices().to_vec()).unwrap_or_default(),
            best_length,
            iteration_best_lengths,
        })
    }
}
