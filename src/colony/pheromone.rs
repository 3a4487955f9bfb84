//! Pheromone memory: the only state carried between solver iterations.
//!
//! Each iteration evaporates every trail by a constant factor and then
//! reinforces the arcs used by that iteration's tours with `1 / length`,
//! so shorter tours deposit more. Both directions of an arc are updated
//! identically, keeping the matrix symmetric by construction.

use serde::{Deserialize, Serialize};

use crate::colony::tour::Tour;
use crate::error::{AcoError, AcoResult};
use crate::graph::DistanceMatrix;

/// Dense symmetric matrix of pheromone levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PheromoneMatrix {
    n: usize,
    values: Vec<Vec<f64>>,
}

impl PheromoneMatrix {
    /// Create the initial pheromone state: every entry at `1/n`.
    #[must_use]
    pub fn uniform(n: usize) -> Self {
        let level = 1.0 / n as f64;
        Self {
            n,
            values: vec![vec![level; n]; n],
        }
    }

    /// Matrix dimension.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Pheromone level on the arc between two vertices.
    #[must_use]
    pub fn level(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for row in &mut self.values {
            for value in row.iter_mut() {
                *value *= factor;
            }
        }
    }

    /// Add `amount` to both directions of the arc (i, j).
    pub fn deposit(&mut self, i: usize, j: usize, amount: f64) {
        self.values[i][j] += amount;
        self.values[j][i] += amount;
    }

    /// One full pheromone update: evaporate, then reinforce.
    ///
    /// Every entry is scaled by `(1 - decay)`; then each tour deposits
    /// `1 / length` on every arc it traversed, wrap-around arc included.
    /// An empty tour slice performs evaporation only.
    ///
    /// # Errors
    ///
    /// Returns `AcoError::InvariantViolation` if any tour has non-positive
    /// length. Distances are all positive, so this can only happen through
    /// a logic bug upstream and must not be papered over.
    pub fn update(&mut self, tours: &[Tour], distances: &DistanceMatrix, decay: f64) -> AcoResult<()> {
        self.scale(1.0 - decay);

        for tour in tours {
            let length = tour.length(distances);
            if length <= 0.0 {
                return Err(AcoError::invariant(format!(
                    "tour of non-positive length {length} during pheromone update"
                )));
            }
            let deposit = 1.0 / length;
            for (a, b) in tour.arcs() {
                self.deposit(a, b, deposit);
            }
        }

        Ok(())
    }

    /// Mean pheromone level along a tour's arcs (diagnostic).
    #[must_use]
    pub fn average_on(&self, vertices: &[usize]) -> f64 {
        if vertices.is_empty() {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..vertices.len() {
            let a = vertices[i];
            let b = vertices[(i + 1) % vertices.len()];
            total += self.values[a][b];
        }
        total / vertices.len() as f64
    }

    /// Check symmetry of the full matrix.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (0..self.n).all(|j| self.values[i][j] == self.values[j][i]))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn square_instance() -> DistanceMatrix {
        let edges = vec![
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 1),
            Edge::new(2, 3, 1),
            Edge::new(3, 0, 1),
            Edge::new(0, 2, 2),
            Edge::new(1, 3, 2),
        ];
        DistanceMatrix::from_edges(&edges).expect("valid edges")
    }

    #[test]
    fn test_uniform_initialization() {
        let pheromone = PheromoneMatrix::uniform(4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(pheromone.level(i, j), 0.25);
            }
        }
    }

    #[test]
    fn test_evaporation_only_is_exact() {
        // No reinforcement: every entry must equal previous * (1 - decay).
        let distances = square_instance();
        let mut pheromone = PheromoneMatrix::uniform(4);
        let before = pheromone.clone();

        pheromone.update(&[], &distances, 0.1).expect("no tours");

        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(pheromone.level(i, j), before.level(i, j) * 0.9);
            }
        }
    }

    #[test]
    fn test_reinforcement_is_symmetric() {
        let distances = square_instance();
        let mut pheromone = PheromoneMatrix::uniform(4);
        let tour = Tour::from_vertices(vec![0, 1, 2, 3]);

        pheromone.update(&[tour], &distances, 0.1).expect("valid tour");

        assert!(pheromone.is_symmetric());
    }

    #[test]
    fn test_used_arcs_gain_over_unused() {
        let distances = square_instance();
        let mut pheromone = PheromoneMatrix::uniform(4);
        let tour = Tour::from_vertices(vec![0, 1, 2, 3]);

        pheromone.update(&[tour], &distances, 0.1).expect("valid tour");

        // Arc 0-1 was traversed; arc 0-2 was not.
        assert!(pheromone.level(0, 1) > pheromone.level(0, 2));
    }

    #[test]
    fn test_deposit_amount_is_inverse_length() {
        let distances = square_instance();
        let mut pheromone = PheromoneMatrix::uniform(4);
        let tour = Tour::from_vertices(vec![0, 1, 2, 3]); // length 4

        pheromone.update(&[tour], &distances, 0.1).expect("valid tour");

        let expected = 0.25 * 0.9 + 1.0 / 4.0;
        assert!((pheromone.level(0, 1) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_shorter_tours_reinforce_more() {
        let distances = square_instance();

        let mut short_run = PheromoneMatrix::uniform(4);
        short_run
            .update(&[Tour::from_vertices(vec![0, 1, 2, 3])], &distances, 0.1)
            .expect("valid tour"); // length 4

        let mut long_run = PheromoneMatrix::uniform(4);
        long_run
            .update(&[Tour::from_vertices(vec![0, 2, 1, 3])], &distances, 0.1)
            .expect("valid tour"); // length 6

        assert!(short_run.level(0, 1) > long_run.level(0, 2));
    }

    #[test]
    fn test_average_on_tour() {
        let pheromone = PheromoneMatrix::uniform(4);
        let avg = pheromone.average_on(&[0, 1, 2, 3]);
        assert!((avg - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_average_on_empty() {
        let pheromone = PheromoneMatrix::uniform(4);
        assert_eq!(pheromone.average_on(&[]), 0.0);
    }

    #[test]
    fn test_zero_length_tour_is_invariant_violation() {
        // A tour with no vertices has no arcs, so its length is 0; the
        // update must refuse it rather than deposit an infinite amount.
        let distances = square_instance();
        let mut pheromone = PheromoneMatrix::uniform(4);

        let err = pheromone
            .update(&[Tour::from_vertices(vec![])], &distances, 0.1)
            .expect_err("zero-length tour");
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_repeated_evaporation_decays_toward_zero() {
        let distances = square_instance();
        let mut pheromone = PheromoneMatrix::uniform(4);
        for _ in 0..200 {
            pheromone.update(&[], &distances, 0.1).expect("no tours");
        }
        assert!(pheromone.level(0, 1) < 1e-8);
        assert!(pheromone.level(0, 1) >= 0.0);
    }
}
