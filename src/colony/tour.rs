//! Tour construction: one ant's walk through every vertex.
//!
//! A tour is an implicitly closed permutation of all vertices. Construction
//! starts at a uniformly random vertex and repeatedly samples the next
//! vertex from the transition distribution over the shrinking unvisited
//! set — weighted random choice, not argmax, which is what keeps the search
//! stochastic rather than greedy.

use serde::{Deserialize, Serialize};

use crate::colony::pheromone::PheromoneMatrix;
use crate::colony::probability::transition_probabilities;
use crate::engine::rng::ColonyRng;
use crate::error::AcoResult;
use crate::graph::DistanceMatrix;

/// One complete tour: an ordered permutation of all vertices, closed by the
/// arc from the last vertex back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Visit order; every vertex index appears exactly once.
    vertices: Vec<usize>,
    /// Probability with which each non-start vertex was chosen, in visit
    /// order. Diagnostic only; never fed back into the algorithm.
    choice_probabilities: Vec<f64>,
}

impl Tour {
    /// Wrap an explicit visit order (no recorded probabilities).
    #[must_use]
    pub fn from_vertices(vertices: Vec<usize>) -> Self {
        Self {
            vertices,
            choice_probabilities: Vec::new(),
        }
    }

    /// Build one tour by repeated weighted-random selection.
    ///
    /// The loop terminates after exactly `n - 1` selections because the
    /// unvisited set strictly shrinks by one each step, and the tour never
    /// revisits a vertex because selection is restricted to that set.
    ///
    /// # Errors
    ///
    /// Propagates `AcoError::InvariantViolation` from the probability model.
    pub fn construct(
        distances: &DistanceMatrix,
        pheromone: &PheromoneMatrix,
        alpha: f64,
        beta: f64,
        rng: &mut ColonyRng,
    ) -> AcoResult<Self> {
        let n = distances.n();
        let mut visited = vec![false; n];
        let mut vertices = Vec::with_capacity(n);
        let mut choice_probabilities = Vec::with_capacity(n.saturating_sub(1));

        let start = rng.gen_index(n);
        vertices.push(start);
        visited[start] = true;

        while vertices.len() < n {
            let current = vertices[vertices.len() - 1];
            let unvisited: Vec<usize> = (0..n).filter(|&v| !visited[v]).collect();

            let probabilities =
                transition_probabilities(current, &unvisited, distances, pheromone, alpha, beta)?;

            let idx = rng.choose_weighted(&probabilities);
            let next = unvisited[idx];
            choice_probabilities.push(probabilities[idx]);

            vertices.push(next);
            visited[next] = true;
        }

        Ok(Self {
            vertices,
            choice_probabilities,
        })
    }

    /// Visit order.
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Probability of each selection step, in visit order.
    #[must_use]
    pub fn choice_probabilities(&self) -> &[f64] {
        &self.choice_probabilities
    }

    /// Mean probability across the recorded selection steps (diagnostic).
    #[must_use]
    pub fn average_choice_probability(&self) -> f64 {
        if self.choice_probabilities.is_empty() {
            return 0.0;
        }
        self.choice_probabilities.iter().sum::<f64>() / self.choice_probabilities.len() as f64
    }

    /// Consecutive vertex pairs, wrap-around arc included.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Total tour length, closing arc included.
    #[must_use]
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        self.arcs().map(|(a, b)| distances.distance(a, b)).sum()
    }

    /// Check that the tour visits every vertex of `[0, n)` exactly once.
    #[must_use]
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.vertices.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &v in &self.vertices {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }
}
