//! Transition probability model.
//!
//! For a candidate `c` reachable from the current vertex, desirability is
//!
//! ```text
//! d(c) = pheromone[current][c]^alpha * (1 / distance[current][c])^beta
//! ```
//!
//! normalized over the unvisited set. The model is a pure function; all
//! randomness lives in the caller's sampling step.

use crate::colony::pheromone::PheromoneMatrix;
use crate::error::{AcoError, AcoResult};
use crate::graph::DistanceMatrix;

/// Compute the normalized selection distribution over `unvisited`.
///
/// The returned vector is aligned with `unvisited` order and sums to 1.
/// If every desirability is exactly zero (pheromone fully evaporated, or
/// underflow) the distribution degenerates to uniform: no information means
/// choose randomly. This is an expected condition, not an error.
///
/// # Errors
///
/// Returns `AcoError::InvariantViolation` if the desirability total is
/// non-finite, which indicates corrupted pheromone or distance state.
pub fn transition_probabilities(
    current: usize,
    unvisited: &[usize],
    distances: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    alpha: f64,
    beta: f64,
) -> AcoResult<Vec<f64>> {
    let mut desirability = Vec::with_capacity(unvisited.len());
    for &candidate in unvisited {
        let trail = pheromone.level(current, candidate).powf(alpha);
        let heuristic = distances.distance(current, candidate).recip().powf(beta);
        desirability.push(trail * heuristic);
    }

    let total: f64 = desirability.iter().sum();
    if !total.is_finite() {
        return Err(AcoError::invariant(format!(
            "non-finite desirability total {total} at vertex {current}"
        )));
    }

    if total == 0.0 {
        // Degenerate case: uniform fallback instead of dividing by zero.
        let uniform = 1.0 / unvisited.len() as f64;
        return Ok(vec![uniform; unvisited.len()]);
    }

    Ok(desirability.into_iter().map(|d| d / total).collect())
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
    fn test_probabilities_sum_to_one() {
        let distances = square_instance();
        let pheromone = PheromoneMatrix::uniform(4);

        let probs = transition_probabilities(0, &[1, 2, 3], &distances, &pheromone, 1.0, 2.0)
            .expect("finite inputs");

        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12, "probabilities sum to {sum}");
    }

    #[test]
    fn test_shorter_edges_more_probable() {
        let distances = square_instance();
        let pheromone = PheromoneMatrix::uniform(4);

        // From 0: vertices 1 and 3 are at distance 1, vertex 2 at distance 2.
        let probs = transition_probabilities(0, &[1, 2, 3], &distances, &pheromone, 1.0, 2.0)
            .expect("finite inputs");

        assert!(probs[0] > probs[1], "d=1 should beat d=2");
        assert!(probs[2] > probs[1], "d=1 should beat d=2");
        assert!((probs[0] - probs[2]).abs() < 1e-12, "equal edges, equal mass");
    }

    #[test]
    fn test_uniform_fallback_on_zero_desirability() {
        let distances = square_instance();
        let mut pheromone = PheromoneMatrix::uniform(4);
        pheromone.scale(0.0); // evaporate everything to exactly zero

        let probs = transition_probabilities(0, &[1, 2, 3], &distances, &pheromone, 1.0, 2.0)
            .expect("zero mass is not an error");

        for p in &probs {
            assert!((p - 1.0 / 3.0).abs() < 1e-12, "expected uniform, got {p}");
        }
    }

    #[test]
    fn test_fallback_triggers_only_on_exact_zero() {
        let distances = square_instance();
        let mut pheromone = PheromoneMatrix::uniform(4);
        pheromone.scale(1e-300); // tiny but non-zero mass

        let probs = transition_probabilities(0, &[1, 2, 3], &distances, &pheromone, 1.0, 2.0)
            .expect("finite inputs");

        // Still biased toward shorter edges, not uniform.
        assert!(probs[0] > probs[1]);
    }

    #[test]
    fn test_alpha_zero_ignores_pheromone() {
        let distances = square_instance();
        let mut pheromone = PheromoneMatrix::uniform(4);
        // Pile pheromone onto the long edge 0-2; alpha=0 must ignore it.
        pheromone.deposit(0, 2, 100.0);

        let probs = transition_probabilities(0, &[1, 2, 3], &distances, &pheromone, 0.0, 2.0)
            .expect("finite inputs");

        assert!(probs[0] > probs[1], "with alpha=0 only distance matters");
    }

    #[test]
    fn test_beta_zero_ignores_distance() {
        let distances = square_instance();
        let pheromone = PheromoneMatrix::uniform(4);

        let probs = transition_probabilities(0, &[1, 2, 3], &distances, &pheromone, 1.0, 0.0)
            .expect("finite inputs");

        for p in &probs {
            assert!((p - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_non_finite_total_is_invariant_violation() {
        // Overflow the desirability product: levels near f64::MAX squared
        // by alpha = 2 go infinite, which must surface as a fatal error
        // rather than a silent fallback.
        let distances = square_instance();
        let mut pheromone = PheromoneMatrix::uniform(4);
        pheromone.scale(f64::MAX);

        let err = transition_probabilities(0, &[1, 2, 3], &distances, &pheromone, 2.0, 2.0)
            .expect_err("overflowed desirability");
        assert!(err.is_invariant_violation());
    }

    #[test]
    fn test_single_candidate_gets_full_mass() {
        let distances = square_instance();
        let pheromone = PheromoneMatrix::uniform(4);

        let probs = transition_probabilities(0, &[2], &distances, &pheromone, 1.0, 2.0)
            .expect("finite inputs");

        assert_eq!(probs.len(), 1);
        assert!((probs[0] - 1.0).abs() < 1e-12);
    }
}
