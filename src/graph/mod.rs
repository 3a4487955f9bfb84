//! Graph construction: sparse edge list to dense distance matrix.
//!
//! Input instances may be incomplete. Pairs with no explicit edge are filled
//! with a synthetic penalty weight of ten times the largest known weight,
//! which makes every instance a complete-graph TSP while strongly
//! discouraging tours through synthetic edges.

use serde::{Deserialize, Serialize};

use crate::error::{AcoError, AcoResult};

/// Multiplier applied to the largest known weight to price missing edges.
const PENALTY_FACTOR: f64 = 10.0;

/// One undirected weighted edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub a: usize,
    /// Second endpoint.
    pub b: usize,
    /// Positive edge weight.
    pub weight: u64,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(a: usize, b: usize, weight: u64) -> Self {
        Self { a, b, weight }
    }
}

/// Dense symmetric matrix of pairwise travel costs.
///
/// Indexed densely over `[0, n)` where `n` is one past the largest vertex id
/// seen in the input; vertex ids absent from the input still occupy rows and
/// columns (wasted but harmless space).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Build a complete distance matrix from an undirected edge list.
    ///
    /// Both directions of every edge are recorded. When the same unordered
    /// pair appears more than once, the last occurrence in input order wins.
    /// Every pair with no explicit edge is priced at ten times the largest
    /// known weight.
    ///
    /// # Errors
    ///
    /// Returns `AcoError::InvalidInput` if the edge list is empty (there is
    /// no known weight to derive the penalty from) or if any weight is zero.
    pub fn from_edges(edges: &[Edge]) -> AcoResult<Self> {
        if edges.is_empty() {
            return Err(AcoError::invalid_input(
                "edge list is empty: cannot derive a penalty weight",
            ));
        }

        let mut n = 0;
        for edge in edges {
            if edge.weight == 0 {
                return Err(AcoError::invalid_input(format!(
                    "edge ({}, {}) has zero weight",
                    edge.a, edge.b
                )));
            }
            n = n.max(edge.a + 1).max(edge.b + 1);
        }

        // Unknown pairs start at infinity and are repriced below.
        let mut values = vec![vec![f64::INFINITY; n]; n];
        let mut max_weight: f64 = 0.0;

        for edge in edges {
            let w = edge.weight as f64;
            values[edge.a][edge.b] = w;
            values[edge.b][edge.a] = w;
            max_weight = max_weight.max(w);
        }

        let penalty = max_weight * PENALTY_FACTOR;
        for row in &mut values {
            for value in row.iter_mut() {
                if value.is_infinite() {
                    *value = penalty;
                }
            }
        }

        Ok(Self { n, values })
    }

    /// Number of vertices (matrix dimension).
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Travel cost between two vertices (O(1) lookup).
    #[must_use]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Check symmetry of the full matrix.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (0..self.n).all(|j| self.values[i][j] == self.values[j][i]))
    }
}
