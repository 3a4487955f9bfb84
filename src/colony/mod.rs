//! The ant colony: probabilistic tour construction, pheromone memory, and
//! the iterative solve loop.

pub mod pheromone;
pub mod probability;
pub mod solver;
pub mod tour;

pub use pheromone::PheromoneMatrix;
pub use probability::transition_probabilities;
pub use solver::{AntColony, Solution};
pub use tour::Tour;
