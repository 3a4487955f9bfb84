//! Deterministic execution engine.
//!
//! The only stateful engine component is the seeded RNG; everything else in
//! the solve loop is a pure function of its inputs.

pub mod rng;

pub use rng::ColonyRng;
