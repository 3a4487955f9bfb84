//! Command-line interface.
//!
//! Argument parsing is hand-rolled over an iterator of strings so it can be
//! tested without touching `std::env`.

pub mod args;
pub mod commands;

pub use args::{Args, Command};
pub use commands::run;
