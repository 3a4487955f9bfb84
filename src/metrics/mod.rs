//! Per-iteration metrics and the sinks that consume them.
//!
//! The solver emits one [`IterationMetrics`] record per iteration. Sinks are
//! passive collaborators: they persist or aggregate the records but never
//! influence solver behavior, and a failing sink never aborts the solve.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AcoResult;

/// Scalar record emitted once per solver iteration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationMetrics {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Shortest tour length found within this iteration.
    pub iteration_best_length: f64,
    /// Shortest tour length found so far across all iterations.
    pub global_best_length: f64,
    /// Mean pheromone level along the global-best tour, if one exists.
    pub avg_pheromone_on_best: Option<f64>,
    /// Mean selection probability along this iteration's best tour, if a
    /// global best exists.
    pub avg_choice_probability: Option<f64>,
}

/// Consumer of per-iteration metrics.
///
/// Implementations may fail (e.g. on I/O); the solver logs the failure and
/// continues rather than aborting a long run over a reporting problem.
pub trait MetricsSink {
    /// Record one iteration's metrics.
    ///
    /// # Errors
    ///
    /// Implementation-defined; typically I/O.
    fn record(&mut self, metrics: &IterationMetrics) -> AcoResult<()>;
}

/// Sink that discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MetricsSink for NullSink {
    fn record(&mut self, _metrics: &IterationMetrics) -> AcoResult<()> {
        Ok(())
    }
}

/// Sink that keeps every record in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<IterationMetrics>,
}

impl MemorySink {
    /// All records received so far, in emission order.
    #[must_use]
    pub fn records(&self) -> &[IterationMetrics] {
        &self.records
    }
}

impl MetricsSink for MemorySink {
    fn record(&mut self, metrics: &IterationMetrics) -> AcoResult<()> {
        self.records.push(metrics.clone());
        Ok(())
    }
}

/// Sink that writes one value per line into three trace files under a
/// directory: `best_lengths.txt`, `pheromone.txt`, and `probability.txt`.
///
/// The pheromone and probability files only gain lines once the solver has
/// a global best, so they may be shorter than the lengths file.
#[derive(Debug)]
pub struct FileSink {
    lengths: BufWriter<File>,
    pheromone: BufWriter<File>,
    probability: BufWriter<File>,
}

impl FileSink {
    /// Create (truncating) the three trace files under `dir`.
    ///
    /// # Errors
    ///
    /// Returns `AcoError::Io` if the directory or files cannot be created.
    pub fn create(dir: impl AsRef<Path>) -> AcoResult<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            lengths: BufWriter::new(File::create(dir.join("best_lengths.txt"))?),
            pheromone: BufWriter::new(File::create(dir.join("pheromone.txt"))?),
            probability: BufWriter::new(File::create(dir.join("probability.txt"))?),
        })
    }

    /// Flush all three writers.
    ///
    /// # Errors
    ///
    /// Returns `AcoError::Io` on flush failure.
    pub fn flush(&mut self) -> AcoResult<()> {
        self.lengths.flush()?;
        self.pheromone.flush()?;
        self.probability.flush()?;
        Ok(())
    }
}

impl MetricsSink for FileSink {
    fn record(&mut self, metrics: &IterationMetrics) -> AcoResult<()> {
        writeln!(self.lengths, "{}", metrics.iteration_best_length)?;
        if let Some(avg) = metrics.avg_pheromone_on_best {
            writeln!(self.pheromone, "{avg}")?;
        }
        if let Some(avg) = metrics.avg_choice_probability {
            writeln!(self.probability, "{avg}")?;
        }
        Ok(())
    }
}
