//! Edge-list input.
//!
//! The reference format is whitespace-delimited text, one `v1 v2 weight`
//! triple per line. Blank lines are skipped. The solver core only needs the
//! parsed triples; anything richer belongs to the caller.

use std::path::Path;

use crate::error::{AcoError, AcoResult};
use crate::graph::Edge;

/// Read an edge list from a file.
///
/// # Errors
///
/// Returns `AcoError::Io` if the file cannot be read, or
/// `AcoError::InvalidInput` for malformed content (see [`parse_edge_list`]).
pub fn read_edge_list<P: AsRef<Path>>(path: P) -> AcoResult<Vec<Edge>> {
    let content = std::fs::read_to_string(path)?;
    parse_edge_list(&content)
}

/// Parse whitespace-delimited `v1 v2 weight` triples, one per line.
///
/// # Errors
///
/// Returns `AcoError::InvalidInput`, naming the offending line, when a line
/// has the wrong field count, a field is not a non-negative integer, the
/// weight is zero, or the edge is a self-loop (a vertex can never follow
/// itself in a Hamiltonian cycle, so a self-loop is always a mistake).
pub fn parse_edge_list(content: &str) -> AcoResult<Vec<Edge>> {
    let mut edges = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 3 {
            return Err(AcoError::invalid_input(format!(
                "line {line_no}: expected 3 fields, got {}",
                fields.len()
            )));
        }

        let a = parse_field(fields[0], "vertex", line_no)?;
        let b = parse_field(fields[1], "vertex", line_no)?;
        let weight = parse_field(fields[2], "weight", line_no)?;

        if weight == 0 {
            return Err(AcoError::invalid_input(format!(
                "line {line_no}: weight must be positive"
            )));
        }
        if a == b {
            return Err(AcoError::invalid_input(format!(
                "line {line_no}: self-loop on vertex {a}"
            )));
        }

        edges.push(Edge::new(a as usize, b as usize, weight));
    }

    Ok(edges)
}

fn parse_field(field: &str, what: &str, line_no: usize) -> AcoResult<u64> {
    field.parse::<u64>().map_err(|_| {
        AcoError::invalid_input(format!(
            "line {line_no}: {what} '{field}' is not a non-negative integer"
        ))
    })
}
