// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Upper bound on `(T + 1) * (Smax + 1)` value cells a single solve may allocate.
pub const MAX_STATE_CELLS: u64 = 50_000_000;

/// Everything that can stop a solve before it starts.
///
/// Solver disagreement is not in here: it is reported by
/// [`crate::solver::verify`] as a [`crate::solver::verify::Divergence`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("parameter `{name}` must be non-negative, got {value}")]
    NegativeParameter { name: &'static str, value: i64 },

    #[error("parameter `{name}` = {value} does not fit the supported range")]
    ParameterOutOfRange { name: &'static str, value: i64 },

    #[error("state space of {cells} cells exceeds the limit of {limit}")]
    StateSpaceTooLarge { cells: u64, limit: u64 },
}

/// Failures while reading or writing files around a solve.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot access {}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV in {}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("malformed JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
