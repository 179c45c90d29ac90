use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Self-check failed: {operation} on {container} (size {size}): {detail}")]
    SelfCheck {
        operation: &'static str,
        container: &'static str,
        size: usize,
        detail: String,
    },

    #[error(
        "Iteration ceiling hit: {operation} on {container} (size {size}) ran {iterations} repeats in {elapsed:?} without crossing the window"
    )]
    IterationCeiling {
        operation: &'static str,
        container: &'static str,
        size: usize,
        iterations: u64,
        elapsed: Duration,
    },

    #[error("Invalid container size: {0}")]
    InvalidSize(usize),

    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
