//! Error types for the progress model.

use thiserror::Error;

/// Marker lookup failures.
///
/// Querying a marker outside the fixed set is a caller bug, not an
/// environmental failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("marker index {index} out of range (0..{count})")]
    OutOfRange { index: isize, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FeedError {
    #[error("feed step must be finite and positive, got {0}")]
    InvalidStep(f64),
}
