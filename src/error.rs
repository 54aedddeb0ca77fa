//! Error types for Suma operations

use thiserror::Error;

/// Result type for Suma operations
pub type Result<T> = std::result::Result<T, SumaError>;

/// Errors that can occur during Suma operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SumaError {
    /// A matrix dimension is invalid (zero rows/cols, or a data length
    /// that does not match the requested shape)
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Shape mismatch between operands
    #[error("Shape mismatch: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    ShapeMismatch {
        /// Rows of the left operand
        left_rows: usize,
        /// Columns of the left operand
        left_cols: usize,
        /// Rows of the right operand
        right_rows: usize,
        /// Columns of the right operand
        right_cols: usize,
    },

    /// Parallel addition was asked to run with zero worker threads
    #[error("Invalid thread count: must be at least 1")]
    InvalidThreadCount,

    /// A spawned worker panicked before the join barrier
    #[error("Worker thread panicked")]
    WorkerPanicked,
}

impl SumaError {
    /// Builds a `ShapeMismatch` from two `(rows, cols)` pairs
    pub(crate) fn shape_mismatch(left: (usize, usize), right: (usize, usize)) -> Self {
        SumaError::ShapeMismatch {
            left_rows: left.0,
            left_cols: left.1,
            right_rows: right.0,
            right_cols: right.1,
        }
    }
}
