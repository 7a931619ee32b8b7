//! Error types for table storage, ingestion and operations

use std::collections::TryReserveError;

/// Errors surfaced by the core
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input resource could not be opened, read or decoded
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage could not be reserved
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// A row or header list did not match the table's column count
    #[error("shape mismatch: expected {expected} values, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// The operation needs at least one row
    #[error("table has no rows")]
    EmptyTable,

    /// Column index outside `[0, num_cols)`
    #[error("column index {index} out of range for table with {num_cols} columns")]
    IndexOutOfRange { index: usize, num_cols: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
