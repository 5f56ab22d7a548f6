//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `epi-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("coordinate ({x}, {y}) is outside the {width}x{height} non-wrapping grid")]
    OutOfBounds { x: i64, y: i64, width: u32, height: u32 },

    #[error("agent {0} is not registered in its cell")]
    AgentNotInCell(epi_core::AgentId),

    #[error("density map has no rows")]
    EmptyDensityMap,

    #[error("density map row {row} has {got} columns, expected {expected}")]
    RaggedDensityRows { row: usize, expected: usize, got: usize },
}

pub type GridResult<T> = Result<T, GridError>;
