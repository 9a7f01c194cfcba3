//! Error types for the simulation core

use thiserror::Error;

/// Errors raised by the grid engine and the pattern loader
#[derive(Error, Debug)]
pub enum LifeError {
    /// A cell index past the end of the grid
    #[error("Cell index {index} out of range for grid of {len} cells")]
    IndexOutOfRange { index: u32, len: u32 },

    /// A pattern with no rows or no columns cannot back a grid
    #[error("Pattern is {width}x{height}, grids need at least one row and one column")]
    EmptyPattern { width: u32, height: u32 },

    /// The cell count of the requested grid does not fit a `u32` index
    #[error("Grid of {width}x{height} cells is too large")]
    GridTooLarge { width: u32, height: u32 },

    /// The pattern source could not be read to the end
    #[error("Failed to read pattern: {0}")]
    PatternRead(#[from] std::io::Error),
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, LifeError>;
