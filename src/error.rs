//! Error types shared by the simulation core and the application shell.

use thiserror::Error;

/// Errors surfaced by the grid, the pattern library and screenshot export.
///
/// Out-of-range edits are not errors: `set_cell` and pattern commits
/// silently drop writes that miss the interior of the board.
#[derive(Error, Debug)]
pub enum LifeError {
    /// Grid created with a zero width or height
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Random fill probability outside [0, 1]
    #[error("Invalid fill probability: {0}")]
    InvalidFillProbability(f64),

    /// Pattern name not present in the library
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    /// Screenshot could not be encoded or written
    #[error("Export error: {0}")]
    Export(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, LifeError>;
