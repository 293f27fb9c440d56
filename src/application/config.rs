use crate::domain::DEFAULT_ALIVE_PROBABILITY;
use std::path::PathBuf;

/// Startup parameters supplied by the application shell.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Board side length in cells, border included
    pub board_cells: usize,
    /// Screen height divided by this gives the cell size in pixels
    pub rows_per_screen: f32,
    /// Alive share used by Restart and the initial board
    pub alive_probability: f64,
    pub updates_per_second: f32,
    /// Where screenshots are written
    pub screenshot_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_cells: 100,
            rows_per_screen: 120.0,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            updates_per_second: 10.0,
            screenshot_dir: PathBuf::from("."),
        }
    }
}
