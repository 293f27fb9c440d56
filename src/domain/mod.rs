mod cell;
mod grid;
mod patterns;
mod selection;
mod snapshot;

pub use cell::Cell;
pub use grid::{GridState, FillMode, DEFAULT_ALIVE_PROBABILITY};
pub use patterns::{Pattern, PatternFactory, PatternLibrary, presets};
pub use selection::PatternSelection;
pub use snapshot::Snapshot;
