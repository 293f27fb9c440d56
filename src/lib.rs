// Domain layer - cells, board stepping, patterns
pub mod domain;

// Application layer - shared context, layout and settings
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod error;

// Re-exports for convenience
pub use domain::{Cell, FillMode, GridState, Pattern, PatternLibrary, PatternSelection, Snapshot, presets};
pub use application::{BoardLayout, GameState, MenuAction, Settings};
pub use error::LifeError;
