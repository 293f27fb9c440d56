mod button;
mod dialog;
mod menu;
mod welcome;

pub use button::Button;
pub use dialog::{DialogChoice, ExitDialog};
pub use menu::Menu;
pub use welcome::{WelcomeChoice, WelcomeScreen};

pub const MENU_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Vertical distance between the tops of consecutive menu buttons
pub const BUTTON_SPACING: f32 = 56.0;

/// Help lines shown to the right of the board
pub const PROMPTS: &[&str] = &[
    "Press 'esc' to close the game",
    "Press LMB to bring cells to life",
    "Press RMB to kill cells",
    "Press 's' to take a screenshot",
    "Press 'p' to pause the game",
];

pub const PLACEMENT_PROMPT: &str = "Press RMB to undo your choice. Press LMB to place the pattern";
