mod config;
mod game_state;
mod layout;

pub use config::Settings;
pub use game_state::{GameState, MenuAction};
pub use layout::BoardLayout;
