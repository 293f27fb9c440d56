use super::{Button, BUTTON_HEIGHT};
use macroquad::prelude::*;

const PANEL_SIZE: f32 = 600.0;
const CHOICE_WIDTH: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WelcomeChoice {
    Fullscreen,
    Windowed,
    Exit,
}

/// Start screen asking whether to run fullscreen, laid out on a 600x600
/// panel centred in the window
pub struct WelcomeScreen {
    x: f32,
    y: f32,
    yes: Button,
    no: Button,
    exit: Button,
}

impl WelcomeScreen {
    pub fn centered(screen_width: f32, screen_height: f32) -> Self {
        let x = ((screen_width - PANEL_SIZE) / 2.0).max(0.0);
        let y = ((screen_height - PANEL_SIZE) / 2.0).max(0.0);
        let center_x = x + PANEL_SIZE / 2.0;
        let choice_y = y + 330.0;

        Self {
            x,
            y,
            yes: Button::new(center_x - 100.0 - CHOICE_WIDTH / 2.0, choice_y, CHOICE_WIDTH, BUTTON_HEIGHT, "YES"),
            no: Button::new(center_x + 100.0 - CHOICE_WIDTH / 2.0, choice_y, CHOICE_WIDTH, BUTTON_HEIGHT, "NO"),
            exit: Button::new(center_x - CHOICE_WIDTH / 2.0, y + 520.0, CHOICE_WIDTH, BUTTON_HEIGHT, "Exit"),
        }
    }

    /// Choice under the pointer
    pub fn choice_at(&self, mouse_pos: (f32, f32)) -> Option<WelcomeChoice> {
        [
            (&self.yes, WelcomeChoice::Fullscreen),
            (&self.no, WelcomeChoice::Windowed),
            (&self.exit, WelcomeChoice::Exit),
        ]
        .into_iter()
        .find(|(button, _)| button.is_hovered(mouse_pos))
        .map(|(_, choice)| choice)
    }

    /// Choice made this frame. `Esc` counts as Exit.
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<WelcomeChoice> {
        if is_key_pressed(KeyCode::Escape) || self.exit.is_clicked(mouse_pos) {
            return Some(WelcomeChoice::Exit);
        }
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        self.choice_at(mouse_pos)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let center_x = self.x + PANEL_SIZE / 2.0;
        for (text, y, size) in [
            ("Welcome to the Conway's", 70.0, 48.0),
            ("Game of Life", 120.0, 48.0),
            ("Enable full screen?", 270.0, 36.0),
        ] {
            let measure = measure_text(text, None, size as u16, 1.0);
            draw_text(text, center_x - measure.width / 2.0, self.y + y, size, WHITE);
        }

        for button in [&self.yes, &self.no, &self.exit] {
            button.draw(mouse_pos, false);
        }
    }
}
