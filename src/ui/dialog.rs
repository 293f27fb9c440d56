use super::{Button, BUTTON_HEIGHT};
use macroquad::prelude::*;

const DIALOG_WIDTH: f32 = 520.0;
const DIALOG_HEIGHT: f32 = 180.0;
const CHOICE_WIDTH: f32 = 120.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogChoice {
    Yes,
    No,
}

/// Modal "Do you really want to quit?" box in the middle of the screen
pub struct ExitDialog {
    x: f32,
    y: f32,
    yes: Button,
    no: Button,
}

impl ExitDialog {
    pub fn centered(screen_width: f32, screen_height: f32) -> Self {
        let x = (screen_width - DIALOG_WIDTH) / 2.0;
        let y = (screen_height - DIALOG_HEIGHT) / 2.0;
        let buttons_y = y + DIALOG_HEIGHT - BUTTON_HEIGHT - 20.0;
        Self {
            x,
            y,
            yes: Button::new(x + 60.0, buttons_y, CHOICE_WIDTH, BUTTON_HEIGHT, "Yes"),
            no: Button::new(x + DIALOG_WIDTH - 60.0 - CHOICE_WIDTH, buttons_y, CHOICE_WIDTH, BUTTON_HEIGHT, "No"),
        }
    }

    /// Choice under the pointer
    pub fn choice_at(&self, mouse_pos: (f32, f32)) -> Option<DialogChoice> {
        if self.yes.is_hovered(mouse_pos) {
            Some(DialogChoice::Yes)
        } else if self.no.is_hovered(mouse_pos) {
            Some(DialogChoice::No)
        } else {
            None
        }
    }

    /// Choice clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<DialogChoice> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        self.choice_at(mouse_pos)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_rectangle(self.x, self.y, DIALOG_WIDTH, DIALOG_HEIGHT, Color::from_rgba(200, 200, 200, 255));
        draw_rectangle_lines(self.x, self.y, DIALOG_WIDTH, DIALOG_HEIGHT, 3.0, BLACK);

        let text = "Do you really want to quit?";
        let size = measure_text(text, None, 30, 1.0);
        draw_text(text, self.x + (DIALOG_WIDTH - size.width) / 2.0, self.y + 60.0, 30.0, BLACK);

        for button in [&self.yes, &self.no] {
            let fill = if button.is_hovered(mouse_pos) {
                Color::from_rgba(120, 120, 120, 255)
            } else {
                Color::from_rgba(60, 60, 60, 255)
            };
            let (bx, by, bw, bh) = button.rect();
            draw_rectangle(bx, by, bw, bh, fill);
            button.draw(mouse_pos, false);
        }
    }
}
