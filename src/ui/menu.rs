use super::{Button, BUTTON_HEIGHT, BUTTON_SPACING, MENU_WIDTH};
use crate::application::{BoardLayout, GameState, MenuAction};
use macroquad::prelude::{MouseButton, is_mouse_button_pressed};

/// Column of menu buttons to the left of the board, bottom-aligned with it
pub struct Menu {
    entries: Vec<(MenuAction, Button)>,
}

impl Menu {
    pub fn new(actions: &[MenuAction], layout: &BoardLayout) -> Self {
        let x = ((layout.origin_x - MENU_WIDTH) / 2.0).max(0.0);
        let bottom = layout.origin_y + layout.length();
        let count = actions.len();

        let entries = actions
            .iter()
            .enumerate()
            .map(|(i, &action)| {
                let y = bottom - (count - i) as f32 * BUTTON_SPACING;
                (action, Button::new(x, y, MENU_WIDTH, BUTTON_HEIGHT, action.label()))
            })
            .collect();

        Self { entries }
    }

    /// Action whose button is under the pointer
    pub fn action_at(&self, mouse_pos: (f32, f32)) -> Option<MenuAction> {
        self.entries
            .iter()
            .find(|(_, button)| button.is_hovered(mouse_pos))
            .map(|(action, _)| *action)
    }

    /// Action clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<MenuAction> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        self.action_at(mouse_pos)
    }

    pub fn draw(&self, state: &GameState, mouse_pos: (f32, f32)) {
        for (action, button) in &self.entries {
            let active = match action {
                MenuAction::Pattern(name) => state.selection.is_armed(name),
                MenuAction::PlayPause => state.is_paused,
                MenuAction::Exit => state.exit_dialog_open,
                _ => false,
            };
            button.draw(mouse_pos, active);
        }
    }
}
