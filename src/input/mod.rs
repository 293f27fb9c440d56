use macroquad::prelude::*;
use crate::application::{BoardLayout, GameState, MenuAction};
use crate::ui::{DialogChoice, ExitDialog, Menu};

/// Paint with the left button and erase with the right one, while the
/// pointer is on the board and no pattern is armed
pub fn handle_mouse_paint(state: &mut GameState, layout: &BoardLayout, mouse_pos: (f32, f32)) {
    let left = is_mouse_button_down(MouseButton::Left);
    let right = is_mouse_button_down(MouseButton::Right);
    state.release_paint_block(left || right);

    if state.selection.armed().is_some() || state.exit_dialog_open {
        return;
    }
    if !layout.contains(mouse_pos.0, mouse_pos.1) {
        return;
    }

    let cell = layout.screen_to_grid(mouse_pos.0, mouse_pos.1);
    if left {
        state.paint(cell, true);
    } else if right {
        state.paint(cell, false);
    }
}

/// Place the armed pattern on a left click inside the board, or drop it
/// on a right click anywhere
pub fn handle_pattern_placement(state: &mut GameState, layout: &BoardLayout, mouse_pos: (f32, f32)) {
    if state.selection.armed().is_none() || state.exit_dialog_open {
        return;
    }

    if is_mouse_button_pressed(MouseButton::Right) {
        state.cancel_armed();
    } else if is_mouse_button_pressed(MouseButton::Left) && layout.contains(mouse_pos.0, mouse_pos.1) {
        let anchor = layout.screen_to_grid(mouse_pos.0, mouse_pos.1);
        state.place_armed(anchor);
    }
}

/// Apply the menu entry clicked this frame
pub fn process_menu_clicks(state: GameState, menu: &Menu, mouse_pos: (f32, f32)) -> GameState {
    match menu.clicked(mouse_pos) {
        Some(action) => state.apply(action),
        None => state,
    }
}

/// Resolve the exit confirmation if it is showing
pub fn process_exit_dialog(state: GameState, dialog: &ExitDialog, mouse_pos: (f32, f32)) -> GameState {
    if !state.exit_dialog_open {
        return state;
    }
    match dialog.clicked(mouse_pos) {
        Some(DialogChoice::Yes) => state.confirm_exit(),
        Some(DialogChoice::No) => state.dismiss_exit_dialog(),
        None => state,
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 8] = [
        (KeyCode::Escape, GameState::toggle_exit_dialog),
        (KeyCode::S, |s| s.apply(MenuAction::Screenshot)),
        (KeyCode::P, |s| s.apply(MenuAction::PlayPause)),
        (KeyCode::Space, |s| s.apply(MenuAction::PlayPause)),
        (KeyCode::C, |s| s.apply(MenuAction::Clear)),
        (KeyCode::R, |s| s.apply(MenuAction::Restart)),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
