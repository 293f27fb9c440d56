use macroquad::prelude::*;
use crate::application::{BoardLayout, GameState};
use crate::domain::{Pattern, Snapshot};
use crate::ui::{Menu, PLACEMENT_PROMPT, PROMPTS};

pub mod screenshot;

const PREVIEW_FILL: Color = Color::new(1.0, 1.0, 1.0, 0.45);
const PREVIEW_OUTLINE: Color = Color::new(1.0, 1.0, 1.0, 0.8);

/// Draw the board frame and one filled square per alive cell
pub fn draw_board(snapshot: &Snapshot, layout: &BoardLayout) {
    draw_rectangle_lines(
        layout.origin_x,
        layout.origin_y,
        layout.length(),
        layout.length(),
        2.0,
        RED,
    );

    for (x, y) in snapshot.iter_alive() {
        let (screen_x, screen_y) = layout.grid_to_screen(x, y);
        draw_rectangle(screen_x, screen_y, layout.cell_size, layout.cell_size, WHITE);
    }
}

/// Draw a ghost of the armed pattern where a click would place it
pub fn draw_pattern_preview(pattern: &Pattern, layout: &BoardLayout, bounds: (usize, usize), mouse_pos: (f32, f32)) {
    let anchor = layout.screen_to_grid(mouse_pos.0, mouse_pos.1);

    for (x, y) in pattern.preview_offsets(anchor, bounds) {
        let (screen_x, screen_y) = layout.grid_to_screen(x, y);
        draw_rectangle(screen_x, screen_y, layout.cell_size, layout.cell_size, PREVIEW_FILL);
        draw_rectangle_lines(screen_x, screen_y, layout.cell_size, layout.cell_size, 1.0, PREVIEW_OUTLINE);
    }
}

/// Red square following the pointer
pub fn draw_cursor(mouse_pos: (f32, f32), layout: &BoardLayout) {
    draw_rectangle(mouse_pos.0, mouse_pos.1, layout.cell_size, layout.cell_size, RED);
}

fn draw_centered_text(text: &str, center_x: f32, y: f32, size: f32, color: Color) {
    let measure = measure_text(text, None, size as u16, 1.0);
    draw_text(text, center_x - measure.width / 2.0, y, size, color);
}

/// Title, menu, help prompts and status around the board
pub fn draw_controls(state: &GameState, layout: &BoardLayout, menu: &Menu, mouse_pos: (f32, f32)) {
    draw_centered_text("Conway's game of life", screen_width() / 2.0, 50.0, 48.0, WHITE);

    menu.draw(state, mouse_pos);

    let right_x = layout.origin_x + layout.length() + 10.0;
    let prompts_y = screen_height() / 2.0;
    for (i, prompt) in PROMPTS.iter().enumerate() {
        draw_text(prompt, right_x, prompts_y + i as f32 * 48.0, 24.0, WHITE);
    }

    let status_y = layout.origin_y + 24.0;
    let status = [
        format!("Generation: {}", state.generation),
        format!("Population: {}", state.grid.population()),
        format!("Speed: {:.0} gen/s", state.updates_per_second),
    ];
    for (i, line) in status.iter().enumerate() {
        draw_text(line, right_x, status_y + i as f32 * 28.0, 22.0, GRAY);
    }

    if state.is_paused {
        draw_text("Game paused", layout.origin_x / 4.0, screen_height() / 4.0, 36.0, RED);
    }

    if let Some(pattern) = state.armed_pattern() {
        let summary = format!("{}: {}", pattern.name, pattern.description);
        draw_centered_text(&summary, screen_width() / 2.0, screen_height() - 80.0, 24.0, GREEN);
        draw_centered_text(PLACEMENT_PROMPT, screen_width() / 2.0, screen_height() - 50.0, 24.0, RED);
    }
}
