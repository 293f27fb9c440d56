use macroquad::prelude::*;
use conways_game::{
    BoardLayout, GameState, MenuAction, Settings,
    ui::{ExitDialog, Menu, WelcomeChoice, WelcomeScreen},
    rendering::{self, screenshot},
    input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game".to_owned(),
        window_width: 1600,
        window_height: 1200,
        window_resizable: true,
        ..Default::default()
    }
}

/// Show the start screen until a choice is made
async fn welcome() -> WelcomeChoice {
    loop {
        let mouse_pos = mouse_position();
        let screen = WelcomeScreen::centered(screen_width(), screen_height());

        clear_background(BLACK);
        screen.draw(mouse_pos);

        if let Some(choice) = screen.clicked(mouse_pos) {
            return choice;
        }
        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    match welcome().await {
        WelcomeChoice::Exit => {
            log::info!("Exited from the welcome screen");
            return;
        }
        WelcomeChoice::Fullscreen => set_fullscreen(true),
        WelcomeChoice::Windowed => {}
    }
    // Consume the choosing click before the menu sees it
    next_frame().await;

    let settings = Settings::default();
    let mut state = match GameState::new(settings) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Cannot start: {err}");
            return;
        }
    };
    // The welcome click may still be held
    state.paint_blocked = true;
    let actions = MenuAction::all(&state.library);
    log::info!("Board {0}x{0}, {1} patterns", state.settings.board_cells, state.library.len());

    show_mouse(false);

    while !state.should_quit {
        let mouse_pos = mouse_position();

        // Layout follows the window size
        let layout = BoardLayout::fit(
            screen_width(),
            screen_height(),
            state.settings.board_cells,
            state.settings.rows_per_screen,
        );
        let menu = Menu::new(&actions, &layout);
        let dialog = ExitDialog::centered(screen_width(), screen_height());

        // Input: edits land between steps
        input::handle_mouse_paint(&mut state, &layout, mouse_pos);
        input::handle_pattern_placement(&mut state, &layout, mouse_pos);
        state = input::process_exit_dialog(state, &dialog, mouse_pos);
        state = input::process_menu_clicks(state, &menu, mouse_pos);
        state = input::process_keyboard_input(state);

        state = state.tick(get_frame_time());

        // Render from a snapshot taken after this frame's step
        let snapshot = state.grid.snapshot();
        clear_background(BLACK);
        rendering::draw_board(&snapshot, &layout);
        if let Some(pattern) = state.armed_pattern() {
            rendering::draw_pattern_preview(&pattern, &layout, snapshot.dimensions(), mouse_pos);
        }
        rendering::draw_controls(&state, &layout, &menu, mouse_pos);
        if state.exit_dialog_open {
            dialog.draw(mouse_pos);
        }
        rendering::draw_cursor(mouse_pos, &layout);

        if state.take_screenshot_request() {
            if let Err(err) = screenshot::take_screenshot(&snapshot, &state.settings.screenshot_dir) {
                log::warn!("Screenshot failed: {err}");
            }
        }

        next_frame().await;
    }

    log::info!("Game exited normally");
}
