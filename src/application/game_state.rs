use super::Settings;
use crate::domain::{FillMode, GridState, Pattern, PatternLibrary, PatternSelection};
use crate::error::Result;

/// Everything the menu can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Restart,
    Clear,
    Pattern(&'static str),
    Screenshot,
    PlayPause,
    Exit,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Restart => "Restart",
            MenuAction::Clear => "Clear",
            MenuAction::Pattern(name) => *name,
            MenuAction::Screenshot => "Screenshot",
            MenuAction::PlayPause => "Play / Pause",
            MenuAction::Exit => "Exit",
        }
    }

    /// Menu entries from top to bottom
    pub fn all(library: &PatternLibrary) -> Vec<MenuAction> {
        let mut actions = vec![MenuAction::Restart, MenuAction::Clear];
        actions.extend(library.names().map(MenuAction::Pattern));
        actions.extend([MenuAction::Screenshot, MenuAction::PlayPause, MenuAction::Exit]);
        actions
    }
}

/// GameState is the application context handed to every subsystem.
/// It holds the board plus the few flags the menu and input layers share.
pub struct GameState {
    pub grid: GridState,
    pub library: PatternLibrary,
    pub selection: PatternSelection,
    pub settings: Settings,
    pub is_paused: bool,
    /// Exit confirmation is showing
    pub exit_dialog_open: bool,
    /// Set by the menu, consumed after the frame is drawn
    pub screenshot_pending: bool,
    pub should_quit: bool,
    /// Set after a click that places, cancels or dismisses, so the held
    /// button does not paint
    pub paint_blocked: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
}

impl GameState {
    /// Create the context with a freshly randomised board
    pub fn new(settings: Settings) -> Result<Self> {
        let grid = Self::fresh_grid(&settings)?;
        Ok(Self {
            grid,
            library: PatternLibrary::with_presets(),
            selection: PatternSelection::default(),
            is_paused: false,
            exit_dialog_open: false,
            screenshot_pending: false,
            should_quit: false,
            paint_blocked: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: settings.updates_per_second,
            settings,
        })
    }

    fn fresh_grid(settings: &Settings) -> Result<GridState> {
        GridState::new(
            settings.board_cells,
            settings.board_cells,
            FillMode::Random(settings.alive_probability),
        )
    }

    /// Dispatch a menu action. While the exit dialog is open only Exit
    /// (which closes it again) has any effect.
    pub fn apply(self, action: MenuAction) -> Self {
        if self.exit_dialog_open && action != MenuAction::Exit {
            return self;
        }
        match action {
            MenuAction::Restart => self.restart(),
            MenuAction::Clear => self.clear(),
            MenuAction::Pattern(name) => self.toggle_pattern(name),
            MenuAction::Screenshot => self.request_screenshot(),
            MenuAction::PlayPause => self.toggle_paused(),
            MenuAction::Exit => self.toggle_exit_dialog(),
        }
    }

    /// Replace the board with a new random one
    pub fn restart(mut self) -> Self {
        match Self::fresh_grid(&self.settings) {
            Ok(grid) => {
                log::info!("Restarting with a new random board");
                self.grid = grid;
                self.generation = 0;
                self.update_timer = 0.0;
            }
            Err(err) => log::warn!("Restart failed: {err}"),
        }
        self
    }

    /// Kill every cell and reset generation counter
    pub fn clear(mut self) -> Self {
        log::info!("Clearing the board");
        self.grid.clear();
        self.generation = 0;
        self.update_timer = 0.0;
        self
    }

    pub fn toggle_pattern(mut self, name: &'static str) -> Self {
        self.selection.toggle(name);
        self
    }

    pub fn toggle_paused(mut self) -> Self {
        self.is_paused = !self.is_paused;
        log::debug!("Paused: {}", self.is_paused);
        self
    }

    pub fn toggle_exit_dialog(mut self) -> Self {
        self.exit_dialog_open = !self.exit_dialog_open;
        self
    }

    pub fn request_screenshot(mut self) -> Self {
        self.screenshot_pending = true;
        self
    }

    /// Close the exit confirmation without quitting
    pub fn dismiss_exit_dialog(mut self) -> Self {
        self.exit_dialog_open = false;
        self.paint_blocked = true;
        self
    }

    pub fn confirm_exit(mut self) -> Self {
        log::info!("Exit confirmed after {} generations", self.generation);
        self.should_quit = true;
        self
    }

    /// Consume a pending screenshot request
    pub fn take_screenshot_request(&mut self) -> bool {
        std::mem::take(&mut self.screenshot_pending)
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Paint or erase the cell at grid coordinates from the input layer
    pub fn paint(&mut self, cell: (i32, i32), alive: bool) {
        if self.paint_blocked {
            return;
        }
        if let (Ok(x), Ok(y)) = (usize::try_from(cell.0), usize::try_from(cell.1)) {
            self.grid.set_cell(x, y, alive);
        }
    }

    /// Re-enable painting once no mouse button is held
    pub fn release_paint_block(&mut self, any_button_down: bool) {
        if !any_button_down {
            self.paint_blocked = false;
        }
    }

    /// Fresh copy of the armed pattern, for the placement preview
    pub fn armed_pattern(&self) -> Option<Pattern> {
        let name = self.selection.armed()?;
        self.library.get(name).ok()
    }

    /// Drop the armed pattern without placing it
    pub fn cancel_armed(&mut self) {
        if self.selection.armed().is_some() {
            self.selection.cancel();
            self.paint_blocked = true;
        }
    }

    /// Commit the armed pattern at `anchor` and disarm it.
    /// Returns how many cells were written, or `None` if nothing was armed.
    pub fn place_armed(&mut self, anchor: (i32, i32)) -> Option<usize> {
        let name = self.selection.commit()?;
        self.paint_blocked = true;
        match self.library.get(name) {
            Ok(pattern) => {
                let written = pattern.commit(anchor, &mut self.grid);
                log::info!("Placed {name} at {anchor:?} ({written} cells)");
                Some(written)
            }
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.is_paused {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.grid.step();
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_state() -> GameState {
        let settings = Settings {
            board_cells: 20,
            alive_probability: 0.0,
            ..Settings::default()
        };
        GameState::new(settings).unwrap()
    }

    #[test]
    fn test_invalid_settings_fail() {
        let settings = Settings {
            board_cells: 0,
            ..Settings::default()
        };
        assert!(GameState::new(settings).is_err());
    }

    #[test]
    fn test_menu_lists_patterns_between_edit_and_control_actions() {
        let state = empty_state();
        let actions = MenuAction::all(&state.library);

        assert_eq!(actions.first(), Some(&MenuAction::Restart));
        assert_eq!(actions.last(), Some(&MenuAction::Exit));
        assert_eq!(actions.len(), 5 + state.library.len());
        assert!(actions.contains(&MenuAction::Pattern("Pulsar")));
        assert_eq!(MenuAction::PlayPause.label(), "Play / Pause");
    }

    #[test]
    fn test_pattern_actions_are_exclusive() {
        let state = empty_state()
            .apply(MenuAction::Pattern("Pulsar"))
            .apply(MenuAction::Pattern("Glider"));

        assert_eq!(state.selection.armed(), Some("Glider"));
        assert_eq!(state.armed_pattern().map(|p| p.name), Some("Glider"));
    }

    #[test]
    fn test_place_armed_commits_and_disarms() {
        let mut state = empty_state().apply(MenuAction::Pattern("Oscillator"));

        assert_eq!(state.place_armed((3, 3)), Some(3));
        assert_eq!(state.selection, PatternSelection::None);
        assert_eq!(state.grid.population(), 3);
        assert!(state.grid.get_cell(6, 6));

        // Nothing armed any more
        assert_eq!(state.place_armed((3, 3)), None);
    }

    #[test]
    fn test_placement_click_does_not_paint_until_release() {
        let mut state = empty_state().apply(MenuAction::Pattern("Glider"));
        state.place_armed((3, 3));

        // (3, 3) is a dead cell of the glider; the held button must not fill it
        state.paint((3, 3), true);
        assert!(!state.grid.get_cell(3, 3));

        state.release_paint_block(true);
        state.paint((3, 3), true);
        assert!(!state.grid.get_cell(3, 3));

        state.release_paint_block(false);
        state.paint((3, 3), true);
        assert!(state.grid.get_cell(3, 3));
    }

    #[test]
    fn test_cancel_click_does_not_erase_until_release() {
        let mut state = empty_state();
        state.paint((5, 5), true);
        state = state.apply(MenuAction::Pattern("Glider"));

        state.cancel_armed();
        assert_eq!(state.selection, PatternSelection::None);

        // Right button still held on the next frame
        state.release_paint_block(true);
        state.paint((5, 5), false);
        assert!(state.grid.get_cell(5, 5));

        state.release_paint_block(false);
        state.paint((5, 5), false);
        assert!(!state.grid.get_cell(5, 5));
    }

    #[test]
    fn test_cancel_without_armed_pattern_keeps_painting() {
        let mut state = empty_state();

        state.cancel_armed();
        state.paint((5, 5), true);

        assert!(state.grid.get_cell(5, 5));
    }

    #[test]
    fn test_dismissing_exit_dialog_does_not_paint() {
        let mut state = empty_state().apply(MenuAction::Exit).dismiss_exit_dialog();
        assert!(!state.exit_dialog_open);
        assert!(!state.should_quit);

        state.release_paint_block(true);
        state.paint((8, 8), true);
        assert!(!state.grid.get_cell(8, 8));

        state.release_paint_block(false);
        state.paint((8, 8), true);
        assert!(state.grid.get_cell(8, 8));
    }

    #[test]
    fn test_place_unknown_pattern_is_recoverable() {
        let mut state = empty_state();
        state.selection.select("Nope");

        assert_eq!(state.place_armed((3, 3)), None);
        assert_eq!(state.selection, PatternSelection::None);
        assert_eq!(state.grid.population(), 0);
    }

    #[test]
    fn test_paint_ignores_negative_and_border() {
        let mut state = empty_state();

        state.paint((-1, 5), true);
        state.paint((0, 5), true);
        state.paint((5, 5), true);
        assert_eq!(state.grid.population(), 1);

        state.paint((5, 5), false);
        assert_eq!(state.grid.population(), 0);
    }

    #[test]
    fn test_tick_respects_pause_and_speed() {
        let mut state = empty_state();
        state.paint((5, 4), true);
        state.paint((5, 5), true);
        state.paint((5, 6), true);

        // Below one update interval nothing happens
        state = state.tick(0.05);
        assert_eq!(state.generation, 0);

        state = state.tick(0.06);
        assert_eq!(state.generation, 1);
        assert!(state.grid.get_cell(4, 5));

        state = state.apply(MenuAction::PlayPause).tick(1.0);
        assert_eq!(state.generation, 1);
        assert!(state.is_paused);

        // Editing still works while paused
        state.paint((10, 10), true);
        assert!(state.grid.get_cell(10, 10));
    }

    #[test]
    fn test_clear_and_restart_reset_generation() {
        let mut state = empty_state();
        state.paint((5, 5), true);
        state = state.tick(1.0);
        assert_eq!(state.generation, 1);

        state.paint((5, 5), true);
        state = state.apply(MenuAction::Clear);
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid.population(), 0);

        state.settings.alive_probability = 1.0;
        state = state.tick(1.0).apply(MenuAction::Restart);
        assert_eq!(state.generation, 0);
        assert_eq!(state.grid.population(), 18 * 18);
    }

    #[test]
    fn test_exit_dialog_blocks_other_actions() {
        let state = empty_state().apply(MenuAction::Exit);
        assert!(state.exit_dialog_open);

        let state = state
            .apply(MenuAction::Pattern("Glider"))
            .apply(MenuAction::PlayPause);
        assert_eq!(state.selection, PatternSelection::None);
        assert!(!state.is_paused);

        let state = state.apply(MenuAction::Exit);
        assert!(!state.exit_dialog_open);
        assert!(!state.should_quit);
        assert!(state.confirm_exit().should_quit);
    }

    #[test]
    fn test_screenshot_request_is_one_shot() {
        let mut state = empty_state().apply(MenuAction::Screenshot);

        assert!(state.take_screenshot_request());
        assert!(!state.take_screenshot_request());
    }

    #[test]
    fn test_speed_is_clamped() {
        let state = empty_state().adjust_speed(100.0);
        assert_eq!(state.updates_per_second, 60.0);

        let state = state.adjust_speed(-100.0);
        assert_eq!(state.updates_per_second, 1.0);
    }
}
