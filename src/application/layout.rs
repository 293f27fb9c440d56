/// Placement of the board on screen and the pixel <-> cell mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    /// Board side length in cells
    pub cells: usize,
}

impl BoardLayout {
    /// Centre a square board of `cells` on a screen of the given size
    pub fn fit(screen_width: f32, screen_height: f32, cells: usize, rows_per_screen: f32) -> Self {
        let cell_size = (screen_height / rows_per_screen).floor().max(1.0);
        let length = cells as f32 * cell_size;
        Self {
            origin_x: ((screen_width - length) / 2.0).floor(),
            origin_y: ((screen_height - length) / 2.0).floor(),
            cell_size,
            cells,
        }
    }

    /// Side length of the board in pixels
    pub fn length(&self) -> f32 {
        self.cells as f32 * self.cell_size
    }

    /// Whether a pixel lies on the drawn board
    pub fn contains(&self, screen_x: f32, screen_y: f32) -> bool {
        let length = self.length();
        screen_x >= self.origin_x
            && screen_x < self.origin_x + length
            && screen_y >= self.origin_y
            && screen_y < self.origin_y + length
    }

    /// Convert screen coordinates to grid coordinates (may be off the board)
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (i32, i32) {
        let grid_x = ((screen_x - self.origin_x) / self.cell_size).floor() as i32;
        let grid_y = ((screen_y - self.origin_y) / self.cell_size).floor() as i32;
        (grid_x, grid_y)
    }

    /// Convert grid coordinates to the top-left pixel of the cell
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize) -> (f32, f32) {
        (
            self.origin_x + grid_x as f32 * self.cell_size,
            self.origin_y + grid_y as f32 * self.cell_size,
        )
    }
}
