/// Point-in-time copy of the board, safe to read while the grid moves on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Snapshot {
    pub(crate) fn new(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cell state at (x, y); outside the board reads as dead
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &alive)| (idx % self.width, idx / self.width, alive))
    }

    /// Positions of alive cells only
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter_map(|(x, y, alive)| alive.then_some((x, y)))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}
