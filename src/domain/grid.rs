use super::{Cell, Snapshot};
use crate::error::{LifeError, Result};
use rand::Rng;
use rayon::prelude::*;

/// Share of interior cells brought to life by the default random fill
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.2;

/// Boards with at least this many cells step with rayon
const PARALLEL_THRESHOLD: usize = 256 * 256;

/// The Moore neighborhood: every offset in -1..=1 squared except (0, 0)
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// How a freshly created grid is populated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillMode {
    /// Each interior cell is alive with the given probability
    Random(f64),
    /// All cells dead
    Empty,
}

impl Default for FillMode {
    fn default() -> Self {
        FillMode::Random(DEFAULT_ALIVE_PROBABILITY)
    }
}

/// GridState owns the board and its neighbor-count buffer.
///
/// The outer row and column on every side form a border of permanently
/// dead cells. Only interior cells are ever written, by editing or by
/// [`GridState::step`].
#[derive(Clone, Debug)]
pub struct GridState {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Alive-neighbor counts of the last step, 0 on the border
    counts: Vec<u8>,
}

impl GridState {
    /// Create a grid using the thread-local RNG for random fills
    pub fn new(width: usize, height: usize, fill: FillMode) -> Result<Self> {
        Self::with_rng(width, height, fill, &mut rand::rng())
    }

    /// Create a grid drawing random cells from `rng`
    pub fn with_rng<R: Rng>(width: usize, height: usize, fill: FillMode, rng: &mut R) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }

        let mut grid = Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
            counts: vec![0; width * height],
        };

        if let FillMode::Random(probability) = fill {
            if !(0.0..=1.0).contains(&probability) {
                return Err(LifeError::InvalidFillProbability(probability));
            }
            for y in 1..height.saturating_sub(1) {
                for x in 1..width.saturating_sub(1) {
                    let idx = grid.get_index(x, y);
                    grid.cells[idx] = Cell::from(rng.random_bool(probability));
                }
            }
        }

        Ok(grid)
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Whether (x, y) lies strictly inside the dead border
    pub const fn is_interior(&self, x: usize, y: usize) -> bool {
        is_interior(x, y, self.width, self.height)
    }

    /// Read a cell. Anything outside the board reads as dead.
    pub fn get_cell(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[self.get_index(x, y)].is_alive()
    }

    /// Write an interior cell. Border and out-of-range writes are ignored.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        if self.is_interior(x, y) {
            let idx = self.get_index(x, y);
            self.cells[idx] = Cell::from(alive);
        }
    }

    /// Alive-neighbor count recorded for (x, y) by the last step
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        if x < self.width && y < self.height {
            self.counts[self.get_index(x, y)]
        } else {
            0
        }
    }

    /// Count alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.counts.fill(0);
    }

    /// Immutable copy of the current cells for rendering and export
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.width,
            self.height,
            self.cells.iter().map(|cell| cell.is_alive()).collect(),
        )
    }

    /// Advance one generation.
    ///
    /// All counts are taken from the current state before any cell is
    /// written, so the result never depends on visiting order.
    pub fn step(&mut self) {
        if self.cells.len() >= PARALLEL_THRESHOLD {
            self.step_parallel();
        } else {
            self.step_serial();
        }
    }

    fn step_serial(&mut self) {
        let (width, height) = (self.width, self.height);

        let cells = &self.cells;
        self.counts
            .chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| count_row(cells, width, height, y, row));

        self.cells
            .chunks_mut(width)
            .zip(self.counts.chunks(width))
            .enumerate()
            .for_each(|(y, (row, counts))| apply_row(row, counts, width, height, y));
    }

    /// Same two phases as `step_serial`, one rayon task per row
    fn step_parallel(&mut self) {
        let (width, height) = (self.width, self.height);

        let cells = &self.cells;
        self.counts
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| count_row(cells, width, height, y, row));

        self.cells
            .par_chunks_mut(width)
            .zip(self.counts.par_chunks(width))
            .enumerate()
            .for_each(|(y, (row, counts))| apply_row(row, counts, width, height, y));
    }
}

pub(crate) const fn is_interior(x: usize, y: usize, width: usize, height: usize) -> bool {
    x >= 1 && y >= 1 && x + 1 < width && y + 1 < height
}

/// Count alive neighbors of an interior cell in the pre-step state
fn count_neighbors(cells: &[Cell], width: usize, height: usize, x: usize, y: usize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < width && ny < height).then(|| cells[ny * width + nx])
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// Phase 1: fill one row of the count buffer
fn count_row(cells: &[Cell], width: usize, height: usize, y: usize, row: &mut [u8]) {
    for (x, count) in row.iter_mut().enumerate() {
        *count = if is_interior(x, y, width, height) {
            count_neighbors(cells, width, height, x, y)
        } else {
            0
        };
    }
}

/// Phase 2: apply B3/S23 to the interior of one row
fn apply_row(row: &mut [Cell], counts: &[u8], width: usize, height: usize, y: usize) {
    if y == 0 || y + 1 >= height {
        return;
    }
    for x in 1..width.saturating_sub(1) {
        row[x] = row[x].evolve(counts[x]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn empty(width: usize, height: usize) -> GridState {
        GridState::new(width, height, FillMode::Empty).unwrap()
    }

    fn seeded(width: usize, height: usize, seed: u64) -> GridState {
        let mut rng = StdRng::seed_from_u64(seed);
        GridState::with_rng(width, height, FillMode::default(), &mut rng).unwrap()
    }

    fn border_is_dead(grid: &GridState) -> bool {
        let (w, h) = grid.dimensions();
        (0..w).all(|x| !grid.get_cell(x, 0) && !grid.get_cell(x, h - 1))
            && (0..h).all(|y| !grid.get_cell(0, y) && !grid.get_cell(w - 1, y))
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            GridState::new(0, 10, FillMode::Empty),
            Err(LifeError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(matches!(
            GridState::new(10, 0, FillMode::default()),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_bad_probability_rejected() {
        assert!(matches!(
            GridState::new(10, 10, FillMode::Random(1.5)),
            Err(LifeError::InvalidFillProbability(_))
        ));
        assert!(GridState::new(10, 10, FillMode::Random(f64::NAN)).is_err());
    }

    #[test]
    fn test_random_fill_keeps_border_dead() {
        let grid = GridState::new(12, 9, FillMode::Random(1.0)).unwrap();

        assert!(border_is_dead(&grid));
        assert_eq!(grid.population(), 10 * 7);
    }

    #[test]
    fn test_random_fill_density() {
        let grid = seeded(202, 202, 7);
        let ratio = grid.population() as f64 / (200.0 * 200.0);

        assert!((0.18..0.22).contains(&ratio), "density was {ratio}");
    }

    #[test]
    fn test_empty_is_fixed_point() {
        for seed in 0..5 {
            let mut grid = seeded(30, 20, seed);
            grid.clear();
            grid.step();
            assert_eq!(grid.population(), 0);
        }
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut grid = empty(10, 10);
        grid.set_cell(5, 5, true);

        grid.step();

        assert!(!grid.get_cell(5, 5));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_blinker_period_two() {
        let mut grid = empty(7, 7);
        grid.set_cell(2, 1, true);
        grid.set_cell(2, 2, true);
        grid.set_cell(2, 3, true);
        let start = grid.snapshot();

        grid.step();
        let middle = grid.snapshot();
        assert_ne!(middle, start);
        assert!(grid.get_cell(1, 2));
        assert!(grid.get_cell(2, 2));
        assert!(grid.get_cell(3, 2));
        assert_eq!(grid.population(), 3);

        grid.step();
        assert_eq!(grid.snapshot(), start);
    }

    #[test]
    fn test_l_shape_completes_block() {
        let mut grid = empty(8, 8);
        grid.set_cell(3, 3, true);
        grid.set_cell(4, 3, true);
        grid.set_cell(3, 4, true);

        // (4, 4) has three neighbors and is born; the others keep two or three
        grid.step();
        assert_eq!(grid.population(), 4);
        assert!(grid.get_cell(4, 4));

        // Every cell of the block now sees exactly three neighbors
        grid.step();
        for (x, y) in [(3, 3), (4, 3), (3, 4), (4, 4)] {
            assert!(grid.get_cell(x, y));
            assert_eq!(grid.neighbor_count(x, y), 3);
        }
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn test_counts_stay_in_range() {
        let mut grid = GridState::new(6, 6, FillMode::Random(1.0)).unwrap();

        grid.step();

        let (w, h) = grid.dimensions();
        for y in 0..h {
            for x in 0..w {
                assert!(grid.neighbor_count(x, y) <= 8);
            }
        }
        // Fully surrounded interior cell
        assert_eq!(grid.neighbor_count(2, 2), 8);
        // Corner of the interior only sees interior neighbors
        assert_eq!(grid.neighbor_count(1, 1), 3);
        assert_eq!(grid.neighbor_count(0, 0), 0);
    }

    #[test]
    fn test_block_against_border() {
        let mut grid = empty(6, 6);
        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            grid.set_cell(x, y, true);
        }

        grid.step();

        assert_eq!(grid.population(), 4);
        assert!(border_is_dead(&grid));
    }

    #[test]
    fn test_border_writes_ignored() {
        let mut grid = empty(5, 4);
        let before = grid.snapshot();

        for (x, y) in [(0, 0), (0, 2), (4, 1), (2, 0), (2, 3), (5, 1), (1, 4), (100, 100)] {
            grid.set_cell(x, y, true);
        }

        assert_eq!(grid.snapshot(), before);
        assert!(border_is_dead(&grid));
    }

    #[test]
    fn test_out_of_range_reads_dead() {
        let grid = GridState::new(5, 5, FillMode::Random(1.0)).unwrap();

        assert!(grid.get_cell(2, 2));
        assert!(!grid.get_cell(5, 2));
        assert!(!grid.get_cell(2, 5));
        assert!(!grid.get_cell(usize::MAX, 0));
    }

    #[test]
    fn test_border_survives_random_runs() {
        let mut grid = seeded(40, 30, 3);
        for _ in 0..20 {
            grid.step();
            assert!(border_is_dead(&grid));
        }
    }

    #[test]
    fn test_snapshot_not_affected_by_step() {
        let mut grid = empty(7, 7);
        grid.set_cell(3, 3, true);
        let snapshot = grid.snapshot();

        grid.step();

        assert!(snapshot.get(3, 3));
        assert!(!grid.get_cell(3, 3));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut serial = seeded(64, 48, 11);
        let mut parallel = serial.clone();

        for _ in 0..10 {
            serial.step_serial();
            parallel.step_parallel();
            assert_eq!(serial.snapshot(), parallel.snapshot());
        }
    }

    #[test]
    fn test_tiny_grid_has_no_interior() {
        let mut grid = GridState::new(2, 2, FillMode::Random(1.0)).unwrap();
        grid.set_cell(1, 1, true);
        grid.step();

        assert_eq!(grid.population(), 0);
    }
}
