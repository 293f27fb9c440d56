use super::GridState;
use super::grid::is_interior;
use crate::error::{LifeError, Result};

/// A small boolean matrix that can be stamped onto the board.
///
/// Pattern-local coordinates are `(dx, dy)` with `dx` growing rightwards
/// and `dy` growing downwards, the same orientation as the board. A pattern
/// placed at `anchor` lands its cell `(dx, dy)` on `anchor + (dx, dy)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    cells: Vec<bool>, // Row-major
}

impl Pattern {
    /// Create a pattern from alive cell coordinates, sized to fit them
    pub fn new(name: &'static str, description: &'static str, alive: &[(usize, usize)]) -> Self {
        let width = alive.iter().map(|(x, _)| *x).max().map_or(0, |x| x + 1);
        let height = alive.iter().map(|(_, y)| *y).max().map_or(0, |y| y + 1);
        Self::with_size(name, description, width, height, alive)
    }

    /// Create a pattern with an explicit bounding box. Coordinates outside it are dropped.
    pub fn with_size(
        name: &'static str,
        description: &'static str,
        width: usize,
        height: usize,
        alive: &[(usize, usize)],
    ) -> Self {
        let mut pattern = Self {
            name,
            description,
            width,
            height,
            cells: vec![false; width * height],
        };
        for &(x, y) in alive {
            pattern.set(x, y, true);
        }
        pattern
    }

    /// Parse text art: one line per row, `O` marks an alive cell.
    /// Blank lines and surrounding whitespace are ignored.
    pub fn from_art(name: &'static str, description: &'static str, art: &str) -> Self {
        let rows: Vec<&str> = art
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

        let alive: Vec<(usize, usize)> = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == 'O')
                    .map(move |(x, _)| (x, y))
            })
            .collect();

        Self::with_size(name, description, width, rows.len(), &alive)
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = alive;
        }
    }

    /// Pattern-local coordinates of alive cells, row by row
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(idx, _)| (idx % self.width, idx / self.width))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Board cells this pattern would bring to life if committed at `anchor`
    /// on a board of `bounds`. Targets off the interior are skipped.
    pub fn preview_offsets(
        &self,
        anchor: (i32, i32),
        bounds: (usize, usize),
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (width, height) = bounds;
        self.alive_cells().filter_map(move |(dx, dy)| {
            let x = usize::try_from(i64::from(anchor.0) + dx as i64).ok()?;
            let y = usize::try_from(i64::from(anchor.1) + dy as i64).ok()?;
            is_interior(x, y, width, height).then_some((x, y))
        })
    }

    /// Stamp the alive cells onto `grid` at `anchor`, returning how many
    /// landed inside the interior. Dead pattern cells leave the board as is.
    pub fn commit(&self, anchor: (i32, i32), grid: &mut GridState) -> usize {
        let targets: Vec<(usize, usize)> = self.preview_offsets(anchor, grid.dimensions()).collect();
        for &(x, y) in &targets {
            grid.set_cell(x, y, true);
        }
        targets.len()
    }
}

/// Produces a fresh copy of a pattern on every call
pub type PatternFactory = fn() -> Pattern;

/// Registry of named pattern factories, kept in registration order.
#[derive(Clone, Default)]
pub struct PatternLibrary {
    entries: Vec<(&'static str, PatternFactory)>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library holding every preset in menu order
    pub fn with_presets() -> Self {
        let mut library = Self::new();
        for (name, factory) in presets::all() {
            library.register(name, factory);
        }
        library
    }

    /// Associate `name` with `factory`. Re-registering a name replaces the
    /// factory but keeps its position.
    pub fn register(&mut self, name: &'static str, factory: PatternFactory) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = factory,
            None => self.entries.push((name, factory)),
        }
    }

    /// Build a fresh copy of the named pattern
    pub fn get(&self, name: &str) -> Result<Pattern> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, factory)| factory())
            .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
    }

    /// Registered names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classic patterns offered in the menu
pub mod presets {
    use super::*;

    /// Blinker centred in a 7x7 box
    pub fn oscillator() -> Pattern {
        Pattern::with_size(
            "Oscillator",
            "Bar oscillator (period 2)",
            7,
            7,
            &[(2, 3), (3, 3), (4, 3)],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::from_art(
            "Glider gun",
            "Produces gliders (period 30)",
            "
            ........................O...........
            ......................O.O...........
            ............OO......OO............OO
            ...........O...O....OO............OO
            OO........O.....O...OO..............
            OO........O...O.OO....O.O...........
            ..........O.....O.......O...........
            ...........O...O....................
            ............OO......................
            ",
        )
    }

    /// Pulsar - period 3 oscillator
    #[rustfmt::skip]
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            &[
                // Top
                (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
                // Upper middle
                (0, 2), (5, 2), (7, 2), (12, 2),
                (0, 3), (5, 3), (7, 3), (12, 3),
                (0, 4), (5, 4), (7, 4), (12, 4),
                // Center
                (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
                (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
                // Lower middle
                (0, 8), (5, 8), (7, 8), (12, 8),
                (0, 9), (5, 9), (7, 9), (12, 9),
                (0, 10), (5, 10), (7, 10), (12, 10),
                // Bottom
                (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
            ],
        )
    }

    /// Lightweight spaceship, travels left
    #[rustfmt::skip]
    pub fn spaceship() -> Pattern {
        Pattern::new(
            "Spaceship",
            "Lightweight spaceship (period 4)",
            &[
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - moves one cell down and right every 4 generations
    #[rustfmt::skip]
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            &[
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Static registration table, in menu order
    pub fn all() -> Vec<(&'static str, PatternFactory)> {
        vec![
            ("Oscillator", oscillator as PatternFactory),
            ("Glider gun", glider_gun),
            ("Pulsar", pulsar),
            ("Spaceship", spaceship),
            ("Glider", glider),
        ]
    }
}
