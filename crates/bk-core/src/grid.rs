//! Occupancy grid model.
//!
//! A map is a `width x height` buffer of wall/path cells plus the fixed
//! start and end positions. The grid is exclusively owned by one
//! generation call; algorithms mutate it through bounds-checked access.

use serde::{Deserialize, Serialize};

use crate::consts::START;

/// Cell occupancy state
///
/// The persisted encoding is `0` = Path, `1` = Wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    Path = 0,
    #[default]
    Wall = 1,
}

impl Cell {
    /// Check if this cell can be walked through
    pub const fn is_path(&self) -> bool {
        matches!(self, Cell::Path)
    }

    /// Persisted integer encoding of this cell
    pub const fn encode(&self) -> u8 {
        *self as u8
    }

    /// Decode the persisted integer encoding
    pub const fn decode(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Path),
            1 => Some(Cell::Wall),
            _ => None,
        }
    }
}

/// Owned occupancy buffer with start and end cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cell buffer, `height` rows of `width` cells
    cells: Vec<Cell>,
    start: (usize, usize),
    end: (usize, usize),
}

impl Grid {
    /// Create an all-wall grid with the conventional start and end cells
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
            start: START,
            end: (width.saturating_sub(2), height.saturating_sub(2)),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// Check if a coordinate lies on the grid
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Read a cell, `None` when out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if self.in_bounds(x, y) {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Write a cell; out-of-bounds writes are ignored and return false
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if self.in_bounds(x, y) {
            self.cells[y * self.width + x] = cell;
            true
        } else {
            false
        }
    }

    /// Overwrite every cell
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Force the start and end cells to Path, whatever the algorithm
    /// left there
    pub fn force_endpoints(&mut self) {
        let (sx, sy) = self.start;
        let (ex, ey) = self.end;
        self.set(sx, sy, Cell::Path);
        self.set(ex, ey, Cell::Path);
    }

    /// Count cells in the given state
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}
