//! Diagnostic text rendering and summary stats.

use crate::grid::{Cell, Grid};

/// Wall/path census of a finished grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapStats {
    pub paths: usize,
    pub walls: usize,
}

impl MapStats {
    pub fn of(grid: &Grid) -> Self {
        Self {
            paths: grid.count(Cell::Path),
            walls: grid.count(Cell::Wall),
        }
    }

    pub fn total(&self) -> usize {
        self.paths + self.walls
    }
}

/// Render a bounded text view of the grid
///
/// `S` marks the start, `E` the end, space a path cell, `█` a wall.
/// The view is clamped to `max_w` columns and `max_h` rows from the
/// top-left corner. Diagnostic only; nothing consumes this output.
pub fn render(grid: &Grid, max_w: usize, max_h: usize) -> String {
    let cols = grid.width().min(max_w);
    let rows = grid.height().min(max_h);
    let mut out = String::with_capacity(rows * (cols + 1));

    for y in 0..rows {
        for x in 0..cols {
            let marker = if (x, y) == grid.start() {
                'S'
            } else if (x, y) == grid.end() {
                'E'
            } else {
                match grid.get(x, y) {
                    Some(Cell::Path) => ' ',
                    _ => '█',
                }
            };
            out.push(marker);
        }
        out.push('\n');
    }

    out
}
