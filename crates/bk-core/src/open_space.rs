//! Open-space fill: independent per-cell randomization.
//!
//! Trades every structural guarantee for speed. Callers must not assume
//! a path exists between start and end in this mode.

use crate::consts::WALL_PROBABILITY;
use crate::grid::{Cell, Grid};
use crate::rng::MapRng;

/// Fill the grid cell by cell, wall with probability 0.15
///
/// Cells are drawn in row-major order so a fixed seed yields a fixed
/// layout. No border or connectivity guarantee.
pub fn fill_open_space(grid: &mut Grid, rng: &mut MapRng) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = if rng.uniform() < WALL_PROBABILITY {
                Cell::Wall
            } else {
                Cell::Path
            };
            grid.set(x, y, cell);
        }
    }
}
