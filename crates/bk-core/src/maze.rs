//! Maze carving via randomized depth-first backtracking.
//!
//! Cells with both coordinates odd form the node lattice; nodes sit two
//! cells apart with a wall cell between each pair. Carving a node always
//! carves the connecting wall as well, so every visited node stays
//! reachable from the start.

use crate::consts::EXTRA_OPENING_RATIO;
use crate::grid::{Cell, Grid};
use crate::rng::MapRng;

/// Two-cell steps to the four neighbor nodes (up, right, down, left)
const STEPS: [(i64, i64); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

/// A carvable neighbor: the node plus the wall cell between it and the
/// current node.
#[derive(Debug, Clone, Copy)]
struct Neighbor {
    node: (usize, usize),
    wall: (usize, usize),
}

/// Carve a spanning-tree maze into the grid, then punch extra openings
///
/// The grid is reset to all walls first. After the spanning tree is
/// complete, roughly 2% of all cells are converted from wall to path at
/// random interior coordinates to break maze perfection.
pub fn carve_maze(grid: &mut Grid, rng: &mut MapRng) {
    grid.fill(Cell::Wall);

    let width = grid.width();
    let height = grid.height();

    let mut visited = vec![false; width * height];
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(width * height / 4);

    let start = grid.start();
    stack.push(start);
    visited[start.1 * width + start.0] = true;
    grid.set(start.0, start.1, Cell::Path);

    while let Some(&(x, y)) = stack.last() {
        let neighbors = open_neighbors(x, y, width, height, &visited);

        match rng.choose(&neighbors) {
            Some(&Neighbor { node, wall }) => {
                grid.set(node.0, node.1, Cell::Path);
                grid.set(wall.0, wall.1, Cell::Path);
                visited[node.1 * width + node.0] = true;
                stack.push(node);
            }
            None => {
                stack.pop();
            }
        }
    }

    punch_openings(grid, rng);
}

/// Unvisited nodes reachable from `(x, y)` by a two-cell step that stays
/// strictly inside the border.
fn open_neighbors(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    visited: &[bool],
) -> Vec<Neighbor> {
    let mut neighbors = Vec::with_capacity(4);

    for (dx, dy) in STEPS {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;

        if nx <= 0 || ny <= 0 || nx >= width as i64 - 1 || ny >= height as i64 - 1 {
            continue;
        }

        let (nx, ny) = (nx as usize, ny as usize);
        if visited[ny * width + nx] {
            continue;
        }

        neighbors.push(Neighbor {
            node: (nx, ny),
            wall: ((x as i64 + dx / 2) as usize, (y as i64 + dy / 2) as usize),
        });
    }

    neighbors
}

/// Convert random interior walls to paths to add loops and shortcuts
///
/// The draw count is fixed at `floor(width * height * 0.02)`; a draw
/// that lands on an existing path is consumed without effect. Purely
/// additive, so nothing already connected can become disconnected.
fn punch_openings(grid: &mut Grid, rng: &mut MapRng) {
    let width = grid.width();
    let height = grid.height();
    let draws = (width as f64 * height as f64 * EXTRA_OPENING_RATIO) as usize;

    for _ in 0..draws {
        let x = rng.range_inclusive(2, width - 3);
        let y = rng.range_inclusive(2, height - 3);
        if grid.get(x, y) == Some(Cell::Wall) {
            grid.set(x, y, Cell::Path);
        }
    }
}
