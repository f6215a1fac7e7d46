//! L-shaped corridors between placed rooms.
//!
//! Rooms are connected in placement order, each to its immediate
//! predecessor, so the whole sequence forms one connected chain. The
//! bend is always horizontal-then-vertical.

use crate::grid::{Cell, Grid};
use crate::rooms::Room;

/// Carve an L-shaped corridor between each consecutive pair of rooms
///
/// The horizontal segment runs along the first room's center row, the
/// vertical segment along the second room's center column.
pub fn connect_rooms(grid: &mut Grid, rooms: &[Room]) {
    for pair in rooms.windows(2) {
        let (x1, y1) = pair[0].center();
        let (x2, y2) = pair[1].center();

        for x in x1.min(x2)..=x1.max(x2) {
            grid.set(x, y1, Cell::Path);
        }
        for y in y1.min(y2)..=y1.max(y2) {
            grid.set(x2, y, Cell::Path);
        }
    }
}
