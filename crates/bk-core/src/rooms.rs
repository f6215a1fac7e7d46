//! Room placement for room-and-corridor maps.
//!
//! Rooms are rectangles placed at random with a 1-cell padding margin
//! between them. Placement is bounded by an attempt budget; running out
//! of attempts before reaching the target room count is a degraded but
//! valid outcome, reported through [`RoomPlacement`].

use crate::consts::{PLACEMENT_ATTEMPTS, ROOM_MAX_SIZE, ROOM_MIN_SIZE};
use crate::grid::{Cell, Grid};
use crate::rng::MapRng;

/// A placed rectangular room
///
/// Ephemeral: rooms drive placement and corridor carving, then only
/// their carved cells survive in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if this room, expanded by `pad` cells on every side,
    /// intersects another room
    pub fn overlaps(&self, other: &Room, pad: usize) -> bool {
        self.x < other.x + other.width + pad
            && other.x < self.x + self.width + pad
            && self.y < other.y + other.height + pad
            && other.y < self.y + self.height + pad
    }

    /// Center cell of the room
    pub fn center(&self) -> (usize, usize) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Outcome of a room placement pass
#[derive(Debug, Clone, PartialEq)]
pub struct RoomPlacement {
    /// Accepted rooms, in placement order
    pub rooms: Vec<Room>,
    /// Attempts consumed (accepted and rejected)
    pub attempts: usize,
    /// Room count the pass was aiming for
    pub target: usize,
}

impl RoomPlacement {
    /// Whether the pass reached its target room count
    pub fn met_target(&self) -> bool {
        self.rooms.len() >= self.target
    }
}

/// Place non-overlapping rooms and carve their interiors
///
/// The grid is reset to all walls first. Candidates draw width, height,
/// then position; a candidate whose padded rectangle intersects any
/// accepted room's rectangle is rejected and costs one attempt.
pub fn place_rooms(grid: &mut Grid, rng: &mut MapRng) -> RoomPlacement {
    grid.fill(Cell::Wall);

    let width = grid.width();
    let height = grid.height();
    let target = 10.max(width * height / 100);

    let mut rooms: Vec<Room> = Vec::new();
    let mut attempts = 0;

    while rooms.len() < target && attempts < PLACEMENT_ATTEMPTS {
        attempts += 1;

        let rw = rng.range_inclusive(ROOM_MIN_SIZE, ROOM_MAX_SIZE);
        let rh = rng.range_inclusive(ROOM_MIN_SIZE, ROOM_MAX_SIZE);

        // Leave the 1-cell border intact.
        if rw + 2 > width || rh + 2 > height {
            continue;
        }

        let x = rng.range_inclusive(1, width - rw - 1);
        let y = rng.range_inclusive(1, height - rh - 1);

        let candidate = Room::new(x, y, rw, rh);
        if rooms.iter().any(|r| candidate.overlaps(r, 1)) {
            continue;
        }

        carve_room(grid, &candidate);
        rooms.push(candidate);
    }

    RoomPlacement {
        rooms,
        attempts,
        target,
    }
}

fn carve_room(grid: &mut Grid, room: &Room) {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            grid.set(x, y, Cell::Path);
        }
    }
}
