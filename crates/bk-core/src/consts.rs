//! Generation constants shared across the map algorithms.

/// Smallest usable map dimension. Anything below this leaves no room
/// for a border plus distinct start/end cells.
pub const MIN_DIM: usize = 5;

/// Fixed start cell for every generated map.
pub const START: (usize, usize) = (1, 1);

/// Probability that an open-space cell comes out as a wall.
pub const WALL_PROBABILITY: f64 = 0.15;

/// Fraction of all cells converted to extra openings after maze carving.
pub const EXTRA_OPENING_RATIO: f64 = 0.02;

/// Room edge length bounds for room-based generation.
pub const ROOM_MIN_SIZE: usize = 3;
pub const ROOM_MAX_SIZE: usize = 8;

/// Placement attempt budget for room-based generation.
pub const PLACEMENT_ATTEMPTS: usize = 200;
