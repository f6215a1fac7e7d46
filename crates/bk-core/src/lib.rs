//! bk-core: Map generation core for the backrooms game
//!
//! Generates deterministic, seeded 2D occupancy grids used as level
//! layouts, in one of three modes: spanning-tree maze, open-space
//! random fill, or rooms joined by corridors. Pure logic plus the map
//! file read/write; no rendering or game-loop state.

mod consts;
mod corridor;
mod generate;
mod grid;
mod mapfile;
mod maze;
mod open_space;
mod preview;
mod rng;
mod rooms;

pub use consts::{
    EXTRA_OPENING_RATIO, MIN_DIM, PLACEMENT_ATTEMPTS, ROOM_MAX_SIZE, ROOM_MIN_SIZE, START,
    WALL_PROBABILITY,
};
pub use corridor::connect_rooms;
pub use generate::{GenerateError, GeneratedMap, MapKind, generate};
pub use grid::{Cell, Grid};
pub use mapfile::{MapFile, MapFileError, load_map, save_map};
pub use maze::carve_maze;
pub use open_space::fill_open_space;
pub use preview::{MapStats, render};
pub use rng::MapRng;
pub use rooms::{Room, RoomPlacement, place_rooms};
