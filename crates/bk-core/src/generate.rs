//! Generation entry point: mode dispatch and invariants shared by all
//! modes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::consts::MIN_DIM;
use crate::corridor::connect_rooms;
use crate::grid::Grid;
use crate::maze::carve_maze;
use crate::open_space::fill_open_space;
use crate::rng::MapRng;
use crate::rooms::{RoomPlacement, place_rooms};

/// Generation algorithm selector
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum MapKind {
    /// Spanning-tree maze with extra random openings
    #[default]
    Maze,
    /// Independent per-cell fill, no connectivity guarantee
    OpenSpace,
    /// Non-overlapping rooms joined by L-shaped corridors
    RoomBased,
}

/// Generation failures
///
/// Room placement falling short of its target is deliberately NOT an
/// error; see [`RoomPlacement`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("map dimensions {width}x{height} are too small (minimum {MIN_DIM}x{MIN_DIM})")]
    Dimensions { width: usize, height: usize },
}

/// A finished map plus the metadata needed to reproduce and persist it
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMap {
    pub grid: Grid,
    /// Effective seed, recorded even when it was drawn from entropy
    pub seed: u64,
    pub kind: MapKind,
    /// Placement summary, present for room-based maps only
    pub placement: Option<RoomPlacement>,
}

/// Generate a map
///
/// A `None` seed draws one from the system source and records it, so
/// every run is reproducible afterward. The start and end cells are
/// forced to path after the algorithm runs, whatever it produced there;
/// on maze grids whose end cell falls off the odd node lattice this can
/// leave the end disconnected from the carved structure.
pub fn generate(
    width: usize,
    height: usize,
    seed: Option<u64>,
    kind: MapKind,
) -> Result<GeneratedMap, GenerateError> {
    if width < MIN_DIM || height < MIN_DIM {
        return Err(GenerateError::Dimensions { width, height });
    }

    let mut rng = match seed {
        Some(seed) => MapRng::new(seed),
        None => MapRng::from_entropy(),
    };

    let mut grid = Grid::new(width, height);

    let placement = match kind {
        MapKind::Maze => {
            carve_maze(&mut grid, &mut rng);
            None
        }
        MapKind::OpenSpace => {
            fill_open_space(&mut grid, &mut rng);
            None
        }
        MapKind::RoomBased => {
            let placement = place_rooms(&mut grid, &mut rng);
            connect_rooms(&mut grid, &placement.rooms);
            Some(placement)
        }
    };

    grid.force_endpoints();

    Ok(GeneratedMap {
        grid,
        seed: rng.seed(),
        kind,
        placement,
    })
}
