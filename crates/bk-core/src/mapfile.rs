//! Persisted map format.
//!
//! A map file is a JSON record with the grid baked in as rows of
//! integers (`0` = path, `1` = wall) plus the metadata the renderer
//! needs: dimensions, seed, start and end. Saving ensures the parent
//! directory exists; loading validates the record before handing it to
//! the caller.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MIN_DIM;
use crate::grid::{Cell, Grid};

/// Map file errors
#[derive(Debug, Error)]
pub enum MapFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid map file: {0}")]
    Invalid(String),
}

/// The persisted map record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapFile {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub start_pos: [usize; 2],
    pub end_pos: [usize; 2],
    /// `height` rows of `width` cells each
    pub map: Vec<Vec<u8>>,
}

impl MapFile {
    /// Build the persisted record from a grid and its seed
    pub fn from_grid(grid: &Grid, seed: u64) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            seed,
            start_pos: [grid.start().0, grid.start().1],
            end_pos: [grid.end().0, grid.end().1],
            map: grid
                .rows()
                .map(|row| row.iter().map(Cell::encode).collect())
                .collect(),
        }
    }

    /// Rebuild a grid from the record
    ///
    /// Fails when the record does not validate.
    pub fn to_grid(&self) -> Result<Grid, MapFileError> {
        self.validate()?;
        let mut grid = Grid::new(self.width, self.height);
        for (y, row) in self.map.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                // validate() already checked the cell domain
                if let Some(cell) = Cell::decode(value) {
                    grid.set(x, y, cell);
                }
            }
        }
        Ok(grid)
    }

    /// Check the consumer-side contract: dimensions, row and column
    /// counts, cell domain, and start/end bounds
    pub fn validate(&self) -> Result<(), MapFileError> {
        if self.width < MIN_DIM || self.height < MIN_DIM {
            return Err(MapFileError::Invalid(format!(
                "dimensions {}x{} below minimum {MIN_DIM}x{MIN_DIM}",
                self.width, self.height
            )));
        }
        if self.map.len() != self.height {
            return Err(MapFileError::Invalid(format!(
                "expected {} rows, found {}",
                self.height,
                self.map.len()
            )));
        }
        for (y, row) in self.map.iter().enumerate() {
            if row.len() != self.width {
                return Err(MapFileError::Invalid(format!(
                    "row {y} has {} cells, expected {}",
                    row.len(),
                    self.width
                )));
            }
            for (x, &value) in row.iter().enumerate() {
                if Cell::decode(value).is_none() {
                    return Err(MapFileError::Invalid(format!(
                        "cell ({x},{y}) holds {value}, expected 0 or 1"
                    )));
                }
            }
        }
        for (name, [x, y]) in [("start_pos", self.start_pos), ("end_pos", self.end_pos)] {
            if x >= self.width || y >= self.height {
                return Err(MapFileError::Invalid(format!(
                    "{name} ({x},{y}) out of bounds"
                )));
            }
        }
        Ok(())
    }
}

/// Save a grid and its seed to a map file
///
/// Creates the destination's parent directory when missing. The file
/// handle is scoped to this call and released on every exit path.
pub fn save_map(grid: &Grid, seed: u64, path: impl AsRef<Path>) -> Result<(), MapFileError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let record = MapFile::from_grid(grid, seed);
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &record)?;
    Ok(())
}

/// Load and validate a map file
pub fn load_map(path: impl AsRef<Path>) -> Result<MapFile, MapFileError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let record: MapFile = serde_json::from_reader(reader)?;
    record.validate()?;
    Ok(record)
}
