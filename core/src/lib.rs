#![no_std]

extern crate alloc;

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod reveal;
mod types;

/// Cells in the 3x3x3 cube around the first reveal, which never hold a mine.
pub const SAFE_ZONE_CELLS: CellCount = 27;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub depth: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, depth: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            cols,
            depth,
            mines,
        }
    }

    /// Builds a config that leaves room for the safe zone around any first reveal plus at least
    /// one more safe cell.
    pub fn new(rows: Coord, cols: Coord, depth: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 || depth == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if mines == 0 {
            return Err(GameError::NoMines);
        }
        let config = Self::new_unchecked(rows, cols, depth, mines);
        if mines >= config.total_cells().saturating_sub(SAFE_ZONE_CELLS) {
            return Err(GameError::TooManyMines);
        }
        Ok(config)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult3(self.depth, self.rows, self.cols)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    /// Board shape in storage order `(depth, rows, cols)`.
    pub const fn size(&self) -> Coord3 {
        (self.depth, self.rows, self.cols)
    }

    pub const fn contains(&self, (layer, row, col): Coord3) -> bool {
        layer < self.depth && row < self.rows && col < self.cols
    }

    pub fn validate_coords(&self, coords: Coord3) -> Result<Coord3> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

/// Named presets, all of them cubes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        use Difficulty::*;
        match self {
            Beginner => GameConfig::new_unchecked(5, 5, 5, 15),
            Intermediate => GameConfig::new_unchecked(7, 7, 7, 50),
            Expert => GameConfig::new_unchecked(10, 10, 10, 150),
        }
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Beginner => "Beginner",
            Intermediate => "Intermediate",
            Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}
