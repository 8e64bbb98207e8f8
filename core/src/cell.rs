use serde::{Deserialize, Serialize};

use crate::*;

/// A single position of the cube. Coordinates never change once created, the
/// remaining state is only touched through [`Board`] operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord3,
    pub(crate) is_mine: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) neighbor_mines: u8,
}

impl Cell {
    pub const fn new(coords: Coord3) -> Self {
        Self {
            coords,
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            neighbor_mines: 0,
        }
    }

    pub const fn coords(&self) -> Coord3 {
        self.coords
    }

    pub const fn layer(&self) -> Coord {
        self.coords.0
    }

    pub const fn row(&self) -> Coord {
        self.coords.1
    }

    pub const fn col(&self) -> Coord {
        self.coords.2
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Mines among the 26 surrounding cells. Always 0 for mine cells.
    pub const fn neighbor_mines(&self) -> u8 {
        self.neighbor_mines
    }

    /// Hidden and unflagged, i.e. a cell the flood fill is allowed to open.
    pub const fn is_hidden(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// Safe cell with no adjacent mines, the flood fill continues past these.
    pub const fn is_empty(&self) -> bool {
        !self.is_mine && self.neighbor_mines == 0
    }
}
