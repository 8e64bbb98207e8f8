use core::ops::Index;
use ndarray::{Array3, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use crate::*;

/// Allocates an empty, unseeded board for `config`.
pub fn create_board(config: &GameConfig) -> Board {
    Board::new(config)
}

/// The cube of cells, stored `[layer, row, col]`.
///
/// Operations never mutate a board in place from the outside: every public transition takes
/// `&self` and hands back a new snapshot, so callers can keep older boards around.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array3<Cell>,
    mine_count: CellCount,
    seeded: bool,
}

impl Board {
    pub fn new(config: &GameConfig) -> Self {
        let cells = Array3::from_shape_fn(config.size().to_nd_index(), |(l, r, c)| {
            Cell::new((l as Coord, r as Coord, c as Coord))
        });
        Self {
            cells,
            mine_count: 0,
            seeded: false,
        }
    }

    /// Shape as `(depth, rows, cols)`.
    pub fn size(&self) -> Coord3 {
        let (depth, rows, cols) = self.cells.dim();
        // built from Coord dimensions, so the casts are lossless
        (depth as Coord, rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (depth, rows, cols) = self.size();
        mult3(depth, rows, cols)
    }

    pub fn matches(&self, config: &GameConfig) -> bool {
        self.size() == config.size()
    }

    pub(crate) fn check_shape(&self, config: &GameConfig) -> Result<()> {
        if self.matches(config) {
            Ok(())
        } else {
            Err(GameError::InvalidBoardShape)
        }
    }

    pub fn validate_coords(&self, coords: Coord3) -> Result<Coord3> {
        let (depth, rows, cols) = self.size();
        if coords.0 < depth && coords.1 < rows && coords.2 < cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord3) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn cell_at(&self, coords: Coord3) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord3) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    pub(crate) fn cells(&self) -> &Array3<Cell> {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Array3<Cell> {
        &mut self.cells
    }

    /// Cells in storage order: layer by layer, then row by row.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// A single layer as a `rows x cols` view, for layer-by-layer display.
    pub fn layer(&self, layer: Coord) -> Option<ArrayView2<'_, Cell>> {
        let layer = usize::from(layer);
        (layer < self.cells.len_of(Axis(0))).then(|| self.cells.index_axis(Axis(0), layer))
    }

    pub fn iter_neighbors(&self, coords: Coord3) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub(crate) fn mark_seeded(&mut self, mine_count: CellCount) {
        self.mine_count = mine_count;
        self.seeded = true;
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_flagged)
    }

    /// Every safe cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.seeded
            && self.count_where(|cell| cell.is_revealed && !cell.is_mine)
                == self.total_cells() - self.mine_count
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        // never exceeds the Coord^3 volume
        self.cells.iter().filter(|cell| pred(cell)).count() as CellCount
    }

    /// Flips the flag on a hidden cell. Revealed cells come back unchanged.
    pub fn toggle_flag(&self, coords: Coord3) -> Result<Board> {
        let coords = self.validate_coords(coords)?;
        let mut next = self.clone();
        let cell = next.cell_mut(coords);
        if !cell.is_revealed {
            cell.is_flagged = !cell.is_flagged;
        }
        Ok(next)
    }

    /// Reveals every mine, dropping any flag sitting on one first.
    pub fn reveal_all_mines(&self) -> Board {
        let mut next = self.clone();
        for cell in next.cells.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_flagged = false;
            cell.is_revealed = true;
        }
        next
    }
}

impl Index<Coord3> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord3) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_has_configured_dimensions() {
        let config = GameConfig::new_unchecked(3, 4, 2, 1);
        let board = create_board(&config);

        assert_eq!(board.size(), (2, 3, 4));
        assert_eq!(board.cells().dim(), (2, 3, 4));
        assert_eq!(board.total_cells(), 24);
        for layer in 0..2 {
            let view = board.layer(layer).unwrap();
            assert_eq!(view.dim(), (3, 4));
        }
        assert!(board.layer(2).is_none());
    }

    #[test]
    fn new_board_cells_start_blank_with_their_coordinates() {
        let config = Difficulty::Beginner.config();
        let board = create_board(&config);

        assert!(!board.is_seeded());
        assert_eq!(board.mine_count(), 0);
        for layer in 0..5 {
            for row in 0..5 {
                for col in 0..5 {
                    let cell = board[(layer, row, col)];
                    assert_eq!(cell.coords(), (layer, row, col));
                    assert_eq!((cell.layer(), cell.row(), cell.col()), (layer, row, col));
                    assert!(!cell.is_mine());
                    assert!(!cell.is_revealed());
                    assert!(!cell.is_flagged());
                    assert_eq!(cell.neighbor_mines(), 0);
                }
            }
        }
    }

    #[test]
    fn creation_is_deterministic() {
        let config = Difficulty::Intermediate.config();
        assert_eq!(create_board(&config), create_board(&config));
    }

    #[test]
    fn toggle_flag_returns_new_snapshot() {
        let board = create_board(&Difficulty::Beginner.config());

        let flagged = board.toggle_flag((1, 2, 3)).unwrap();
        assert!(flagged[(1, 2, 3)].is_flagged());
        assert!(!board[(1, 2, 3)].is_flagged());
        assert_eq!(flagged.flagged_count(), 1);

        let unflagged = flagged.toggle_flag((1, 2, 3)).unwrap();
        assert_eq!(unflagged, board);
    }

    #[test]
    fn toggle_flag_ignores_revealed_cells() {
        let config = GameConfig::new_unchecked(3, 3, 3, 1);
        let board = FixedMineSeeder::new(&[(2, 2, 2)])
            .place_mines(&create_board(&config), &config, (0, 0, 0))
            .unwrap();
        let board = reveal_cell(&board, (0, 0, 0), &config).unwrap();
        assert!(board[(0, 0, 0)].is_revealed());

        assert_eq!(board.toggle_flag((0, 0, 0)).unwrap(), board);
        assert_eq!(board.toggle_flag((3, 0, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn reveal_all_mines_clears_flags_on_mines() {
        let config = GameConfig::new_unchecked(3, 3, 3, 2);
        let board = FixedMineSeeder::new(&[(0, 0, 0), (2, 2, 2)])
            .place_mines(&create_board(&config), &config, (1, 1, 1))
            .unwrap()
            .toggle_flag((0, 0, 0))
            .unwrap()
            .toggle_flag((1, 1, 1))
            .unwrap();

        let exposed = board.reveal_all_mines();

        for coords in [(0, 0, 0), (2, 2, 2)] {
            assert!(exposed[coords].is_revealed());
            assert!(!exposed[coords].is_flagged());
        }
        assert!(exposed[(1, 1, 1)].is_flagged());
        assert!(!exposed[(1, 1, 1)].is_revealed());
        assert_eq!(exposed.revealed_count(), 2);
        assert!(!exposed.is_cleared());
    }
}
