use alloc::vec::Vec;
use ndarray::Zip;
use rand::prelude::*;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy for turning an empty board into a seeded one once the first reveal is known.
pub trait MineSeeder {
    fn place_mines(self, board: &Board, config: &GameConfig, first_click: Coord3) -> Result<Board>;
}

/// Places `config.mines` mines uniformly at random outside the 3x3x3 cube around `first_click`
/// and fills in every neighbour count. `board` itself is left untouched.
pub fn place_mines<R: Rng + ?Sized>(
    board: &Board,
    config: &GameConfig,
    first_click: Coord3,
    rng: &mut R,
) -> Result<Board> {
    board.check_shape(config)?;
    let first_click = config.validate_coords(first_click)?;
    if board.is_seeded() {
        return Err(GameError::AlreadySeeded);
    }

    let mut eligible: Vec<Coord3> = board
        .iter()
        .map(Cell::coords)
        .filter(|&coords| !within_one_step(coords, first_click))
        .collect();
    let mine_count = config.mines as usize;
    if mine_count > eligible.len() {
        log::warn!(
            "Cannot keep first click safe, requested {} mines but only {} cells are eligible",
            config.mines,
            eligible.len()
        );
        return Err(GameError::TooManyMines);
    }

    // partial Fisher-Yates: the first `mine_count` entries become a uniform sample
    for i in 0..mine_count {
        let j = rng.random_range(i..eligible.len());
        eligible.swap(i, j);
    }

    let mut next = board.clone();
    for &coords in &eligible[..mine_count] {
        next.cell_mut(coords).is_mine = true;
    }
    fill_neighbor_counts(&mut next);
    next.mark_seeded(config.mines);
    log::debug!(
        "Placed {} mines around first click at {:?}",
        config.mines,
        first_click
    );

    Ok(next)
}

/// Recomputes `neighbor_mines` for every safe cell from the current mine layout.
pub(crate) fn fill_neighbor_counts(board: &mut Board) {
    let counts = board.cells().map(|cell| {
        if cell.is_mine {
            0
        } else {
            board
                .iter_neighbors(cell.coords())
                .filter(|&pos| board[pos].is_mine)
                .count() as u8
        }
    });
    Zip::from(board.cells_mut())
        .and(&counts)
        .for_each(|cell, &count| cell.neighbor_mines = count);
}
