use super::*;

/// Replays a known mine layout instead of sampling one. The safe zone is not enforced.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineSeeder {
    mines: Vec<Coord3>,
}

impl FixedMineSeeder {
    pub fn new(mines: &[Coord3]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MineSeeder for FixedMineSeeder {
    fn place_mines(self, board: &Board, config: &GameConfig, first_click: Coord3) -> Result<Board> {
        board.check_shape(config)?;
        let first_click = config.validate_coords(first_click)?;
        if board.is_seeded() {
            return Err(GameError::AlreadySeeded);
        }

        let mut next = board.clone();
        for coords in self.mines {
            let coords = config.validate_coords(coords)?;
            if within_one_step(coords, first_click) {
                log::debug!("Fixed mine at {:?} inside first click safe zone", coords);
            }
            next.cell_mut(coords).is_mine = true;
        }

        let count = next.iter().filter(|cell| cell.is_mine).count() as CellCount;
        if count != config.mines {
            log::warn!(
                "Fixed layout mine count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        fill_neighbor_counts(&mut next);
        next.mark_seeded(count);

        Ok(next)
    }
}
