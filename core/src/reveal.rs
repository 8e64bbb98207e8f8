use alloc::collections::VecDeque;

use crate::*;

/// Reveals the cell at `coords` and flood-fills through every connected zero-count cell.
///
/// Already revealed or flagged targets come back unchanged. A mine target is revealed on its
/// own; handling the loss is up to the caller. The fill itself never opens a mine or a flagged
/// cell, it only stops at them.
pub fn reveal_cell(board: &Board, coords: Coord3, config: &GameConfig) -> Result<Board> {
    board.check_shape(config)?;
    let coords = config.validate_coords(coords)?;
    if !board.is_seeded() {
        return Err(GameError::NotSeeded);
    }

    let target = board[coords];
    if !target.is_hidden() {
        return Ok(board.clone());
    }

    let mut next = board.clone();
    next.cell_mut(coords).is_revealed = true;
    if target.is_mine {
        log::debug!("Revealed mine at {:?}", coords);
        return Ok(next);
    }
    log::debug!(
        "Revealed cell at {:?}, mine count: {}",
        coords,
        target.neighbor_mines
    );

    if target.is_empty() {
        flood_fill(&mut next, coords);
    }

    Ok(next)
}

/// Breadth-first fill from an already revealed zero-count cell. Cells are marked revealed as they
/// are queued, so the revealed flag doubles as the visited set and each cell is queued once.
fn flood_fill(board: &mut Board, origin: Coord3) {
    let mut to_visit = VecDeque::from([origin]);
    let mut opened: CellCount = 0;

    while let Some(visit_coords) = to_visit.pop_front() {
        for pos in board.iter_neighbors(visit_coords) {
            let cell = board.cell_mut(pos);
            if !cell.is_hidden() || cell.is_mine {
                continue;
            }

            cell.is_revealed = true;
            opened += 1;
            log::trace!(
                "Flood opened cell at {:?}, mine count: {}",
                pos,
                cell.neighbor_mines
            );

            if cell.is_empty() {
                to_visit.push_back(pos);
            }
        }
    }

    log::trace!("Flood fill from {:?} opened {} cells", origin, opened);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn layout(config: &GameConfig, mines: &[Coord3]) -> Board {
        FixedMineSeeder::new(mines)
            .place_mines(&create_board(config), config, (0, 0, 0))
            .unwrap()
    }

    fn revealed(board: &Board) -> Vec<Coord3> {
        board
            .iter()
            .filter(|cell| cell.is_revealed())
            .map(Cell::coords)
            .collect()
    }

    #[test]
    fn center_mine_stops_fill_at_the_target() {
        // every other cell of a 3x3x3 cube touches the center
        let config = GameConfig::new_unchecked(3, 3, 3, 1);
        let board = layout(&config, &[(1, 1, 1)]);

        let next = reveal_cell(&board, (0, 0, 0), &config).unwrap();

        assert_eq!(revealed(&next), Vec::<Coord3>::from([(0, 0, 0)]));
        assert_eq!(next[(0, 0, 0)].neighbor_mines(), 1);
    }

    #[test]
    fn fill_covers_the_zero_region_and_its_border_only() {
        // 3 layers x 3 rows x 5 cols with a wall of mines in column 2
        let config = GameConfig::new_unchecked(3, 5, 3, 9);
        let wall: Vec<Coord3> = (0..3)
            .flat_map(|l| (0..3).map(move |r| (l, r, 2)))
            .collect();
        let board = layout(&config, &wall);

        let next = reveal_cell(&board, (0, 0, 0), &config).unwrap();

        for cell in next.iter() {
            let expected = cell.col() < 2;
            assert_eq!(cell.is_revealed(), expected, "at {:?}", cell.coords());
        }
        assert_eq!(next.revealed_count(), 18);
        assert!(next.iter().filter(|c| c.col() == 1).all(|c| c.neighbor_mines() > 0));
    }

    #[test]
    fn single_far_mine_opens_every_safe_cell() {
        let config = GameConfig::new_unchecked(5, 5, 5, 1);
        let board = layout(&config, &[(4, 4, 4)]);

        let next = reveal_cell(&board, (0, 0, 0), &config).unwrap();

        assert_eq!(next.revealed_count(), 124);
        assert!(!next[(4, 4, 4)].is_revealed());
        assert_eq!(next[(3, 3, 3)].neighbor_mines(), 1);
        assert!(next.is_cleared());
    }

    #[test]
    fn revealing_a_numbered_cell_does_not_propagate() {
        let config = GameConfig::new_unchecked(5, 5, 5, 1);
        let board = layout(&config, &[(4, 4, 4)]);

        let next = reveal_cell(&board, (3, 4, 4), &config).unwrap();

        assert_eq!(revealed(&next), Vec::<Coord3>::from([(3, 4, 4)]));
    }

    #[test]
    fn already_revealed_or_flagged_targets_are_unchanged() {
        let config = GameConfig::new_unchecked(5, 5, 5, 1);
        let board = layout(&config, &[(4, 4, 4)]);

        let flagged = board.toggle_flag((2, 2, 2)).unwrap();
        assert_eq!(reveal_cell(&flagged, (2, 2, 2), &config).unwrap(), flagged);

        let opened = reveal_cell(&board, (3, 4, 4), &config).unwrap();
        assert_eq!(reveal_cell(&opened, (3, 4, 4), &config).unwrap(), opened);
    }

    #[test]
    fn fill_skips_flagged_cells_and_leaves_input_alone() {
        let config = GameConfig::new_unchecked(5, 5, 5, 1);
        let board = layout(&config, &[(4, 4, 4)])
            .toggle_flag((2, 2, 2))
            .unwrap();

        let next = reveal_cell(&board, (0, 0, 0), &config).unwrap();

        assert!(next[(2, 2, 2)].is_flagged());
        assert!(!next[(2, 2, 2)].is_revealed());
        assert_eq!(next.revealed_count(), 123);
        assert!(next.iter().all(|cell| !(cell.is_flagged() && cell.is_revealed())));
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn flagged_wall_cuts_off_the_far_side() {
        // a full flagged plane at layer 1 separates layer 0 from layer 2
        let config = GameConfig::new_unchecked(3, 3, 4, 1);
        let mut board = layout(&config, &[(3, 2, 2)]);
        for r in 0..3 {
            for c in 0..3 {
                board = board.toggle_flag((1, r, c)).unwrap();
            }
        }

        let next = reveal_cell(&board, (0, 0, 0), &config).unwrap();

        assert_eq!(next.revealed_count(), 9);
        assert!(next.iter().filter(|c| c.layer() == 0).all(Cell::is_revealed));
        assert!(next.iter().filter(|c| c.layer() >= 2).all(|c| !c.is_revealed()));
    }

    #[test]
    fn mine_target_is_revealed_without_propagation() {
        let config = GameConfig::new_unchecked(3, 3, 3, 1);
        let board = layout(&config, &[(1, 1, 1)]);

        let next = reveal_cell(&board, (1, 1, 1), &config).unwrap();

        assert_eq!(revealed(&next), Vec::<Coord3>::from([(1, 1, 1)]));
    }

    #[test]
    fn rejects_unseeded_boards_and_bad_coordinates() {
        let config = GameConfig::new_unchecked(3, 3, 3, 1);
        let empty = create_board(&config);
        assert_eq!(
            reveal_cell(&empty, (0, 0, 0), &config),
            Err(GameError::NotSeeded)
        );

        let board = layout(&config, &[(1, 1, 1)]);
        assert_eq!(
            reveal_cell(&board, (0, 3, 0), &config),
            Err(GameError::InvalidCoords)
        );
    }
}
