use super::*;

/// Uniformly random placement driven by a seeded `SmallRng`, so a seed replays the same layout.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineSeeder {
    seed: u64,
}

impl RandomMineSeeder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineSeeder for RandomMineSeeder {
    fn place_mines(self, board: &Board, config: &GameConfig, first_click: Coord3) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        place_mines(board, config, first_click, &mut rng)
    }
}
