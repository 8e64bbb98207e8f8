use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// No reveal yet, mines are placed on the first one
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// One game from the first reveal to a win or a loss, driving the board operations the way a
/// front end would: lazy seeding, loss on a mine, win once every safe cell is open.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    config: GameConfig,
    board: Board,
    seed: u64,
    state: EngineState,
    triggered_mine: Option<Coord3>,
}

impl PlayEngine {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            board: create_board(&config),
            seed,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    /// Starts from a board that already carries its mines, skipping the lazy seeding.
    pub fn from_seeded_board(config: GameConfig, board: Board) -> Result<Self> {
        board.check_shape(&config)?;
        if !board.is_seeded() {
            return Err(GameError::NotSeeded);
        }
        Ok(Self {
            config,
            board,
            seed: 0,
            state: Default::default(),
            triggered_mine: None,
        })
    }

    /// Throws the board away and starts over with the same config.
    pub fn reset(&mut self, seed: u64) {
        log::debug!("Reset game with seed {}", seed);
        *self = Self::new(self.config, seed);
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current snapshot; every move replaces it with a new one.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord3) -> Result<Cell> {
        let coords = self.config.validate_coords(coords)?;
        Ok(self.board.cell_at(coords))
    }

    pub fn triggered_mine(&self) -> Option<Coord3> {
        self.triggered_mine
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn flagged_count(&self) -> CellCount {
        self.board.flagged_count()
    }

    /// Can go negative when more cells are flagged than there are mines.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.total_mines()) - i64::from(self.flagged_count())
    }

    pub fn toggle_flag(&mut self, coords: Coord3) -> Result<MarkOutcome> {
        let coords = self.config.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.board[coords].is_revealed() {
            return Ok(MarkOutcome::NoChange);
        }
        self.board = self.board.toggle_flag(coords)?;
        Ok(MarkOutcome::Changed)
    }

    pub fn reveal(&mut self, coords: Coord3) -> Result<RevealOutcome> {
        let coords = self.config.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.board[coords].is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        if !self.board.is_seeded() {
            self.board =
                RandomMineSeeder::new(self.seed).place_mines(&self.board, &self.config, coords)?;
        }

        if self.board[coords].is_mine() {
            self.board = self.board.reveal_all_mines();
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return Ok(RevealOutcome::HitMine);
        }

        self.board = reveal_cell(&self.board, coords, &self.config)?;
        if self.board.is_cleared() {
            self.end_game(true);
            Ok(RevealOutcome::Won)
        } else {
            self.mark_started();
            Ok(RevealOutcome::Revealed)
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, EngineState::Ready) {
            log::debug!("Game started");
            self.state = EngineState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        log::debug!("Game ended: {:?}", self.state);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
