use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// One configured game, from a fresh board through a terminal outcome and
/// restart. This is the value a shell persists and restores between page
/// loads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
}

impl GameSession {
    /// Starts a session with a freshly generated board.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let board = Board::generate(config, UniformMinePlacer, rng);
        Self { config, board }
    }

    /// Wraps an existing board, deriving the configuration from it.
    pub fn from_board(board: Board) -> Self {
        Self {
            config: board.config(),
            board,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    pub fn reveal(&mut self, coords: CellPos) -> RevealOutcome {
        self.board.reveal(coords)
    }

    pub fn toggle_flag(&mut self, coords: CellPos) -> FlagOutcome {
        self.board.toggle_flag(coords)
    }

    /// Discards the current board and starts over, optionally under a new
    /// configuration. Always accepted, even mid-game.
    pub fn reset<R: Rng + ?Sized>(&mut self, config: Option<GameConfig>, rng: &mut R) {
        if let Some(config) = config {
            self.config = config;
        }
        log::debug!("Restarting with {:?}", self.config);
        self.board = Board::generate(self.config, UniformMinePlacer, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(99)
    }

    #[test]
    fn new_session_starts_in_progress_with_the_requested_config() {
        let config = GameConfig::new((5, 4), 6).unwrap();

        let session = GameSession::new(config, &mut rng());

        assert_eq!(session.config(), config);
        assert_eq!(session.outcome(), GameOutcome::InProgress);
        assert_eq!(session.board().size(), (5, 4));
        assert_eq!(session.board().mine_count(), 6);
    }

    #[test]
    fn reset_discards_the_board_and_applies_a_new_config() {
        let mut session =
            GameSession::from_board(Board::with_mines((2, 2), &[(0, 0)]).unwrap());
        session.reveal((0, 0));
        assert_eq!(session.outcome(), GameOutcome::Lost);

        let bigger = GameConfig::new((8, 8), 12).unwrap();
        session.reset(Some(bigger), &mut rng());

        assert_eq!(session.config(), bigger);
        assert_eq!(session.outcome(), GameOutcome::InProgress);
        assert_eq!(session.board().size(), (8, 8));
        assert_eq!(session.board().revealed_count(), 0);
    }

    #[test]
    fn reset_without_config_keeps_the_current_one() {
        let config = GameConfig::new((4, 4), 2).unwrap();
        let mut session = GameSession::new(config, &mut rng());

        session.reset(None, &mut rng());

        assert_eq!(session.config(), config);
        assert_eq!(session.board().mine_count(), 2);
    }

    #[test]
    fn session_round_trips_through_serde() {
        let mut session =
            GameSession::from_board(Board::with_mines((3, 3), &[(2, 0), (2, 1)]).unwrap());
        session.reveal((0, 0));
        session.toggle_flag((2, 2));

        let json = serde_json::to_string(&session).unwrap();
        let restored: GameSession = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, session);
    }
}
