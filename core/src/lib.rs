#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use stats::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod session;
mod stats;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: CellPos,
    pub mines: CellCount,
}

impl GameConfig {
    /// Skips validation, the caller keeps the invariants.
    pub const fn new_unchecked(size: CellPos, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: CellPos, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines >= area(size.0, size.1) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    /// Derives the mine count from a density in the open interval (0, 1),
    /// rounding down.
    pub fn from_density(size: CellPos, density: f64) -> Result<Self> {
        if !(density > 0.0 && density < 1.0) {
            return Err(GameError::InvalidDensity);
        }
        let total = area(size.0, size.1);
        let mines = (total as f64 * density) as CellCount;
        Self::new(size, mines)
    }

    /// Ready-made configuration for a picker tier.
    pub fn preset(size: BoardSize, difficulty: Difficulty) -> Self {
        let edge = size.edge();
        let total = area(edge, edge);
        let mines = (total as f64 * difficulty.density()) as CellCount;
        Self::new_unchecked((edge, edge), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::preset(BoardSize::Medium, Difficulty::Medium)
    }
}

/// Picker tiers for the share of cells hiding mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn density(self) -> f64 {
        match self {
            Self::Easy => 0.1,
            Self::Medium => 0.2,
            Self::Hard => 0.4,
        }
    }
}

/// Picker tiers for the square board edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardSize {
    Small,
    Medium,
    Big,
}

impl BoardSize {
    pub const fn edge(self) -> Coord {
        match self {
            Self::Small => 6,
            Self::Medium => 10,
            Self::Big => 14,
        }
    }
}

/// Status of one game instance, derived from its board.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    /// Indicates the game has ended and no moves are accepted anymore.
    pub const fn is_final(self) -> bool {
        use GameOutcome::*;
        match self {
            InProgress => false,
            Won => true,
            Lost => true,
        }
    }
}

/// Outcome of revealing a cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Exploded,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Exploded => true,
            Won => true,
        }
    }

    /// The terminal outcome this reveal produced, if any. Yielded exactly
    /// once per game, so callers can persist their tally on it.
    pub const fn terminal(self) -> Option<GameOutcome> {
        use RevealOutcome::*;
        match self {
            NoChange => None,
            Revealed => None,
            Exploded => Some(GameOutcome::Lost),
            Won => Some(GameOutcome::Won),
        }
    }
}

/// Outcome of toggling a flag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Toggled,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the board.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Toggled => true,
        }
    }
}
