use thiserror::Error;

/// Construction-time validation failures. Gameplay moves never error, bad
/// input is rejected as a no-op instead.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs at least one cell")]
    EmptyBoard,
    #[error("Mine density must lie strictly between 0 and 1")]
    InvalidDensity,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
