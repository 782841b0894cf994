use alloc::vec::Vec;
use rand::Rng;

use crate::*;
pub use random::*;

mod random;

/// Strategy for choosing which cells hide mines.
pub trait MinePlacer {
    fn place<R: Rng + ?Sized>(self, config: GameConfig, rng: &mut R) -> Vec<CellPos>;
}
