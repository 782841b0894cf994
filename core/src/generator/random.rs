use super::*;

/// Uniform placement: a partial Fisher-Yates shuffle of the linear cell
/// indices, keeping the first `mines` of them. Linear time at any density.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UniformMinePlacer;

impl MinePlacer for UniformMinePlacer {
    fn place<R: Rng + ?Sized>(self, config: GameConfig, rng: &mut R) -> Vec<CellPos> {
        use rand::prelude::*;

        let total = config.total_cells();
        if config.mines > total {
            log::warn!(
                "Requested {} mines but the board only fits {}",
                config.mines,
                total
            );
        }

        let cols = config.size.1 as CellCount;
        let mut indices: Vec<CellCount> = (0..total).collect();
        let (picked, _) = indices.partial_shuffle(rng, config.mines as usize);

        picked
            .iter()
            .map(|&index| ((index / cols) as Coord, (index % cols) as Coord))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use rand::prelude::*;

    #[test]
    fn places_exactly_the_requested_mines() {
        let config = GameConfig::new((9, 7), 20).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);

        let coords = UniformMinePlacer.place(config, &mut rng);

        assert_eq!(coords.len(), 20);
    }

    #[test]
    fn placed_mines_are_distinct_and_in_bounds() {
        let config = GameConfig::new((5, 4), 19).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);

        let coords = UniformMinePlacer.place(config, &mut rng);

        let unique: BTreeSet<_> = coords.iter().copied().collect();
        assert_eq!(unique.len(), coords.len());
        assert!(coords.iter().all(|&(row, col)| row < 5 && col < 4));
    }

    #[test]
    fn near_full_boards_still_place_in_one_pass() {
        let config = GameConfig::new((16, 16), 255).unwrap();
        let mut rng = SmallRng::seed_from_u64(3);

        let coords = UniformMinePlacer.place(config, &mut rng);

        let unique: BTreeSet<_> = coords.iter().copied().collect();
        assert_eq!(unique.len(), 255);
    }
}
