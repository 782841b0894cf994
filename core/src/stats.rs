use serde::{Deserialize, Serialize};

use crate::GameOutcome;

/// Win/loss tally spanning many games. The engine never stores one, callers
/// thread it through [`Stats::record`] and persist it themselves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub wins: u32,
    pub losses: u32,
}

impl Stats {
    pub const fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    /// Folds a terminal outcome into the tally. An in-progress outcome
    /// leaves it unchanged.
    #[must_use]
    pub const fn record(self, outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Won => Self::new(self.wins.saturating_add(1), self.losses),
            GameOutcome::Lost => Self::new(self.wins, self.losses.saturating_add(1)),
            GameOutcome::InProgress => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_outcomes_bump_the_matching_counter() {
        let stats = Stats::default()
            .record(GameOutcome::Won)
            .record(GameOutcome::Lost)
            .record(GameOutcome::Won);

        assert_eq!(stats, Stats::new(2, 1));
    }

    #[test]
    fn in_progress_outcomes_leave_the_tally_alone() {
        let stats = Stats::new(3, 4).record(GameOutcome::InProgress);

        assert_eq!(stats, Stats::new(3, 4));
    }

    #[test]
    fn counters_saturate_instead_of_wrapping() {
        let stats = Stats::new(u32::MAX, 0).record(GameOutcome::Won);

        assert_eq!(stats.wins, u32::MAX);
    }
}
