use alloc::collections::{BTreeSet, VecDeque};
use core::num::Saturating;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// One game's grid, from construction to a terminal outcome. Replaced
/// wholesale on restart, never reused.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: Saturating<CellCount>,
    triggered_mine: Option<CellPos>,
}

impl Board {
    /// Builds a fresh board with mines chosen by `placer`.
    pub fn generate<P, R>(config: GameConfig, placer: P, rng: &mut R) -> Self
    where
        P: MinePlacer,
        R: Rng + ?Sized,
    {
        let mine_coords = placer.place(config, rng);
        let board = Self::assemble(config.size, &mine_coords);
        log::debug!(
            "Generated {}x{} board with {} mines",
            config.size.0,
            config.size.1,
            board.mine_count
        );
        board
    }

    /// Builds a board with mines at the given coordinates. Duplicates
    /// collapse into one mine.
    pub fn with_mines(size: CellPos, mine_coords: &[CellPos]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
        }

        let board = Self::assemble(size, mine_coords);
        if board.mine_count >= board.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(board)
    }

    fn assemble(size: CellPos, mine_coords: &[CellPos]) -> Self {
        let mut cells: Array2<Cell> = Array2::default(size.grid_index());

        for &coords in mine_coords {
            cells[coords.grid_index()].is_mine = true;
        }

        // count the distinct mines and bump every neighbor they touch
        let mut mine_count: CellCount = 0;
        for row in 0..size.0 {
            for col in 0..size.1 {
                if cells[(row, col).grid_index()].is_mine {
                    mine_count += 1;
                    for pos in cells.neighbors((row, col)) {
                        cells[pos.grid_index()].neighboring_mines += 1;
                    }
                }
            }
        }

        Self {
            cells,
            mine_count,
            revealed_count: Saturating(0),
            triggered_mine: None,
        }
    }

    pub fn size(&self) -> CellPos {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// How many safe cells have been revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    /// The mine that ended the game, if it ended in a loss.
    pub fn triggered_mine(&self) -> Option<CellPos> {
        self.triggered_mine
    }

    pub fn cell_at(&self, coords: CellPos) -> Cell {
        self.cells[coords.grid_index()]
    }

    /// Iterates every cell with its coordinates, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    /// Derived from the grid alone: lost once a mine is revealed, won once
    /// every safe cell is.
    pub fn outcome(&self) -> GameOutcome {
        if self.triggered_mine.is_some() {
            GameOutcome::Lost
        } else if self.revealed_count == Saturating(self.safe_cell_count()) {
            GameOutcome::Won
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_final()
    }

    /// Reveals a cell. No-op when the game is over, the coordinates are out
    /// of bounds, or the cell is already revealed or flagged.
    pub fn reveal(&mut self, coords: CellPos) -> RevealOutcome {
        use RevealOutcome::*;

        if self.is_finished() || !self.in_bounds(coords) {
            return NoChange;
        }

        let cell = self.cells[coords.grid_index()];
        if cell.is_revealed || cell.is_flagged {
            return NoChange;
        }

        if cell.is_mine {
            self.cells[coords.grid_index()].is_revealed = true;
            self.triggered_mine = Some(coords);
            log::debug!("Revealed a mine at {:?}", coords);
            Exploded
        } else {
            self.reveal_safe_cell(coords)
        }
    }

    /// Opens a safe cell and flood-fills outward while the neighbor count
    /// stays zero.
    fn reveal_safe_cell(&mut self, coords: CellPos) -> RevealOutcome {
        let count = self.open_cell(coords);
        log::debug!("Revealed cell at {:?}, neighboring mines: {}", coords, count);

        if count == 0 {
            let mut visited = BTreeSet::from([coords]);
            let mut to_visit: VecDeque<_> = self
                .neighbors(coords)
                .filter(|&pos| !self.cells[pos.grid_index()].is_revealed)
                .collect();
            log::trace!(
                "Starting flood fill from {:?}, initial neighbors: {:?}",
                coords,
                to_visit
            );

            while let Some(visit_coords) = to_visit.pop_front() {
                if !visited.insert(visit_coords) {
                    continue;
                }

                // flags do not stop the cascade, only revealed cells are skipped
                if self.cells[visit_coords.grid_index()].is_revealed {
                    continue;
                }

                let visit_count = self.open_cell(visit_coords);
                log::trace!(
                    "Flood revealed {:?}, neighboring mines: {}",
                    visit_coords,
                    visit_count
                );

                // another zero, keep expanding
                if visit_count == 0 {
                    to_visit.extend(
                        self.neighbors(visit_coords)
                            .filter(|&pos| !self.cells[pos.grid_index()].is_revealed)
                            .filter(|pos| !visited.contains(pos)),
                    );
                }
            }
        }

        if self.revealed_count == Saturating(self.safe_cell_count()) {
            log::debug!("All safe cells revealed, game won");
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Toggles the flag marker on a hidden cell. No-op when the game is
    /// over, the coordinates are out of bounds, or the cell is revealed.
    pub fn toggle_flag(&mut self, coords: CellPos) -> FlagOutcome {
        use FlagOutcome::*;

        if self.is_finished() || !self.in_bounds(coords) {
            return NoChange;
        }

        let cell = &mut self.cells[coords.grid_index()];
        if cell.is_revealed {
            return NoChange;
        }

        cell.is_flagged = !cell.is_flagged;
        log::debug!("Toggled flag at {:?}, now set: {}", coords, cell.is_flagged);
        Toggled
    }

    fn open_cell(&mut self, coords: CellPos) -> u8 {
        let cell = &mut self.cells[coords.grid_index()];
        cell.is_revealed = true;
        cell.is_flagged = false;
        let count = cell.neighboring_mines;
        self.revealed_count += 1;
        count
    }

    fn in_bounds(&self, coords: CellPos) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    fn neighbors(&self, coords: CellPos) -> impl Iterator<Item = CellPos> + use<> {
        self.cells.neighbors(coords)
    }
}

impl Index<CellPos> for Board {
    type Output = Cell;

    fn index(&self, (row, col): CellPos) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}
