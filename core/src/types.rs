use ndarray::Array2;

/// Single grid axis used for row/column positions and board dimensions.
pub type Coord = u8;

/// Count type wide enough for a full board of cells.
pub type CellCount = u16;

/// A cell position as `(row, col)`, row-major.
pub type CellPos = (Coord, Coord);

pub trait GridIndex {
    type Output;
    fn grid_index(self) -> Self::Output;
}

impl GridIndex for CellPos {
    type Output = [usize; 2];

    fn grid_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn area(rows: Coord, cols: Coord) -> CellCount {
    let rows = rows as CellCount;
    let cols = cols as CellCount;
    rows.saturating_mul(cols)
}

pub trait NeighborsExt {
    fn neighbors(&self, index: CellPos) -> Neighbors;
}

impl<T> NeighborsExt for Array2<T> {
    fn neighbors(&self, index: CellPos) -> Neighbors {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        Neighbors::new(index, bounds)
    }
}

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Shifts `coords` by `delta`, yielding the result only while it stays
/// inside `bounds`.
fn offset(coords: CellPos, delta: (isize, isize), bounds: CellPos) -> Option<CellPos> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterator over the up-to-8 in-bounds neighbors of a cell, in reading order.
#[derive(Debug)]
pub struct Neighbors {
    center: CellPos,
    bounds: CellPos,
    index: u8,
}

impl Neighbors {
    fn new(center: CellPos, bounds: CellPos) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = CellPos;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= OFFSETS.len() {
                return None;
            }

            let next_item = offset(self.center, OFFSETS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corners_edges_and_center_have_the_expected_neighbor_counts() {
        let grid: Array2<u8> = Array2::default([3, 3]);

        assert_eq!(grid.neighbors((0, 0)).count(), 3);
        assert_eq!(grid.neighbors((0, 1)).count(), 5);
        assert_eq!(grid.neighbors((1, 1)).count(), 8);
        assert_eq!(grid.neighbors((2, 2)).count(), 3);
    }

    #[test]
    fn neighbors_come_in_reading_order() {
        let grid: Array2<u8> = Array2::default([3, 3]);

        let around_center: Vec<_> = grid.neighbors((1, 1)).collect();

        assert_eq!(
            around_center,
            [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let grid: Array2<u8> = Array2::default([1, 1]);

        assert_eq!(grid.neighbors((0, 0)).count(), 0);
    }
}
