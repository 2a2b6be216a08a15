use ndarray::Array2;

use crate::{GameError, Result};

/// Single coordinate axis used for the board side and for positions.
pub type Coord = u8;

/// Count type used for bomb counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square board with `fields` cells per side.
pub const fn square(fields: Coord) -> CellCount {
    let side = fields as CellCount;
    side.saturating_mul(side)
}

/// Whether `(row, col)` lies on a square board with `fields` cells per side.
///
/// Takes signed values so candidate positions computed from an offset can be
/// tested before they are narrowed back to [`Coord`].
pub const fn is_in_bounds(row: isize, col: isize, fields: Coord) -> bool {
    let fields = fields as isize;
    0 <= row && row < fields && 0 <= col && col < fields
}

/// The eight orthogonal and diagonal offsets around a cell.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds neighbors of `coords` on a board with `fields` cells per side.
pub fn neighbors(coords: Coord2, fields: Coord) -> NeighborIter {
    NeighborIter::new(coords, fields)
}

/// Side length of a square grid stored in an [`Array2`].
pub(crate) fn side_of<T>(grid: &Array2<T>) -> Coord {
    Coord::try_from(grid.nrows()).unwrap_or(Coord::MAX)
}

/// Side length of a grid that came from outside, rejecting anything but a non-empty square.
pub(crate) fn checked_side<T>(grid: &Array2<T>) -> Result<Coord> {
    let (rows, cols) = grid.dim();
    if rows != cols || rows == 0 {
        return Err(GameError::InvalidBoardShape);
    }
    Coord::try_from(rows).map_err(|_| GameError::InvalidBoardShape)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        NeighborIter::new(index, side_of(self))
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), fields: Coord) -> Option<Coord2> {
    let row = coords.0 as isize + delta.0;
    let col = coords.1 as isize + delta.1;

    if !is_in_bounds(row, col, fields) {
        return None;
    }

    Some((row.try_into().ok()?, col.try_into().ok()?))
}

#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    fields: Coord,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, fields: Coord) -> Self {
        Self {
            center,
            fields,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *NEIGHBOR_OFFSETS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.fields) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn bounds_reject_negative_and_overflowing_positions() {
        assert!(is_in_bounds(0, 0, 1));
        assert!(is_in_bounds(2, 2, 3));
        assert!(!is_in_bounds(-1, 0, 3));
        assert!(!is_in_bounds(0, 3, 3));
        assert!(!is_in_bounds(0, 0, 0));
    }

    #[test]
    fn corner_has_three_neighbors() {
        let found: Vec<_> = neighbors((0, 0), 3).collect();

        assert_eq!(found, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        assert_eq!(neighbors((1, 1), 3).count(), 8);
        assert!(neighbors((1, 1), 3).all(|pos| pos != (1, 1)));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbors((0, 0), 1).next(), None);
    }

    #[test]
    fn checked_side_accepts_only_non_empty_squares() {
        assert_eq!(checked_side(&Array2::<u8>::zeros((3, 3))), Ok(3));
        assert_eq!(
            checked_side(&Array2::<u8>::zeros((2, 3))),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            checked_side(&Array2::<u8>::zeros((0, 0))),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            checked_side(&Array2::<u8>::zeros((256, 256))),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn far_edge_of_largest_board_does_not_wrap() {
        let last = Coord::MAX - 1;
        let found: Vec<_> = neighbors((last, last), Coord::MAX).collect();

        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|&(row, col)| row < Coord::MAX && col < Coord::MAX));
    }
}
