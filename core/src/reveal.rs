use alloc::collections::VecDeque;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Uncovers `start` and, while the uncovered cells have no adjacent bombs, the region around it.
///
/// Returns the newly uncovered cells in the order they were opened. Flagged and already
/// uncovered cells are never touched, so calling this on such a cell is a no-op. A bomb
/// under `start` is uncovered like any other cell; deciding what that means is left to the
/// caller.
///
/// Fails with [`GameError::InvalidBoardShape`] when `marks` is not the size of `grid`, and
/// with [`GameError::IndexOutOfRange`] when `start` is off the board.
pub fn reveal(
    start: Coord2,
    grid: &RevealedGrid,
    marks: &mut Array2<CellMark>,
) -> Result<Vec<Coord2>> {
    let fields = grid.fields();
    let side = usize::from(fields);
    if marks.dim() != (side, side) {
        return Err(GameError::InvalidBoardShape);
    }
    if start.0 >= fields || start.1 >= fields {
        return Err(GameError::IndexOutOfRange {
            coords: start,
            fields,
        });
    }

    let mut uncovered = Vec::new();

    if !matches!(marks[start.to_nd_index()], CellMark::Covered) {
        return Ok(uncovered);
    }

    let mut to_visit = VecDeque::from([start]);
    marks[start.to_nd_index()] = CellMark::Uncovered;

    // cells are marked when queued, which keeps every cell in the queue at most once
    while let Some(visit_coords) = to_visit.pop_front() {
        uncovered.push(visit_coords);

        if !grid[visit_coords].is_zero() {
            continue;
        }

        for pos in grid.iter_neighbors(visit_coords) {
            let mark = &mut marks[pos.to_nd_index()];
            if matches!(*mark, CellMark::Covered) {
                *mark = CellMark::Uncovered;
                to_visit.push_back(pos);
            }
        }
    }

    log::trace!("reveal from {:?} opened {} cells", start, uncovered.len());
    Ok(uncovered)
}
