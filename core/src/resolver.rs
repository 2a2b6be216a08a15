use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::{checked_side, side_of};
use crate::*;

/// What lies under a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Bomb,
    /// Safe cell with the number of bombs among its eight neighbors.
    Empty(u8),
}

impl FieldValue {
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    /// Safe cell without any adjacent bomb, the only kind the flood fill expands from.
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Empty(0))
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Empty(0)
    }
}

/// Per-cell [`FieldValue`]s of a board, derived once from its [`BombSet`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRevealedGrid")]
pub struct RevealedGrid {
    values: Array2<FieldValue>,
}

#[derive(Deserialize)]
struct RawRevealedGrid {
    values: Array2<FieldValue>,
}

impl TryFrom<RawRevealedGrid> for RevealedGrid {
    type Error = GameError;

    fn try_from(raw: RawRevealedGrid) -> Result<Self> {
        checked_side(&raw.values)?;
        if raw.values.iter().any(|&value| matches!(value, FieldValue::Empty(count) if count > 8)) {
            return Err(GameError::InconsistentBoard);
        }
        Ok(Self { values: raw.values })
    }
}

impl RevealedGrid {
    pub fn fields(&self) -> Coord {
        side_of(&self.values)
    }

    pub fn get(&self, coords: Coord2) -> Option<FieldValue> {
        self.values.get(coords.to_nd_index()).copied()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.values.iter_neighbors(coords)
    }
}

impl Index<Coord2> for RevealedGrid {
    type Output = FieldValue;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.values[coords.to_nd_index()]
    }
}

pub fn compute_revealed_grid(bombs: &BombSet) -> RevealedGrid {
    let fields = bombs.fields();
    let values = Array2::from_shape_fn((fields, fields).to_nd_index(), |(row, col)| {
        let coords = (row as Coord, col as Coord);
        if bombs.contains(coords) {
            FieldValue::Bomb
        } else {
            FieldValue::Empty(bombs.adjacent_bomb_count(coords))
        }
    });
    RevealedGrid { values }
}
