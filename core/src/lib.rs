#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use types::{checked_side, side_of};

pub use board::*;
pub use config::*;
pub use error::*;
pub use generator::*;
pub use mark::*;
pub use resolver::*;
pub use reveal::*;
pub use types::*;

mod board;
mod config;
mod error;
mod generator;
mod mark;
mod resolver;
mod reveal;
mod types;

/// Fixed set of bomb positions on a square board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBombSet")]
pub struct BombSet {
    bomb_mask: Array2<bool>,
    bomb_count: CellCount,
}

#[derive(Deserialize)]
struct RawBombSet {
    bomb_mask: Array2<bool>,
    bomb_count: CellCount,
}

impl TryFrom<RawBombSet> for BombSet {
    type Error = GameError;

    fn try_from(raw: RawBombSet) -> Result<Self> {
        let fields = checked_side(&raw.bomb_mask)?;
        let bomb_set = Self::from_bomb_mask(raw.bomb_mask);
        if bomb_set.bomb_count != raw.bomb_count {
            return Err(GameError::InconsistentBoard);
        }
        GameConfig::new(fields, bomb_set.bomb_count)?;
        Ok(bomb_set)
    }
}

impl BombSet {
    pub(crate) fn from_bomb_mask(bomb_mask: Array2<bool>) -> Self {
        let bomb_count = bomb_mask.iter().filter(|&&is_bomb| is_bomb).count() as CellCount;
        Self {
            bomb_mask,
            bomb_count,
        }
    }

    /// Builds a set from known positions. Repeated positions count once.
    pub fn from_coords(fields: Coord, bomb_coords: &[Coord2]) -> Result<Self> {
        if fields == 0 {
            return Err(ConfigError::NoFields.into());
        }

        let mut bomb_mask: Array2<bool> = Array2::default((fields, fields).to_nd_index());
        for &coords in bomb_coords {
            if coords.0 >= fields || coords.1 >= fields {
                return Err(GameError::IndexOutOfRange { coords, fields });
            }
            bomb_mask[coords.to_nd_index()] = true;
        }

        let bomb_set = Self::from_bomb_mask(bomb_mask);
        GameConfig::new(fields, bomb_set.bomb_count)?;
        Ok(bomb_set)
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.fields(), self.bomb_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let fields = self.fields();
        if coords.0 < fields && coords.1 < fields {
            Ok(coords)
        } else {
            Err(GameError::IndexOutOfRange { coords, fields })
        }
    }

    pub fn fields(&self) -> Coord {
        side_of(&self.bomb_mask)
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Bomb positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.bomb_mask
            .indexed_iter()
            .filter(|&(_, &is_bomb)| is_bomb)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn adjacent_bomb_count(&self, coords: Coord2) -> u8 {
        self.bomb_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for BombSet {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.bomb_mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn from_coords_collapses_duplicates() {
        let bombs = BombSet::from_coords(3, &[(0, 0), (2, 1), (0, 0)]).unwrap();

        assert_eq!(bombs.bomb_count(), 2);
        assert_eq!(bombs.iter().collect::<Vec<_>>(), [(0, 0), (2, 1)]);
    }

    #[test]
    fn from_coords_rejects_out_of_range() {
        assert_eq!(
            BombSet::from_coords(3, &[(3, 0)]),
            Err(GameError::IndexOutOfRange {
                coords: (3, 0),
                fields: 3
            })
        );
    }

    #[test]
    fn from_coords_rejects_full_board() {
        let all: Vec<_> = (0..2).flat_map(|row| (0..2).map(move |col| (row, col))).collect();

        assert!(matches!(
            BombSet::from_coords(2, &all),
            Err(GameError::InvalidConfiguration(ConfigError::TooManyBombs { .. }))
        ));
    }

    #[test]
    fn deserializing_rejects_bad_masks() {
        let mismatched_count = r#"{"bomb_mask":{"v":1,"dim":[2,2],"data":[true,false,false,false]},"bomb_count":2}"#;
        let not_square = r#"{"bomb_mask":{"v":1,"dim":[1,2],"data":[true,false]},"bomb_count":1}"#;
        let full = r#"{"bomb_mask":{"v":1,"dim":[1,1],"data":[true]},"bomb_count":1}"#;

        assert!(serde_json::from_str::<BombSet>(mismatched_count).is_err());
        assert!(serde_json::from_str::<BombSet>(not_square).is_err());
        assert!(serde_json::from_str::<BombSet>(full).is_err());
    }

    #[test]
    fn serialized_bomb_set_reads_back() {
        let bombs = BombSet::from_coords(4, &[(0, 3), (2, 2)]).unwrap();
        let json = serde_json::to_string(&bombs).unwrap();

        assert_eq!(serde_json::from_str::<BombSet>(&json).unwrap(), bombs);
    }

    #[test]
    fn adjacent_count_ignores_the_cell_itself() {
        let bombs = BombSet::from_coords(3, &[(1, 1), (0, 0)]).unwrap();

        assert_eq!(bombs.adjacent_bomb_count((1, 1)), 1);
        assert_eq!(bombs.adjacent_bomb_count((0, 1)), 2);
        assert_eq!(bombs.adjacent_bomb_count((2, 2)), 1);
    }
}
