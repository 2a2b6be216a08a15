use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

/// Why a `(fields, bombs)` pair cannot start a game.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must have at least one field per side")]
    NoFields,
    #[error("Too many bombs, requested {bombs} but the board has {cells} cells")]
    TooManyBombs { bombs: CellCount, cells: CellCount },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("Coordinates {coords:?} out of range for a board of side {fields}")]
    IndexOutOfRange { coords: Coord2, fields: Coord },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board state contradicts its bomb layout")]
    InconsistentBoard,
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
