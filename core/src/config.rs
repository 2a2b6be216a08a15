use serde::{Deserialize, Serialize};

use crate::*;

/// Board side and bomb count of a game, validated on construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct GameConfig {
    fields: Coord,
    bombs: CellCount,
}

/// Unchecked wire form of [`GameConfig`].
#[derive(Deserialize)]
struct RawConfig {
    fields: Coord,
    bombs: CellCount,
}

impl TryFrom<RawConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Self::new(raw.fields, raw.bombs)
    }
}

impl GameConfig {
    pub(crate) const fn new_unchecked(fields: Coord, bombs: CellCount) -> Self {
        Self { fields, bombs }
    }

    /// Checks that the board has at least one cell and one safe cell.
    pub fn new(fields: Coord, bombs: CellCount) -> Result<Self> {
        if fields == 0 {
            return Err(ConfigError::NoFields.into());
        }

        let cells = square(fields);
        if bombs >= cells {
            return Err(ConfigError::TooManyBombs { bombs, cells }.into());
        }

        Ok(Self { fields, bombs })
    }

    pub const fn fields(&self) -> Coord {
        self.fields
    }

    pub const fn bombs(&self) -> CellCount {
        self.bombs
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.fields)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.bombs)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

/// Named presets for square boards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        use Difficulty::*;
        let (fields, bombs) = match self {
            Beginner => (9, 10),
            Intermediate => (16, 40),
            Expert => (24, 99),
        };
        GameConfig { fields, bombs }
    }
}
