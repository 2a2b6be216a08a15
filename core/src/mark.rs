use serde::{Deserialize, Serialize};

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellMark {
    #[default]
    Covered,
    FlaggedBomb,
    FlaggedQuestion,
    Uncovered,
}

impl CellMark {
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::FlaggedBomb | Self::FlaggedQuestion)
    }

    pub const fn is_covered(self) -> bool {
        !matches!(self, Self::Uncovered)
    }
}

/// What an action on a cell does.
///
/// `QuestionMark` only annotates a cell, it never counts towards winning.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    EmptyField,
    Bomb,
    QuestionMark,
}
