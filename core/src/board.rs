use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    Unknown,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a single [`Board::apply_action`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    NoChange,
    Marked,
    /// Number of cells uncovered by the action.
    Revealed(CellCount),
    Lost,
    Won,
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One game in progress: the hidden layout, what the player has marked, and how it ended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    bombs: BombSet,
    grid: RevealedGrid,
    marks: Array2<CellMark>,
    mode: Mode,
    flagged_bombs: Saturating<CellCount>,
    flags_placed: Saturating<CellCount>,
    outcome: GameOutcome,
    triggered_bomb: Option<Coord2>,
}

#[derive(Deserialize)]
struct RawBoard {
    bombs: BombSet,
    grid: RevealedGrid,
    marks: Array2<CellMark>,
    mode: Mode,
    flagged_bombs: Saturating<CellCount>,
    flags_placed: Saturating<CellCount>,
    outcome: GameOutcome,
    triggered_bomb: Option<Coord2>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        let fields = raw.bombs.fields();
        let side = usize::from(fields);
        if raw.grid.fields() != fields || raw.marks.dim() != (side, side) {
            return Err(GameError::InvalidBoardShape);
        }
        if raw.grid != compute_revealed_grid(&raw.bombs) {
            return Err(GameError::InconsistentBoard);
        }

        let mut flags_placed: CellCount = 0;
        let mut flagged_bombs: CellCount = 0;
        for ((row, col), &mark) in raw.marks.indexed_iter() {
            if mark == CellMark::FlaggedBomb {
                flags_placed += 1;
                if raw.bombs.contains((row as Coord, col as Coord)) {
                    flagged_bombs += 1;
                }
            }
        }
        if raw.flags_placed.0 != flags_placed || raw.flagged_bombs.0 != flagged_bombs {
            return Err(GameError::InconsistentBoard);
        }

        if let Some(coords) = raw.triggered_bomb {
            let coords = raw.bombs.validate_coords(coords)?;
            if !raw.bombs.contains(coords) || raw.outcome != GameOutcome::Lost {
                return Err(GameError::InconsistentBoard);
            }
        }

        Ok(Self {
            bombs: raw.bombs,
            grid: raw.grid,
            marks: raw.marks,
            mode: raw.mode,
            flagged_bombs: raw.flagged_bombs,
            flags_placed: raw.flags_placed,
            outcome: raw.outcome,
            triggered_bomb: raw.triggered_bomb,
        })
    }
}

impl Board {
    /// Starts a random game, rejecting impossible `(fields, bombs)` pairs.
    pub fn new(fields: Coord, bombs: CellCount, seed: u64) -> Result<Self> {
        Ok(Self::from_config(GameConfig::new(fields, bombs)?, seed))
    }

    pub fn from_config(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomBombGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, generator: impl BombLayoutGenerator) -> Self {
        Self::from_bomb_set(generator.generate(config))
    }

    pub fn from_bomb_set(bombs: BombSet) -> Self {
        let fields = bombs.fields();
        let grid = compute_revealed_grid(&bombs);
        log::debug!(
            "new board {}x{} with {} bombs",
            fields,
            fields,
            bombs.bomb_count()
        );
        Self {
            bombs,
            grid,
            marks: Array2::default((fields, fields).to_nd_index()),
            mode: Mode::default(),
            flagged_bombs: Saturating(0),
            flags_placed: Saturating(0),
            outcome: GameOutcome::default(),
            triggered_bomb: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.bombs.config()
    }

    pub fn fields(&self) -> Coord {
        self.bombs.fields()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn cell_mark(&self, coords: Coord2) -> Result<CellMark> {
        let coords = self.bombs.validate_coords(coords)?;
        Ok(self.marks[coords.to_nd_index()])
    }

    /// What is under a cell, once the player is allowed to know.
    ///
    /// `None` while the cell is covered and the game still runs.
    pub fn field_value(&self, coords: Coord2) -> Result<Option<FieldValue>> {
        let coords = self.bombs.validate_coords(coords)?;
        let visible = self.is_finished() || !self.marks[coords.to_nd_index()].is_covered();
        Ok(visible.then(|| self.grid[coords]))
    }

    /// Bomb cells currently flagged as bombs.
    pub fn flagged_bomb_count(&self) -> CellCount {
        self.flagged_bombs.0
    }

    pub fn total_bombs(&self) -> CellCount {
        self.bombs.bomb_count()
    }

    /// Cells flagged as bombs, right or wrong.
    pub fn flags_placed(&self) -> CellCount {
        self.flags_placed.0
    }

    pub fn bombs_left(&self) -> isize {
        (self.total_bombs() as isize) - (self.flags_placed.0 as isize)
    }

    pub fn triggered_bomb(&self) -> Option<Coord2> {
        self.triggered_bomb
    }

    /// Applies the current [`Mode`] to the cell at `coords`.
    pub fn apply_action(&mut self, coords: Coord2) -> Result<ActionOutcome> {
        let coords = self.bombs.validate_coords(coords)?;
        self.check_playing()?;

        let outcome = match self.mode {
            Mode::EmptyField => self.uncover(coords)?,
            Mode::Bomb => self.mark(coords, CellMark::FlaggedBomb),
            Mode::QuestionMark => self.mark(coords, CellMark::FlaggedQuestion),
        };

        if outcome == ActionOutcome::Lost {
            return Ok(outcome);
        }

        if self.flagged_bombs.0 == self.total_bombs() {
            self.end_game(true);
            return Ok(ActionOutcome::Won);
        }

        Ok(outcome)
    }

    fn uncover(&mut self, coords: Coord2) -> Result<ActionOutcome> {
        if !matches!(self.marks[coords.to_nd_index()], CellMark::Covered) {
            return Ok(ActionOutcome::NoChange);
        }

        if self.grid[coords].is_bomb() {
            self.marks[coords.to_nd_index()] = CellMark::Uncovered;
            self.triggered_bomb = Some(coords);
            self.end_game(false);
            return Ok(ActionOutcome::Lost);
        }

        let uncovered = reveal(coords, &self.grid, &mut self.marks)?;
        Ok(ActionOutcome::Revealed(uncovered.len() as CellCount))
    }

    fn mark(&mut self, coords: Coord2, target: CellMark) -> ActionOutcome {
        let current = self.marks[coords.to_nd_index()];
        if current == target || current == CellMark::Uncovered {
            return ActionOutcome::NoChange;
        }

        let is_bomb = self.grid[coords].is_bomb();
        if current == CellMark::FlaggedBomb {
            self.flags_placed -= 1;
            if is_bomb {
                self.flagged_bombs -= 1;
            }
        }
        if target == CellMark::FlaggedBomb {
            self.flags_placed += 1;
            if is_bomb {
                self.flagged_bombs += 1;
            }
        }

        self.marks[coords.to_nd_index()] = target;
        ActionOutcome::Marked
    }

    fn end_game(&mut self, won: bool) {
        if self.outcome.is_finished() {
            return;
        }

        self.outcome = if won {
            GameOutcome::Won
        } else {
            GameOutcome::Lost
        };
        log::debug!("game over: {:?}", self.outcome);
    }

    fn check_playing(&self) -> Result<()> {
        if self.outcome.is_finished() {
            log::warn!("action rejected, game already {:?}", self.outcome);
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
