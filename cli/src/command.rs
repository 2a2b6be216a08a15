use std::str::FromStr;

use sweeper_core::{Coord, Coord2, Mode};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}")]
    Unknown(String),
    #[error("Unknown mode {0:?}, expected empty, bomb or question")]
    UnknownMode(String),
    #[error("Expected a row and a column")]
    MissingCoords,
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
    #[error("Unexpected trailing input {0:?}")]
    Trailing(String),
}

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Apply the current mode.
    Act(Coord2),
    /// Act once in the given mode, leaving the current mode as it was.
    ActAs(Mode, Coord2),
    SetMode(Mode),
    Show,
    Quit,
}

fn parse_mode(word: &str) -> Result<Mode, CommandError> {
    match word {
        "empty" | "e" => Ok(Mode::EmptyField),
        "bomb" | "b" => Ok(Mode::Bomb),
        "question" | "q" => Ok(Mode::QuestionMark),
        _ => Err(CommandError::UnknownMode(word.to_owned())),
    }
}

fn parse_coord(word: Option<&str>) -> Result<Coord, CommandError> {
    let word = word.ok_or(CommandError::MissingCoords)?;
    word.parse()
        .map_err(|_| CommandError::InvalidCoord(word.to_owned()))
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2, CommandError> {
    Ok((parse_coord(words.next())?, parse_coord(words.next())?))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let first = words.next().ok_or(CommandError::Empty)?;

        let command = match first.to_ascii_lowercase().as_str() {
            "reveal" | "r" => Command::ActAs(Mode::EmptyField, parse_coords(&mut words)?),
            "flag" | "f" => Command::ActAs(Mode::Bomb, parse_coords(&mut words)?),
            "question" | "q" => Command::ActAs(Mode::QuestionMark, parse_coords(&mut words)?),
            "mode" | "m" => {
                let mode = words.next().ok_or_else(|| CommandError::UnknownMode(String::new()))?;
                Command::SetMode(parse_mode(&mode.to_ascii_lowercase())?)
            }
            "show" | "s" => Command::Show,
            "quit" | "exit" => Command::Quit,
            word if word.starts_with(|c: char| c.is_ascii_digit()) => {
                let row = parse_coord(Some(word))?;
                Command::Act((row, parse_coord(words.next())?))
            }
            _ => return Err(CommandError::Unknown(first.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}
