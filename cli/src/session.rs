use std::io::{BufRead, Write};

use anyhow::Context;
use sweeper_core::{ActionOutcome, Board, GameError};

use crate::command::Command;
use crate::render::render;

/// Feeds commands from `input` to `board` until the input ends or the player quits.
pub fn run(board: &mut Board, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
    render(board, out).context("Could not draw board")?;

    for line in input.lines() {
        let line = line.context("Could not read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        log::trace!("command: {command:?}");

        let result = match command {
            Command::Quit => break,
            Command::Show => Ok(ActionOutcome::NoChange),
            Command::SetMode(mode) => {
                board.set_mode(mode);
                Ok(ActionOutcome::NoChange)
            }
            Command::Act(coords) => board.apply_action(coords),
            Command::ActAs(mode, coords) => {
                let previous = board.mode();
                board.set_mode(mode);
                let result = board.apply_action(coords);
                board.set_mode(previous);
                result
            }
        };

        match result {
            Ok(outcome) => log::debug!("{command:?} -> {outcome:?}"),
            Err(GameError::GameOver) => {
                writeln!(out, "The game is over, quit to leave")?;
                continue;
            }
            Err(err) => {
                log::warn!("{command:?} rejected: {err}");
                writeln!(out, "{err}")?;
                continue;
            }
        }

        render(board, out).context("Could not draw board")?;
    }

    Ok(())
}
