use std::io::{self, Write};

use sweeper_core::{Board, CellMark, FieldValue, GameOutcome, Mode};

/// Character shown for a cell. `value` is only known for visible cells.
pub fn glyph(mark: CellMark, value: Option<FieldValue>) -> char {
    match (mark, value) {
        (CellMark::FlaggedBomb, _) => 'F',
        (CellMark::FlaggedQuestion, _) => '?',
        (_, Some(FieldValue::Bomb)) => '*',
        (_, Some(FieldValue::Empty(0))) => '.',
        (_, Some(FieldValue::Empty(count))) => char::from_digit(count.into(), 10).unwrap_or('#'),
        (_, None) => '#',
    }
}

fn mode_name(mode: Mode) -> &'static str {
    match mode {
        Mode::EmptyField => "empty field",
        Mode::Bomb => "bomb",
        Mode::QuestionMark => "question mark",
    }
}

pub fn render(board: &Board, out: &mut impl Write) -> io::Result<()> {
    let fields = board.fields();

    writeln!(
        out,
        "bombs left: {}  mode: {}",
        board.bombs_left(),
        mode_name(board.mode())
    )?;

    write!(out, "    ")?;
    for col in 0..fields {
        write!(out, "{}", col % 10)?;
    }
    writeln!(out)?;

    for row in 0..fields {
        write!(out, "{row:>3} ")?;
        for col in 0..fields {
            let coords = (row, col);
            // coordinates come from the board's own range
            let mark = board.cell_mark(coords).unwrap_or_default();
            let value = board.field_value(coords).unwrap_or_default();
            write!(out, "{}", glyph(mark, value))?;
        }
        writeln!(out)?;
    }

    match board.outcome() {
        GameOutcome::Unknown => Ok(()),
        GameOutcome::Won => writeln!(out, "All bombs found, you won!"),
        GameOutcome::Lost => writeln!(out, "Boom, you lost."),
    }
}
