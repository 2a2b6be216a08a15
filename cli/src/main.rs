use std::io;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use sweeper_core::{Board, CellCount, Coord, Difficulty, GameConfig};

mod command;
mod render;
mod session;

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum Preset {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for Difficulty {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => Difficulty::Beginner,
            Preset::Intermediate => Difficulty::Intermediate,
            Preset::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset, overridden by --fields and --bombs
    #[arg(short, long, value_enum, default_value_t)]
    difficulty: Preset,

    /// Cells per side of the square board
    #[arg(long)]
    fields: Option<Coord>,

    /// Number of bombs
    #[arg(long)]
    bombs: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let preset = Difficulty::from(self.difficulty).config();
        let fields = self.fields.unwrap_or(preset.fields());
        let bombs = self.bombs.unwrap_or(preset.bombs());
        GameConfig::new(fields, bombs)
            .with_context(|| format!("Cannot start a {fields}x{fields} game with {bombs} bombs"))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config = args.game_config()?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("config: {config:?}, seed: {seed}");

    let mut board = Board::from_config(config, seed);
    session::run(&mut board, io::stdin().lock(), &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_is_used_by_default() {
        let args = Args::parse_from(["sweeper", "-d", "intermediate"]);

        assert_eq!(args.game_config().unwrap(), Difficulty::Intermediate.config());
    }

    #[test]
    fn explicit_size_overrides_preset() {
        let args = Args::parse_from(["sweeper", "--fields", "5", "--bombs", "3"]);
        let config = args.game_config().unwrap();

        assert_eq!((config.fields(), config.bombs()), (5, 3));
    }

    #[test]
    fn impossible_size_is_an_error() {
        let args = Args::parse_from(["sweeper", "--fields", "2", "--bombs", "4"]);

        assert!(args.game_config().is_err());
    }
}
