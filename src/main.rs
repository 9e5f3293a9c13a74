//! Renju AI terminal client
//!
//! Play against the engine, or two humans on one terminal. Moves are
//! entered as `row col` (0-based); `undo` takes back your last move and the
//! engine's reply (one move in two-player mode), `quit` leaves.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};

use renju::{AIEngine, Difficulty, Game, Stone};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Human plays Black and moves first
    PlayBlack,
    /// Human plays White; Black opens on the center point
    PlayWhite,
    /// Two humans take turns, no engine
    TwoPlayer,
}

impl Mode {
    /// Color the engine plays, if any
    fn engine_color(self) -> Option<Stone> {
        match self {
            Mode::PlayBlack => Some(Stone::White),
            Mode::PlayWhite => Some(Stone::Black),
            Mode::TwoPlayer => None,
        }
    }

    /// Moves `undo` takes back with `to_move` on turn: back to the human's
    /// previous turn against the engine, a single move otherwise.
    fn undo_count(self, to_move: Stone) -> usize {
        match self.engine_color() {
            Some(engine) if engine != to_move => 2,
            _ => 1,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Renju against the engine in the terminal")]
struct Cli {
    /// Engine strength: 0 (easy), 1 (medium) or 2 (hard)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u8).range(0..=2))]
    difficulty: u8,

    /// Which color the human plays
    #[arg(short, long, value_enum, default_value_t = Mode::PlayBlack)]
    mode: Mode,

    /// Disable Renju restrictions on Black
    #[arg(long)]
    no_renju: bool,

    /// Log search details
    #[arg(short, long)]
    verbose: bool,
}

enum Command {
    Move(i32, i32),
    Undo,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let first = parts.next()?;
    match first {
        "quit" | "q" | "exit" => return Some(Command::Quit),
        "undo" | "u" => return Some(Command::Undo),
        _ => {}
    }
    let row = first.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Move(row, col))
}

fn engine_turn(game: &mut Game, engine: &AIEngine) -> Result<()> {
    let result = game.play_engine(engine).context("engine failed to move")?;
    println!(
        "AI plays {} ({}, depth {}, {} nodes, {}ms)",
        result.best_move, result.search_type, result.depth, result.nodes, result.time_ms
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let renju = !cli.no_renju;
    let difficulty = Difficulty::from_level(cli.difficulty);
    let engine = AIEngine::with_limits(difficulty.limits().with_renju(renju));
    let mode = cli.mode;
    let mut game = match mode {
        Mode::PlayWhite => Game::with_center_opening(renju),
        Mode::PlayBlack | Mode::TwoPlayer => Game::new(renju),
    };
    info!(%difficulty, renju, ?mode, "new game");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", game.board());
        if let Some(last) = game.last_move() {
            println!("Last move: {:?} at {}", last.stone, last.pos);
        }
        if game.is_over() {
            println!("{}", game.result());
            break;
        }

        print!("{:?} to move> ", game.side_to_move());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(line.trim()) {
            Some(Command::Quit) => break,
            Some(Command::Undo) => {
                if game.undo(mode.undo_count(game.side_to_move())) == 0 {
                    println!("Nothing to undo");
                }
            }
            Some(Command::Move(row, col)) => match game.play_at(row, col) {
                Ok(_) if !game.is_over() && mode.engine_color() == Some(game.side_to_move()) => {
                    engine_turn(&mut game, &engine)?
                }
                Ok(_) => {}
                Err(err) => println!("{err}"),
            },
            None => println!("Enter `row col`, `undo` or `quit`"),
        }
    }
    Ok(())
}
