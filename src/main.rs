//! Terminal front-end: plays a game on stdin/stdout, either between two humans
//! or against the computer.

use std::io::{self, BufRead};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use pawnstorm::chess::core::{Move, Player, Square};
use pawnstorm::chess::outcome::GameOutcome;
use pawnstorm::game::GameState;
use pawnstorm::search::Difficulty;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "pawnstorm", version, about = "Play chess in the terminal")]
struct Args {
    /// Play against the computer
    #[arg(long, default_value_t = false)]
    computer: bool,

    /// Computer strength (depth 3 search if not set)
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Side played by the computer
    #[arg(long, value_enum, default_value_t = Color::Black)]
    computer_color: Color,

    /// Seed for the random moves of the easy mode
    #[arg(long)]
    seed: Option<u64>,

    /// Starting position: piece placement and optionally the side to move
    #[arg(long)]
    fen: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Color {
    White,
    Black,
}

impl From<Color> for Player {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Self::White,
            Color::Black => Self::Black,
        }
    }
}

struct Session {
    game: GameState,
    computer: Option<Player>,
    difficulty: Option<Difficulty>,
    rng: SmallRng,
}

impl Session {
    /// Lets the computer move while it is its turn.
    fn computer_turn(&mut self) {
        if self.computer != Some(self.game.to_move()) || self.game.outcome().is_over() {
            return;
        }
        if let Some(next_move) = self.game.play_computer(self.difficulty, &mut self.rng) {
            println!("Computer plays {next_move}");
        }
    }

    fn show(&self) {
        println!("{:?}", self.game.board());
        if let Some(last_move) = self.game.last_move() {
            println!("Last move: {last_move}");
        }
        match self.game.outcome() {
            GameOutcome::Ongoing => println!("{} to move", self.game.to_move()),
            outcome @ GameOutcome::Check(_) => println!("{outcome}"),
            outcome => {
                println!("{outcome}");
                println!("Type \"restart\" to play again or \"quit\" to exit");
            },
        }
    }

    fn handle(&mut self, command: &str) -> anyhow::Result<()> {
        match command.split_ascii_whitespace().collect_vec().as_slice() {
            [] => {},
            ["board"] => self.show(),
            ["restart"] => {
                self.game.restart();
                self.computer_turn();
                self.show();
            },
            ["hint", square] => {
                let square = Square::try_from(*square)?;
                let destinations = self.game.legal_moves_from(square)?;
                println!("{square}: {}", destinations.iter().join(" "));
            },
            [next_move] => {
                self.game.play(Move::from_uci(next_move)?)?;
                self.computer_turn();
                self.show();
            },
            _ => anyhow::bail!("unknown command: {command}"),
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    pawnstorm::print_engine_info();
    pawnstorm::print_binary_info();

    let game = match &args.fen {
        Some(fen) => GameState::from_fen(fen).context("parsing --fen")?,
        None => GameState::new(),
    };
    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut session = Session {
        game,
        computer: args.computer.then_some(args.computer_color.into()),
        difficulty: args.difficulty,
        rng,
    };
    log::info!(
        "Starting a game: computer {:?}, difficulty {:?}",
        session.computer,
        session.difficulty
    );
    session.computer_turn();
    session.show();

    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = line.trim();
        if command == "quit" {
            break;
        }
        if let Err(error) = session.handle(command) {
            println!("Error: {error:#}");
        }
    }
    Ok(())
}
