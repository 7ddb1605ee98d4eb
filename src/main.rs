//! # Terminal Tic-Tac-Toe
//!
//! Entry point for the `play` binary: a console menu around the game core.
//! The menu offers a round against the random-move computer opponent on a
//! board size chosen at the prompt (or fixed with `--board-size`).
//!
//! Diagnostic logging goes to stderr and is controlled with `RUST_LOG`,
//! so game text on stdout stays clean.

mod console;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board size to play every round on, skipping the size prompt
    #[clap(short, long)]
    board_size: Option<usize>,

    /// Seed for the computer opponent's move selection
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // One generator for the whole process, never re-seeded per move.
    let mut rng = match args.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
    };

    console::run(args.board_size, &mut rng)
}
