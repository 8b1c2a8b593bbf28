//! Example demonstrating basic Lights Out board generation.
//!
//! This example shows how to:
//! - Create a `BoardGenerator` with custom dimensions and lighting chance
//! - Generate a random starting board
//! - Display the board and its seed
//! - Replay a board from a known seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Custom dimensions and lighting chance:
//!
//! ```sh
//! cargo run --example generate_board -- --rows 7 --cols 9 --chance-lit 0.5
//! ```
//!
//! Replay a specific board from its hex seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed 0123456789abcdef
//! ```

use std::process;

use clap::Parser;
use lightsout_generator::{BoardGenerator, BoardSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of board rows.
    #[arg(long, value_name = "ROWS", default_value_t = BoardGenerator::DEFAULT_ROWS)]
    rows: usize,

    /// Number of board columns.
    #[arg(long, value_name = "COLS", default_value_t = BoardGenerator::DEFAULT_COLS)]
    cols: usize,

    /// Chance that any cell starts lit (0.0 to 1.0).
    #[arg(long, value_name = "CHANCE", default_value_t = BoardGenerator::DEFAULT_CHANCE_LIT)]
    chance_lit: f64,

    /// Hex seed for a reproducible board. A random seed is drawn if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<BoardSeed>,
}

fn main() {
    let args = Args::parse();

    let generator = match BoardGenerator::new(args.rows, args.cols, args.chance_lit) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let board = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", board.seed);
    println!();

    println!("Board ({} lit):", board.grid.lit_count());
    for line in board.grid.to_string().lines() {
        println!("  {line}");
    }
}
