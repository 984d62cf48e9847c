//! Perft runner.
//!
//! Usage:
//! `cargo run --release --bin perft -- --depth 5`
//! `cargo run --release --bin perft -- --fen "<fen>" --depth 4 --divide`

use std::time::Instant;

use clap::Parser;

use chess_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_rules::game_state::game_state::GameState;
use chess_rules::move_generation::legal_move_generator::{
    ExhaustiveMoveGenerator, PinAwareMoveGenerator,
};
use chess_rules::move_generation::move_generator::MoveGenerator;
use chess_rules::move_generation::perft::{perft, perft_divide};

#[derive(Parser, Debug)]
#[command(about = "Count move-generation leaf nodes from a position")]
struct Args {
    /// Position to start from.
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,

    #[arg(long, default_value_t = 4)]
    depth: u8,

    /// Print the node count below every root move.
    #[arg(long)]
    divide: bool,

    /// Use the exhaustive reference generator instead of the pin-aware one.
    #[arg(long)]
    exhaustive: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut game_state = GameState::from_fen(&args.fen)?;
    let generator: Box<dyn MoveGenerator> = if args.exhaustive {
        Box::new(ExhaustiveMoveGenerator)
    } else {
        Box::new(PinAwareMoveGenerator)
    };

    let started = Instant::now();
    let nodes = if args.divide {
        let divided = perft_divide(generator.as_ref(), &mut game_state, args.depth);
        for (label, count) in &divided {
            println!("{label}: {count}");
        }
        divided.iter().map(|(_, count)| count).sum::<u64>()
    } else {
        perft(generator.as_ref(), &mut game_state, args.depth)
    };
    let elapsed = started.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        (nodes as f64 / elapsed.as_secs_f64()) as u64
    } else {
        0
    };
    println!(
        "depth={} nodes={} elapsed_ms={} nps={}",
        args.depth,
        nodes,
        elapsed.as_millis(),
        nps
    );

    Ok(())
}
