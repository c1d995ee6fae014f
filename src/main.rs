use std::io::{self, BufRead, Write};

use clap::Parser;
use grid_2048::{Direction, Grid};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(
    name = "grid-2048",
    version,
    about = "Play a 2048-style merge puzzle in the terminal"
)]
struct Cli {
    /// Grid size (size x size)
    #[arg(short = 's', long, default_value_t = 4)]
    size: usize,
    /// Tile value that wins the game
    #[arg(short = 't', long, default_value_t = 2048)]
    target: u64,
    /// Value of spawned tiles
    #[arg(long, default_value_t = 2)]
    spawn_value: u64,
    /// Tiles spawned at start and after each changed move
    #[arg(long, default_value_t = 1)]
    spawn_count: usize,
    /// Seed the RNG for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_direction(token: &str) -> Option<Direction> {
    match token {
        "a" | "h" | "left" => Some(Direction::Left),
        "w" | "k" | "up" => Some(Direction::Up),
        "d" | "l" | "right" => Some(Direction::Right),
        "s" | "j" | "down" => Some(Direction::Down),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut board = Grid::empty(cli.size).with_random_cells(cli.spawn_value, cli.spawn_count, &mut rng)?;
    let stdin = io::stdin();
    let mut moves = 0u32;

    println!("{}", board);
    loop {
        if board.contains(cli.target) {
            println!("Reached {} in {} moves.", cli.target, moves);
            break;
        }
        if !board.has_moves_left() {
            println!("No moves left after {} moves.", moves);
            break;
        }

        print!("move [w/a/s/d, q to quit]: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let token = line.trim().to_lowercase();
        if token == "q" || token == "quit" {
            break;
        }
        let Some(direction) = parse_direction(&token) else {
            println!("unrecognized move {:?}", token);
            continue;
        };

        let moved = board.shifted(direction);
        if moved == board {
            println!("that move changes nothing");
            continue;
        }
        moves += 1;
        board = match moved.with_random_cells(cli.spawn_value, cli.spawn_count, &mut rng) {
            Ok(next) => next,
            Err(_) => moved, // board too full to spawn; play on until stalemate
        };
        println!("{}", board);
    }
    Ok(())
}
