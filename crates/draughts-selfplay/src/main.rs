//! Self-play demo - both sides pick random legal moves.
//!
//! This is the simplest possible host for the rules engine, useful as a
//! template for hosts that take moves from players or an AI.

use clap::Parser;
use draughts_core::{Move, Side};
use draughts_engine::{Game, GameConfig, MoveSelector};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Plays a game of draughts against itself with random legal moves.
#[derive(Parser)]
#[command(name = "draughts-selfplay")]
#[command(about = "Plays random legal draughts moves against itself")]
struct Args {
    /// Path to a TOML game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for move selection (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many applied moves
    #[arg(long, default_value = "200")]
    max_plies: usize,
}

/// Picks uniformly among the legal moves.
struct RandomSelector {
    rng: StdRng,
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, game: &Game) -> Option<Move> {
        game.legal_moves().as_slice().choose(&mut self.rng).copied()
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(
        width = config.width,
        depth = config.depth,
        starting_side = %config.starting_side,
        seed,
        "starting self-play"
    );

    let mut game = Game::standard(config)?;
    let mut selector = RandomSelector {
        rng: StdRng::seed_from_u64(seed),
    };

    while game.ply_count() < args.max_plies {
        let side = game.current_side();
        let Some(m) = selector.select(&game) else {
            tracing::info!(%side, ply = game.ply_count(), "no legal moves left");
            break;
        };

        let continues = game.apply(m)?;
        tracing::info!(%side, mv = %m, continues, "ply {}", game.ply_count());
        tracing::debug!("\n{}", game.position().to_diagram().render());
    }

    let white = game.position().pieces(Side::White).len();
    let black = game.position().pieces(Side::Black).len();
    tracing::info!(white, black, plies = game.ply_count(), "finished");
    println!("{}", game.position().to_diagram().render());
    Ok(())
}
