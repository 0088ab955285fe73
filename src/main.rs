//! Arena Warden - Match Runner
//!
//! Runs the bot controller against the built-in simulated arena and prints
//! a match summary. Useful for eyeballing the policy and for reproducing
//! seeded runs.

use std::fs::File;
use std::path::PathBuf;

use arena_warden::agent::Warden;
use arena_warden::arena::Arena;
use arena_warden::core::error::Result;
use arena_warden::core::types::Action;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Run a simulated arena match with the warden bot
#[derive(Parser, Debug)]
#[command(name = "arena-warden")]
#[command(about = "Run the warden bot in a simulated grid arena")]
struct Args {
    /// Random seed for the arena layout and the bot's exploration
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum turns before the match is called
    #[arg(long, default_value_t = 500)]
    turns: u16,

    /// Starting energy for the bot
    #[arg(long, default_value_t = 800)]
    energy: u16,

    /// Write a per-turn JSON log to this path
    #[arg(long)]
    log: Option<PathBuf>,
}

/// One row of the optional match log
#[derive(Debug, Serialize)]
struct TurnRecord {
    turn: u16,
    energy: u16,
    x: i32,
    y: i32,
    action: Action,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arena_warden=info".into()),
        )
        .init();

    let args = Args::parse();
    tracing::info!(seed = args.seed, turns = args.turns, "starting match");

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut arena = Arena::generate(&mut rng, args.energy);
    let mut warden = Warden::seeded(args.seed);
    warden.init();

    let hostiles_at_start = arena.hostile_count();
    let mut records = Vec::new();
    let mut shots = 0u32;

    for turn in 1..=args.turns {
        warden.status_report(turn, arena.energy, arena.shield, arena.cloak);

        let radius = warden.scan_radius();
        let report = arena.scan(radius)?;
        warden.area_report(&report)?;

        let action = warden.compute_action();
        if matches!(action, Action::Shoot(_)) {
            shots += 1;
        }
        records.push(TurnRecord {
            turn,
            energy: arena.energy,
            x: arena.bot_pos.x,
            y: arena.bot_pos.y,
            action,
        });

        if !arena.apply(action) {
            tracing::info!(turn, "bot ran out of energy");
            break;
        }
    }

    println!("=== MATCH SUMMARY ===");
    println!("turns survived : {}", arena.turn);
    println!("final energy   : {}", arena.energy);
    println!("final position : ({}, {})", arena.bot_pos.x, arena.bot_pos.y);
    println!("shots fired    : {}", shots);
    println!(
        "hostiles       : {} -> {}",
        hostiles_at_start,
        arena.hostile_count()
    );
    println!("cells explored : {}", warden.grid.known_count());

    if let Some(path) = args.log {
        let file = File::create(&path)?;
        serde_json::to_writer_pretty(file, &records)?;
        tracing::info!(path = %path.display(), "wrote match log");
    }

    Ok(())
}
