#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a headless Outlands session.
//!
//! The binary seeds the world, pumps the simulation for a fixed number of
//! ticks feeding scripted or idle input, prints the discrete events as they
//! occur, and finishes with a session summary. Rendering and interactive
//! input are external collaborators; this adapter exists for soak runs and
//! reproducing sessions from pinned seeds.

mod script;
mod session;

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use outlands_core::{tuning, Event, HitTarget, Outcome, ProwlerPhase, Zone};
use outlands_world::query;

use crate::session::Session;

/// Headless driver for the Outlands simulation core.
#[derive(Debug, Parser)]
#[command(name = "outlands")]
struct Args {
    /// Seed for deterministic world generation.
    #[arg(long, default_value_t = 42)]
    seed: u32,
    /// Maximum number of simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u64,
    /// Simulated milliseconds per tick.
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
    /// Seed for hostile patrol randomness; drawn from OS entropy when
    /// omitted.
    #[arg(long)]
    ai_seed: Option<u64>,
    /// Seed for loot randomness; drawn from OS entropy when omitted.
    #[arg(long)]
    loot_seed: Option<u64>,
    /// Input script with one `<ticks> [token]...` line per entry.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let frames = match &args.script {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read script {}", path.display()))?;
            script::parse(&text)
                .with_context(|| format!("could not parse script {}", path.display()))?
        }
        None => Vec::new(),
    };

    let ai_seed = args.ai_seed.unwrap_or_else(rand::random);
    let loot_seed = args.loot_seed.unwrap_or_else(rand::random);
    let dt = Duration::from_millis(args.tick_ms);
    let mut session = Session::new(args.seed, ai_seed, loot_seed);

    println!(
        "world seed {} | ai seed {ai_seed} | loot seed {loot_seed}",
        args.seed
    );

    for index in 0..args.ticks {
        let input = frames.get(index as usize).copied().unwrap_or_default();
        let events = session.frame(input, dt);
        let stamp = query::clock(session.world()).as_secs_f32();
        for event in &events {
            if let Some(line) = describe(event) {
                println!("[{stamp:7.1}s] {line}");
            }
        }
        if query::outcome(session.world()) != Outcome::Ongoing {
            break;
        }
    }

    let world = session.world();
    let player = query::player(world);
    let alive = query::prowler_view(world)
        .iter()
        .filter(|snapshot| snapshot.phase != ProwlerPhase::Dead)
        .count();
    let player_column = (player.position.x() / tuning::TILE_LENGTH) as u32;
    println!("--");
    println!("outcome: {:?}", query::outcome(world));
    println!(
        "player health: {}/{} ({:?} zone)",
        player.health,
        tuning::PLAYER_MAX_HEALTH,
        Zone::of_column(player_column)
    );
    println!(
        "relics collected: {}/{}",
        query::collected_count(world),
        tuning::RELIC_COUNT
    );
    println!("prowlers alive: {alive}");
    println!("simulated time: {:.1}s", query::clock(world).as_secs_f32());

    Ok(())
}

/// Human-readable line for a discrete event; clock ticks are omitted.
fn describe(event: &Event) -> Option<String> {
    match event {
        Event::TimeAdvanced { .. } => None,
        Event::PlayerSwung { .. } => Some("player swings".to_owned()),
        Event::PlayerDamaged { amount, remaining } => {
            Some(format!("player takes {amount} damage ({remaining} hp left)"))
        }
        Event::ShockwaveReleased { radius, .. } => {
            Some(format!("sentinel shockwave ({radius} unit radius)"))
        }
        Event::AttackLanded { target } => Some(format!("attack lands on {}", name(target))),
        Event::EntityDied { target } => Some(format!("{} dies", name(target))),
        Event::HealGranted { amount, health } => {
            Some(format!("player heals {amount} ({health} hp)"))
        }
        Event::RelicCollected { relic, collected } => Some(format!(
            "relic {} collected ({collected}/{})",
            relic.get(),
            tuning::RELIC_COUNT
        )),
        Event::SentinelActivated => Some("the sentinel wakes".to_owned()),
        Event::Victory => Some("victory: the sentinel is destroyed".to_owned()),
        Event::Defeat => Some("defeat: the player has fallen".to_owned()),
    }
}

fn name(target: &HitTarget) -> String {
    match target {
        HitTarget::Prowler(id) => format!("prowler {}", id.get()),
        HitTarget::Sentinel => "the sentinel".to_owned(),
    }
}
