#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that resolves player swings into damage commands.
//!
//! Swing hitboxes are tested against the fixed-size bounding box of every
//! live prowler and the sentinel's larger box. Slain prowlers have a chance
//! to grant the player a heal; that roll is the only randomness here and it
//! draws from a stream seeded independently of world generation.

use outlands_core::{
    tuning, Command, Event, HitTarget, ProwlerPhase, ProwlerView, SentinelPhase, SentinelSnapshot,
    WorldRect,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the combat system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided loot RNG seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Combat system that turns swing events into damage and loot commands.
#[derive(Debug)]
pub struct Combat {
    rng: ChaCha8Rng,
}

impl Combat {
    /// Creates a new combat system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Consumes events and immutable views to emit damage and heal commands.
    pub fn handle(
        &mut self,
        events: &[Event],
        prowlers: &ProwlerView,
        sentinel: &SentinelSnapshot,
        out: &mut Vec<Command>,
    ) {
        for event in events {
            match event {
                Event::PlayerSwung { hitbox } => {
                    self.resolve_swing(hitbox, prowlers, sentinel, out);
                }
                Event::EntityDied {
                    target: HitTarget::Prowler(_),
                } => {
                    if self.rng.gen_bool(tuning::LOOT_HEAL_CHANCE) {
                        out.push(Command::HealPlayer {
                            amount: tuning::LOOT_HEAL_AMOUNT,
                        });
                    }
                }
                _ => {}
            }
        }
    }

    fn resolve_swing(
        &mut self,
        hitbox: &WorldRect,
        prowlers: &ProwlerView,
        sentinel: &SentinelSnapshot,
        out: &mut Vec<Command>,
    ) {
        for snapshot in prowlers.iter() {
            if snapshot.phase == ProwlerPhase::Dead {
                continue;
            }
            let body = WorldRect::from_center(
                snapshot.position,
                tuning::PROWLER_SIZE,
                tuning::PROWLER_SIZE,
            );
            if hitbox.overlaps(&body) {
                out.push(Command::DamageProwler {
                    prowler: snapshot.id,
                    amount: tuning::PLAYER_ATTACK_DAMAGE,
                });
            }
        }

        if sentinel.active && sentinel.phase != SentinelPhase::Dead {
            let body = WorldRect::from_center(
                sentinel.position,
                tuning::SENTINEL_SIZE,
                tuning::SENTINEL_SIZE,
            );
            if hitbox.overlaps(&body) {
                out.push(Command::DamageSentinel {
                    amount: tuning::PLAYER_ATTACK_DAMAGE,
                });
            }
        }
    }
}
