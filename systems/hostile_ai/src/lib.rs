#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Steering and strike decisions for prowlers and the sentinel.
//!
//! The world derives each hostile's phase from its distance to the player;
//! this system turns those phases into motion and attacks. It owns the only
//! randomness in hostile behavior, the patrol-target draw, behind an
//! explicitly seeded stream so replays can pin it down.

use std::time::Duration;

use outlands_core::{
    tuning, Command, Event, PlayerSnapshot, ProwlerPhase, ProwlerSnapshot, ProwlerView,
    SentinelPhase, SentinelSnapshot, WorldPoint, WorldVec,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the hostile AI system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided patrol RNG seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Pure system that reacts to world events and emits hostile commands.
#[derive(Debug)]
pub struct HostileAi {
    rng: ChaCha8Rng,
    patrol_targets: Vec<Option<WorldPoint>>,
}

impl HostileAi {
    /// Creates a new hostile AI system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            patrol_targets: Vec::new(),
        }
    }

    /// Consumes events and immutable views to emit steering and strike
    /// commands for every live hostile.
    pub fn handle(
        &mut self,
        events: &[Event],
        prowlers: &ProwlerView,
        sentinel: &SentinelSnapshot,
        player: &PlayerSnapshot,
        clock: Duration,
        out: &mut Vec<Command>,
    ) {
        if !events
            .iter()
            .any(|event| matches!(event, Event::TimeAdvanced { .. }))
        {
            return;
        }

        for snapshot in prowlers.iter() {
            self.drive_prowler(snapshot, player, out);
        }
        self.drive_sentinel(sentinel, player, clock, out);
    }

    fn drive_prowler(
        &mut self,
        snapshot: &ProwlerSnapshot,
        player: &PlayerSnapshot,
        out: &mut Vec<Command>,
    ) {
        match snapshot.phase {
            ProwlerPhase::Dead => {}
            ProwlerPhase::Patrol => {
                let target = self.patrol_target(snapshot);
                if snapshot.position.distance_to(target) < tuning::PROWLER_PATROL_ARRIVAL {
                    // Arrived; pick a fresh target and let the current
                    // velocity carry through this tick.
                    let fresh = self.next_patrol_target(snapshot.patrol_origin);
                    self.store_patrol_target(snapshot, fresh);
                } else {
                    out.push(Command::SteerProwler {
                        prowler: snapshot.id,
                        velocity: WorldVec::toward(
                            snapshot.position,
                            target,
                            tuning::PROWLER_PATROL_SPEED,
                        ),
                    });
                }
            }
            ProwlerPhase::Chase => {
                out.push(Command::SteerProwler {
                    prowler: snapshot.id,
                    velocity: WorldVec::toward(
                        snapshot.position,
                        player.position,
                        tuning::PROWLER_CHASE_SPEED,
                    ),
                });
            }
            ProwlerPhase::Attack => {
                if snapshot.strike_ready {
                    out.push(Command::ProwlerStrike {
                        prowler: snapshot.id,
                    });
                }
            }
        }
    }

    fn drive_sentinel(
        &mut self,
        sentinel: &SentinelSnapshot,
        player: &PlayerSnapshot,
        clock: Duration,
        out: &mut Vec<Command>,
    ) {
        if !sentinel.active || sentinel.phase == SentinelPhase::Dead {
            return;
        }

        let distance = sentinel.position.distance_to(player.position);

        // The shockwave runs on its own timer and pre-empts whatever the
        // primary phase would have produced this tick.
        if sentinel.shockwave_ready && distance < tuning::SENTINEL_DETECTION_RANGE {
            out.push(Command::SentinelShockwave);
            return;
        }

        match sentinel.phase {
            SentinelPhase::Idle => {
                let angle = clock.as_secs_f32() / 2.0;
                out.push(Command::SteerSentinel {
                    velocity: WorldVec::new(
                        angle.cos() * tuning::SENTINEL_DRIFT_SPEED * 0.5,
                        angle.sin() * tuning::SENTINEL_DRIFT_SPEED * 0.5,
                    ),
                });
            }
            SentinelPhase::Chase => {
                out.push(Command::SteerSentinel {
                    velocity: WorldVec::toward(
                        sentinel.position,
                        player.position,
                        tuning::SENTINEL_CHASE_SPEED,
                    ),
                });
            }
            SentinelPhase::Attack => {
                if sentinel.strike_ready {
                    out.push(Command::SentinelStrike);
                }
            }
            SentinelPhase::Special | SentinelPhase::Dead => {}
        }
    }

    fn patrol_target(&mut self, snapshot: &ProwlerSnapshot) -> WorldPoint {
        let index = snapshot.id.get() as usize;
        if self.patrol_targets.len() <= index {
            self.patrol_targets.resize(index + 1, None);
        }
        if let Some(target) = self.patrol_targets[index] {
            return target;
        }
        let fresh = self.next_patrol_target(snapshot.patrol_origin);
        self.patrol_targets[index] = Some(fresh);
        fresh
    }

    fn store_patrol_target(&mut self, snapshot: &ProwlerSnapshot, target: WorldPoint) {
        let index = snapshot.id.get() as usize;
        if self.patrol_targets.len() <= index {
            self.patrol_targets.resize(index + 1, None);
        }
        self.patrol_targets[index] = Some(target);
    }

    /// Draws a point uniformly from the patrol ring around `origin`: both
    /// the angle and the distance beyond the inner radius are uniform.
    fn next_patrol_target(&mut self, origin: WorldPoint) -> WorldPoint {
        let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
        let distance = tuning::PROWLER_PATROL_RING_MIN
            + self.rng.gen_range(0.0..tuning::PROWLER_PATROL_RING_SPAN);
        WorldPoint::new(
            origin.x() + angle.cos() * distance,
            origin.y() + angle.sin() * distance,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outlands_core::{Facing, ProwlerId};

    fn ticked() -> Vec<Event> {
        vec![Event::TimeAdvanced {
            dt: Duration::from_millis(100),
        }]
    }

    fn player_at(x: f32, y: f32) -> PlayerSnapshot {
        PlayerSnapshot {
            position: WorldPoint::new(x, y),
            health: tuning::PLAYER_MAX_HEALTH,
            facing: Facing::Down,
            invulnerable: false,
            swinging: false,
        }
    }

    fn prowler_at(x: f32, y: f32, phase: ProwlerPhase, strike_ready: bool) -> ProwlerSnapshot {
        ProwlerSnapshot {
            id: ProwlerId::new(0),
            position: WorldPoint::new(x, y),
            phase,
            health: tuning::PROWLER_MAX_HEALTH,
            patrol_origin: WorldPoint::new(x, y),
            strike_ready,
        }
    }

    fn dormant_sentinel() -> SentinelSnapshot {
        SentinelSnapshot {
            position: WorldPoint::new(1_000.0, 1_000.0),
            phase: SentinelPhase::Idle,
            health: tuning::SENTINEL_MAX_HEALTH,
            active: false,
            strike_ready: true,
            shockwave_ready: true,
        }
    }

    #[test]
    fn silent_without_time_advancing() {
        let mut system = HostileAi::new(Config::new(7));
        let prowlers =
            ProwlerView::from_snapshots(vec![prowler_at(0.0, 0.0, ProwlerPhase::Patrol, true)]);
        let mut out = Vec::new();

        system.handle(
            &[],
            &prowlers,
            &dormant_sentinel(),
            &player_at(500.0, 500.0),
            Duration::ZERO,
            &mut out,
        );

        assert!(out.is_empty());
    }

    #[test]
    fn patrol_steers_at_patrol_speed_toward_ring_target() {
        let mut system = HostileAi::new(Config::new(7));
        let prowlers =
            ProwlerView::from_snapshots(vec![prowler_at(100.0, 100.0, ProwlerPhase::Patrol, true)]);
        let mut out = Vec::new();

        system.handle(
            &ticked(),
            &prowlers,
            &dormant_sentinel(),
            &player_at(900.0, 900.0),
            Duration::ZERO,
            &mut out,
        );

        assert_eq!(out.len(), 1);
        let Command::SteerProwler { velocity, .. } = &out[0] else {
            panic!("expected a steering command");
        };
        let speed = (velocity.dx() * velocity.dx() + velocity.dy() * velocity.dy()).sqrt();
        assert!((speed - tuning::PROWLER_PATROL_SPEED).abs() < 1e-3);
    }

    #[test]
    fn chase_steers_straight_at_the_player() {
        let mut system = HostileAi::new(Config::new(7));
        let prowlers =
            ProwlerView::from_snapshots(vec![prowler_at(0.0, 0.0, ProwlerPhase::Chase, true)]);
        let mut out = Vec::new();

        system.handle(
            &ticked(),
            &prowlers,
            &dormant_sentinel(),
            &player_at(100.0, 0.0),
            Duration::ZERO,
            &mut out,
        );

        assert_eq!(
            out,
            vec![Command::SteerProwler {
                prowler: ProwlerId::new(0),
                velocity: WorldVec::new(tuning::PROWLER_CHASE_SPEED, 0.0),
            }]
        );
    }

    #[test]
    fn attack_strikes_only_when_cooldown_is_ready() {
        let mut system = HostileAi::new(Config::new(7));
        let ready =
            ProwlerView::from_snapshots(vec![prowler_at(0.0, 0.0, ProwlerPhase::Attack, true)]);
        let waiting =
            ProwlerView::from_snapshots(vec![prowler_at(0.0, 0.0, ProwlerPhase::Attack, false)]);
        let player = player_at(10.0, 0.0);

        let mut out = Vec::new();
        system.handle(
            &ticked(),
            &ready,
            &dormant_sentinel(),
            &player,
            Duration::ZERO,
            &mut out,
        );
        assert_eq!(
            out,
            vec![Command::ProwlerStrike {
                prowler: ProwlerId::new(0),
            }]
        );

        out.clear();
        system.handle(
            &ticked(),
            &waiting,
            &dormant_sentinel(),
            &player,
            Duration::ZERO,
            &mut out,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn dead_prowlers_are_skipped() {
        let mut system = HostileAi::new(Config::new(7));
        let prowlers =
            ProwlerView::from_snapshots(vec![prowler_at(0.0, 0.0, ProwlerPhase::Dead, true)]);
        let mut out = Vec::new();

        system.handle(
            &ticked(),
            &prowlers,
            &dormant_sentinel(),
            &player_at(10.0, 0.0),
            Duration::ZERO,
            &mut out,
        );

        assert!(out.is_empty());
    }

    #[test]
    fn shockwave_preempts_the_primary_phase() {
        let mut system = HostileAi::new(Config::new(7));
        let sentinel = SentinelSnapshot {
            position: WorldPoint::new(0.0, 0.0),
            phase: SentinelPhase::Attack,
            health: tuning::SENTINEL_MAX_HEALTH,
            active: true,
            strike_ready: true,
            shockwave_ready: true,
        };
        let mut out = Vec::new();

        system.handle(
            &ticked(),
            &ProwlerView::default(),
            &sentinel,
            &player_at(40.0, 0.0),
            Duration::ZERO,
            &mut out,
        );

        assert_eq!(out, vec![Command::SentinelShockwave]);
    }

    #[test]
    fn sentinel_drifts_on_a_clock_driven_curve() {
        let mut system = HostileAi::new(Config::new(7));
        let sentinel = SentinelSnapshot {
            position: WorldPoint::new(0.0, 0.0),
            phase: SentinelPhase::Idle,
            health: tuning::SENTINEL_MAX_HEALTH,
            active: true,
            strike_ready: false,
            shockwave_ready: false,
        };
        let clock = Duration::from_secs(4);
        let mut out = Vec::new();

        system.handle(
            &ticked(),
            &ProwlerView::default(),
            &sentinel,
            &player_at(1_000.0, 0.0),
            clock,
            &mut out,
        );

        let angle = clock.as_secs_f32() / 2.0;
        assert_eq!(
            out,
            vec![Command::SteerSentinel {
                velocity: WorldVec::new(
                    angle.cos() * tuning::SENTINEL_DRIFT_SPEED * 0.5,
                    angle.sin() * tuning::SENTINEL_DRIFT_SPEED * 0.5,
                ),
            }]
        );
    }

    #[test]
    fn inactive_sentinel_is_ignored() {
        let mut system = HostileAi::new(Config::new(7));
        let mut out = Vec::new();

        system.handle(
            &ticked(),
            &ProwlerView::default(),
            &dormant_sentinel(),
            &player_at(1_000.0, 1_000.0),
            Duration::ZERO,
            &mut out,
        );

        assert!(out.is_empty());
    }

    #[test]
    fn identical_seeds_make_identical_decisions() {
        let mut first = HostileAi::new(Config::new(99));
        let mut second = HostileAi::new(Config::new(99));
        let prowlers =
            ProwlerView::from_snapshots(vec![prowler_at(100.0, 100.0, ProwlerPhase::Patrol, true)]);
        let player = player_at(900.0, 900.0);

        let mut first_out = Vec::new();
        let mut second_out = Vec::new();
        first.handle(
            &ticked(),
            &prowlers,
            &dormant_sentinel(),
            &player,
            Duration::ZERO,
            &mut first_out,
        );
        second.handle(
            &ticked(),
            &prowlers,
            &dormant_sentinel(),
            &player,
            Duration::ZERO,
            &mut second_out,
        );

        assert_eq!(first_out, second_out);
    }
}
