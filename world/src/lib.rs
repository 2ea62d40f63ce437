#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Outlands.
//!
//! The world owns every entity in the simulation and is its sole mutator.
//! Adapters and systems submit [`Command`] values through [`apply`]; the
//! world validates them against entity state and cooldowns, mutates itself
//! deterministically, and broadcasts [`Event`] values describing what
//! actually happened. Once a session reaches a terminal outcome, further
//! gameplay commands are ignored so the terminal event is only ever
//! observed once.

pub mod map;
pub mod mapgen;

use std::time::Duration;

use outlands_core::{
    tuning, Command, Event, Facing, HitTarget, MoveIntent, Outcome, ProwlerId, ProwlerPhase,
    RelicId, SentinelPhase, WorldPoint, WorldRect, WorldVec,
};

use crate::map::MapData;

/// Represents the authoritative Outlands world state.
#[derive(Debug)]
pub struct World {
    map: MapData,
    clock: Duration,
    player: Player,
    prowlers: Vec<Prowler>,
    sentinel: Sentinel,
    relics: Vec<Relic>,
    collected: u32,
    sentinel_spawned: bool,
    outcome: Outcome,
}

impl World {
    /// Creates a new world by generating the map from the provided seed.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self::from_map(mapgen::generate(seed))
    }

    /// Creates a new world from an already generated map.
    #[must_use]
    pub fn from_map(map: MapData) -> Self {
        let player = Player::at(map.player_start().center());
        let prowlers = map
            .prowler_cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| Prowler::at(ProwlerId::new(index as u32), cell.center()))
            .collect();
        let sentinel = Sentinel::at(map.sentinel_spawn().center());
        let relics = map
            .relic_cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| Relic {
                id: RelicId::new(index as u32),
                position: cell.center(),
                collected: false,
            })
            .collect();

        Self {
            map,
            clock: Duration::ZERO,
            player,
            prowlers,
            sentinel,
            relics,
            collected: 0,
            sentinel_spawned: false,
            outcome: Outcome::Ongoing,
        }
    }

    fn prowler_index(&self, prowler: ProwlerId) -> Option<usize> {
        self.prowlers.iter().position(|entry| entry.id == prowler)
    }

    fn set_player_movement(&mut self, intent: MoveIntent) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if intent.left {
            dx = -tuning::PLAYER_SPEED;
            self.player.facing = Facing::Left;
        } else if intent.right {
            dx = tuning::PLAYER_SPEED;
            self.player.facing = Facing::Right;
        }
        if intent.up {
            dy = -tuning::PLAYER_SPEED;
            self.player.facing = Facing::Up;
        } else if intent.down {
            dy = tuning::PLAYER_SPEED;
            self.player.facing = Facing::Down;
        }

        if dx != 0.0 && dy != 0.0 {
            dx *= std::f32::consts::FRAC_1_SQRT_2;
            dy *= std::f32::consts::FRAC_1_SQRT_2;
        }
        self.player.velocity = WorldVec::new(dx, dy);
    }

    fn begin_swing(&mut self, out_events: &mut Vec<Event>) {
        if !self.player.attack_ready(self.clock) {
            return;
        }
        self.player.last_attack = Some(self.clock);
        let hitbox = swing_hitbox(self.player.position, self.player.facing);
        self.player.swing = Some(Swing {
            hitbox,
            expires_at: self.clock.saturating_add(tuning::PLAYER_SWING_DURATION),
        });
        out_events.push(Event::PlayerSwung { hitbox });
    }

    fn collect_nearest_relic(&mut self, out_events: &mut Vec<Event>) {
        let player_position = self.player.position;
        let mut nearest: Option<(usize, f32)> = None;
        for (index, relic) in self.relics.iter().enumerate() {
            if relic.collected {
                continue;
            }
            let distance = player_position.distance_to(relic.position);
            if distance >= tuning::RELIC_COLLECT_RADIUS {
                continue;
            }
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }

        if let Some((index, _)) = nearest {
            let relic = &mut self.relics[index];
            relic.collected = true;
            self.collected += 1;
            out_events.push(Event::RelicCollected {
                relic: relic.id,
                collected: self.collected,
            });
        }
    }

    fn advance_clock(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        self.clock = self.clock.saturating_add(dt);
        self.integrate_player(dt);
        self.integrate_hostiles(dt);
        self.refresh_phases();
        self.expire_swing();
        out_events.push(Event::TimeAdvanced { dt });
    }

    fn integrate_player(&mut self, dt: Duration) {
        let velocity = self.player.velocity;
        let half = tuning::PLAYER_SIZE / 2.0;
        let width = self.map.width();
        let height = self.map.height();

        if velocity.dx() != 0.0 {
            let moved = self
                .player
                .position
                .advanced(WorldVec::new(velocity.dx(), 0.0), dt);
            let candidate =
                WorldPoint::new(moved.x().clamp(half, width - half), self.player.position.y());
            let body = WorldRect::from_center(candidate, tuning::PLAYER_SIZE, tuning::PLAYER_SIZE);
            if !self.map.collisions().rect_blocked(&body) {
                self.player.position = candidate;
            }
        }
        if velocity.dy() != 0.0 {
            let moved = self
                .player
                .position
                .advanced(WorldVec::new(0.0, velocity.dy()), dt);
            let candidate =
                WorldPoint::new(self.player.position.x(), moved.y().clamp(half, height - half));
            let body = WorldRect::from_center(candidate, tuning::PLAYER_SIZE, tuning::PLAYER_SIZE);
            if !self.map.collisions().rect_blocked(&body) {
                self.player.position = candidate;
            }
        }
    }

    fn integrate_hostiles(&mut self, dt: Duration) {
        let width = self.map.width();
        let height = self.map.height();

        for prowler in &mut self.prowlers {
            if prowler.phase == ProwlerPhase::Dead {
                continue;
            }
            let moved = prowler.position.advanced(prowler.velocity, dt);
            prowler.position = clamp_to_bounds(moved, tuning::PROWLER_SIZE / 2.0, width, height);
        }

        if self.sentinel.active && self.sentinel.phase != SentinelPhase::Dead {
            let moved = self.sentinel.position.advanced(self.sentinel.velocity, dt);
            self.sentinel.position =
                clamp_to_bounds(moved, tuning::SENTINEL_SIZE / 2.0, width, height);
        }
    }

    fn refresh_phases(&mut self) {
        let player_position = self.player.position;

        for prowler in &mut self.prowlers {
            if prowler.phase == ProwlerPhase::Dead {
                continue;
            }
            let distance = prowler.position.distance_to(player_position);
            prowler.phase = if distance < tuning::PROWLER_ATTACK_RANGE {
                ProwlerPhase::Attack
            } else if distance < tuning::PROWLER_DETECTION_RANGE {
                ProwlerPhase::Chase
            } else {
                ProwlerPhase::Patrol
            };
            if prowler.phase == ProwlerPhase::Attack {
                prowler.velocity = WorldVec::ZERO;
            }
        }

        if self.sentinel.active && self.sentinel.phase != SentinelPhase::Dead {
            let distance = self.sentinel.position.distance_to(player_position);
            self.sentinel.phase = if distance < tuning::SENTINEL_ATTACK_RANGE {
                SentinelPhase::Attack
            } else if distance < tuning::SENTINEL_DETECTION_RANGE {
                SentinelPhase::Chase
            } else {
                SentinelPhase::Idle
            };
            if self.sentinel.phase == SentinelPhase::Attack {
                self.sentinel.velocity = WorldVec::ZERO;
            }
        }
    }

    fn expire_swing(&mut self) {
        if let Some(swing) = &self.player.swing {
            if self.clock >= swing.expires_at {
                self.player.swing = None;
            }
        }
    }

    fn steer_prowler(&mut self, prowler: ProwlerId, velocity: WorldVec) {
        if let Some(index) = self.prowler_index(prowler) {
            let entry = &mut self.prowlers[index];
            if entry.phase != ProwlerPhase::Dead && entry.phase != ProwlerPhase::Attack {
                entry.velocity = velocity;
            }
        }
    }

    fn steer_sentinel(&mut self, velocity: WorldVec) {
        if self.sentinel.active
            && self.sentinel.phase != SentinelPhase::Dead
            && self.sentinel.phase != SentinelPhase::Attack
        {
            self.sentinel.velocity = velocity;
        }
    }

    fn prowler_strike(&mut self, prowler: ProwlerId, out_events: &mut Vec<Event>) {
        let Some(index) = self.prowler_index(prowler) else {
            return;
        };
        let ready = {
            let entry = &self.prowlers[index];
            entry.phase == ProwlerPhase::Attack && entry.strike_ready(self.clock)
        };
        if ready {
            self.prowlers[index].last_strike = Some(self.clock);
            self.damage_player(tuning::PROWLER_ATTACK_DAMAGE, out_events);
        }
    }

    fn sentinel_strike(&mut self, out_events: &mut Vec<Event>) {
        let ready = self.sentinel.active
            && self.sentinel.phase == SentinelPhase::Attack
            && self.sentinel.strike_ready(self.clock);
        if ready {
            self.sentinel.last_strike = Some(self.clock);
            self.damage_player(tuning::SENTINEL_ATTACK_DAMAGE, out_events);
        }
    }

    fn sentinel_shockwave(&mut self, out_events: &mut Vec<Event>) {
        if !self.sentinel.active || self.sentinel.phase == SentinelPhase::Dead {
            return;
        }
        let distance = self.sentinel.position.distance_to(self.player.position);
        if distance >= tuning::SENTINEL_DETECTION_RANGE {
            return;
        }
        if !self.sentinel.shockwave_ready(self.clock) {
            return;
        }

        self.sentinel.last_shockwave = Some(self.clock);
        out_events.push(Event::ShockwaveReleased {
            center: self.sentinel.position,
            radius: tuning::SENTINEL_SHOCKWAVE_RADIUS,
        });
        if distance < tuning::SENTINEL_SHOCKWAVE_RADIUS {
            self.damage_player(tuning::SENTINEL_SHOCKWAVE_DAMAGE, out_events);
        }
    }

    fn damage_prowler(&mut self, prowler: ProwlerId, amount: u32, out_events: &mut Vec<Event>) {
        let Some(index) = self.prowler_index(prowler) else {
            return;
        };
        let entry = &mut self.prowlers[index];
        if entry.phase == ProwlerPhase::Dead {
            return;
        }

        entry.health = entry.health.saturating_sub(amount);
        out_events.push(Event::AttackLanded {
            target: HitTarget::Prowler(prowler),
        });
        if entry.health == 0 {
            entry.phase = ProwlerPhase::Dead;
            entry.velocity = WorldVec::ZERO;
            out_events.push(Event::EntityDied {
                target: HitTarget::Prowler(prowler),
            });
        }
    }

    fn damage_sentinel(&mut self, amount: u32, out_events: &mut Vec<Event>) {
        if !self.sentinel.active || self.sentinel.phase == SentinelPhase::Dead {
            return;
        }

        self.sentinel.health = self.sentinel.health.saturating_sub(amount);
        out_events.push(Event::AttackLanded {
            target: HitTarget::Sentinel,
        });
        if self.sentinel.health == 0 {
            self.sentinel.phase = SentinelPhase::Dead;
            self.sentinel.active = false;
            self.sentinel.velocity = WorldVec::ZERO;
            out_events.push(Event::EntityDied {
                target: HitTarget::Sentinel,
            });
            self.outcome = Outcome::Victory;
            out_events.push(Event::Victory);
        }
    }

    fn heal_player(&mut self, amount: u32, out_events: &mut Vec<Event>) {
        self.player.health = (self.player.health + amount).min(tuning::PLAYER_MAX_HEALTH);
        out_events.push(Event::HealGranted {
            amount,
            health: self.player.health,
        });
    }

    fn activate_sentinel(&mut self, out_events: &mut Vec<Event>) {
        if self.sentinel_spawned {
            return;
        }
        self.sentinel_spawned = true;
        self.sentinel.active = true;
        out_events.push(Event::SentinelActivated);
    }

    fn damage_player(&mut self, amount: u32, out_events: &mut Vec<Event>) {
        if self.clock < self.player.invuln_until {
            return;
        }
        self.player.health = self.player.health.saturating_sub(amount);
        self.player.invuln_until = self.clock.saturating_add(tuning::PLAYER_INVULN_WINDOW);
        out_events.push(Event::PlayerDamaged {
            amount,
            remaining: self.player.health,
        });
        if self.player.health == 0 {
            self.outcome = Outcome::Defeat;
            out_events.push(Event::Defeat);
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Commands arriving after the session reached a terminal outcome are
/// ignored entirely.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    if world.outcome != Outcome::Ongoing {
        return;
    }

    match command {
        Command::SetPlayerMovement { intent } => world.set_player_movement(intent),
        Command::PlayerAttack => world.begin_swing(out_events),
        Command::Interact => world.collect_nearest_relic(out_events),
        Command::Tick { dt } => world.advance_clock(dt, out_events),
        Command::SteerProwler { prowler, velocity } => world.steer_prowler(prowler, velocity),
        Command::SteerSentinel { velocity } => world.steer_sentinel(velocity),
        Command::ProwlerStrike { prowler } => world.prowler_strike(prowler, out_events),
        Command::SentinelStrike => world.sentinel_strike(out_events),
        Command::SentinelShockwave => world.sentinel_shockwave(out_events),
        Command::DamageProwler { prowler, amount } => {
            world.damage_prowler(prowler, amount, out_events);
        }
        Command::DamageSentinel { amount } => world.damage_sentinel(amount, out_events),
        Command::HealPlayer { amount } => world.heal_player(amount, out_events),
        Command::ActivateSentinel => world.activate_sentinel(out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use outlands_core::{
        Outcome, PlayerSnapshot, ProwlerSnapshot, ProwlerView, RelicSnapshot, RelicView,
        SentinelSnapshot,
    };

    use super::World;
    use crate::map::MapData;

    /// Captures a read-only snapshot of the player.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        PlayerSnapshot {
            position: world.player.position,
            health: world.player.health,
            facing: world.player.facing,
            invulnerable: world.clock < world.player.invuln_until,
            swinging: world.player.swing.is_some(),
        }
    }

    /// Captures a read-only view of every prowler.
    #[must_use]
    pub fn prowler_view(world: &World) -> ProwlerView {
        let snapshots = world
            .prowlers
            .iter()
            .map(|prowler| ProwlerSnapshot {
                id: prowler.id,
                position: prowler.position,
                phase: prowler.phase,
                health: prowler.health,
                patrol_origin: prowler.patrol_origin,
                strike_ready: prowler.strike_ready(world.clock),
            })
            .collect();
        ProwlerView::from_snapshots(snapshots)
    }

    /// Captures a read-only snapshot of the sentinel.
    #[must_use]
    pub fn sentinel(world: &World) -> SentinelSnapshot {
        SentinelSnapshot {
            position: world.sentinel.position,
            phase: world.sentinel.phase,
            health: world.sentinel.health,
            active: world.sentinel.active,
            strike_ready: world.sentinel.strike_ready(world.clock),
            shockwave_ready: world.sentinel.shockwave_ready(world.clock),
        }
    }

    /// Captures a read-only view of every relic.
    #[must_use]
    pub fn relic_view(world: &World) -> RelicView {
        let snapshots = world
            .relics
            .iter()
            .map(|relic| RelicSnapshot {
                id: relic.id,
                position: relic.position,
                collected: relic.collected,
            })
            .collect();
        RelicView::from_snapshots(snapshots)
    }

    /// Number of relics collected so far.
    #[must_use]
    pub fn collected_count(world: &World) -> u32 {
        world.collected
    }

    /// Terminal result of the session, if any.
    #[must_use]
    pub fn outcome(world: &World) -> Outcome {
        world.outcome
    }

    /// Simulated time accumulated since the session started.
    #[must_use]
    pub fn clock(world: &World) -> Duration {
        world.clock
    }

    /// Provides read-only access to the generated map.
    #[must_use]
    pub fn map(world: &World) -> &MapData {
        &world.map
    }
}

#[derive(Debug)]
struct Player {
    position: WorldPoint,
    velocity: WorldVec,
    health: u32,
    facing: Facing,
    last_attack: Option<Duration>,
    invuln_until: Duration,
    swing: Option<Swing>,
}

impl Player {
    fn at(position: WorldPoint) -> Self {
        Self {
            position,
            velocity: WorldVec::ZERO,
            health: tuning::PLAYER_MAX_HEALTH,
            facing: Facing::Down,
            last_attack: None,
            invuln_until: Duration::ZERO,
            swing: None,
        }
    }

    fn attack_ready(&self, clock: Duration) -> bool {
        self.last_attack.map_or(true, |stamp| {
            clock.saturating_sub(stamp) >= tuning::PLAYER_ATTACK_COOLDOWN
        })
    }
}

#[derive(Clone, Copy, Debug)]
struct Swing {
    #[allow(dead_code)]
    hitbox: WorldRect,
    expires_at: Duration,
}

#[derive(Debug)]
struct Prowler {
    id: ProwlerId,
    position: WorldPoint,
    velocity: WorldVec,
    health: u32,
    phase: ProwlerPhase,
    patrol_origin: WorldPoint,
    last_strike: Option<Duration>,
}

impl Prowler {
    fn at(id: ProwlerId, position: WorldPoint) -> Self {
        Self {
            id,
            position,
            velocity: WorldVec::ZERO,
            health: tuning::PROWLER_MAX_HEALTH,
            phase: ProwlerPhase::Patrol,
            patrol_origin: position,
            last_strike: None,
        }
    }

    fn strike_ready(&self, clock: Duration) -> bool {
        self.last_strike.map_or(true, |stamp| {
            clock.saturating_sub(stamp) >= tuning::PROWLER_ATTACK_COOLDOWN
        })
    }
}

#[derive(Debug)]
struct Sentinel {
    position: WorldPoint,
    velocity: WorldVec,
    health: u32,
    phase: SentinelPhase,
    active: bool,
    last_strike: Option<Duration>,
    last_shockwave: Option<Duration>,
}

impl Sentinel {
    fn at(position: WorldPoint) -> Self {
        Self {
            position,
            velocity: WorldVec::ZERO,
            health: tuning::SENTINEL_MAX_HEALTH,
            phase: SentinelPhase::Idle,
            active: false,
            last_strike: None,
            last_shockwave: None,
        }
    }

    fn strike_ready(&self, clock: Duration) -> bool {
        self.last_strike.map_or(true, |stamp| {
            clock.saturating_sub(stamp) >= tuning::SENTINEL_ATTACK_COOLDOWN
        })
    }

    fn shockwave_ready(&self, clock: Duration) -> bool {
        self.last_shockwave.map_or(true, |stamp| {
            clock.saturating_sub(stamp) > tuning::SENTINEL_SHOCKWAVE_INTERVAL
        })
    }
}

#[derive(Debug)]
struct Relic {
    id: RelicId,
    position: WorldPoint,
    collected: bool,
}

/// Hitbox swept by a melee swing, offset from the player's center in the
/// facing direction. The box is long along the facing axis and slightly
/// wider than the player across it.
fn swing_hitbox(position: WorldPoint, facing: Facing) -> WorldRect {
    let breadth = tuning::PLAYER_SIZE + 8.0;
    let reach = tuning::PLAYER_ATTACK_RANGE;
    let step = tuning::PLAYER_SIZE / 2.0;
    match facing {
        Facing::Up => WorldRect::from_center(
            WorldPoint::new(position.x(), position.y() - reach),
            breadth,
            reach,
        ),
        Facing::Down => WorldRect::from_center(
            WorldPoint::new(position.x(), position.y() + step),
            breadth,
            reach,
        ),
        Facing::Left => WorldRect::from_center(
            WorldPoint::new(position.x() - reach, position.y()),
            reach,
            breadth,
        ),
        Facing::Right => WorldRect::from_center(
            WorldPoint::new(position.x() + step, position.y()),
            reach,
            breadth,
        ),
    }
}

fn clamp_to_bounds(point: WorldPoint, half: f32, width: f32, height: f32) -> WorldPoint {
    WorldPoint::new(
        point.x().clamp(half, width - half),
        point.y().clamp(half, height - half),
    )
}
