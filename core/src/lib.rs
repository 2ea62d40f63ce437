#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Outlands engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tuning table governing world layout, entity stats, and timers.
///
/// Every value here is part of the simulation contract: the world and the
/// systems read the same table, so a change in one place retunes the whole
/// experience.
pub mod tuning {
    use std::time::Duration;

    /// Side length of a square tile expressed in world units.
    pub const TILE_LENGTH: f32 = 32.0;
    /// Number of tile columns in the generated map.
    pub const GRID_COLUMNS: u32 = 60;
    /// Number of tile rows in the generated map.
    pub const GRID_ROWS: u32 = 40;
    /// First column that belongs to the wilds; lower columns form the town.
    pub const TOWN_END_COLUMN: u32 = 30;

    /// Player movement speed in world units per second.
    pub const PLAYER_SPEED: f32 = 160.0;
    /// Maximum (and starting) player health.
    pub const PLAYER_MAX_HEALTH: u32 = 5;
    /// Side length of the player's square bounding box.
    pub const PLAYER_SIZE: f32 = 24.0;
    /// Reach of the player's melee swing measured from the body edge.
    pub const PLAYER_ATTACK_RANGE: f32 = 40.0;
    /// Damage dealt by one landed player swing.
    pub const PLAYER_ATTACK_DAMAGE: u32 = 1;
    /// Minimum delay between successive player swings.
    pub const PLAYER_ATTACK_COOLDOWN: Duration = Duration::from_millis(400);
    /// Lifetime of the swing hitbox once created.
    pub const PLAYER_SWING_DURATION: Duration = Duration::from_millis(150);
    /// Window during which a damaged player ignores further damage.
    pub const PLAYER_INVULN_WINDOW: Duration = Duration::from_millis(1000);

    /// Prowler movement speed while patrolling.
    pub const PROWLER_PATROL_SPEED: f32 = 60.0;
    /// Prowler movement speed while chasing the player.
    pub const PROWLER_CHASE_SPEED: f32 = 100.0;
    /// Distance at which a prowler notices the player.
    pub const PROWLER_DETECTION_RANGE: f32 = 150.0;
    /// Distance at which a prowler stops to attack.
    pub const PROWLER_ATTACK_RANGE: f32 = 30.0;
    /// Damage dealt by one prowler strike.
    pub const PROWLER_ATTACK_DAMAGE: u32 = 1;
    /// Minimum delay between successive prowler strikes.
    pub const PROWLER_ATTACK_COOLDOWN: Duration = Duration::from_millis(1000);
    /// Maximum (and starting) prowler health.
    pub const PROWLER_MAX_HEALTH: u32 = 2;
    /// Side length of a prowler's square bounding box.
    pub const PROWLER_SIZE: f32 = 24.0;
    /// Inner radius of the ring in which patrol targets are chosen.
    pub const PROWLER_PATROL_RING_MIN: f32 = 50.0;
    /// Width of the patrol ring beyond its inner radius.
    pub const PROWLER_PATROL_RING_SPAN: f32 = 80.0;
    /// Distance at which a patrol target counts as reached.
    pub const PROWLER_PATROL_ARRIVAL: f32 = 10.0;

    /// Maximum (and starting) sentinel health.
    pub const SENTINEL_MAX_HEALTH: u32 = 15;
    /// Side length of the sentinel's square bounding box.
    pub const SENTINEL_SIZE: f32 = 48.0;
    /// Base speed used for the sentinel's idle drift.
    pub const SENTINEL_DRIFT_SPEED: f32 = 80.0;
    /// Sentinel movement speed while chasing the player.
    pub const SENTINEL_CHASE_SPEED: f32 = 130.0;
    /// Distance at which the sentinel notices the player.
    pub const SENTINEL_DETECTION_RANGE: f32 = 300.0;
    /// Distance at which the sentinel stops to attack.
    pub const SENTINEL_ATTACK_RANGE: f32 = 50.0;
    /// Damage dealt by one sentinel strike.
    pub const SENTINEL_ATTACK_DAMAGE: u32 = 2;
    /// Minimum delay between successive sentinel strikes.
    pub const SENTINEL_ATTACK_COOLDOWN: Duration = Duration::from_millis(800);
    /// Interval between sentinel shockwaves.
    pub const SENTINEL_SHOCKWAVE_INTERVAL: Duration = Duration::from_millis(5000);
    /// Radius of the sentinel's shockwave.
    pub const SENTINEL_SHOCKWAVE_RADIUS: f32 = 120.0;
    /// Damage dealt to a player caught inside the shockwave.
    pub const SENTINEL_SHOCKWAVE_DAMAGE: u32 = 1;

    /// Number of relics placed in the world; collecting them all wakes the
    /// sentinel.
    pub const RELIC_COUNT: u32 = 12;
    /// Distance within which the player may collect an active relic.
    pub const RELIC_COLLECT_RADIUS: f32 = 50.0;

    /// Probability that a slain prowler grants the player a heal.
    pub const LOOT_HEAL_CHANCE: f64 = 0.3;
    /// Health restored by a loot heal.
    pub const LOOT_HEAL_AMOUNT: u32 = 1;
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replaces the player's movement intent for subsequent ticks.
    SetPlayerMovement {
        /// Directional inputs held during the upcoming tick.
        intent: MoveIntent,
    },
    /// Requests a melee swing oriented by the player's current facing.
    PlayerAttack,
    /// Requests collection of the nearest active relic within reach.
    Interact,
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Assigns a new velocity to a prowler.
    SteerProwler {
        /// Identifier of the prowler being steered.
        prowler: ProwlerId,
        /// Velocity the prowler should adopt, in units per second.
        velocity: WorldVec,
    },
    /// Assigns a new velocity to the sentinel.
    SteerSentinel {
        /// Velocity the sentinel should adopt, in units per second.
        velocity: WorldVec,
    },
    /// Requests that a prowler strike the player.
    ProwlerStrike {
        /// Identifier of the striking prowler.
        prowler: ProwlerId,
    },
    /// Requests that the sentinel strike the player.
    SentinelStrike,
    /// Requests that the sentinel release its area shockwave.
    SentinelShockwave,
    /// Applies damage to a prowler.
    DamageProwler {
        /// Identifier of the prowler taking damage.
        prowler: ProwlerId,
        /// Amount of health to remove.
        amount: u32,
    },
    /// Applies damage to the sentinel.
    DamageSentinel {
        /// Amount of health to remove.
        amount: u32,
    },
    /// Restores player health, clamped to the maximum.
    HealPlayer {
        /// Amount of health to restore.
        amount: u32,
    },
    /// Wakes the sentinel; repeat activations are ignored.
    ActivateSentinel,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Announces that the player began a melee swing.
    PlayerSwung {
        /// Hitbox the swing sweeps, in world units.
        hitbox: WorldRect,
    },
    /// Reports that the player took damage.
    PlayerDamaged {
        /// Amount of health removed.
        amount: u32,
        /// Health remaining after the hit.
        remaining: u32,
    },
    /// Announces that the sentinel released its shockwave.
    ShockwaveReleased {
        /// Center of the blast.
        center: WorldPoint,
        /// Radius of the blast.
        radius: f32,
    },
    /// Confirms that a player swing connected with a hostile.
    AttackLanded {
        /// Hostile struck by the swing.
        target: HitTarget,
    },
    /// Announces that a hostile ran out of health.
    EntityDied {
        /// Hostile that died.
        target: HitTarget,
    },
    /// Reports that the player received healing.
    HealGranted {
        /// Amount of health restored.
        amount: u32,
        /// Health total after the heal.
        health: u32,
    },
    /// Confirms that a relic was collected.
    RelicCollected {
        /// Identifier of the collected relic.
        relic: RelicId,
        /// Running total of relics collected so far.
        collected: u32,
    },
    /// Announces that the sentinel woke up.
    SentinelActivated,
    /// Terminal event: the sentinel was destroyed.
    Victory,
    /// Terminal event: the player ran out of health.
    Defeat,
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Continuous world position of the cell's center.
    #[must_use]
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(
            self.column as f32 * tuning::TILE_LENGTH + tuning::TILE_LENGTH / 2.0,
            self.row as f32 * tuning::TILE_LENGTH + tuning::TILE_LENGTH / 2.0,
        )
    }
}

/// Continuous position expressed in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    x: f32,
    y: f32,
}

impl WorldPoint {
    /// Creates a new world position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate in world units.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical coordinate in world units.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn distance_to(&self, other: WorldPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Position reached by travelling at `velocity` for `dt`.
    #[must_use]
    pub fn advanced(&self, velocity: WorldVec, dt: Duration) -> WorldPoint {
        let seconds = dt.as_secs_f32();
        WorldPoint::new(
            self.x + velocity.dx() * seconds,
            self.y + velocity.dy() * seconds,
        )
    }
}

/// Velocity expressed in world units per second.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldVec {
    dx: f32,
    dy: f32,
}

impl WorldVec {
    /// The zero velocity.
    pub const ZERO: WorldVec = WorldVec::new(0.0, 0.0);

    /// Creates a new velocity vector.
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Horizontal component in units per second.
    #[must_use]
    pub const fn dx(&self) -> f32 {
        self.dx
    }

    /// Vertical component in units per second.
    #[must_use]
    pub const fn dy(&self) -> f32 {
        self.dy
    }

    /// Velocity of the given magnitude pointing from `from` toward `to`.
    ///
    /// Returns the zero velocity when the two positions coincide, so callers
    /// never divide by a zero-length direction.
    #[must_use]
    pub fn toward(from: WorldPoint, to: WorldPoint, speed: f32) -> WorldVec {
        let dx = to.x() - from.x();
        let dy = to.y() - from.y();
        let length = (dx * dx + dy * dy).sqrt();
        if length == 0.0 {
            return WorldVec::ZERO;
        }
        WorldVec::new(dx / length * speed, dy / length * speed)
    }
}

/// Axis-aligned rectangle expressed in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldRect {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl WorldRect {
    /// Constructs a rectangle from its center and full extents.
    #[must_use]
    pub fn from_center(center: WorldPoint, width: f32, height: f32) -> Self {
        Self {
            left: center.x() - width / 2.0,
            top: center.y() - height / 2.0,
            width,
            height,
        }
    }

    /// Leftmost edge of the rectangle.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.left
    }

    /// Topmost edge of the rectangle.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.top
    }

    /// Rightmost edge of the rectangle.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottommost edge of the rectangle.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Reports whether two rectangles overlap with positive area.
    #[must_use]
    pub fn overlaps(&self, other: &WorldRect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

/// Kind of terrain occupying a single map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Open grass, the base ground of the town.
    Grass,
    /// Darker grass variant scattered through the wilds.
    GrassDark,
    /// Paved road through the town.
    Road,
    /// Impassable building interior.
    Building,
    /// Building entrance; visually distinct but still impassable.
    BuildingDoor,
    /// Impassable tree.
    Tree,
    /// Impassable water.
    Water,
    /// Impassable fence segment.
    Fence,
    /// Trail carved through the wilds.
    Path,
}

/// Cosmetic map partition used by external collaborators for labeling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The built-up western half of the map.
    Town,
    /// The forested eastern half of the map.
    Wilds,
}

impl Zone {
    /// Zone that contains the provided column.
    #[must_use]
    pub const fn of_column(column: u32) -> Zone {
        if column < tuning::TOWN_END_COLUMN {
            Zone::Town
        } else {
            Zone::Wilds
        }
    }
}

/// Cardinal direction the player is oriented toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Toward decreasing y.
    Up,
    /// Toward increasing y.
    Down,
    /// Toward decreasing x.
    Left,
    /// Toward increasing x.
    Right,
}

/// Directional inputs held by the player for one tick.
///
/// Opposing inputs resolve in favor of `left` and `up`; a vertical input
/// overrides a horizontal one when deriving facing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    /// Whether the up input is held.
    pub up: bool,
    /// Whether the down input is held.
    pub down: bool,
    /// Whether the left input is held.
    pub left: bool,
    /// Whether the right input is held.
    pub right: bool,
}

impl MoveIntent {
    /// Intent with no directional input held.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
        }
    }
}

/// Unique identifier assigned to a prowler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProwlerId(u32);

impl ProwlerId {
    /// Creates a new prowler identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a relic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RelicId(u32);

impl RelicId {
    /// Creates a new relic identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Hostile entity referenced by combat events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitTarget {
    /// An ordinary prowler.
    Prowler(ProwlerId),
    /// The sentinel.
    Sentinel,
}

/// Behavioral phase of a prowler, derived from its distance to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProwlerPhase {
    /// Wandering a ring around its spawn origin.
    Patrol,
    /// Closing on the player at chase speed.
    Chase,
    /// Stopped in striking range of the player.
    Attack,
    /// Terminal; the prowler no longer participates in the simulation.
    Dead,
}

/// Behavioral phase of the sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentinelPhase {
    /// Drifting near its clearing, unaware of the player.
    Idle,
    /// Closing on the player at chase speed.
    Chase,
    /// Stopped in striking range of the player.
    Attack,
    /// Reserved for the shockwave wind-up. The shockwave fires from an
    /// independent timer without leaving the primary phase, so this variant
    /// is part of the contract but never entered.
    Special,
    /// Terminal; the sentinel no longer participates in the simulation.
    Dead,
}

/// Terminal result of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The session is still being played.
    Ongoing,
    /// The sentinel was destroyed.
    Victory,
    /// The player ran out of health.
    Defeat,
}

/// Immutable representation of the player's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSnapshot {
    /// Current position of the player's center.
    pub position: WorldPoint,
    /// Current health, in `[0, PLAYER_MAX_HEALTH]`.
    pub health: u32,
    /// Direction the player is facing.
    pub facing: Facing,
    /// Whether the player currently ignores incoming damage.
    pub invulnerable: bool,
    /// Whether a swing hitbox is currently active.
    pub swinging: bool,
}

/// Immutable representation of a single prowler's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProwlerSnapshot {
    /// Unique identifier assigned to the prowler.
    pub id: ProwlerId,
    /// Current position of the prowler's center.
    pub position: WorldPoint,
    /// Phase the prowler occupied after the latest tick.
    pub phase: ProwlerPhase,
    /// Current health.
    pub health: u32,
    /// Spawn position anchoring the prowler's patrol ring.
    pub patrol_origin: WorldPoint,
    /// Whether the strike cooldown has elapsed.
    pub strike_ready: bool,
}

/// Read-only snapshot describing all prowlers in the world.
#[derive(Clone, Debug, Default)]
pub struct ProwlerView {
    snapshots: Vec<ProwlerSnapshot>,
}

impl ProwlerView {
    /// Creates a new prowler view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<ProwlerSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &ProwlerSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<ProwlerSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of the sentinel's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SentinelSnapshot {
    /// Current position of the sentinel's center.
    pub position: WorldPoint,
    /// Phase the sentinel occupied after the latest tick.
    pub phase: SentinelPhase,
    /// Current health.
    pub health: u32,
    /// Whether the sentinel has been activated.
    pub active: bool,
    /// Whether the strike cooldown has elapsed.
    pub strike_ready: bool,
    /// Whether the shockwave interval has elapsed.
    pub shockwave_ready: bool,
}

/// Immutable representation of a single relic's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelicSnapshot {
    /// Unique identifier assigned to the relic.
    pub id: RelicId,
    /// World position of the relic.
    pub position: WorldPoint,
    /// Whether the relic has been collected.
    pub collected: bool,
}

/// Read-only snapshot describing all relics in the world.
#[derive(Clone, Debug, Default)]
pub struct RelicView {
    snapshots: Vec<RelicSnapshot>,
}

impl RelicView {
    /// Creates a new relic view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<RelicSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &RelicSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<RelicSnapshot> {
        self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_splits_at_town_end_column() {
        assert_eq!(Zone::of_column(0), Zone::Town);
        assert_eq!(Zone::of_column(tuning::TOWN_END_COLUMN - 1), Zone::Town);
        assert_eq!(Zone::of_column(tuning::TOWN_END_COLUMN), Zone::Wilds);
        assert_eq!(Zone::of_column(tuning::GRID_COLUMNS - 1), Zone::Wilds);
    }

    #[test]
    fn cell_center_lands_mid_tile() {
        let center = CellCoord::new(3, 2).center();
        assert_eq!(center.x(), 3.0 * tuning::TILE_LENGTH + 16.0);
        assert_eq!(center.y(), 2.0 * tuning::TILE_LENGTH + 16.0);
    }

    #[test]
    fn toward_guards_zero_length_direction() {
        let point = WorldPoint::new(7.0, -3.0);
        assert_eq!(WorldVec::toward(point, point, 100.0), WorldVec::ZERO);
    }

    #[test]
    fn toward_produces_requested_speed() {
        let velocity = WorldVec::toward(WorldPoint::new(0.0, 0.0), WorldPoint::new(3.0, 4.0), 10.0);
        assert!((velocity.dx() - 6.0).abs() < 1e-5);
        assert!((velocity.dy() - 8.0).abs() < 1e-5);
    }

    #[test]
    fn rect_overlap_requires_positive_area() {
        let first = WorldRect::from_center(WorldPoint::new(0.0, 0.0), 10.0, 10.0);
        let second = WorldRect::from_center(WorldPoint::new(8.0, 0.0), 10.0, 10.0);
        let touching = WorldRect::from_center(WorldPoint::new(10.0, 0.0), 10.0, 10.0);
        let apart = WorldRect::from_center(WorldPoint::new(30.0, 0.0), 10.0, 10.0);

        assert!(first.overlaps(&second));
        assert!(second.overlaps(&first));
        assert!(!first.overlaps(&touching));
        assert!(!first.overlaps(&apart));
    }

    #[test]
    fn identifiers_round_trip_through_bincode() {
        let relic = RelicId::new(11);
        let bytes = bincode::serialize(&relic).expect("serialize");
        let restored: RelicId = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, relic);

        let cell = CellCoord::new(15, 22);
        let bytes = bincode::serialize(&cell).expect("serialize");
        let restored: CellCoord = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, cell);
    }
}
