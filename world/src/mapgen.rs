//! Deterministic procedural map generation.
//!
//! `generate` builds the whole map from a single 32-bit seed. Every
//! stochastic decision draws from one linear-congruential stream in a fixed
//! call order, so identical seeds always produce bit-identical grids. The
//! carve order matters: later passes override earlier ones, ending with the
//! force-clears that guarantee every spawn cell is reachable.

use outlands_core::{tuning, CellCoord, TileKind};

use crate::map::{CollisionGrid, MapData, TileGrid};

const DARK_GRASS_CHANCE: f64 = 0.3;
const TREE_CHANCE: f64 = 0.25;

const MAIN_ROAD_ROW: u32 = 20;
const VERTICAL_ROAD_COLUMN: u32 = 15;
const ROAD_MARGIN_ROWS: u32 = 5;

const POND_CENTER: CellCoord = CellCoord::new(50, 28);

const PLAYER_START: CellCoord = CellCoord::new(15, 22);
const SENTINEL_SPAWN: CellCoord = CellCoord::new(50, 5);
/// Half-width of the square cleared around the sentinel spawn.
const SENTINEL_CLEARING_REACH: i64 = 3;

/// Rectangular building footprint measured in cells.
struct Footprint {
    column: u32,
    row: u32,
    width: u32,
    height: u32,
}

impl Footprint {
    const fn new(column: u32, row: u32, width: u32, height: u32) -> Self {
        Self {
            column,
            row,
            width,
            height,
        }
    }

    fn door_cell(&self) -> CellCoord {
        CellCoord::new(self.column + self.width / 2, self.row + self.height - 1)
    }

    fn gate_column(&self) -> u32 {
        self.column + self.width / 2
    }
}

const BUILDINGS: [Footprint; 13] = [
    // Cluster around the town center.
    Footprint::new(3, 5, 5, 4),
    Footprint::new(3, 11, 4, 3),
    Footprint::new(9, 5, 4, 5),
    Footprint::new(9, 12, 5, 3),
    // South side.
    Footprint::new(3, 24, 5, 4),
    Footprint::new(3, 30, 4, 3),
    Footprint::new(10, 24, 4, 3),
    Footprint::new(10, 29, 5, 4),
    // East side near the tree line.
    Footprint::new(20, 5, 4, 4),
    Footprint::new(20, 12, 5, 3),
    Footprint::new(20, 24, 4, 4),
    Footprint::new(25, 7, 3, 5),
    Footprint::new(25, 28, 4, 3),
];

/// Indices into [`BUILDINGS`] that receive a fence perimeter.
const FENCED_BUILDINGS: [usize; 2] = [0, 3];

/// Straight path through the wilds from a start cell to an end cell.
struct Trail {
    start_row: u32,
    start_column: u32,
    end_row: u32,
    end_column: u32,
}

impl Trail {
    const fn new(start_row: u32, start_column: u32, end_row: u32, end_column: u32) -> Self {
        Self {
            start_row,
            start_column,
            end_row,
            end_column,
        }
    }
}

const TRAILS: [Trail; 5] = [
    // Main trail from the town edge into the wilds.
    Trail::new(MAIN_ROAD_ROW, tuning::TOWN_END_COLUMN, MAIN_ROAD_ROW, tuning::GRID_COLUMNS - 5),
    // Branch north.
    Trail::new(MAIN_ROAD_ROW, 40, 5, 40),
    // Branch south.
    Trail::new(MAIN_ROAD_ROW, 45, 35, 45),
    // Clearing approaches.
    Trail::new(5, 40, 5, 55),
    Trail::new(35, 45, 35, 55),
];

const RELIC_CELLS: [CellCoord; tuning::RELIC_COUNT as usize] = [
    // Town relics.
    CellCoord::new(7, 16),
    CellCoord::new(18, 10),
    CellCoord::new(5, 34),
    CellCoord::new(24, 17),
    // Wilds relics.
    CellCoord::new(35, 20),
    CellCoord::new(42, 8),
    CellCoord::new(48, 15),
    CellCoord::new(53, 5),
    CellCoord::new(38, 32),
    CellCoord::new(55, 20),
    CellCoord::new(45, 35),
    CellCoord::new(52, 30),
];

const PROWLER_CELLS: [CellCoord; 10] = [
    // Town prowlers.
    CellCoord::new(8, 18),
    CellCoord::new(13, 8),
    CellCoord::new(22, 22),
    CellCoord::new(6, 28),
    CellCoord::new(18, 32),
    // Wilds prowlers.
    CellCoord::new(34, 15),
    CellCoord::new(42, 25),
    CellCoord::new(50, 10),
    CellCoord::new(38, 35),
    CellCoord::new(55, 28),
];

/// Linear-congruential generator backing all generation randomness.
struct Lcg {
    state: u32,
}

impl Lcg {
    const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the stream and returns a value in `[0, 1)`.
    fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        f64::from(self.state) / f64::from(u32::MAX)
    }
}

/// Generates the session map from the provided seed.
#[must_use]
pub fn generate(seed: u32) -> MapData {
    let columns = tuning::GRID_COLUMNS;
    let rows = tuning::GRID_ROWS;
    let mut rand = Lcg::new(seed);
    let mut tiles = TileGrid::filled(columns, rows, TileKind::Grass);
    let mut collisions = CollisionGrid::open(columns, rows);

    // Base ground; the wilds get a scattering of dark grass.
    for row in 0..rows {
        for column in tuning::TOWN_END_COLUMN..columns {
            if rand.next() < DARK_GRASS_CHANCE {
                tiles.set(CellCoord::new(column, row), TileKind::GrassDark);
            }
        }
    }

    // Main horizontal road through the town.
    for column in 0..tuning::TOWN_END_COLUMN {
        for row in MAIN_ROAD_ROW - 1..=MAIN_ROAD_ROW + 1 {
            tiles.set(CellCoord::new(column, row), TileKind::Road);
        }
    }

    // Vertical road crossing it.
    for row in ROAD_MARGIN_ROWS..rows - ROAD_MARGIN_ROWS {
        for column in VERTICAL_ROAD_COLUMN - 1..=VERTICAL_ROAD_COLUMN + 1 {
            tiles.set(CellCoord::new(column, row), TileKind::Road);
        }
    }

    // Buildings, each with a door at the bottom center. The door tile is
    // visually distinct but stays impassable.
    for footprint in &BUILDINGS {
        for row in footprint.row..(footprint.row + footprint.height).min(rows) {
            for column in footprint.column..(footprint.column + footprint.width).min(columns) {
                let cell = CellCoord::new(column, row);
                tiles.set(cell, TileKind::Building);
                collisions.set_blocked(cell, true);
            }
        }
        let door = footprint.door_cell();
        if door.row() < rows && door.column() < columns {
            tiles.set(door, TileKind::BuildingDoor);
            collisions.set_blocked(door, true);
        }
    }

    // Dense tree cover across the wilds.
    for row in 0..rows {
        for column in tuning::TOWN_END_COLUMN..columns {
            if rand.next() < TREE_CHANCE {
                let cell = CellCoord::new(column, row);
                tiles.set(cell, TileKind::Tree);
                collisions.set_blocked(cell, true);
            }
        }
    }

    // Trails carved through the tree cover. Walking the line and clearing
    // the 3x3 neighborhood at every step keeps each trail walkable no
    // matter how dense the trees fell.
    for trail in &TRAILS {
        carve_trail(trail, &mut tiles, &mut collisions);
    }

    // Elliptical pond in the wilds.
    for row in POND_CENTER.row().saturating_sub(2)..=POND_CENTER.row() + 2 {
        for column in POND_CENTER.column().saturating_sub(3)..=POND_CENTER.column() + 3 {
            if row >= rows || column >= columns {
                continue;
            }
            let dr = f64::from(row) - f64::from(POND_CENTER.row());
            let dc = f64::from(column) - f64::from(POND_CENTER.column());
            if dr * dr + dc * dc / 2.0 <= 4.0 {
                let cell = CellCoord::new(column, row);
                tiles.set(cell, TileKind::Water);
                collisions.set_blocked(cell, true);
            }
        }
    }

    // Fences around two of the buildings, with a gate on the south edge.
    for index in FENCED_BUILDINGS {
        fence_building(&BUILDINGS[index], &mut tiles, &mut collisions);
    }

    // Relics must never spawn unreachable: clear the cell and any tree or
    // fence in its 3x3 neighborhood.
    for cell in RELIC_CELLS {
        tiles.set(cell, TileKind::Grass);
        collisions.set_blocked(cell, false);
        for_neighborhood(cell, 1, |neighbor| {
            if matches!(
                tiles.get(neighbor),
                Some(TileKind::Tree) | Some(TileKind::Fence)
            ) {
                tiles.set(neighbor, TileKind::Grass);
                collisions.set_blocked(neighbor, false);
            }
        });
    }

    // Prowler spawns only need the cell itself open.
    for cell in PROWLER_CELLS {
        if collisions.is_blocked(cell) {
            tiles.set(cell, TileKind::Grass);
            collisions.set_blocked(cell, false);
        }
    }

    collisions.set_blocked(PLAYER_START, false);

    // Open arena around the sentinel spawn.
    for_neighborhood(SENTINEL_SPAWN, SENTINEL_CLEARING_REACH, |neighbor| {
        tiles.set(neighbor, TileKind::GrassDark);
        collisions.set_blocked(neighbor, false);
    });

    MapData::new(
        tiles,
        collisions,
        RELIC_CELLS.to_vec(),
        PROWLER_CELLS.to_vec(),
        PLAYER_START,
        SENTINEL_SPAWN,
    )
}

/// Invokes `visit` for every in-bounds cell within `reach` of `center`,
/// including the center itself. Out-of-range neighbors are skipped.
fn for_neighborhood<F>(center: CellCoord, reach: i64, mut visit: F)
where
    F: FnMut(CellCoord),
{
    for dr in -reach..=reach {
        for dc in -reach..=reach {
            let row = i64::from(center.row()) + dr;
            let column = i64::from(center.column()) + dc;
            if row < 0
                || column < 0
                || row >= i64::from(tuning::GRID_ROWS)
                || column >= i64::from(tuning::GRID_COLUMNS)
            {
                continue;
            }
            visit(CellCoord::new(column as u32, row as u32));
        }
    }
}

fn carve_trail(trail: &Trail, tiles: &mut TileGrid, collisions: &mut CollisionGrid) {
    let end_row = i64::from(trail.end_row);
    let end_column = i64::from(trail.end_column);
    let step_row = (end_row - i64::from(trail.start_row)).signum();
    let step_column = (end_column - i64::from(trail.start_column)).signum();

    let mut row = i64::from(trail.start_row);
    let mut column = i64::from(trail.start_column);
    while row != end_row || column != end_column {
        for_neighborhood(CellCoord::new(column as u32, row as u32), 1, |neighbor| {
            if tiles.get(neighbor) == Some(TileKind::Tree) {
                tiles.set(neighbor, TileKind::Path);
                collisions.set_blocked(neighbor, false);
            }
        });
        if row != end_row {
            row += step_row;
        }
        if column != end_column {
            column += step_column;
        }
    }
}

fn fence_building(footprint: &Footprint, tiles: &mut TileGrid, collisions: &mut CollisionGrid) {
    let columns = i64::from(tuning::GRID_COLUMNS);
    let rows = i64::from(tuning::GRID_ROWS);
    let left = i64::from(footprint.column) - 1;
    let right = i64::from(footprint.column + footprint.width);
    let top = i64::from(footprint.row) - 1;
    let bottom = i64::from(footprint.row + footprint.height);

    let mut place = |column: i64, row: i64, tiles: &mut TileGrid, collisions: &mut CollisionGrid| {
        if column >= 0 && column < columns && row >= 0 && row < rows {
            let cell = CellCoord::new(column as u32, row as u32);
            tiles.set(cell, TileKind::Fence);
            collisions.set_blocked(cell, true);
        }
    };

    for column in left..=right {
        place(column, top, tiles, collisions);
        place(column, bottom, tiles, collisions);
    }
    for row in top..=bottom {
        place(left, row, tiles, collisions);
        place(right, row, tiles, collisions);
    }

    // Gate opening centered on the south edge.
    if bottom < rows {
        let gate = CellCoord::new(footprint.gate_column(), bottom as u32);
        tiles.set(gate, TileKind::Grass);
        collisions.set_blocked(gate, false);
    }
}
