//! Tile and collision grids produced by map generation.

use outlands_core::{tuning, CellCoord, TileKind, WorldRect};

/// Margin pulled off a rectangle's far edges before sampling cells, so a
/// body flush against a tile boundary does not read into the next tile.
const EDGE_INSET: f32 = 1e-3;

/// Dense row-major grid of terrain tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    columns: u32,
    rows: u32,
    cells: Vec<TileKind>,
}

impl TileGrid {
    /// Creates a grid with every cell set to the provided kind.
    #[must_use]
    pub fn filled(columns: u32, rows: u32, kind: TileKind) -> Self {
        let capacity = columns as usize * rows as usize;
        Self {
            columns,
            rows,
            cells: vec![kind; capacity],
        }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Kind of the tile at the provided cell, if it lies within the grid.
    #[must_use]
    pub fn get(&self, cell: CellCoord) -> Option<TileKind> {
        self.index(cell).map(|index| self.cells[index])
    }

    /// Writes the tile kind at the provided cell; out-of-range writes are
    /// skipped.
    pub(crate) fn set(&mut self, cell: CellCoord, kind: TileKind) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = kind;
        }
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            Some(cell.row() as usize * self.columns as usize + cell.column() as usize)
        } else {
            None
        }
    }
}

/// Dense row-major walkability grid; `true` marks an impassable cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionGrid {
    columns: u32,
    rows: u32,
    cells: Vec<bool>,
}

impl CollisionGrid {
    /// Creates a grid with every cell passable.
    #[must_use]
    pub fn open(columns: u32, rows: u32) -> Self {
        let capacity = columns as usize * rows as usize;
        Self {
            columns,
            rows,
            cells: vec![false; capacity],
        }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether the cell blocks movement. Cells outside the grid
    /// block movement, so bodies can never leave the map through a query.
    #[must_use]
    pub fn is_blocked(&self, cell: CellCoord) -> bool {
        self.index(cell).map_or(true, |index| self.cells[index])
    }

    /// Reports whether the cell is open for movement.
    #[must_use]
    pub fn is_walkable(&self, cell: CellCoord) -> bool {
        !self.is_blocked(cell)
    }

    /// Marks the cell as impassable or passable; out-of-range writes are
    /// skipped.
    pub(crate) fn set_blocked(&mut self, cell: CellCoord, blocked: bool) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = blocked;
        }
    }

    /// Reports whether any cell covered by the rectangle blocks movement.
    /// Area outside the grid counts as blocked.
    #[must_use]
    pub fn rect_blocked(&self, rect: &WorldRect) -> bool {
        let first_column = (rect.left() / tuning::TILE_LENGTH).floor() as i64;
        let last_column = ((rect.right() - EDGE_INSET) / tuning::TILE_LENGTH).floor() as i64;
        let first_row = (rect.top() / tuning::TILE_LENGTH).floor() as i64;
        let last_row = ((rect.bottom() - EDGE_INSET) / tuning::TILE_LENGTH).floor() as i64;

        for row in first_row..=last_row {
            for column in first_column..=last_column {
                if row < 0 || column < 0 || row >= i64::from(self.rows) || column >= i64::from(self.columns) {
                    return true;
                }
                if self.is_blocked(CellCoord::new(column as u32, row as u32)) {
                    return true;
                }
            }
        }
        false
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            Some(cell.row() as usize * self.columns as usize + cell.column() as usize)
        } else {
            None
        }
    }
}

/// Immutable output of world generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapData {
    tiles: TileGrid,
    collisions: CollisionGrid,
    relic_cells: Vec<CellCoord>,
    prowler_cells: Vec<CellCoord>,
    player_start: CellCoord,
    sentinel_spawn: CellCoord,
}

impl MapData {
    /// Assembles generation output into an immutable map description.
    #[must_use]
    pub fn new(
        tiles: TileGrid,
        collisions: CollisionGrid,
        relic_cells: Vec<CellCoord>,
        prowler_cells: Vec<CellCoord>,
        player_start: CellCoord,
        sentinel_spawn: CellCoord,
    ) -> Self {
        debug_assert_eq!(tiles.columns(), collisions.columns());
        debug_assert_eq!(tiles.rows(), collisions.rows());
        Self {
            tiles,
            collisions,
            relic_cells,
            prowler_cells,
            player_start,
            sentinel_spawn,
        }
    }

    /// Terrain grid of the map.
    #[must_use]
    pub const fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    /// Walkability grid of the map.
    #[must_use]
    pub const fn collisions(&self) -> &CollisionGrid {
        &self.collisions
    }

    /// Cells where relics spawn.
    #[must_use]
    pub fn relic_cells(&self) -> &[CellCoord] {
        &self.relic_cells
    }

    /// Cells where prowlers spawn.
    #[must_use]
    pub fn prowler_cells(&self) -> &[CellCoord] {
        &self.prowler_cells
    }

    /// Cell where the player starts.
    #[must_use]
    pub const fn player_start(&self) -> CellCoord {
        self.player_start
    }

    /// Cell where the sentinel spawns.
    #[must_use]
    pub const fn sentinel_spawn(&self) -> CellCoord {
        self.sentinel_spawn
    }

    /// Total map width in world units.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.tiles.columns() as f32 * tuning::TILE_LENGTH
    }

    /// Total map height in world units.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.tiles.rows() as f32 * tuning::TILE_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outlands_core::WorldPoint;

    #[test]
    fn out_of_range_cells_block_movement() {
        let grid = CollisionGrid::open(4, 4);
        assert!(grid.is_blocked(CellCoord::new(4, 0)));
        assert!(grid.is_blocked(CellCoord::new(0, 4)));
        assert!(grid.is_walkable(CellCoord::new(3, 3)));
    }

    #[test]
    fn rect_queries_cover_every_touched_cell() {
        let mut grid = CollisionGrid::open(4, 4);
        grid.set_blocked(CellCoord::new(1, 0), true);

        // Fully inside the open cell at (0, 0).
        let open = WorldRect::from_center(WorldPoint::new(16.0, 16.0), 24.0, 24.0);
        assert!(!grid.rect_blocked(&open));

        // Straddles the boundary into the blocked cell at (1, 0).
        let straddling = WorldRect::from_center(WorldPoint::new(30.0, 16.0), 24.0, 24.0);
        assert!(grid.rect_blocked(&straddling));

        // Flush against the boundary, still entirely within (0, 0).
        let flush = WorldRect::from_center(WorldPoint::new(20.0, 16.0), 24.0, 24.0);
        assert!(!grid.rect_blocked(&flush));
    }

    #[test]
    fn rect_outside_grid_blocks() {
        let grid = CollisionGrid::open(4, 4);
        let outside = WorldRect::from_center(WorldPoint::new(-10.0, 16.0), 24.0, 24.0);
        assert!(grid.rect_blocked(&outside));
    }

    #[test]
    fn tile_writes_outside_grid_are_skipped() {
        let mut tiles = TileGrid::filled(2, 2, TileKind::Grass);
        tiles.set(CellCoord::new(5, 5), TileKind::Water);
        assert_eq!(tiles.get(CellCoord::new(5, 5)), None);
        assert_eq!(tiles.get(CellCoord::new(1, 1)), Some(TileKind::Grass));
    }
}
