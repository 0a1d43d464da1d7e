//! The tile grid and its adjacency queries.
//!
//! Every query takes and returns coordinates. Out-of-range coordinates yield
//! `None` or are filtered out, never a panic.

use crate::env::{MapDimensions, TerrainKind};

use super::{EntityId, Position, Tile};

/// Terrain list whose length does not match the requested dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} tiles for the map, got {actual}")]
pub struct GridSizeMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// Rectangular grid holding exactly one [`Tile`] per coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    dimensions: MapDimensions,
    /// Row-major: index = y * width + x.
    tiles: Vec<Tile>,
    seen_percentage: u32,
}

impl GridMap {
    /// Grid where every tile has the same terrain.
    pub fn filled(dimensions: MapDimensions, terrain: TerrainKind) -> Self {
        let tiles = Self::positions_row_major(dimensions)
            .map(|position| Tile::new(position, terrain))
            .collect();
        Self {
            dimensions,
            tiles,
            seen_percentage: 0,
        }
    }

    /// Builds the grid from row-major terrain, one entry per tile.
    pub fn from_terrain(
        dimensions: MapDimensions,
        terrain: Vec<TerrainKind>,
    ) -> Result<Self, GridSizeMismatch> {
        if terrain.len() != dimensions.area() {
            return Err(GridSizeMismatch {
                expected: dimensions.area(),
                actual: terrain.len(),
            });
        }
        let tiles = Self::positions_row_major(dimensions)
            .zip(terrain)
            .map(|(position, kind)| Tile::new(position, kind))
            .collect();
        Ok(Self {
            dimensions,
            tiles,
            seen_percentage: 0,
        })
    }

    fn positions_row_major(dimensions: MapDimensions) -> impl Iterator<Item = Position> {
        (0..dimensions.height as i32)
            .flat_map(move |y| (0..dimensions.width as i32).map(move |x| Position::new(x, y)))
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index_of(position).map(|index| &self.tiles[index])
    }

    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.index_of(position).map(move |index| &mut self.tiles[index])
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tile rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.dimensions.width.max(1) as usize)
    }

    /// Occupants in column-major tile order (x outer, y inner).
    pub fn occupants_by_column(&self) -> Vec<EntityId> {
        let mut occupants = Vec::new();
        for x in 0..self.dimensions.width as i32 {
            for y in 0..self.dimensions.height as i32 {
                if let Some(id) = self.tile(Position::new(x, y)).and_then(Tile::occupant) {
                    occupants.push(id);
                }
            }
        }
        occupants
    }

    pub fn occupant_at(&self, position: Position) -> Option<EntityId> {
        self.tile(position).and_then(Tile::occupant)
    }

    pub fn is_viable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_viable)
    }

    /// In-bounds cardinal neighbours, ordered right, down, left, up.
    pub fn neighbors4(&self, position: Position) -> Vec<Position> {
        [(1, 0), (0, 1), (-1, 0), (0, -1)]
            .into_iter()
            .map(|(dx, dy)| position.offset(dx, dy))
            .filter(|neighbor| self.contains(*neighbor))
            .collect()
    }

    /// Neighbours that are neither solid nor occupied.
    pub fn viable_neighbors(&self, position: Position) -> Vec<Position> {
        self.neighbors4(position)
            .into_iter()
            .filter(|neighbor| self.is_viable(*neighbor))
            .collect()
    }

    /// Neighbours with a live occupant, the attack range of `position`.
    pub fn occupied_neighbors(&self, position: Position) -> Vec<Position> {
        self.neighbors4(position)
            .into_iter()
            .filter(|neighbor| self.occupant_at(*neighbor).is_some())
            .collect()
    }

    /// In-bounds tiles within Manhattan distance `radius` of `center`.
    ///
    /// The scan box is clamped to the map, so any radius is safe.
    pub fn tiles_in_radius(&self, center: Position, radius: u32) -> Vec<Position> {
        let r = i64::from(radius);
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let max_x = i64::from(self.dimensions.width) - 1;
        let max_y = i64::from(self.dimensions.height) - 1;

        let mut positions = Vec::new();
        for x in (cx - r).max(0)..=(cx + r).min(max_x) {
            for y in (cy - r).max(0)..=(cy + r).min(max_y) {
                if (x - cx).abs() + (y - cy).abs() <= r {
                    positions.push(Position::new(x as i32, y as i32));
                }
            }
        }
        positions
    }

    /// Replaces a tile's terrain. Returns `false` when out of bounds.
    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) -> bool {
        match self.tile_mut(position) {
            Some(tile) => {
                tile.set_terrain(terrain);
                true
            }
            None => false,
        }
    }

    /// Marks every tile as outside the view for the coming frame.
    pub fn clear_visibility(&mut self) {
        for tile in &mut self.tiles {
            tile.visible = false;
        }
    }

    /// Reveals the tiles around `center`: seen for good, visible this frame.
    pub fn reveal_around(&mut self, center: Position, radius: u32) {
        for position in self.tiles_in_radius(center, radius) {
            if let Some(tile) = self.tile_mut(position) {
                tile.seen = true;
                tile.visible = true;
            }
        }
    }

    /// Recomputes and returns the share of seen tiles, 0 to 100, truncated.
    pub fn refresh_seen_percentage(&mut self) -> u32 {
        let seen = self.tiles.iter().filter(|tile| tile.seen).count();
        let total = self.tiles.len();
        self.seen_percentage = if total == 0 {
            0
        } else {
            (seen * 100 / total) as u32
        };
        self.seen_percentage
    }

    /// Value of the last [`GridMap::refresh_seen_percentage`].
    pub fn seen_percentage(&self) -> u32 {
        self.seen_percentage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(width: u32, height: u32) -> GridMap {
        GridMap::filled(MapDimensions::new(width, height), TerrainKind::Grass)
    }

    #[test]
    fn out_of_range_lookups_return_none() {
        let map = open(3, 2);
        assert!(map.tile(Position::new(2, 1)).is_some());
        assert!(map.tile(Position::new(3, 0)).is_none());
        assert!(map.tile(Position::new(0, -1)).is_none());
    }

    #[test]
    fn corner_has_two_neighbors_in_fixed_order() {
        let map = open(3, 3);
        assert_eq!(
            map.neighbors4(Position::new(0, 0)),
            vec![Position::new(1, 0), Position::new(0, 1)]
        );
        assert_eq!(
            map.neighbors4(Position::new(1, 1)),
            vec![
                Position::new(2, 1),
                Position::new(1, 2),
                Position::new(0, 1),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn viable_neighbors_skip_solid_and_occupied_tiles() {
        let mut map = open(3, 3);
        map.set_terrain(Position::new(2, 1), TerrainKind::Stone);
        map.tile_mut(Position::new(1, 0))
            .unwrap()
            .set_occupant(EntityId(9));

        let viable = map.viable_neighbors(Position::new(1, 1));
        assert_eq!(viable, vec![Position::new(1, 2), Position::new(0, 1)]);
        assert_eq!(
            map.occupied_neighbors(Position::new(1, 1)),
            vec![Position::new(1, 0)]
        );
    }

    #[test]
    fn radius_uses_manhattan_distance() {
        let map = open(20, 16);
        let tiles = map.tiles_in_radius(Position::new(10, 8), 4);
        // 2r^2 + 2r + 1 cells in a full diamond
        assert_eq!(tiles.len(), 41);
        assert!(!tiles.contains(&Position::new(13, 10)));
        assert!(tiles.contains(&Position::new(12, 10)));

        let clipped = map.tiles_in_radius(Position::new(0, 0), 1);
        assert_eq!(clipped.len(), 3);
    }

    #[test]
    fn huge_radius_covers_the_whole_map() {
        let map = open(3, 3);
        let center = Position::new(1, 1);
        assert_eq!(map.tiles_in_radius(center, i32::MAX as u32).len(), 9);
        assert_eq!(map.tiles_in_radius(center, u32::MAX).len(), 9);
    }

    #[test]
    fn seen_is_permanent_and_visible_is_per_frame() {
        let mut map = open(10, 10);
        map.reveal_around(Position::new(0, 0), 1);
        assert_eq!(map.refresh_seen_percentage(), 3);

        map.clear_visibility();
        let tile = map.tile(Position::new(1, 0)).unwrap();
        assert!(tile.seen);
        assert!(!tile.visible);
        assert_eq!(map.seen_percentage(), 3);
    }

    #[test]
    fn terrain_length_must_match_dimensions() {
        let result = GridMap::from_terrain(MapDimensions::new(2, 2), vec![TerrainKind::Grass; 3]);
        assert_eq!(
            result.unwrap_err(),
            GridSizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }
}
