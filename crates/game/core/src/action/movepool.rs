use std::collections::BTreeSet;

use crate::state::{GridMap, Position};

/// Tiles an actor at `origin` with `ap` action points is offered to move to.
///
/// Starts from the viable neighbours of `origin` and, for `ap - 1` further
/// rounds, unions in the viable neighbours of every tile already collected.
/// `origin` itself is never part of the result.
///
/// This is a breadth union without per-tile costs. Occupancy is read as it is
/// now, so the pool is a snapshot that later movement can invalidate.
pub fn compute_movepool(map: &GridMap, origin: Position, ap: u32) -> BTreeSet<Position> {
    if ap == 0 {
        return BTreeSet::new();
    }

    let mut movepool: BTreeSet<Position> = map.viable_neighbors(origin).into_iter().collect();
    for _ in 1..ap {
        let frontier: Vec<Position> = movepool
            .iter()
            .flat_map(|tile| map.viable_neighbors(*tile))
            .collect();
        movepool.extend(frontier);
    }
    movepool.remove(&origin);
    movepool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapDimensions, TerrainKind};
    use crate::state::EntityId;

    fn open(width: u32, height: u32) -> GridMap {
        GridMap::filled(MapDimensions::new(width, height), TerrainKind::Grass)
    }

    #[test]
    fn no_action_points_means_no_movepool() {
        let map = open(3, 3);
        assert!(compute_movepool(&map, Position::new(1, 1), 0).is_empty());
    }

    #[test]
    fn one_action_point_reaches_viable_neighbors() {
        let mut map = open(3, 3);
        map.set_terrain(Position::new(1, 0), TerrainKind::Gold);
        let pool = compute_movepool(&map, Position::new(1, 1), 1);
        let expected: BTreeSet<Position> = [
            Position::new(2, 1),
            Position::new(1, 2),
            Position::new(0, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(pool, expected);
    }

    #[test]
    fn movepool_grows_with_action_points() {
        let mut map = open(6, 6);
        map.set_terrain(Position::new(2, 3), TerrainKind::Stone);
        map.tile_mut(Position::new(4, 2))
            .unwrap()
            .set_occupant(EntityId(5));
        let origin = Position::new(2, 2);
        map.tile_mut(origin).unwrap().set_occupant(EntityId(0));

        let mut previous = compute_movepool(&map, origin, 0);
        for ap in 1..6 {
            let pool = compute_movepool(&map, origin, ap);
            assert!(pool.is_superset(&previous), "ap {ap}");
            assert!(!pool.contains(&origin));
            assert!(pool.iter().all(|tile| map.is_viable(*tile)));
            previous = pool;
        }
    }
}
