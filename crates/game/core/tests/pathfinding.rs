use game_core::{EntityId, GridMap, MapDimensions, Position, TerrainKind, find_path};

#[test]
fn one_step_path_on_open_ground() {
    let map = GridMap::filled(MapDimensions::new(4, 4), TerrainKind::Grass);
    let start = Position::new(1, 1);
    let goal = Position::new(2, 1);
    let path = find_path(&map, start, goal).unwrap();
    assert_eq!(path, vec![goal]);
    assert!(map.viable_neighbors(start).contains(&path[0]));
}

#[test]
fn occupied_goal_is_unreachable() {
    let mut map = GridMap::filled(MapDimensions::new(4, 4), TerrainKind::Grass);
    map.tile_mut(Position::new(3, 3))
        .unwrap()
        .set_occupant(EntityId(4));
    assert_eq!(find_path(&map, Position::new(0, 0), Position::new(3, 3)), None);
}

#[test]
fn goal_walled_in_by_solid_terrain_returns_none() {
    let mut map = GridMap::filled(MapDimensions::new(6, 6), TerrainKind::Grass);
    for x in 2..=4 {
        for y in 2..=4 {
            if (x, y) != (3, 3) {
                map.set_terrain(Position::new(x, y), TerrainKind::Gold);
            }
        }
    }
    assert_eq!(find_path(&map, Position::new(0, 0), Position::new(3, 3)), None);
}

#[test]
fn path_routes_around_an_occupant() {
    let mut map = GridMap::filled(MapDimensions::new(3, 3), TerrainKind::Grass);
    map.tile_mut(Position::new(1, 0))
        .unwrap()
        .set_occupant(EntityId(1));
    let path = find_path(&map, Position::new(0, 0), Position::new(2, 0)).unwrap();
    assert_eq!(path.len(), 4);
    assert!(!path.contains(&Position::new(1, 0)));
}
