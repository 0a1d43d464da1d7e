use game_content::{ContentFactory, MapFormatError, MapLoader, ScenarioLoader, parse_map};
use game_core::{GameConfig, GameState, GridMap, MapDimensions, Position, TerrainKind};

#[test]
fn two_by_two_map_marks_ones_as_solid() {
    let map = parse_map("0 1\n1 0").unwrap();
    assert_eq!(map.dimensions(), MapDimensions::new(2, 2));

    let solid = |x, y| map.tile(Position::new(x, y)).unwrap().is_solid();
    assert!(!solid(0, 0));
    assert!(solid(1, 0));
    assert!(solid(0, 1));
    assert!(!solid(1, 1));
}

#[test]
fn malformed_map_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    std::fs::write(&path, "0 1\n1 9\n").unwrap();

    let error = MapLoader::load(&path).unwrap_err();
    assert_eq!(
        error.downcast_ref::<MapFormatError>(),
        Some(&MapFormatError::UnknownTerrain {
            line: 2,
            column: 2,
            id: 9
        })
    );
    assert!(MapLoader::load(&dir.path().join("missing.txt")).is_err());
}

#[test]
fn saved_map_loads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let mut map = GridMap::filled(MapDimensions::new(4, 3), TerrainKind::Grass);
    map.set_terrain(Position::new(1, 2), TerrainKind::Water);
    map.set_terrain(Position::new(3, 0), TerrainKind::ShallowLava);

    let factory = ContentFactory::new(dir.path());
    let path = factory.save_map("edited", &map).unwrap();
    assert_eq!(path, dir.path().join("maps").join("edited.txt"));

    let loaded = factory.load_map("edited").unwrap();
    assert_eq!(loaded.dimensions(), map.dimensions());
    for (saved, read) in map.tiles().zip(loaded.tiles()) {
        assert_eq!(saved.terrain(), read.terrain());
    }
}

#[test]
fn map_names_cannot_leave_the_maps_directory() {
    let dir = tempfile::tempdir().unwrap();
    let map = GridMap::filled(MapDimensions::new(2, 2), TerrainKind::Grass);
    let factory = ContentFactory::new(dir.path().join("assets"));

    for name in ["../escaped", "nested/copy", "..\\escaped", "", ".."] {
        assert!(factory.save_map(name, &map).is_err(), "{name:?} accepted");
        assert!(factory.load_map(name).is_err());
    }
    assert!(!dir.path().join("escaped.txt").exists());
    assert!(!dir.path().join("assets/escaped.txt").exists());
    assert!(!dir.path().join("assets/maps/nested").exists());
}

#[test]
fn scenario_places_player_first_then_creatures() {
    let scenario = ScenarioLoader::parse(
        r#"(
            player: Some((x: 5, y: 5)),
            creatures: [
                (position: (x: 2, y: 2)),
                (position: (x: 2, y: 14)),
                (position: (x: 11, y: 2), glyph: 'G'),
            ],
            items: [(position: (x: 3, y: 3))],
        )"#,
    )
    .unwrap();

    let config = GameConfig::default();
    let mut state = GameState::new(GridMap::filled(config.map_dimensions(), TerrainKind::Grass));
    scenario.apply(&mut state, &config).unwrap();

    let player = state.player().unwrap();
    assert_eq!(player.name, "Player");
    assert_eq!(player.position, Position::new(5, 5));
    assert_eq!(state.turn.rotation.front(), Some(&player.id));

    let names: Vec<_> = state
        .entities
        .all_actors()
        .filter(|actor| !actor.is_player())
        .map(|actor| actor.name.as_str())
        .collect();
    assert_eq!(names, ["Creature2", "Creature3", "Creature4"]);
    assert_eq!(
        state.map.tile(Position::new(3, 3)).unwrap().items().len(),
        1
    );
}

#[test]
fn config_keys_default_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "attack_damage = 7\n").unwrap();

    let config = ContentFactory::new(dir.path()).load_config().unwrap();
    assert_eq!(config.attack_damage, 7);
    assert_eq!(config.hit_points, GameConfig::default().hit_points);
}
