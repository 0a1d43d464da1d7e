//! ASCII rendering of the board and event messages.

use std::fmt::Write as _;

use game_core::{AnimationKind, EntityId, GameEvent, GameState, Rgb, Tile};

/// Marks a tile in the player's movepool.
const REACHABLE: char = '*';
/// Tiles never seen.
const UNSEEN: char = ' ';

/// Frames per full brightness cycle of shiny terrain.
const SHINE_PERIOD: u64 = 60;
/// Frames between two jitter patterns of sparkly terrain.
const SPARKLE_INTERVAL: u64 = 10;

/// Status header followed by one line per map row.
///
/// With `color`, every seen tile is wrapped in a 24-bit ANSI foreground
/// colour taken from [`tile_color`].
pub fn render_frame(state: &GameState, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&render_header(state));
    out.push('\n');

    let highlight = state
        .player()
        .filter(|player| player.my_turn && player.is_alive());
    for row in state.map.rows() {
        for tile in row {
            let reachable = highlight.is_some_and(|player| player.movepool.contains(&tile.position()));
            let glyph = tile_glyph(state, tile, reachable);
            if color && tile.seen {
                let Rgb { red, green, blue } = tile_color(tile, state.turn.frame);
                let _ = write!(out, "\x1b[38;2;{red};{green};{blue}m{glyph}\x1b[0m");
            } else {
                out.push(glyph);
            }
        }
        out.push('\n');
    }
    out
}

pub fn render_header(state: &GameState) -> String {
    let mut header = String::new();
    if let Some(player) = state.player() {
        let _ = write!(
            header,
            "AP {}/{}  HP {}/{}  Items {}  ",
            player.ap(),
            player.ap_per_turn,
            player.health.current,
            player.health.maximum,
            player.inventory.len(),
        );
    }
    let _ = write!(header, "Map {}%", state.map.seen_percentage());
    if let Some(current) = state.current_actor() {
        let _ = write!(header, "  Turn: {}", current.name);
    }
    header
}

fn tile_glyph(state: &GameState, tile: &Tile, reachable: bool) -> char {
    if !tile.seen {
        return UNSEEN;
    }
    if tile.visible {
        if let Some(actor) = tile.occupant().and_then(|id| state.actor(id)) {
            return actor.glyph;
        }
        if let Some(item) = tile.items().first() {
            return item.glyph;
        }
        if reachable {
            return REACHABLE;
        }
    }
    tile.terrain().glyph()
}

/// Terrain colour of `tile` at `frame`, animated and dimmed outside the view.
pub fn tile_color(tile: &Tile, frame: u64) -> Rgb {
    let terrain = tile.terrain();
    let lift = match terrain.animation() {
        AnimationKind::None => 0,
        AnimationKind::Shiny => {
            let half = SHINE_PERIOD / 2;
            let phase = frame % SHINE_PERIOD;
            (half - phase.abs_diff(half)) as u8
        }
        AnimationKind::Sparkly => {
            let position = tile.position();
            let scatter = u64::from(position.x.unsigned_abs()) * 7
                + u64::from(position.y.unsigned_abs()) * 13;
            if (frame / SPARKLE_INTERVAL + scatter) % 3 == 0 {
                24
            } else {
                0
            }
        }
    };

    let base = terrain.base_color();
    let shade = |channel: u8| {
        let lit = channel.saturating_add(lift);
        if tile.visible { lit } else { lit / 2 }
    };
    Rgb::new(shade(base.red), shade(base.green), shade(base.blue))
}

/// One message line per event, with actor names resolved.
pub fn describe_event(state: &GameState, event: &GameEvent) -> String {
    let name = |id: EntityId| {
        state
            .actor(id)
            .map(|actor| actor.name.clone())
            .unwrap_or_else(|| id.to_string())
    };
    match event {
        GameEvent::TurnStarted { actor } => format!("{}'s turn", name(*actor)),
        GameEvent::Moved { actor, to, .. } => format!("{} moves to {}", name(*actor), to),
        GameEvent::ItemPickedUp { actor, item } => format!("{}: +{}", name(*actor), item),
        GameEvent::Attacked {
            attacker,
            target,
            damage,
            remaining_hp,
        } => format!(
            "{} hits {} for {} ({} hp left)",
            name(*attacker),
            name(*target),
            damage,
            remaining_hp
        ),
        GameEvent::HazardDamage { actor, damage, .. } => {
            format!("{} is burned for {}", name(*actor), damage)
        }
        GameEvent::Died { actor, .. } => format!("{} dies", name(*actor)),
        GameEvent::WanderAborted { actor, .. } => format!("{} is stuck", name(*actor)),
    }
}

#[cfg(test)]
mod tests {
    use game_core::{GameConfig, GridMap, Item, MapDimensions, Position, TerrainKind};

    use super::*;

    #[test]
    fn unseen_tiles_stay_blank() {
        let state = GameState::new(GridMap::filled(
            MapDimensions::new(3, 2),
            TerrainKind::Grass,
        ));
        let frame = render_frame(&state, false);
        let rows: Vec<_> = frame.lines().skip(1).collect();
        assert_eq!(rows, ["   ", "   "]);
    }

    #[test]
    fn visible_tiles_show_actors_items_and_reach() {
        let config = GameConfig::default();
        let mut state = GameState::new(GridMap::filled(
            MapDimensions::new(5, 1),
            TerrainKind::Grass,
        ));
        state.map.set_terrain(Position::new(4, 0), TerrainKind::Stone);
        state.place_item(Position::new(1, 0), Item::potion()).unwrap();
        let player = state.add_player(Position::new(0, 0), &config).unwrap();
        state.entities.actor_mut(player).unwrap().my_turn = true;
        state.reveal_player_surroundings(config.visibility_radius);

        let frame = render_frame(&state, false);
        assert_eq!(frame.lines().nth(1), Some("Pi**#"));
        assert!(frame.starts_with("AP 6/6  HP 20/20  Items 0  Map 100%"));
    }

    #[test]
    fn color_mode_paints_seen_tiles_with_terrain_colors() {
        let config = GameConfig::default();
        let mut state = GameState::new(GridMap::filled(
            MapDimensions::new(2, 1),
            TerrainKind::Grass,
        ));
        state.add_player(Position::new(0, 0), &config).unwrap();
        state.reveal_player_surroundings(config.visibility_radius);

        let frame = render_frame(&state, true);
        let grass = TerrainKind::Grass.base_color();
        assert!(frame.contains(&format!(
            "\x1b[38;2;{};{};{}m.\x1b[0m",
            grass.red, grass.green, grass.blue
        )));
    }

    #[test]
    fn animated_terrain_varies_over_frames() {
        let mut map = GridMap::filled(MapDimensions::new(2, 1), TerrainKind::Gold);
        map.set_terrain(Position::new(1, 0), TerrainKind::Water);
        map.reveal_around(Position::new(0, 0), 1);
        let gold = map.tile(Position::new(0, 0)).unwrap();
        let water = map.tile(Position::new(1, 0)).unwrap();

        assert_eq!(tile_color(gold, 0), TerrainKind::Gold.base_color());
        assert_ne!(tile_color(gold, 30), tile_color(gold, 0));

        let jitter: Vec<Rgb> = (0..3).map(|step| tile_color(water, step * 10)).collect();
        assert!(jitter.iter().any(|color| *color != TerrainKind::Water.base_color()));
        assert!(jitter.contains(&TerrainKind::Water.base_color()));

        let mut fogged = gold.clone();
        fogged.visible = false;
        assert_eq!(tile_color(&fogged, 0).red, TerrainKind::Gold.base_color().red / 2);
    }

    #[test]
    fn events_use_actor_names() {
        let config = GameConfig::default();
        let mut state = GameState::new(GridMap::filled(
            MapDimensions::new(3, 3),
            TerrainKind::Grass,
        ));
        let player = state.add_player(Position::new(0, 0), &config).unwrap();
        let creature = state
            .add_creature(Position::new(2, 2), 'B', &config)
            .unwrap();
        let event = GameEvent::Attacked {
            attacker: player,
            target: creature,
            damage: 5,
            remaining_hp: 15,
        };
        assert_eq!(
            describe_event(&state, &event),
            "Player hits Creature2 for 5 (15 hp left)"
        );
    }
}
