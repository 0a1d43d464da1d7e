//! Scenario loader.
//!
//! A scenario places the player, creatures and floor items on a map that was
//! loaded separately.

use std::path::Path;

use game_core::{GameConfig, GameState, Item, Position, SetupError};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Initial population of a map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub player: Option<Position>,
    pub creatures: Vec<CreatureSpec>,
    pub items: Vec<ItemSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureSpec {
    pub position: Position,
    #[serde(default = "CreatureSpec::default_glyph")]
    pub glyph: char,
}

impl CreatureSpec {
    fn default_glyph() -> char {
        'B'
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub position: Position,
    #[serde(default = "Item::potion")]
    pub item: Item,
}

impl Scenario {
    /// Places items, then the player, then creatures in listed order.
    ///
    /// The player therefore receives the first entity id and heads the turn
    /// rotation; creatures follow in file order.
    pub fn apply(&self, state: &mut GameState, config: &GameConfig) -> Result<(), SetupError> {
        for spec in &self.items {
            state.place_item(spec.position, spec.item.clone())?;
        }
        if let Some(position) = self.player {
            state.add_player(position, config)?;
        }
        for spec in &self.creatures {
            state.add_creature(spec.position, spec.glyph, config)?;
        }
        tracing::info!(
            player = self.player.is_some(),
            creatures = self.creatures.len(),
            items = self.items.len(),
            "scenario applied"
        );
        Ok(())
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use game_core::{GridMap, MapDimensions, TerrainKind};

    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let scenario = ScenarioLoader::parse(
            "(player: Some((x: 1, y: 1)), creatures: [(position: (x: 2, y: 2))], items: [(position: (x: 0, y: 0))])",
        )
        .unwrap();
        assert_eq!(scenario.creatures[0].glyph, 'B');
        assert_eq!(scenario.items[0].item, Item::potion());
    }

    #[test]
    fn blocked_spawn_is_rejected() {
        let config = GameConfig::default();
        let mut state = GameState::new(GridMap::filled(
            MapDimensions::new(3, 3),
            TerrainKind::Grass,
        ));
        state.map.set_terrain(Position::new(1, 1), TerrainKind::Stone);
        let scenario = Scenario {
            player: Some(Position::new(1, 1)),
            ..Scenario::default()
        };
        assert_eq!(
            scenario.apply(&mut state, &config),
            Err(SetupError::Blocked {
                position: Position::new(1, 1)
            })
        );
    }
}
