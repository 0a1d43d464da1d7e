//! Authoritative game state representation.
//!
//! This module owns the grid, the actors, the turn rotation and the event log.
//! Clients read it freely but mutate it through the engine.
mod error;
mod event;
pub mod types;

pub use error::SetupError;
pub use event::{EventLog, GameEvent};
pub use types::{
    ActorKind, ActorState, CardinalDirection, DirectionError, EntitiesState, EntityId, GridMap,
    GridSizeMismatch, InventoryState, Item, ItemSlots, Motion, Position, ResourceMeter, Tile,
    TurnState,
};

use crate::action::compute_movepool;
use crate::config::GameConfig;

/// Result of damaging an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Hit points actually removed.
    pub dealt: u32,
    pub remaining_hp: u32,
    /// This damage brought the actor to zero.
    pub killed: bool,
}

/// Canonical state of one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub map: GridMap,
    pub entities: EntitiesState,
    pub turn: TurnState,
    pub events: EventLog,
    /// Player input is accepted: it is the player's turn and nothing animates.
    pub manual_movement_allowed: bool,
}

impl GameState {
    /// Creates a session on `map` with no actors.
    pub fn new(map: GridMap) -> Self {
        Self {
            map,
            entities: EntitiesState::empty(),
            turn: TurnState::new(),
            events: EventLog::default(),
            manual_movement_allowed: true,
        }
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.entities.actor(id)
    }

    pub fn current_actor(&self) -> Option<&ActorState> {
        self.turn.current_actor.and_then(|id| self.entities.actor(id))
    }

    pub fn player(&self) -> Option<&ActorState> {
        self.entities.player()
    }

    /// Adds the player and puts it at the head of the rotation.
    pub fn add_player(
        &mut self,
        position: Position,
        config: &GameConfig,
    ) -> Result<EntityId, SetupError> {
        if let Some(existing) = self.entities.player_id() {
            return Err(SetupError::PlayerAlreadySpawned { existing });
        }
        let id = self.spawn(ActorKind::Player, 'P', position, config)?;
        self.turn.rotation.push_front(id);
        Ok(id)
    }

    /// Adds an autonomous creature at the tail of the rotation.
    pub fn add_creature(
        &mut self,
        position: Position,
        glyph: char,
        config: &GameConfig,
    ) -> Result<EntityId, SetupError> {
        let id = self.spawn(ActorKind::Creature, glyph, position, config)?;
        self.turn.rotation.push_back(id);
        Ok(id)
    }

    fn spawn(
        &mut self,
        kind: ActorKind,
        glyph: char,
        position: Position,
        config: &GameConfig,
    ) -> Result<EntityId, SetupError> {
        self.check_standable(position)?;
        let id = self.entities.allocate_id();
        let name = EntitiesState::default_name(kind, id);
        let actor = ActorState::new(id, name, kind, glyph, position, config);
        if let Some(tile) = self.map.tile_mut(position) {
            tile.set_occupant(id);
        }
        self.entities.insert(actor);
        self.refresh_movepool(id);
        tracing::debug!(actor = %id, %position, %kind, "actor spawned");
        Ok(id)
    }

    fn check_standable(&self, position: Position) -> Result<(), SetupError> {
        let tile = self.map.tile(position).ok_or_else(|| {
            let dimensions = self.map.dimensions();
            SetupError::OutOfBounds {
                position,
                map_width: dimensions.width,
                map_height: dimensions.height,
            }
        })?;
        if tile.is_solid() {
            return Err(SetupError::Blocked { position });
        }
        if let Some(occupant) = tile.occupant() {
            return Err(SetupError::Occupied { position, occupant });
        }
        Ok(())
    }

    /// Drops an item on a tile.
    pub fn place_item(&mut self, position: Position, item: Item) -> Result<(), SetupError> {
        let dimensions = self.map.dimensions();
        let tile = self
            .map
            .tile_mut(position)
            .ok_or(SetupError::OutOfBounds {
                position,
                map_width: dimensions.width,
                map_height: dimensions.height,
            })?;
        tile.add_item(item).map_err(|_| SetupError::ItemStackFull {
            position,
            max: GameConfig::MAX_ITEMS_PER_TILE,
        })
    }

    /// Recomputes the cached movepool of `id` from its current action points.
    pub fn refresh_movepool(&mut self, id: EntityId) {
        let Some(actor) = self.entities.actor(id) else {
            return;
        };
        let movepool = compute_movepool(&self.map, actor.position, actor.ap());
        if let Some(actor) = self.entities.actor_mut(id) {
            actor.movepool = movepool;
        }
    }

    /// Reveals the player's surroundings and refreshes the seen percentage.
    pub fn reveal_player_surroundings(&mut self, radius: u32) {
        if let Some(position) = self.player().map(|player| player.position) {
            self.map.reveal_around(position, radius);
        }
        self.map.refresh_seen_percentage();
    }

    /// Removes up to `amount` hit points. Lethal damage retires the actor.
    ///
    /// Returns `None` for unknown or already dead actors.
    pub fn apply_damage(&mut self, id: EntityId, amount: u32) -> Option<DamageOutcome> {
        let actor = self.entities.actor_mut(id)?;
        if !actor.is_alive() {
            return None;
        }
        let dealt = actor.health.deplete(amount);
        let remaining_hp = actor.health.current;
        let killed = remaining_hp == 0;
        if killed {
            self.retire_actor(id);
        }
        Some(DamageOutcome {
            dealt,
            remaining_hp,
            killed,
        })
    }

    /// Takes a dead actor out of play: out of the rotation, no action points,
    /// off its tile, no queued moves.
    fn retire_actor(&mut self, id: EntityId) {
        let Some(actor) = self.entities.actor_mut(id) else {
            return;
        };
        actor.clear_action_points();
        actor.next_moves.clear();
        actor.movepool.clear();
        let position = actor.position;
        let name = actor.name.clone();

        self.turn.remove(id);
        if let Some(tile) = self.map.tile_mut(position) {
            tile.release(id);
        }
        self.events.push(GameEvent::Died {
            actor: id,
            position,
        });
        tracing::info!(actor = %id, %name, %position, "actor died");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapDimensions, TerrainKind};

    fn state() -> (GameState, GameConfig) {
        let config = GameConfig::default();
        let map = GridMap::filled(MapDimensions::new(5, 5), TerrainKind::Grass);
        (GameState::new(map), config)
    }

    #[test]
    fn player_goes_to_the_head_of_the_rotation() {
        let (mut state, config) = state();
        let creature = state
            .add_creature(Position::new(0, 0), 'B', &config)
            .unwrap();
        let player = state.add_player(Position::new(2, 2), &config).unwrap();
        assert_eq!(
            state.turn.rotation.iter().copied().collect::<Vec<_>>(),
            vec![player, creature]
        );
        assert_eq!(state.map.occupant_at(Position::new(2, 2)), Some(player));
        assert_eq!(state.actor(creature).unwrap().name, "Creature1");
    }

    #[test]
    fn spawning_rejects_bad_tiles() {
        let (mut state, config) = state();
        state.map.set_terrain(Position::new(1, 1), TerrainKind::Water);
        state.add_player(Position::new(0, 0), &config).unwrap();

        assert!(matches!(
            state.add_creature(Position::new(1, 1), 'B', &config),
            Err(SetupError::Blocked { .. })
        ));
        assert!(matches!(
            state.add_creature(Position::new(0, 0), 'B', &config),
            Err(SetupError::Occupied { .. })
        ));
        assert!(matches!(
            state.add_creature(Position::new(9, 0), 'B', &config),
            Err(SetupError::OutOfBounds { .. })
        ));
        assert!(matches!(
            state.add_player(Position::new(3, 3), &config),
            Err(SetupError::PlayerAlreadySpawned { .. })
        ));
    }

    #[test]
    fn fifth_item_on_a_tile_is_rejected() {
        let (mut state, _) = state();
        let position = Position::new(3, 3);
        for _ in 0..4 {
            state.place_item(position, Item::potion()).unwrap();
        }
        assert_eq!(
            state.place_item(position, Item::potion()),
            Err(SetupError::ItemStackFull { position, max: 4 })
        );
    }

    #[test]
    fn lethal_damage_retires_exactly_once() {
        let (mut state, config) = state();
        let id = state
            .add_creature(Position::new(1, 1), 'B', &config)
            .unwrap();

        let outcome = state.apply_damage(id, 25).unwrap();
        assert!(outcome.killed);
        assert_eq!(outcome.dealt, 20);
        assert!(!state.turn.contains(id));
        assert_eq!(state.map.occupant_at(Position::new(1, 1)), None);
        assert_eq!(state.actor(id).unwrap().ap(), 0);

        assert_eq!(state.apply_damage(id, 5), None);
        let deaths = state
            .events
            .pending()
            .iter()
            .filter(|event| matches!(event, GameEvent::Died { .. }))
            .count();
        assert_eq!(deaths, 1);
    }
}
