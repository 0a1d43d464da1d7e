use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::{TerrainKind, TileEvent};

use super::{EntityId, Item, Position};

pub type ItemSlots = ArrayVec<Item, { GameConfig::MAX_ITEMS_PER_TILE }>;

/// One grid cell: fixed identity plus the runtime state layered on top.
///
/// The occupant is a plain id; the actor itself lives in
/// [`super::EntitiesState`] and is found by looking the id up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    position: Position,
    terrain: TerrainKind,
    /// Revealed at least once. Never reset.
    pub seen: bool,
    /// Inside the player's view during the current frame.
    pub visible: bool,
    occupant: Option<EntityId>,
    items: ItemSlots,
}

impl Tile {
    pub fn new(position: Position, terrain: TerrainKind) -> Self {
        Self {
            position,
            terrain,
            seen: false,
            visible: false,
            occupant: None,
            items: ItemSlots::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    pub fn is_solid(&self) -> bool {
        self.terrain.is_solid()
    }

    pub fn on_enter(&self) -> TileEvent {
        self.terrain.on_enter()
    }

    /// Replaces the terrain while keeping fog, occupant and items.
    pub fn set_terrain(&mut self, terrain: TerrainKind) {
        self.terrain = terrain;
    }

    pub fn occupant(&self) -> Option<EntityId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Can be entered right now: not solid and nobody standing on it.
    pub fn is_viable(&self) -> bool {
        !self.is_solid() && !self.is_occupied()
    }

    pub fn set_occupant(&mut self, occupant: EntityId) {
        self.occupant = Some(occupant);
    }

    /// Clears the occupant only if it is `occupant`. Returns whether it did.
    pub fn release(&mut self, occupant: EntityId) -> bool {
        if self.occupant == Some(occupant) {
            self.occupant = None;
            true
        } else {
            false
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Drops an item on the tile, handing it back when the tile is full.
    pub fn add_item(&mut self, item: Item) -> Result<(), Item> {
        self.items
            .try_push(item)
            .map_err(|error| error.element())
    }

    /// Removes every item in placement order.
    pub fn take_items(&mut self) -> Vec<Item> {
        self.items.drain(..).collect()
    }
}
