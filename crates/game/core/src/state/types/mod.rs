pub mod actor;
pub mod common;
pub mod entities;
pub mod item;
pub mod tile;
pub mod turn;
pub mod world;

pub use actor::{ActorKind, ActorState, InventoryState, Motion};
pub use common::{CardinalDirection, DirectionError, EntityId, Position, ResourceMeter};
pub use entities::EntitiesState;
pub use item::Item;
pub use tile::{ItemSlots, Tile};
pub use turn::TurnState;
pub use world::{GridMap, GridSizeMismatch};
