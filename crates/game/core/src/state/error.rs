//! Placement errors raised while populating a session.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Errors that occur while spawning actors or dropping items.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    /// Position is outside the map bounds.
    #[error("position {position} is out of bounds (map size: {map_width}x{map_height})")]
    OutOfBounds {
        position: Position,
        map_width: u32,
        map_height: u32,
    },

    /// Terrain at the position cannot hold an actor.
    #[error("position {position} is solid terrain")]
    Blocked { position: Position },

    /// Position is already occupied by another actor.
    #[error("position {position} is already occupied by {occupant}")]
    Occupied {
        position: Position,
        occupant: EntityId,
    },

    /// The tile already holds the maximum number of items.
    #[error("tile {position} already holds {max} items")]
    ItemStackFull { position: Position, max: usize },

    /// A session has exactly one player.
    #[error("a player is already spawned as {existing}")]
    PlayerAlreadySpawned { existing: EntityId },
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use SetupError::*;
        match self {
            OutOfBounds { .. } => "SETUP_OUT_OF_BOUNDS",
            Blocked { .. } => "SETUP_BLOCKED",
            Occupied { .. } => "SETUP_OCCUPIED",
            ItemStackFull { .. } => "SETUP_ITEM_STACK_FULL",
            PlayerAlreadySpawned { .. } => "SETUP_PLAYER_ALREADY_SPAWNED",
        }
    }
}
