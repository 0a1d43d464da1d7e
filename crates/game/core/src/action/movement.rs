use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{CardinalDirection, EntityId, GameEvent, GameState, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    #[error("actor {0} is dead")]
    ActorDead(EntityId),

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is blocked")]
    Blocked { destination: Position },

    #[error("destination {destination} is occupied by {occupant}")]
    Occupied {
        destination: Position,
        occupant: EntityId,
    },

    #[error("destination {destination} is not in the movepool of {actor}")]
    NotInMovepool {
        actor: EntityId,
        destination: Position,
    },

    #[error("actor {actor} missing from its tile at {position}")]
    MissingOccupant { actor: EntityId, position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        use MoveError::*;
        match self {
            ActorNotFound(_) | ActorDead(_) | OutOfBounds { .. } | Blocked { .. } => {
                ErrorSeverity::Validation
            }
            Occupied { .. } | NotInMovepool { .. } => ErrorSeverity::Recoverable,
            MissingOccupant { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use MoveError::*;
        match self {
            ActorNotFound(_) => "MOVE_ACTOR_NOT_FOUND",
            ActorDead(_) => "MOVE_ACTOR_DEAD",
            OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Blocked { .. } => "MOVE_BLOCKED",
            Occupied { .. } => "MOVE_OCCUPIED",
            NotInMovepool { .. } => "MOVE_NOT_IN_MOVEPOOL",
            MissingOccupant { .. } => "MOVE_MISSING_OCCUPANT",
        }
    }
}

/// Single-tile step in a cardinal direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepAction {
    pub actor: EntityId,
    pub direction: CardinalDirection,
}

/// What a committed step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub from: Position,
    pub to: Position,
    /// Items moved from the destination tile into the inventory.
    pub picked_up: usize,
}

impl StepAction {
    pub fn new(actor: EntityId, direction: CardinalDirection) -> Self {
        Self { actor, direction }
    }

    fn origin(&self, state: &GameState) -> Result<Position, MoveError> {
        state
            .entities
            .actor(self.actor)
            .map(|actor| actor.position)
            .ok_or(MoveError::ActorNotFound(self.actor))
    }
}

impl ActionTransition for StepAction {
    type Error = MoveError;
    type Result = StepOutcome;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let actor = state
            .entities
            .actor(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;
        if !actor.is_alive() {
            return Err(MoveError::ActorDead(self.actor));
        }

        let destination = self.direction.step_from(actor.position);
        let tile = state
            .map
            .tile(destination)
            .ok_or(MoveError::OutOfBounds { destination })?;
        if tile.is_solid() {
            return Err(MoveError::Blocked { destination });
        }
        if let Some(occupant) = tile.occupant() {
            return Err(MoveError::Occupied {
                destination,
                occupant,
            });
        }
        if !actor.movepool.contains(&destination) {
            return Err(MoveError::NotInMovepool {
                actor: self.actor,
                destination,
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<StepOutcome, MoveError> {
        let origin = self.origin(state)?;
        let destination = self.direction.step_from(origin);

        // Transfer occupancy
        if let Some(tile) = state.map.tile_mut(origin) {
            tile.release(self.actor);
        }
        let items = match state.map.tile_mut(destination) {
            Some(tile) => {
                tile.set_occupant(self.actor);
                tile.take_items()
            }
            None => return Err(MoveError::OutOfBounds { destination }),
        };

        let actor = state
            .entities
            .actor_mut(self.actor)
            .ok_or(MoveError::ActorNotFound(self.actor))?;
        actor.position = destination;
        actor.motion.begin_step(self.direction);
        actor.spend_action_point();
        let is_player = actor.is_player();
        let picked_up = items.len();
        for item in &items {
            actor.inventory.add(item.clone());
        }

        state.manual_movement_allowed = false;
        state.refresh_movepool(self.actor);
        state.events.push(GameEvent::Moved {
            actor: self.actor,
            from: origin,
            to: destination,
        });
        for item in items {
            tracing::debug!(actor = %self.actor, item = %item, "item picked up");
            state.events.push(GameEvent::ItemPickedUp {
                actor: self.actor,
                item,
            });
        }
        if is_player {
            state.reveal_player_surroundings(env.config().visibility_radius);
        }

        Ok(StepOutcome {
            from: origin,
            to: destination,
            picked_up,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let position = self.origin(state)?;
        if state.map.occupant_at(position) == Some(self.actor) {
            Ok(())
        } else {
            Err(MoveError::MissingOccupant {
                actor: self.actor,
                position,
            })
        }
    }
}
