//! Notifications produced while the session runs.
//!
//! The engine appends to [`EventLog`]; presentation layers drain it once per
//! frame and decide how to show each entry.

use std::fmt;

use super::{EntityId, Item, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    TurnStarted {
        actor: EntityId,
    },
    Moved {
        actor: EntityId,
        from: Position,
        to: Position,
    },
    ItemPickedUp {
        actor: EntityId,
        item: Item,
    },
    Attacked {
        attacker: EntityId,
        target: EntityId,
        damage: u32,
        remaining_hp: u32,
    },
    HazardDamage {
        actor: EntityId,
        position: Position,
        damage: u32,
    },
    Died {
        actor: EntityId,
        position: Position,
    },
    /// A random walk found no viable neighbour and forced the turn to pass.
    WanderAborted {
        actor: EntityId,
        position: Position,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::TurnStarted { actor } => write!(f, "turn of {actor}"),
            GameEvent::Moved { actor, from, to } => write!(f, "{actor} moved {from} -> {to}"),
            GameEvent::ItemPickedUp { item, .. } => write!(f, "+{item}"),
            GameEvent::Attacked {
                attacker,
                target,
                damage,
                remaining_hp,
            } => write!(
                f,
                "{attacker} hit {target} for {damage} ({remaining_hp} hp left)"
            ),
            GameEvent::HazardDamage {
                actor,
                position,
                damage,
            } => write!(f, "{actor} burns for {damage} at {position}"),
            GameEvent::Died { actor, position } => write!(f, "{actor} died at {position}"),
            GameEvent::WanderAborted { actor, position } => {
                write!(f, "{actor} is stuck at {position}")
            }
        }
    }
}

/// Append-only event buffer drained by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EventLog {
    pending: Vec<GameEvent>,
}

impl EventLog {
    pub fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    pub fn pending(&self) -> &[GameEvent] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
