//! Actor state: identity, health, action points, queued moves and motion.

mod inventory;

pub use inventory::InventoryState;

use std::collections::{BTreeSet, VecDeque};

use crate::config::GameConfig;

use super::{CardinalDirection, EntityId, Position, ResourceMeter};

/// Whether an actor is steered by input or by its own random walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActorKind {
    Player,
    Creature,
}

/// Animation bookkeeping. Affects when a move counts as finished, nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    /// A committed step is still being animated.
    pub moving: bool,
    /// Pixels covered since the current step started.
    pub progress: u32,
    /// Direction of the last attempted step.
    pub facing: CardinalDirection,
    /// Idle animation phase in `0..=2`.
    pub animation_offset: u8,
    animation_forwards: bool,
}

impl Motion {
    pub fn new() -> Self {
        Self {
            moving: false,
            progress: 0,
            facing: CardinalDirection::South,
            animation_offset: 1,
            animation_forwards: true,
        }
    }

    /// Starts animating a step just committed in `facing`.
    pub fn begin_step(&mut self, facing: CardinalDirection) {
        self.moving = true;
        self.progress = 0;
        self.facing = facing;
    }

    /// Advances the step animation. Returns `true` when the step just finished.
    pub fn advance(&mut self, speed: u32, tile_width: u32) -> bool {
        if !self.moving {
            return false;
        }
        self.progress = self.progress.saturating_add(speed);
        if self.progress >= tile_width {
            self.moving = false;
            self.progress = 0;
            return true;
        }
        false
    }

    /// Steps the idle animation back and forth between its extreme phases.
    pub fn tick_idle(&mut self) {
        if self.animation_forwards {
            self.animation_offset += 1;
        } else {
            self.animation_offset = self.animation_offset.saturating_sub(1);
        }
        if self.animation_offset == 0 || self.animation_offset == GameConfig::IDLE_ANIMATION_FRAMES
        {
            self.animation_forwards = !self.animation_forwards;
        }
    }

    pub fn reset_idle(&mut self) {
        self.animation_offset = 1;
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete actor state.
///
/// # Invariants
///
/// - `ap` never drops below zero
/// - a dead actor (`health.current == 0`) has `ap == 0` and occupies no tile
/// - `movepool` never contains `position`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub kind: ActorKind,
    pub glyph: char,
    pub health: ResourceMeter,
    pub position: Position,
    pub ap_per_turn: u32,
    ap: u32,
    /// Holds the turn right now.
    pub my_turn: bool,
    /// Target tiles consumed one per frame by the frame driver.
    pub next_moves: VecDeque<Position>,
    /// Cached reachable set for the current `ap`.
    pub movepool: BTreeSet<Position>,
    pub inventory: InventoryState,
    pub motion: Motion,
}

impl ActorState {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        kind: ActorKind,
        glyph: char,
        position: Position,
        config: &GameConfig,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            glyph,
            health: ResourceMeter::full(config.hit_points),
            position,
            ap_per_turn: config.actions_per_turn,
            ap: config.actions_per_turn,
            my_turn: false,
            next_moves: VecDeque::new(),
            movepool: BTreeSet::new(),
            inventory: InventoryState::empty(),
            motion: Motion::new(),
        }
    }

    pub fn ap(&self) -> u32 {
        self.ap
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_empty()
    }

    pub fn is_player(&self) -> bool {
        self.kind == ActorKind::Player
    }

    pub fn is_moving(&self) -> bool {
        self.motion.moving
    }

    pub fn reset_action_points(&mut self) {
        self.ap = self.ap_per_turn;
    }

    pub fn clear_action_points(&mut self) {
        self.ap = 0;
    }

    /// Spends one action point.
    ///
    /// Spending with none left is an internal error: it trips a debug
    /// assertion and is logged and ignored in release builds.
    pub fn spend_action_point(&mut self) {
        debug_assert!(self.ap > 0, "{} spent an action point it did not have", self.name);
        if self.ap == 0 {
            tracing::error!(actor = %self.id, name = %self.name, "negative action points prevented");
            return;
        }
        self.ap -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature() -> ActorState {
        ActorState::new(
            EntityId(1),
            "Creature2",
            ActorKind::Creature,
            'B',
            Position::new(2, 2),
            &GameConfig::default(),
        )
    }

    #[test]
    fn spawns_with_full_health_and_budget() {
        let actor = creature();
        assert_eq!(actor.health, ResourceMeter::full(20));
        assert_eq!(actor.ap(), 6);
        assert!(actor.movepool.is_empty());
    }

    #[test]
    fn step_animation_completes_after_one_tile_width() {
        let mut motion = Motion::new();
        motion.begin_step(CardinalDirection::East);
        let finished: Vec<bool> = (0..11).map(|_| motion.advance(3, 32)).collect();
        assert!(finished[..10].iter().all(|done| !done));
        assert!(finished[10]);
        assert!(!motion.moving);
    }

    #[test]
    fn idle_animation_ping_pongs() {
        let mut motion = Motion::new();
        let offsets: Vec<u8> = (0..5)
            .map(|_| {
                motion.tick_idle();
                motion.animation_offset
            })
            .collect();
        assert_eq!(offsets, vec![2, 1, 0, 1, 2]);
    }
}
