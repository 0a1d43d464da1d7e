//! Turn controller and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It runs
//! committed actions through the transition phases, rotates turns, drives
//! autonomous actors and advances the per-frame simulation.

mod errors;
mod frame;
mod input;
mod transition;
mod turns;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError, TurnError};
pub use input::{CommandOutcome, IgnoreReason, PlayerCommand};

use crate::action::{AttackAction, AttackOutcome, StepAction, StepOutcome};
use crate::env::GameEnv;
use crate::error::GameError;
use crate::pathfinding::find_path;
use crate::state::{CardinalDirection, DirectionError, EntityId, GameState, Position};

use transition::drive_transition;

/// Game engine that owns the rules for one borrowed [`GameState`].
///
/// All actor mutations flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    env: GameEnv<'a>,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState, env: GameEnv<'a>) -> Self {
        Self { state, env }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn env(&self) -> GameEnv<'a> {
        self.env
    }

    /// Steps `actor` one tile, reporting why a rejected step failed.
    ///
    /// The actor turns to face `direction` even when the step is rejected.
    pub fn execute_step(
        &mut self,
        actor: EntityId,
        direction: CardinalDirection,
    ) -> Result<StepOutcome, ExecuteError> {
        if let Some(mover) = self.state.entities.actor_mut(actor) {
            mover.motion.facing = direction;
        }
        let action = StepAction::new(actor, direction);
        drive_transition(&action, self.state, &self.env).map_err(ExecuteError::Step)
    }

    /// Boolean form of [`GameEngine::execute_step`]; rejections are logged.
    pub fn step(&mut self, actor: EntityId, direction: CardinalDirection) -> bool {
        match self.execute_step(actor, direction) {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!(
                    actor = %actor,
                    ?direction,
                    code = error.error_code(),
                    "step rejected: {error}"
                );
                false
            }
        }
    }

    /// Steps in a numbered direction (0 north, 1 west, 2 south, 3 east).
    ///
    /// Numbers outside `0..=3` are an invalid argument, not a failed move.
    pub fn step_index(&mut self, actor: EntityId, direction: u8) -> Result<bool, DirectionError> {
        let direction = CardinalDirection::try_from(direction)?;
        Ok(self.step(actor, direction))
    }

    /// Moves `actor` onto `target`, which must be a viable neighbour.
    ///
    /// Issues up to four independent single steps in the order south, east,
    /// north, west, each only when the target lies that way. Returns `true`
    /// when every issued step succeeded.
    pub fn move_to(&mut self, actor: EntityId, target: Position) -> bool {
        let Some(origin) = self.state.actor(actor).map(|mover| mover.position) else {
            tracing::debug!(actor = %actor, "move_to for unknown actor");
            return false;
        };
        if !self.state.map.viable_neighbors(origin).contains(&target) {
            tracing::debug!(actor = %actor, %origin, %target, "move_to target is not a viable neighbour");
            return false;
        }

        let mut moved = true;
        if origin.y < target.y {
            moved &= self.step(actor, CardinalDirection::South);
        }
        if origin.x < target.x {
            moved &= self.step(actor, CardinalDirection::East);
        }
        if origin.y > target.y {
            moved &= self.step(actor, CardinalDirection::North);
        }
        if origin.x > target.x {
            moved &= self.step(actor, CardinalDirection::West);
        }
        moved
    }

    /// `actor` hits `target` for the configured damage.
    pub fn attack(
        &mut self,
        actor: EntityId,
        target: EntityId,
    ) -> Result<AttackOutcome, ExecuteError> {
        let action = AttackAction::new(actor, target);
        drive_transition(&action, self.state, &self.env).map_err(ExecuteError::Attack)
    }

    /// Replaces the queued moves of `actor` with a path to `goal`.
    ///
    /// Returns the number of queued steps, or `None` when no path exists.
    pub fn queue_path(&mut self, actor: EntityId, goal: Position) -> Option<usize> {
        let start = self.state.actor(actor)?.position;
        let path = find_path(&self.state.map, start, goal)?;
        let steps = path.len();
        self.state.entities.actor_mut(actor)?.next_moves = path.into();
        tracing::debug!(actor = %actor, %goal, steps, "path queued");
        Some(steps)
    }

    /// Recomputes whether player input is accepted: the player holds the turn
    /// and no actor is mid-step.
    fn refresh_manual_gate(&mut self) {
        let player_turn = self.state.player().is_some_and(|player| player.my_turn);
        self.state.manual_movement_allowed = player_turn && !self.state.entities.any_moving();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{MapDimensions, PcgRng, TerrainKind};
    use crate::state::GridMap;

    fn session() -> (GameState, GameConfig) {
        let config = GameConfig::default();
        let map = GridMap::filled(MapDimensions::new(5, 5), TerrainKind::Grass);
        (GameState::new(map), config)
    }

    #[test]
    fn invalid_direction_is_an_argument_error() {
        let (mut state, config) = session();
        let player = state.add_player(Position::new(2, 2), &config).unwrap();
        let rng = PcgRng;
        let mut engine = GameEngine::new(&mut state, GameEnv::new(&config, &rng));

        assert_eq!(
            engine.step_index(player, 7),
            Err(DirectionError::OutOfRange(7))
        );
        assert_eq!(engine.step_index(player, 3), Ok(true));
        assert_eq!(engine.state().actor(player).unwrap().position, Position::new(3, 2));
    }

    #[test]
    fn rejected_step_still_turns_the_actor() {
        let (mut state, config) = session();
        state.map.set_terrain(Position::new(2, 1), TerrainKind::Stone);
        let player = state.add_player(Position::new(2, 2), &config).unwrap();
        let rng = PcgRng;
        let mut engine = GameEngine::new(&mut state, GameEnv::new(&config, &rng));

        assert!(!engine.step(player, CardinalDirection::North));
        let actor = engine.state().actor(player).unwrap();
        assert_eq!(actor.motion.facing, CardinalDirection::North);
        assert_eq!(actor.ap(), 6);
    }

    #[test]
    fn move_to_rejects_non_neighbours() {
        let (mut state, config) = session();
        let player = state.add_player(Position::new(0, 0), &config).unwrap();
        let rng = PcgRng;
        let mut engine = GameEngine::new(&mut state, GameEnv::new(&config, &rng));

        assert!(!engine.move_to(player, Position::new(2, 0)));
        assert!(!engine.move_to(player, Position::new(1, 1)));
        assert!(engine.move_to(player, Position::new(0, 1)));
        assert_eq!(engine.state().actor(player).unwrap().position, Position::new(0, 1));
    }

    #[test]
    fn queue_path_fills_next_moves() {
        let (mut state, config) = session();
        let player = state.add_player(Position::new(0, 0), &config).unwrap();
        let rng = PcgRng;
        let mut engine = GameEngine::new(&mut state, GameEnv::new(&config, &rng));

        assert_eq!(engine.queue_path(player, Position::new(2, 1)), Some(3));
        let queued = &engine.state().actor(player).unwrap().next_moves;
        assert_eq!(queued.back(), Some(&Position::new(2, 1)));
    }
}
