//! Player commands, already translated from raw keys and clicks.

use crate::action::AttackOutcome;
use crate::state::{CardinalDirection, EntityId, Position};

use super::{GameEngine, TurnError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerCommand {
    /// One of the four movement keys.
    Step(CardinalDirection),
    /// End-turn key or button.
    EndTurn,
    /// A tile clicked on the board.
    Click(Position),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Moved,
    Attacked(AttackOutcome),
    PathQueued { steps: usize },
    TurnEnded { next: EntityId },
    Ignored(IgnoreReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum IgnoreReason {
    /// No player, or another actor holds the turn.
    NotPlayersTurn,
    /// A step animation is still running.
    MovementLocked,
    /// The step was rejected by the movement rules.
    MoveRejected,
    /// The attack was rejected by the combat rules.
    AttackRejected,
    /// The clicked tile is neither an adjacent occupant nor in the movepool.
    OutOfReach,
    /// The clicked tile is in the movepool but no path leads there.
    NoPath,
}

impl<'a> GameEngine<'a> {
    /// Applies one player command.
    ///
    /// Rejections come back as [`CommandOutcome::Ignored`]; only a failing
    /// turn rotation is an error.
    pub fn handle_command(&mut self, command: PlayerCommand) -> Result<CommandOutcome, TurnError> {
        let Some(player) = self.state.player().filter(|player| player.my_turn) else {
            return Ok(CommandOutcome::Ignored(IgnoreReason::NotPlayersTurn));
        };
        let player_id = player.id;
        let player_position = player.position;

        let outcome = match command {
            PlayerCommand::Step(direction) => {
                if !self.state.manual_movement_allowed {
                    CommandOutcome::Ignored(IgnoreReason::MovementLocked)
                } else if self.step(player_id, direction) {
                    CommandOutcome::Moved
                } else {
                    CommandOutcome::Ignored(IgnoreReason::MoveRejected)
                }
            }
            PlayerCommand::EndTurn => {
                let next = self.advance_turn()?;
                CommandOutcome::TurnEnded { next }
            }
            PlayerCommand::Click(position) => {
                let reachable = self
                    .state
                    .actor(player_id)
                    .is_some_and(|player| player.movepool.contains(&position));
                let attackable = self
                    .state
                    .map
                    .occupied_neighbors(player_position)
                    .contains(&position);
                if attackable {
                    self.click_attack(player_id, position)
                } else if reachable {
                    match self.queue_path(player_id, position) {
                        Some(steps) => CommandOutcome::PathQueued { steps },
                        None => CommandOutcome::Ignored(IgnoreReason::NoPath),
                    }
                } else {
                    CommandOutcome::Ignored(IgnoreReason::OutOfReach)
                }
            }
        };
        Ok(outcome)
    }

    fn click_attack(&mut self, player: EntityId, position: Position) -> CommandOutcome {
        let Some(target) = self.state.map.occupant_at(position) else {
            return CommandOutcome::Ignored(IgnoreReason::OutOfReach);
        };
        match self.attack(player, target) {
            Ok(outcome) => CommandOutcome::Attacked(outcome),
            Err(error) => {
                tracing::debug!(%player, %target, "attack rejected: {error}");
                CommandOutcome::Ignored(IgnoreReason::AttackRejected)
            }
        }
    }
}
