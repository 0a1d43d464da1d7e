use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, GameEvent, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    #[error("attacker {0} not found")]
    AttackerNotFound(EntityId),

    #[error("target {0} not found")]
    TargetNotFound(EntityId),

    #[error("attacker {0} is dead")]
    AttackerDead(EntityId),

    #[error("target {0} is already dead")]
    TargetDead(EntityId),

    #[error("attacker {0} has no action points left")]
    NoActionPoints(EntityId),

    #[error("target {0} was killed but is still in play")]
    TargetNotRetired(EntityId),
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        use AttackError::*;
        match self {
            AttackerNotFound(_) | TargetNotFound(_) | AttackerDead(_) => ErrorSeverity::Validation,
            TargetDead(_) | NoActionPoints(_) => ErrorSeverity::Recoverable,
            TargetNotRetired(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use AttackError::*;
        match self {
            AttackerNotFound(_) => "ATTACK_ATTACKER_NOT_FOUND",
            TargetNotFound(_) => "ATTACK_TARGET_NOT_FOUND",
            AttackerDead(_) => "ATTACK_ATTACKER_DEAD",
            TargetDead(_) => "ATTACK_TARGET_DEAD",
            NoActionPoints(_) => "ATTACK_NO_ACTION_POINTS",
            TargetNotRetired(_) => "ATTACK_TARGET_NOT_RETIRED",
        }
    }
}

/// Fixed-damage hit on another actor.
///
/// Range is not checked here; callers only offer targets standing on an
/// occupied neighbour tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub actor: EntityId,
    pub target: EntityId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackOutcome {
    pub target: EntityId,
    pub damage: u32,
    pub remaining_hp: u32,
    pub killed: bool,
}

impl AttackAction {
    pub fn new(actor: EntityId, target: EntityId) -> Self {
        Self { actor, target }
    }
}

impl ActionTransition for AttackAction {
    type Error = AttackError;
    type Result = AttackOutcome;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let attacker = state
            .entities
            .actor(self.actor)
            .ok_or(AttackError::AttackerNotFound(self.actor))?;
        let target = state
            .entities
            .actor(self.target)
            .ok_or(AttackError::TargetNotFound(self.target))?;

        if !attacker.is_alive() {
            return Err(AttackError::AttackerDead(self.actor));
        }
        if !target.is_alive() {
            return Err(AttackError::TargetDead(self.target));
        }
        if attacker.ap() == 0 {
            return Err(AttackError::NoActionPoints(self.actor));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<AttackOutcome, AttackError> {
        let damage = env.config().attack_damage;
        let outcome = state
            .apply_damage(self.target, damage)
            .ok_or(AttackError::TargetDead(self.target))?;

        state
            .entities
            .actor_mut(self.actor)
            .ok_or(AttackError::AttackerNotFound(self.actor))?
            .spend_action_point();
        // After the kill, so a freed tile is already viable.
        state.refresh_movepool(self.actor);

        state.events.push(GameEvent::Attacked {
            attacker: self.actor,
            target: self.target,
            damage: outcome.dealt,
            remaining_hp: outcome.remaining_hp,
        });
        tracing::debug!(
            attacker = %self.actor,
            target = %self.target,
            damage = outcome.dealt,
            remaining_hp = outcome.remaining_hp,
            "attack landed"
        );

        Ok(AttackOutcome {
            target: self.target,
            damage: outcome.dealt,
            remaining_hp: outcome.remaining_hp,
            killed: outcome.killed,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let target = state
            .entities
            .actor(self.target)
            .ok_or(AttackError::TargetNotFound(self.target))?;
        if target.is_alive() {
            return Ok(());
        }
        let still_standing = state.map.occupant_at(target.position) == Some(self.target);
        if still_standing || state.turn.contains(self.target) || target.ap() != 0 {
            return Err(AttackError::TargetNotRetired(self.target));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{MapDimensions, PcgRng, TerrainKind};
    use crate::state::{GridMap, Position};

    #[test]
    fn attack_costs_one_point_and_deals_fixed_damage() {
        let config = GameConfig::default();
        let rng = PcgRng;
        let env = GameEnv::new(&config, &rng);
        let mut state = GameState::new(GridMap::filled(
            MapDimensions::new(3, 3),
            TerrainKind::Grass,
        ));
        let player = state.add_player(Position::new(0, 0), &config).unwrap();
        let target = state
            .add_creature(Position::new(1, 0), 'B', &config)
            .unwrap();

        let action = AttackAction::new(player, target);
        action.pre_validate(&state, &env).unwrap();
        let outcome = action.apply(&mut state, &env).unwrap();

        assert_eq!(outcome.damage, 5);
        assert_eq!(outcome.remaining_hp, 15);
        assert!(!outcome.killed);
        assert_eq!(state.actor(player).unwrap().ap(), 5);
    }
}
