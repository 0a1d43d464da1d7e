use crate::action::{WalkPlan, plan_random_walk};
use crate::env::TileEvent;
use crate::state::{EntityId, GameEvent};

use super::{GameEngine, TurnError};

/// Turn rotation methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Returns the actor holding the turn.
    pub fn current_actor(&self) -> Option<EntityId> {
        self.state.turn.current_actor
    }

    /// Ends the current turn and hands the turn to the head of the rotation.
    ///
    /// The rotation is shifted left before the new turn starts, so the new
    /// actor sits at the tail even if a hazard kills it while its turn starts.
    pub fn advance_turn(&mut self) -> Result<EntityId, TurnError> {
        if let Some(current) = self.state.turn.current_actor {
            self.end_turn(current);
        }
        let next = self
            .state
            .turn
            .rotation
            .front()
            .copied()
            .ok_or(TurnError::NoActiveActors)?;
        self.state.turn.rotation.rotate_left(1);
        self.start_turn(next);
        self.refresh_manual_gate();
        Ok(next)
    }

    /// Refills action points, takes the turn and fires the tile event.
    pub fn start_turn(&mut self, id: EntityId) {
        let Some(actor) = self.state.entities.actor_mut(id) else {
            return;
        };
        actor.reset_action_points();
        actor.my_turn = true;
        let position = actor.position;
        tracing::info!(actor = %id, name = %actor.name, %position, "turn started");

        self.state.turn.current_actor = Some(id);
        self.state.refresh_movepool(id);
        self.state.events.push(GameEvent::TurnStarted { actor: id });

        let event = self
            .state
            .map
            .tile(position)
            .map(|tile| tile.on_enter())
            .unwrap_or(TileEvent::None);
        match event {
            TileEvent::None => {}
            TileEvent::PeriodicDamage(amount) => {
                if let Some(outcome) = self.state.apply_damage(id, amount) {
                    self.state.events.push(GameEvent::HazardDamage {
                        actor: id,
                        position,
                        damage: outcome.dealt,
                    });
                    tracing::debug!(actor = %id, %position, damage = outcome.dealt, "hazard damage");
                }
            }
        }
    }

    /// Releases the turn and resets the idle animation.
    pub fn end_turn(&mut self, id: EntityId) {
        if let Some(actor) = self.state.entities.actor_mut(id) {
            actor.motion.reset_idle();
            actor.my_turn = false;
        }
    }

    /// Per-frame turn check.
    ///
    /// Advances the turn once the active actor is out of action points, lets
    /// an autonomous actor without queued moves plan a random walk, and then
    /// gates player input.
    pub fn turn_logic(&mut self) -> Result<(), TurnError> {
        let exhausted = self
            .state
            .current_actor()
            .is_none_or(|actor| actor.ap() == 0);
        if exhausted {
            self.advance_turn()?;
        }

        let idle_creature = self
            .state
            .current_actor()
            .filter(|actor| !actor.is_player() && actor.is_alive() && actor.next_moves.is_empty())
            .map(|actor| actor.id);
        if let Some(id) = idle_creature {
            self.random_turn(id)?;
        }

        self.refresh_manual_gate();
        Ok(())
    }

    /// Queues a random walk as long as the remaining action points.
    ///
    /// A walk that runs into a dead end keeps the steps planned so far and
    /// passes the turn on immediately.
    pub fn random_turn(&mut self, id: EntityId) -> Result<(), TurnError> {
        let Some(actor) = self.state.actor(id) else {
            return Ok(());
        };
        let origin = actor.position;
        let steps = actor.ap();
        let nonce = self.state.turn.nonce;
        self.state.turn.nonce += 1;

        let plan = plan_random_walk(
            &self.state.map,
            id,
            origin,
            steps,
            self.env.rng(),
            self.env.config().rng_seed,
            nonce,
        );
        if let Some(actor) = self.state.entities.actor_mut(id) {
            actor.next_moves.extend(plan.moves().iter().copied());
        }

        match plan {
            WalkPlan::Complete(moves) => {
                tracing::debug!(actor = %id, steps = moves.len(), "random walk planned");
                Ok(())
            }
            WalkPlan::Stuck { at, .. } => {
                tracing::warn!(actor = %id, position = %at, "random walk found no viable neighbour");
                self.state.events.push(GameEvent::WanderAborted {
                    actor: id,
                    position: at,
                });
                self.advance_turn().map(|_| ())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::engine::GameEngine;
    use crate::env::{GameEnv, MapDimensions, PcgRng, TerrainKind};
    use crate::state::{GameEvent, GameState, GridMap, Position};

    #[test]
    fn hazard_damages_at_turn_start() {
        let config = GameConfig::default();
        let rng = PcgRng;
        let mut state = GameState::new(GridMap::filled(
            MapDimensions::new(4, 4),
            TerrainKind::Grass,
        ));
        state.map.set_terrain(Position::new(1, 1), TerrainKind::ShallowLava);
        let player = state.add_player(Position::new(1, 1), &config).unwrap();
        let mut engine = GameEngine::new(&mut state, GameEnv::new(&config, &rng));

        assert_eq!(engine.advance_turn(), Ok(player));
        let actor = engine.state().actor(player).unwrap();
        assert_eq!(actor.health.current, 17);
        assert!(engine.state().events.pending().contains(&GameEvent::HazardDamage {
            actor: player,
            position: Position::new(1, 1),
            damage: 3,
        }));
    }

    #[test]
    fn empty_rotation_cannot_advance() {
        let config = GameConfig::default();
        let rng = PcgRng;
        let mut state = GameState::new(GridMap::filled(
            MapDimensions::new(2, 2),
            TerrainKind::Grass,
        ));
        let mut engine = GameEngine::new(&mut state, GameEnv::new(&config, &rng));
        assert_eq!(engine.advance_turn(), Err(super::TurnError::NoActiveActors));
    }

    #[test]
    fn stuck_creature_passes_the_turn() {
        let config = GameConfig::default();
        let rng = PcgRng;
        let mut state = GameState::new(GridMap::filled(
            MapDimensions::new(5, 5),
            TerrainKind::Stone,
        ));
        state.map.set_terrain(Position::new(1, 1), TerrainKind::Grass);
        state.map.set_terrain(Position::new(3, 3), TerrainKind::Grass);
        let creature = state
            .add_creature(Position::new(1, 1), 'B', &config)
            .unwrap();
        let player = state.add_player(Position::new(3, 3), &config).unwrap();
        let mut engine = GameEngine::new(&mut state, GameEnv::new(&config, &rng));

        assert_eq!(engine.advance_turn(), Ok(player));
        assert_eq!(engine.advance_turn(), Ok(creature));
        engine.turn_logic().unwrap();

        assert_eq!(engine.current_actor(), Some(player));
        assert!(engine.state().events.pending().contains(&GameEvent::WanderAborted {
            actor: creature,
            position: Position::new(1, 1),
        }));
    }
}
