use crate::config::GameConfig;

use super::{GameEngine, TurnError};

/// Per-frame simulation step.
impl<'a> GameEngine<'a> {
    /// Advances the session by one frame.
    ///
    /// Order: turn check, visibility reset and reveal, one queued move per
    /// idle actor, step animation, idle animation.
    pub fn update_frame(&mut self) -> Result<(), TurnError> {
        self.turn_logic()?;
        self.state.turn.frame += 1;

        self.state.map.clear_visibility();
        self.state
            .reveal_player_surroundings(self.env.config().visibility_radius);

        self.drain_queued_moves();
        self.animate();
        self.refresh_manual_gate();
        Ok(())
    }

    /// Executes the next queued move of every actor that is not mid-step.
    ///
    /// Actors are visited in column-major tile order as they stood when the
    /// pass began; an actor that moves is animating and would be skipped on
    /// a second visit anyway.
    fn drain_queued_moves(&mut self) {
        for id in self.state.map.occupants_by_column() {
            let next = match self.state.entities.actor_mut(id) {
                Some(actor) if !actor.is_moving() => actor.next_moves.pop_front(),
                _ => None,
            };
            if let Some(target) = next {
                self.move_to(id, target);
            }
        }
    }

    fn animate(&mut self) {
        let speed = self.env.config().move_speed;
        let tile_width = self.env.config().tile_width;
        let idle_tick = self.state.turn.frame % GameConfig::IDLE_ANIMATION_PERIOD == 0;
        for actor in self.state.entities.all_actors_mut() {
            actor.motion.advance(speed, tile_width);
            if idle_tick && actor.my_turn {
                actor.motion.tick_idle();
            }
        }
    }

    /// Drives frames until no actor is animating and no queued move is
    /// left for an autonomous actor, or `max_frames` elapse.
    ///
    /// Returns the number of frames driven.
    pub fn run_until_settled(&mut self, max_frames: u32) -> Result<u32, TurnError> {
        for frame in 0..max_frames {
            if self.is_settled() {
                return Ok(frame);
            }
            self.update_frame()?;
        }
        Ok(max_frames)
    }

    /// The player holds the turn and nothing is left to animate or drain.
    pub fn is_settled(&self) -> bool {
        let player_turn = self.state.player().is_some_and(|player| player.my_turn);
        let pending = self
            .state
            .entities
            .living_actors()
            .any(|actor| actor.is_moving() || !actor.next_moves.is_empty());
        player_turn && !pending
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::engine::GameEngine;
    use crate::env::{GameEnv, MapDimensions, PcgRng, TerrainKind};
    use crate::state::{GameState, GridMap, Position};

    #[test]
    fn queued_move_is_drained_and_animated() {
        let config = GameConfig::default();
        let rng = PcgRng;
        let mut state = GameState::new(GridMap::filled(
            MapDimensions::new(6, 6),
            TerrainKind::Grass,
        ));
        let player = state.add_player(Position::new(1, 1), &config).unwrap();
        let mut engine = GameEngine::new(&mut state, GameEnv::new(&config, &rng));
        engine.advance_turn().unwrap();

        assert_eq!(engine.queue_path(player, Position::new(3, 1)), Some(2));
        engine.update_frame().unwrap();
        let actor = engine.state().actor(player).unwrap();
        assert_eq!(actor.position, Position::new(2, 1));
        assert!(actor.is_moving());
        assert!(!engine.state().manual_movement_allowed);

        // Mid-step: the second queued move waits.
        engine.update_frame().unwrap();
        assert_eq!(
            engine.state().actor(player).unwrap().position,
            Position::new(2, 1)
        );

        let frames = engine.run_until_settled(100).unwrap();
        assert!(frames < 100);
        let actor = engine.state().actor(player).unwrap();
        assert_eq!(actor.position, Position::new(3, 1));
        assert_eq!(actor.ap(), 4);
        assert!(engine.state().manual_movement_allowed);
    }

    #[test]
    fn visibility_follows_the_player() {
        let config = GameConfig::default();
        let rng = PcgRng;
        let mut state = GameState::new(GridMap::filled(
            MapDimensions::new(20, 16),
            TerrainKind::Grass,
        ));
        state.add_player(Position::new(5, 5), &config).unwrap();
        let mut engine = GameEngine::new(&mut state, GameEnv::new(&config, &rng));
        engine.advance_turn().unwrap();
        engine.update_frame().unwrap();

        let map = &engine.state().map;
        assert!(map.tile(Position::new(9, 5)).unwrap().visible);
        assert!(!map.tile(Position::new(10, 5)).unwrap().visible);
        assert!(!map.tile(Position::new(10, 5)).unwrap().seen);
        // 41 of 320 tiles
        assert_eq!(map.seen_percentage(), 12);
    }
}
