//! One game session: state, configuration and randomness bundled together.
//!
//! Replaces process-wide singletons: everything a running game needs lives in
//! a [`GameSession`] and is dropped with it.

use crate::config::GameConfig;
use crate::engine::{GameEngine, TurnError};
use crate::env::{GameEnv, PcgRng};
use crate::state::{EntityId, GameEvent, GameState, GridMap};

#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    rng: PcgRng,
}

impl GameSession {
    pub fn new(config: GameConfig, map: GridMap) -> Self {
        Self {
            config,
            state: GameState::new(map),
            rng: PcgRng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for setup and map editing.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Engine borrowing this session's state and environment.
    pub fn engine(&mut self) -> GameEngine<'_> {
        GameEngine::new(&mut self.state, GameEnv::new(&self.config, &self.rng))
    }

    /// Hands the first turn out and reveals the player's surroundings.
    pub fn start(&mut self) -> Result<EntityId, TurnError> {
        let first = self.engine().advance_turn()?;
        self.state
            .reveal_player_surroundings(self.config.visibility_radius);
        tracing::info!(
            first = %first,
            actors = self.state.turn.rotation.len(),
            seen = self.state.map.seen_percentage(),
            "session started"
        );
        Ok(first)
    }

    /// Takes every event produced since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.events.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MapDimensions, TerrainKind};
    use crate::state::Position;

    #[test]
    fn start_with_unbounded_visibility_reveals_the_map() {
        for radius in [i32::MAX as u32, u32::MAX] {
            let config = GameConfig {
                visibility_radius: radius,
                ..GameConfig::default()
            };
            let map = GridMap::filled(MapDimensions::new(3, 3), TerrainKind::Grass);
            let mut session = GameSession::new(config.clone(), map);
            session
                .state_mut()
                .add_player(Position::new(1, 1), &config)
                .unwrap();

            session.start().unwrap();
            assert_eq!(session.state().map.seen_percentage(), 100);
        }
    }
}
