//! Read-only collaborators of the engine.
//!
//! The terrain catalogue is static data; the [`GameEnv`] aggregate bundles the
//! session configuration with the randomness source so actions and the
//! engine never reach for global state.
mod map;
mod rng;

pub use map::{AnimationKind, MapDimensions, Rgb, TerrainKind, TileEvent};
pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::config::GameConfig;

/// Aggregates the read-only inputs required by the action pipeline.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a dyn RngOracle) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }
}

impl std::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
