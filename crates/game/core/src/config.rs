use crate::env::MapDimensions;
use crate::error::{ErrorSeverity, GameError};

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    /// Edge length of one tile in pixels. A move animation is complete once
    /// the mover covered this distance.
    pub tile_width: u32,
    /// Pixels covered per frame by a moving actor.
    pub move_speed: u32,
    /// Manhattan radius around the player revealed every frame.
    pub visibility_radius: u32,
    /// Fixed damage dealt by one attack.
    pub attack_damage: u32,
    /// Maximum (and starting) hit points of a freshly spawned actor.
    pub hit_points: u32,
    /// Action points granted at the start of every turn.
    pub actions_per_turn: u32,
    /// Seed for autonomous random walks.
    pub rng_seed: u64,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Maximum number of items lying on one tile.
    pub const MAX_ITEMS_PER_TILE: usize = 4;
    /// Frames between two idle animation steps.
    pub const IDLE_ANIMATION_PERIOD: u64 = 30;
    /// Number of idle animation frames an actor cycles through.
    pub const IDLE_ANIMATION_FRAMES: u8 = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAP_WIDTH: u32 = 20;
    pub const DEFAULT_MAP_HEIGHT: u32 = 16;
    pub const DEFAULT_TILE_WIDTH: u32 = 32;
    pub const DEFAULT_MOVE_SPEED: u32 = 3;
    pub const DEFAULT_VISIBILITY_RADIUS: u32 = 4;
    pub const DEFAULT_ATTACK_DAMAGE: u32 = 5;
    pub const DEFAULT_HIT_POINTS: u32 = 20;
    pub const DEFAULT_ACTIONS_PER_TURN: u32 = 6;
    pub const DEFAULT_RNG_SEED: u64 = 0x5eed_71e5;

    pub fn new() -> Self {
        Self {
            map_width: Self::DEFAULT_MAP_WIDTH,
            map_height: Self::DEFAULT_MAP_HEIGHT,
            tile_width: Self::DEFAULT_TILE_WIDTH,
            move_speed: Self::DEFAULT_MOVE_SPEED,
            visibility_radius: Self::DEFAULT_VISIBILITY_RADIUS,
            attack_damage: Self::DEFAULT_ATTACK_DAMAGE,
            hit_points: Self::DEFAULT_HIT_POINTS,
            actions_per_turn: Self::DEFAULT_ACTIONS_PER_TURN,
            rng_seed: Self::DEFAULT_RNG_SEED,
        }
    }

    pub fn map_dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.map_width, self.map_height)
    }

    /// Largest useful visibility radius: one that reveals the whole map from
    /// any tile.
    pub fn max_visibility_radius(&self) -> u32 {
        self.map_width.saturating_add(self.map_height)
    }

    /// Rejects values the rules cannot run with.
    ///
    /// Zero hit points spawn dead actors and zero action points never let a
    /// turn pass; zero sizes or speeds never finish a step animation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("map_width", self.map_width),
            ("map_height", self.map_height),
            ("tile_width", self.tile_width),
            ("move_speed", self.move_speed),
            ("hit_points", self.hit_points),
            ("actions_per_turn", self.actions_per_turn),
        ];
        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::NotPositive { field });
            }
        }

        let max = self.max_visibility_radius();
        if self.visibility_radius > max {
            return Err(ConfigError::VisibilityRadiusTooLarge {
                radius: self.visibility_radius,
                max,
            });
        }
        Ok(())
    }
}

/// A configuration value outside what the rules accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be at least 1")]
    NotPositive { field: &'static str },

    #[error("visibility_radius {radius} exceeds the map span {max}")]
    VisibilityRadiusTooLarge { radius: u32, max: u32 },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::NotPositive { .. } => "CONFIG_NOT_POSITIVE",
            ConfigError::VisibilityRadiusTooLarge { .. } => "CONFIG_VISIBILITY_RADIUS",
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
