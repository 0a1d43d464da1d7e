//! Deterministic turn and movement rules for a tile-grid game.
//!
//! `game-core` defines the canonical rules (grid, actors, turn rotation,
//! pathfinding) and exposes pure APIs without any I/O. All state mutation
//! flows through [`engine::GameEngine`]; loaders and clients depend on the
//! types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod pathfinding;
pub mod session;
pub mod state;

pub use action::{
    ActionTransition, AttackAction, AttackError, AttackOutcome, MoveError, StepAction,
    StepOutcome, WalkPlan, compute_movepool, plan_random_walk,
};
pub use config::{ConfigError, GameConfig};
pub use engine::{
    CommandOutcome, ExecuteError, GameEngine, IgnoreReason, PlayerCommand, TransitionPhase,
    TransitionPhaseError, TurnError,
};
pub use env::{
    AnimationKind, GameEnv, MapDimensions, PcgRng, Rgb, RngOracle, TerrainKind, TileEvent,
    compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use pathfinding::find_path;
pub use session::GameSession;
pub use state::{
    ActorKind, ActorState, CardinalDirection, DamageOutcome, DirectionError, EntitiesState,
    EntityId, EventLog, GameEvent, GameState, GridMap, GridSizeMismatch, InventoryState, Item,
    Motion, Position, ResourceMeter, SetupError, Tile, TurnState,
};
