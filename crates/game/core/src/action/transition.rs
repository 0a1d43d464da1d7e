use crate::env::GameEnv;
use crate::state::{EntityId, GameState};

/// Defines how a concrete action mutates game state.
///
/// Implementors override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. The hooks
/// receive read-only access to the environment and must stay side-effect
/// free.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>)
    -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
