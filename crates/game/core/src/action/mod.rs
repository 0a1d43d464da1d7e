//! Actor actions and the rules that decide them.
//!
//! Committed actions (`StepAction`, `AttackAction`) implement
//! [`ActionTransition`] and run through the engine's three-phase pipeline.
//! The planning helpers (`compute_movepool`, `plan_random_walk`) are pure
//! functions over the grid.

mod combat;
mod movement;
mod movepool;
mod transition;
mod wander;

pub use combat::{AttackAction, AttackError, AttackOutcome};
pub use movement::{MoveError, StepAction, StepOutcome};
pub use movepool::compute_movepool;
pub use transition::ActionTransition;
pub use wander::{WalkPlan, plan_random_walk};
