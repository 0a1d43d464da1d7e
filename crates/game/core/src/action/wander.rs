use crate::env::{RngOracle, compute_seed};
use crate::state::{EntityId, GridMap, Position};

/// Queued moves produced by a random walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkPlan {
    /// Every requested step found a viable neighbour.
    Complete(Vec<Position>),
    /// The walk hit a tile without viable neighbours. `planned` holds the
    /// steps chosen before that.
    Stuck {
        planned: Vec<Position>,
        at: Position,
    },
}

impl WalkPlan {
    pub fn moves(&self) -> &[Position] {
        match self {
            WalkPlan::Complete(moves) => moves,
            WalkPlan::Stuck { planned, .. } => planned,
        }
    }
}

/// Plans up to `steps` single-tile moves for `actor`, each a uniformly random
/// viable neighbour of the previous projected tile.
///
/// Occupancy is read as it is now; the walker's own tile is occupied, so the
/// first step never returns to it.
pub fn plan_random_walk(
    map: &GridMap,
    actor: EntityId,
    origin: Position,
    steps: u32,
    rng: &dyn RngOracle,
    session_seed: u64,
    nonce: u64,
) -> WalkPlan {
    let mut planned = Vec::with_capacity(steps as usize);
    let mut projected = origin;
    for step in 0..steps {
        let neighbors = map.viable_neighbors(projected);
        let seed = compute_seed(session_seed, nonce, actor.0, step);
        let Some(index) = rng.pick_index(seed, neighbors.len()) else {
            return WalkPlan::Stuck {
                planned,
                at: projected,
            };
        };
        projected = neighbors[index];
        planned.push(projected);
    }
    WalkPlan::Complete(planned)
}
