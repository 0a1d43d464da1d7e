use std::collections::VecDeque;

use super::EntityId;

/// Turn rotation and frame bookkeeping.
///
/// `rotation` holds every living actor exactly once. Right after a turn
/// advance the active actor sits at the tail, so the head is always the next
/// actor to play.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TurnState {
    pub rotation: VecDeque<EntityId>,
    /// Actor holding the turn.
    pub current_actor: Option<EntityId>,
    /// Random-walk counter, mixed into every walk seed.
    pub nonce: u64,
    /// Frames driven so far.
    pub frame: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops `id` from the rotation. Returns whether it was present.
    pub fn remove(&mut self, id: EntityId) -> bool {
        match self.rotation.iter().position(|entry| *entry == id) {
            Some(index) => {
                self.rotation.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.rotation.contains(&id)
    }
}
