//! Inventory carried by an actor.

use crate::state::types::Item;

/// Ordered, unbounded list of picked-up items.
///
/// Pickups are never capacity-checked; only tiles limit how many items can
/// lie in one place.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct InventoryState {
    items: Vec<Item>,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
