//! Item-related state types.
//!
//! Items lie on tiles until an actor steps onto them, then move into that
//! actor's [`super::InventoryState`].

use std::fmt;

/// A named pickup.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    /// Single character used by text renderers.
    pub glyph: char,
}

impl Item {
    pub fn new(name: impl Into<String>, glyph: char) -> Self {
        Self {
            name: name.into(),
            glyph,
        }
    }

    pub fn potion() -> Self {
        Self::new("Potion", 'i')
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
