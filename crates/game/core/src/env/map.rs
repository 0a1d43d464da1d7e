//! Static terrain catalogue and map dimensions.
//!
//! Terrain attributes are fixed per kind: a tile's kind decides whether it is
//! solid, how the renderer animates it and which event fires when an actor
//! starts a turn on it. Runtime state (occupancy, items, fog) lives in
//! [`crate::state::Tile`].

use crate::state::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Canonical terrain classes, keyed by the numeric id used in map files.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Grass,
    Stone,
    Water,
    Lava,
    ShallowWater,
    ShallowLava,
    Gold,
    Carpet,
}

impl TerrainKind {
    /// Highest id accepted by [`TerrainKind::from_id`].
    pub const MAX_ID: u8 = 7;

    /// Damage dealt by shallow lava to an actor starting its turn on it.
    pub const SHALLOW_LAVA_DAMAGE: u32 = 3;

    pub const fn from_id(id: u8) -> Option<Self> {
        Some(match id {
            0 => Self::Grass,
            1 => Self::Stone,
            2 => Self::Water,
            3 => Self::Lava,
            4 => Self::ShallowWater,
            5 => Self::ShallowLava,
            6 => Self::Gold,
            7 => Self::Carpet,
            _ => return None,
        })
    }

    pub const fn id(self) -> u8 {
        match self {
            Self::Grass => 0,
            Self::Stone => 1,
            Self::Water => 2,
            Self::Lava => 3,
            Self::ShallowWater => 4,
            Self::ShallowLava => 5,
            Self::Gold => 6,
            Self::Carpet => 7,
        }
    }

    pub const fn is_solid(self) -> bool {
        matches!(self, Self::Stone | Self::Water | Self::Lava | Self::Gold)
    }

    pub const fn animation(self) -> AnimationKind {
        match self {
            Self::Water | Self::Lava | Self::ShallowWater | Self::ShallowLava => {
                AnimationKind::Sparkly
            }
            Self::Gold => AnimationKind::Shiny,
            Self::Grass | Self::Stone | Self::Carpet => AnimationKind::None,
        }
    }

    pub const fn on_enter(self) -> TileEvent {
        match self {
            Self::ShallowLava => TileEvent::PeriodicDamage(Self::SHALLOW_LAVA_DAMAGE),
            _ => TileEvent::None,
        }
    }

    /// Character used by text renderers.
    pub const fn glyph(self) -> char {
        match self {
            Self::Grass => '.',
            Self::Stone => '#',
            Self::Water => '~',
            Self::Lava => '^',
            Self::ShallowWater => ',',
            Self::ShallowLava => ';',
            Self::Gold => '$',
            Self::Carpet => '=',
        }
    }

    /// Base colour handed to the rendering collaborator.
    pub const fn base_color(self) -> Rgb {
        match self {
            Self::Grass => Rgb::new(0x34, 0xa8, 0x70),
            Self::Stone => Rgb::new(0x6d, 0x70, 0x78),
            Self::Water => Rgb::new(0x1f, 0x50, 0xcc),
            Self::Lava => Rgb::new(0xf5, 0x20, 0x25),
            Self::ShallowWater => Rgb::new(0x40, 0x7c, 0xff),
            Self::ShallowLava => Rgb::new(0xcc, 0x7a, 0x47),
            Self::Gold => Rgb::new(0xf2, 0xa5, 0x3f),
            Self::Carpet => Rgb::new(0xa6, 0x3a, 0x3a),
        }
    }
}

/// How the renderer varies a tile's colour over time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    None,
    /// Smooth brightness oscillation.
    Shiny,
    /// Random colour jitter at a fixed frame interval.
    Sparkly,
}

/// Behaviour triggered when an actor starts its turn on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileEvent {
    None,
    PeriodicDamage(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

#[cfg(test)]
mod tests {
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[test]
    fn ids_cover_the_whole_catalogue() {
        assert_eq!(TerrainKind::COUNT, TerrainKind::MAX_ID as usize + 1);
        for kind in TerrainKind::iter() {
            assert_eq!(TerrainKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(TerrainKind::from_id(TerrainKind::MAX_ID + 1), None);
    }

    #[test]
    fn only_shallow_lava_hurts() {
        for kind in TerrainKind::iter() {
            let expected = if kind == TerrainKind::ShallowLava {
                TileEvent::PeriodicDamage(3)
            } else {
                TileEvent::None
            };
            assert_eq!(kind.on_enter(), expected, "{kind}");
        }
    }

    #[test]
    fn dimensions_reject_negative_and_overflowing_coordinates() {
        let dims = MapDimensions::new(20, 16);
        assert!(dims.contains(Position::new(0, 0)));
        assert!(dims.contains(Position::new(19, 15)));
        assert!(!dims.contains(Position::new(-1, 0)));
        assert!(!dims.contains(Position::new(20, 0)));
        assert!(!dims.contains(Position::new(0, 16)));
    }
}
