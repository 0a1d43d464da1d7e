//! Data-driven content definitions and loaders.
//!
//! This crate turns files into game-core values:
//! - Map layouts (plain text, one terrain id per tile)
//! - Game configuration (TOML)
//! - Scenarios: initial actors and items (RON)
//!
//! The text map format itself is always available; the file loaders sit
//! behind the default `loaders` feature.

pub mod format;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use format::{MapFormatError, parse_map, render_map};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, CreatureSpec, ItemSpec, LoadResult, MapLoader, Scenario, ScenarioLoader,
};
