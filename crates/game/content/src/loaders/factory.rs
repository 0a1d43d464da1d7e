//! Content factory for loading everything a session needs from a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, GridMap};

use crate::loaders::{ConfigLoader, LoadResult, MapLoader, Scenario, ScenarioLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── scenario.ron
/// └── maps/
///     └── devmap.txt
/// ```
#[derive(Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the initial population from `scenario.ron`.
    pub fn load_scenario(&self) -> LoadResult<Scenario> {
        ScenarioLoader::load(&self.data_dir.join("scenario.ron"))
    }

    /// Load a map from `maps/{map_name}.txt`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<GridMap> {
        MapLoader::load_named(&self.maps_dir(), map_name)
    }

    /// Save a map as `maps/{map_name}.txt`.
    pub fn save_map(&self, map_name: &str, map: &GridMap) -> LoadResult<PathBuf> {
        MapLoader::save(&self.maps_dir(), map_name, map)
    }

    pub fn maps_dir(&self) -> PathBuf {
        self.data_dir.join("maps")
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.maps_dir(), Path::new("/tmp/data/maps"));
    }
}
