//! Map data loader.
//!
//! Maps are stored as `<name>.txt` in a maps directory. Entity placement is
//! handled separately via scenario files.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use game_core::GridMap;

use crate::format::{parse_map, render_map};
use crate::loaders::{LoadResult, read_file};

/// Loader for text maps.
pub struct MapLoader;

impl MapLoader {
    /// File a map named `name` lives in.
    pub fn path_for(dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{name}.txt"))
    }

    /// Map names are bare file stems: no separators, no `.` or `..`.
    pub fn check_name(name: &str) -> LoadResult<()> {
        let bare = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\', ':', '\0']);
        if !bare {
            bail!("Invalid map name `{name}`");
        }
        Ok(())
    }

    /// Load a map from a text file, failing on the first malformed token.
    pub fn load(path: &Path) -> LoadResult<GridMap> {
        let content = read_file(path)?;
        let map = parse_map(&content)
            .with_context(|| format!("Failed to parse map {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            width = map.dimensions().width,
            height = map.dimensions().height,
            "map loaded"
        );
        Ok(map)
    }

    pub fn load_named(dir: &Path, name: &str) -> LoadResult<GridMap> {
        Self::check_name(name)?;
        Self::load(&Self::path_for(dir, name))
    }

    /// Write the terrain of `map` as `<dir>/<name>.txt`, replacing any
    /// existing file. Returns the written path.
    pub fn save(dir: &Path, name: &str, map: &GridMap) -> LoadResult<PathBuf> {
        Self::check_name(name)?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create map directory {}", dir.display()))?;
        let path = Self::path_for(dir, name);
        std::fs::write(&path, render_map(map))
            .with_context(|| format!("Failed to write map {}", path.display()))?;
        tracing::info!(path = %path.display(), "map saved");
        Ok(path)
    }
}
