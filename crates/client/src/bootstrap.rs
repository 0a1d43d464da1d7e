//! Session assembly from content files.

use anyhow::{Context, Result};
use game_content::{ConfigLoader, ContentFactory, ScenarioLoader};
use game_core::GameSession;

use crate::config::ClientConfig;

/// Loads config, map and scenario and starts the first turn.
///
/// Any load or placement error aborts start-up; no partially initialised
/// session is ever returned.
pub fn bootstrap(config: &ClientConfig) -> Result<(GameSession, ContentFactory)> {
    let factory = ContentFactory::new(&config.assets_dir);

    let game_config = ConfigLoader::load(&config.config_file())?;
    let map = factory
        .load_map(&config.map_name)
        .with_context(|| format!("Failed to load map '{}'", config.map_name))?;

    let expected = game_config.map_dimensions();
    let found = map.dimensions();
    if found != expected {
        anyhow::bail!(
            "map '{}' is {}x{}, config expects {}x{}",
            config.map_name,
            found.width,
            found.height,
            expected.width,
            expected.height
        );
    }

    let scenario = ScenarioLoader::load(&config.scenario_file())?;

    let mut session = GameSession::new(game_config.clone(), map);
    scenario
        .apply(session.state_mut(), &game_config)
        .context("Failed to place scenario")?;
    session.start().context("Failed to start the first turn")?;

    tracing::info!(map = %config.map_name, "session bootstrapped");
    Ok((session, factory))
}
