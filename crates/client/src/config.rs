//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Where content comes from and how the session is driven.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub assets_dir: PathBuf,
    pub map_name: String,
    pub config_path: Option<PathBuf>,
    pub scenario_path: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    /// Frames driven after a command before control returns to the prompt.
    pub max_idle_frames: u32,
    /// Paint tiles with 24-bit ANSI colours.
    pub color: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
            map_name: Self::DEFAULT_MAP.to_owned(),
            config_path: None,
            scenario_path: None,
            log_dir: None,
            session_id: None,
            max_idle_frames: Self::DEFAULT_MAX_IDLE_FRAMES,
            color: false,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_MAP: &'static str = "devmap";
    pub const DEFAULT_MAX_IDLE_FRAMES: u32 = 10_000;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TILEWALK_ASSETS_DIR` - Directory holding `config.toml`, `scenario.ron` and `maps/`
    /// - `TILEWALK_MAP` - Map name without extension (default: devmap)
    /// - `TILEWALK_CONFIG` - Game config file (default: `<assets>/config.toml`)
    /// - `TILEWALK_SCENARIO` - Scenario file (default: `<assets>/scenario.ron`)
    /// - `TILEWALK_LOG_DIR` - Log directory (default: platform cache directory)
    /// - `TILEWALK_SESSION_ID` - Session identifier for the log file (default: timestamp)
    /// - `TILEWALK_MAX_IDLE_FRAMES` - Frame budget per command (default: 10000)
    /// - `TILEWALK_COLOR` - Paint terrain colours (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("TILEWALK_ASSETS_DIR") {
            config.assets_dir = PathBuf::from(dir);
        }
        if let Ok(name) = env::var("TILEWALK_MAP") {
            config.map_name = name;
        }
        config.config_path = env::var("TILEWALK_CONFIG").ok().map(PathBuf::from);
        config.scenario_path = env::var("TILEWALK_SCENARIO").ok().map(PathBuf::from);
        config.log_dir = env::var("TILEWALK_LOG_DIR").ok().map(PathBuf::from);
        config.session_id = env::var("TILEWALK_SESSION_ID").ok();

        if let Some(frames) = read_env::<u32>("TILEWALK_MAX_IDLE_FRAMES") {
            config.max_idle_frames = frames.max(1);
        }

        if let Some(color) = read_env::<bool>("TILEWALK_COLOR") {
            config.color = color;
        }

        config
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| self.assets_dir.join("config.toml"))
    }

    pub fn scenario_file(&self) -> PathBuf {
        self.scenario_path
            .clone()
            .unwrap_or_else(|| self.assets_dir.join("scenario.ron"))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
