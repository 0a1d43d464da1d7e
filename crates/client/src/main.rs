//! Tilewalk terminal client binary.
//!
//! Reads one command per line from stdin and prints the board after each
//! command. Configuration comes from `TILEWALK_*` environment variables or a
//! `.env` file.

use anyhow::Result;
use tilewalk_client::{App, ClientConfig, bootstrap, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref(), config.session_id.as_deref())?;

    tracing::info!("Starting tilewalk client");
    let (session, factory) = bootstrap::bootstrap(&config)?;

    let mut app = App::new(session, factory, &config.map_name, config.max_idle_frames)
        .with_color(config.color);
    let stdin = std::io::stdin();
    app.run(stdin.lock(), std::io::stdout().lock())?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
