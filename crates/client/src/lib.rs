//! Line-oriented terminal client for tilewalk.
//!
//! ```text
//! main ─→ ClientConfig::from_env ─→ logging ─→ bootstrap ─→ App::run
//!                                                  │
//!                           ContentFactory (config, map, scenario)
//! ```
//!
//! Commands are read one line at a time; after each command the frame
//! driver runs until the player holds the turn again and the board is
//! printed. Logs go to a file so they never interleave with the board.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;

pub use app::{App, Flow};
pub use config::ClientConfig;
