//! Configuration loading for the portfolio viewer.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall
//! back to sensible defaults so the UI can still launch. Layout
//! constants that look like magic numbers elsewhere (detection line,
//! nav compensation, scroll thresholds) are deliberately configuration,
//! not assumptions baked into the code.

mod defaults;
mod io;
mod models;

pub use io::{load_config, parse_config, save_config, serialize_config};
pub use models::{AppConfig, LogLevel, ThemeMode};
