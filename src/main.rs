//! Entry point for the portfolio viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments (the content file path).
//! - Load user configuration from `conf/config.toml`.
//! - Launch the GUI application; the content itself loads in a
//!   background task once the window is up.

mod anim;
mod app;
mod config;
mod content;
mod relay;
mod sections;
mod theme;

use crate::app::run_app;
use crate::config::load_config;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

const DEFAULT_CONTENT_PATH: &str = "data/portfolio.json";

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let content_path = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        content = %content_path.display(),
        level = %config.log_level,
        theme = %config.theme,
        "Starting portfolio viewer"
    );
    run_app(config, content_path).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(DEFAULT_CONTENT_PATH),
    };
    if args.next().is_some() {
        return Err(anyhow!("Usage: astrofolio [path-to-content.json]"));
    }
    if !path.exists() {
        return Err(anyhow!("Content file not found: {}", path.display()));
    }
    Ok(path)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
