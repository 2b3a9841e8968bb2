mod app;
mod audio;
mod config;
mod event;
mod game;
mod terminal;
mod ui;

use std::fs::File;

use anyhow::{Context, Result};

use app::App;
use config::Config;
use terminal::TerminalSurface;

const LOG_FILE: &str = "terminal-pong.log";

/// The screen belongs to the game, so logs go to a file and only on request.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let cfg = Config::default();
    log::info!(
        "starting {}x{} court, first to {}",
        cfg.width,
        cfg.height,
        cfg.target_score
    );

    let mut surface = TerminalSurface::new(&cfg).context("terminal is unavailable")?;
    let mut app = App::new(&cfg);
    let result = app.run(&mut surface);

    // Restore the terminal before any error is printed.
    drop(surface);
    log::info!("shutting down");
    result
}
