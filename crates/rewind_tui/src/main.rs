//! Rewind - tic-tac-toe with time travel in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::Cli;
use config::TuiConfig;
use crossterm::event::{self, Event, KeyEventKind};
use rewind_tictactoe::GameController;
use std::path::Path;
use std::time::Duration;
use terminal::Tui;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?.with_overrides(
        cli.player_one,
        cli.player_two,
        cli.log_file,
    )?;

    init_tracing(config.log_file())?;
    info!(config = ?config, "Starting rewind TUI");

    terminal::install_panic_hook();
    let (mut tui, guard) = terminal::enter().context("Failed to set up terminal")?;
    let result = run(&mut tui, App::new(GameController::with_roster(config.roster())));
    drop(guard);

    if let Err(e) = &result {
        error!(error = %e, "TUI exited with error");
    }
    info!("Rewind TUI stopped");
    result
}

/// Sends logs to a file so they do not interfere with the UI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Draws, waits for one event, applies it. Repeats until quit.
#[instrument(skip_all)]
fn run(terminal: &mut Tui, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let hitboxes = ui::draw(frame, &app);
            app.set_hitboxes(hitboxes);
        })?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
