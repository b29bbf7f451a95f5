//! datagrid - browse a JSON or CSV table in the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Table semantics (see `datagrid_tui::table`).
//! - Configuration persistence (see `crates/config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > persisted state > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use datagrid_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use datagrid_tui::action::Action;
use datagrid_tui::cli::Cli;
use datagrid_tui::runtime::{
    config::{build_app, open_config_manager, resolve_defaults, save_and_quit},
    terminal::TerminalGuard,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let defaults = resolve_defaults(&cli)?;

    std::fs::create_dir_all(&defaults.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&defaults.log_dir, "datagrid.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();
    // _guard must live for the whole of main() so buffered logs are flushed.

    let mut config_manager = open_config_manager(&defaults)?;
    // Load before touching the terminal so errors print normally.
    let mut app = build_app(&cli, &defaults, &config_manager)?;
    tracing::info!(
        file = %cli.data_file.display(),
        rows = app.table.dataset().rows.len(),
        "Loaded table"
    );

    let terminal_guard = TerminalGuard::enter(cli.no_mouse)?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let input_task = tokio::spawn(forward_terminal_events(tx));

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                let Some(action) = action else {
                    continue;
                };
                if !matches!(action, Action::Tick) {
                    tracing::debug!(?action, "Handling action");
                }
                if matches!(action, Action::Quit) {
                    if let Err(e) = save_and_quit(&app, &mut config_manager) {
                        tracing::error!(error = %e, "Failed to save config");
                    }
                    break;
                }
                app.update(action);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    input_task.abort();
    terminal_guard.restore()?;
    terminal.show_cursor()?;

    Ok(())
}

/// Read terminal events and forward them as actions until the channel or
/// the event stream closes.
///
/// Key presses and resizes wait for channel space; mouse events are dropped
/// when the channel is full so a burst of drag events cannot stall input.
async fn forward_terminal_events(tx: Sender<Action>) {
    let mut reader = EventStream::new();
    while let Some(event_result) = reader.next().await {
        let event = match event_result {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "Terminal event stream failed");
                break;
            }
        };
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
            Event::Resize(width, height) => Action::Resize(width, height),
            Event::Mouse(mouse) => {
                match tx.try_send(Action::Mouse(mouse)) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
                continue;
            }
            _ => continue,
        };
        if tx.send(action).await.is_err() {
            break;
        }
    }
}
