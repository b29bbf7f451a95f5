//! Configuration loading and persistence for the TUI.
//!
//! Responsibilities:
//! - Resolve startup defaults with CLI and environment variable overrides.
//! - Load the dataset and restore its remembered layout and theme.
//! - Save the table layout and theme on application exit.
//!
//! Does NOT handle:
//! - Parsing data files (see `data`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > persisted state > defaults.
//! - `load_dotenv()` is called before reading environment variables.
//! - Saving replaces only the layout of the current table; layouts of other
//!   tables already in the state file are kept.

use anyhow::{Context, Result};
use datagrid_config::{ConfigLoader, ConfigManager, PersistedState, UiDefaults};

use crate::app::App;
use crate::cli::Cli;
use crate::data::load_dataset;
use crate::table::TableState;

/// Merge `.env`, environment variables and CLI flags into `UiDefaults`.
pub fn resolve_defaults(cli: &Cli) -> Result<UiDefaults> {
    let mut loader = ConfigLoader::new().load_dotenv()?;
    if let Some(page_size) = cli.page_size {
        loader = loader.with_page_size(page_size);
    }
    if let Some(config_path) = &cli.config_path {
        loader = loader.with_config_path(config_path.clone());
    }
    if let Some(log_dir) = &cli.log_dir {
        loader = loader.with_log_dir(log_dir.clone());
    }
    Ok(loader.from_env()?.build()?)
}

/// Open the state file named by the defaults, or the standard one.
///
/// A blank path counts as unset.
pub fn open_config_manager(defaults: &UiDefaults) -> Result<ConfigManager> {
    match &defaults.config_path {
        Some(path) if !path.to_string_lossy().trim().is_empty() => {
            Ok(ConfigManager::new_with_path(path.clone()))
        }
        _ => ConfigManager::new(),
    }
}

/// Load the data file and build the app around it.
///
/// The remembered layout for the table's title is applied unless `--fresh`
/// is set. An explicit page size (CLI or environment) wins over the
/// remembered one, and `DATAGRID_THEME` wins over the remembered theme.
pub fn build_app(cli: &Cli, defaults: &UiDefaults, manager: &ConfigManager) -> Result<App> {
    let dataset = load_dataset(&cli.data_file, &cli.load_options())
        .with_context(|| format!("failed to load {}", cli.data_file.display()))?;

    let persisted = if cli.fresh {
        tracing::info!("--fresh flag set, starting with default state");
        PersistedState::default()
    } else {
        manager.load()
    };

    let mut table = TableState::new(dataset, defaults.page_size);
    if let Some(layout) = persisted.layout_for(table.title()) {
        tracing::debug!(title = %table.title(), "Restoring remembered layout");
        table.apply_layout(layout);
    }
    if explicit_page_size(cli) {
        table.set_page_size(defaults.page_size);
    }

    let theme = defaults.theme.unwrap_or(persisted.selected_theme);
    Ok(App::new(table, theme)?)
}

fn explicit_page_size(cli: &Cli) -> bool {
    cli.page_size.is_some() || datagrid_config::env_var_or_none("DATAGRID_PAGE_SIZE").is_some()
}

/// Store the current table layout and theme.
pub fn save_and_quit(app: &App, config_manager: &mut ConfigManager) -> Result<()> {
    let mut state = config_manager.load();
    state.selected_theme = app.color_theme;
    state.set_layout(app.table.title(), app.persisted_layout());
    config_manager.save(&state)?;
    tracing::info!(title = %app.table.title(), "Saved table layout");
    Ok(())
}
