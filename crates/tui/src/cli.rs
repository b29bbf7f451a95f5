//! Command-line argument parsing for datagrid.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//! - Environment variable parsing (handled by `datagrid_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - All path arguments are resolved relative to the current working directory.

use clap::Parser;
use std::path::PathBuf;

use crate::data::LoadOptions;

/// Command-line arguments for datagrid.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --page-size, --config-path)
/// 2. Environment variables (e.g., DATAGRID_PAGE_SIZE, DATAGRID_THEME)
/// 3. Persisted table layout (from state.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "datagrid",
    about = "Browse a JSON or CSV table in the terminal",
    version,
    after_help = "Examples:\n  datagrid people.csv\n  datagrid orders.json --filter status --date-filter created\n  datagrid orders.json --page-size 10 --title \"Open orders\"\n  datagrid people.csv --log-dir /tmp/datagrid-logs --no-mouse\n  datagrid people.csv --fresh\n"
)]
pub struct Cli {
    /// JSON or CSV file holding the table
    pub data_file: PathBuf,

    /// Table title (defaults to the file's title or name)
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Rows per page (5, 10 or 15)
    #[arg(long, short = 'n')]
    pub page_size: Option<usize>,

    /// Column id that gets a multi-value filter (repeatable)
    #[arg(long = "filter", value_name = "COLUMN")]
    pub filters: Vec<String>,

    /// Column id that gets a date-range filter (repeatable)
    #[arg(long = "date-filter", value_name = "COLUMN")]
    pub date_filters: Vec<String>,

    /// Path to a custom state file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files (defaults to DATAGRID_LOG_DIR, then "logs")
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Start with fresh state, ignoring any persisted layout
    #[arg(long)]
    pub fresh: bool,
}

impl Cli {
    /// Dataset loading options taken from the command line.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            title: self.title.clone(),
            value_filters: self.filters.clone(),
            date_filters: self.date_filters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_data_file_is_required() {
        assert!(Cli::try_parse_from(["datagrid"]).is_err());
    }

    #[test]
    fn test_repeatable_filters() {
        let cli = Cli::parse_from([
            "datagrid",
            "orders.json",
            "--filter",
            "status",
            "--filter",
            "region",
            "--date-filter",
            "created",
        ]);
        assert_eq!(cli.data_file, PathBuf::from("orders.json"));
        assert_eq!(cli.filters, vec!["status", "region"]);
        assert_eq!(cli.date_filters, vec!["created"]);
    }

    #[test]
    fn test_load_options_carry_title_and_filters() {
        let cli = Cli::parse_from(["datagrid", "a.csv", "-t", "People", "--filter", "team"]);
        let options = cli.load_options();
        assert_eq!(options.title.as_deref(), Some("People"));
        assert_eq!(options.value_filters, vec!["team"]);
        assert!(options.date_filters.is_empty());
    }

    #[test]
    fn test_cli_no_mouse_flag() {
        let cli = Cli::parse_from(["datagrid", "a.csv", "--no-mouse"]);
        assert!(cli.no_mouse);
    }

    #[test]
    fn test_cli_fresh_default_false() {
        let cli = Cli::parse_from(["datagrid", "a.csv"]);
        assert!(!cli.fresh);
        assert_eq!(cli.page_size, None);
        assert_eq!(cli.log_dir, None);
    }
}
