//! Command-line options.
//!
//! Every option is optional; with none given the dashboard talks to the public
//! demo endpoint, uses the built-in theme and keymap, and does not log.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::keymap::Keymap;
use crate::app::theme::Theme;
use crate::client::DEFAULT_ENDPOINT;

#[derive(Debug, Clone, Parser)]
#[command(name = "user-dashboard", version, about = "Fetch a user list and filter it by name")]
pub struct Cli {
    /// Users endpoint; must return a JSON array of user objects.
    #[arg(long, env = "USER_DASHBOARD_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Fetch once immediately instead of waiting for the fetch key.
    #[arg(long)]
    pub fetch_on_start: bool,

    /// Request timeout in seconds. Requests are unbounded when omitted.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Built-in palette (`mocha`, `dark`) or a theme file with `key = #RRGGBB` lines.
    #[arg(long, value_name = "NAME|FILE")]
    pub theme: Option<String>,

    /// Keybindings file with `Action = Key` lines.
    #[arg(long)]
    pub keybinds: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG, default `info`).
    #[arg(long, env = "USER_DASHBOARD_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// The named palette or theme file, or the default when neither is given
    /// or the file cannot be read.
    pub fn load_theme(&self) -> Theme {
        self.theme
            .as_deref()
            .and_then(|t| Theme::builtin(t).or_else(|| Theme::from_file(t)))
            .unwrap_or_default()
    }

    /// The configured keymap, or the defaults when no file is given or it cannot be read.
    pub fn load_keymap(&self) -> Keymap {
        self.keybinds
            .as_deref()
            .and_then(|p| Keymap::from_file(&p.to_string_lossy()))
            .unwrap_or_default()
    }
}
