//! user-dashboard binary entry point.
//!
//! Parses options, starts the tokio runtime that fetches run on, puts the
//! terminal in raw mode, runs the TUI event loop, and restores the terminal
//! state on exit.
//!
use std::fs::File;
use std::sync::{Arc, Mutex};

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use reqwest::Url;
use tracing::info;
use tracing_subscriber::EnvFilter;

use user_dashboard::Result;
use user_dashboard::app::{self, AppState, update::RunOptions};
use user_dashboard::cli::Cli;
use user_dashboard::client::HttpUserClient;
use user_dashboard::error::Context;

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> std::io::Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Send logs to `cli.log_file` when given. The terminal is owned by the UI.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = cli.log_file.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_ctx(|| format!("open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let endpoint = Url::parse(&cli.endpoint).with_ctx(|| format!("invalid endpoint {:?}", cli.endpoint))?;
    let client = HttpUserClient::new(endpoint, cli.timeout()).with_ctx(|| "build HTTP client".to_string())?;
    info!(endpoint = %client.endpoint(), "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .with_ctx(|| "start tokio runtime".to_string())?;

    let mut app = AppState::new(cli.load_theme(), cli.load_keymap());
    let opts = RunOptions {
        client: Arc::new(client),
        runtime: runtime.handle().clone(),
        fetch_on_start: cli.fetch_on_start,
    };

    let mut terminal = init_terminal().with_ctx(|| "init terminal".to_string())?;

    let res = app::run(&mut terminal, &mut app, opts);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("application error: {err:#}");
    }
    Ok(())
}
