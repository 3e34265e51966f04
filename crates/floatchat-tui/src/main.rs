use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use floatchat_core::clock::SystemClock;
use floatchat_core::config::ExplorerConfig;

mod app;
mod event;
mod ui;

use app::App;

#[derive(Parser)]
#[command(name = "floatchat")]
#[command(about = "FloatChat Ocean Data Explorer - terminal dashboard for ocean observation data", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// File the application log is written to
    #[arg(long, default_value = "floatchat.log")]
    log_file: PathBuf,

    /// Override the UI tick rate in milliseconds
    #[arg(long)]
    tick_rate: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_file)?;

    let mut config = ExplorerConfig::load_or_default(cli.config.as_deref())?;
    if let Some(tick_rate) = cli.tick_rate {
        config.tick_rate_ms = tick_rate;
    }
    tracing::info!(?config, "starting ocean data explorer");

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let app = App::new(&config, Arc::new(SystemClock));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event::run(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Routes the log to a file; stdout belongs to the terminal UI.
fn init_tracing(path: &std::path::Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
