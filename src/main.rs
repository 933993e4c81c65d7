//! Listing Wizard - a terminal wizard for posting a service listing
//!
//! Walks the user through picking a category, writing a title, describing
//! the service and reviewing a preview before publishing.

mod app;
mod config;
mod error;
mod panels;
mod services;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::WizardConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Poll interval; short enough to keep the preview animation smooth
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match WizardConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (WizardConfig::default(), Some(err)),
    };

    init_logging(&config.log_filter);
    if let Some(err) = config_error {
        tracing::warn!("Invalid config, using defaults: {err:#}");
    }
    match WizardConfig::write_defaults_if_missing() {
        Ok(true) => tracing::info!("wrote default config"),
        Ok(false) => {}
        Err(err) => tracing::warn!("Could not write default config: {err:#}"),
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "listing wizard starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("Fatal: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    tracing::info!("listing wizard exiting");
    Ok(())
}

/// Send logs to the data-dir log file; the terminal belongs to the UI.
/// Falls back to stderr if the file cannot be opened.
fn init_logging(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let writer = WizardConfig::log_path()
        .and_then(|path| {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).ok()?;
            }
            OpenOptions::new().create(true).append(true).open(path).ok()
        })
        .map(|file| BoxMakeWriter::new(Mutex::new(file)))
        .unwrap_or_else(|| BoxMakeWriter::new(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.process_events();
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
