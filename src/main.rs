mod app;
mod config;
mod domain;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::{AppExit, AppState};
use clap::Parser;
use config::{Cli, Commands, Config};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    ensure_app_dir, init_local_app_dir, log_file, save_settings, storage_file, AppSettings,
    LocalStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let app_dir = init_local_app_dir()?;
            save_settings(app_dir.join("config.json"), &AppSettings::default())?;
            println!("Initialized tempo directory: {}", app_dir.display());
            println!("Edit {} to change preset durations.", app_dir.join("config.json").display());
            Ok(())
        }
        Some(Commands::Logout) => {
            let config = Config::load(&cli)?;
            let mut store = LocalStore::open(storage_file()?)?;
            if store.remove(&config.settings.token_key)? {
                println!("Session token cleared.");
            } else {
                println!("No session token stored.");
            }
            Ok(())
        }
        Some(Commands::Config) => {
            let config = Config::load(&cli)?;
            println!("{}", serde_json::to_string_pretty(&config.settings)?);
            Ok(())
        }
        None => {
            let config = Config::load(&cli)?;
            run_tui(&config)
        }
    }
}

/// Log to a file in the app directory; the terminal belongs to the UI
fn init_logging(config: &Config) -> Result<()> {
    let path = log_file()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tempo={}", config.log_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_tui(config: &Config) -> Result<()> {
    let app_dir = ensure_app_dir()?;
    init_logging(config)?;
    info!(dir = %app_dir.display(), "starting tempo");

    let mut app = AppState::new(config, storage_file()?);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The screen is gone: no tick may outlive it
    app.teardown();

    if let Err(err) = result {
        error!("{:#}", err);
        eprintln!("Error: {:#}", err);
        return Ok(());
    }

    if let Some(AppExit::Navigate(route)) = app.exit {
        let url = route.url(&app.settings.base_url);
        info!(%url, "leaving screen");
        println!("Continue at {}", url);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wake for the next countdown fire if it comes before the poll interval
        let timeout = match app.timer.next_due() {
            Some(due) => due.saturating_duration_since(Instant::now()).min(tick_rate),
            None => tick_rate,
        };

        // Handle events with timeout for ticking
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Countdown fires that came due while waiting
        app.tick();

        if app.should_exit() {
            return Ok(());
        }
    }
}
