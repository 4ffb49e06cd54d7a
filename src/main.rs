//! Passo: interactive terminal client for the patient registry.
//!
//! Lists registered patients, registers new ones by name and opens
//! per-patient detail and dashboard screens. The registry API itself is an
//! external service; its base URL is resolved once at startup.

mod app;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use app::{App, Screen};
use passo_client::RegistryClient;
use passo_core::ClientConfig;

/// Passo: terminal client for the patient registry
#[derive(Parser, Debug)]
#[command(name = "passo-run")]
#[command(about = "Terminal client for the patient registry")]
struct Args {
    /// Registry API base URL (overrides PASSO_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let config = ClientConfig::from_env_value(
        args.api_url.or_else(|| std::env::var("PASSO_API_URL").ok()),
    )?;
    tracing::debug!("using registry at {}", config.api_base_url());

    let client =
        RegistryClient::new(config.api_base_url()).context("failed to build registry client")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client);
    // Initial load when the list view first opens.
    app.request_load();

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        // Apply finished request outcomes before drawing; the requests
        // themselves run on spawned tasks, so drawing never waits on the
        // network.
        while let Some(message) = app.poll_message() {
            app.apply(message);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release).
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.code, key.modifiers);
                }
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.screen {
        Screen::Home => handle_home_key(app, code),
        Screen::PatientDetail => handle_detail_key(app, code),
        Screen::Dashboard => handle_dashboard_key(app, code),
    }
}

fn handle_home_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.quit(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Enter => {
            if app.home.name_input().trim().is_empty() {
                // Empty form: Enter opens the selected entry instead.
                if let Some(request) = app.home.select(app.selected) {
                    app.navigate(request);
                }
            } else {
                app.request_submit();
            }
        }
        KeyCode::Backspace => app.home.pop_input(),
        KeyCode::Char(c) => app.home.push_input(c),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.go_home(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.open_dashboard(),
        _ => {}
    }
}

fn handle_dashboard_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.go_home(),
        _ => {}
    }
}
