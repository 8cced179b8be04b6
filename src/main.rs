//! Concierge - Terminal Client
//!
//! A terminal client for the Nicholas Concierge service, built in Rust.
//! Presents the marketing pages, the membership tier and meal plan
//! listings, and the contact and booking submission flows against the
//! backend API.

use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, NetEvent};
use infrastructure::{ApiClient, ApiWorker, ClientConfig};
use presentation::{render_ui, InputHandler};

/// How long the event loop waits for input before running a tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Entry point for the concierge terminal client.
///
/// Resolves the backend location from the environment, sets up the
/// terminal interface and the network worker, and runs the main event
/// loop until the user quits.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or if terminal
/// setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = ClientConfig::from_env();
    tracing::info!("using backend at {}", config.backend_url());
    let client = ApiClient::new(&config)?;
    let (worker, events) = ApiWorker::new(client);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, &worker, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Each iteration applies completed network events, advances the timed
/// redirect, dispatches queued network commands, renders, and then waits
/// up to one tick for input. Continues running until the user presses
/// 'q' while browsing.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    worker: &ApiWorker,
    events: &Receiver<NetEvent>,
) -> io::Result<()> {
    loop {
        while let Ok(event) = events.try_recv() {
            app.apply_net_event(event);
        }
        app.tick(Instant::now());
        for command in app.drain_outbound() {
            worker.dispatch(command);
        }

        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') if matches!(app.mode, application::AppMode::Browse) => {
                        return Ok(());
                    }
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.scroll_by(-1),
                    MouseEventKind::ScrollDown => app.scroll_by(1),
                    _ => {}
                },
                _ => {}
            }
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("concierge=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}
