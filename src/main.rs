//! Clinic site - the clinic marketing page in the terminal
//!
//! A Ratatui rendition of the static clinic site together with its page
//! behaviours: nav highlighting, smooth scrolling, the collapsible menu,
//! reveal-on-scroll and the validated contact form.

mod app;
mod config;
mod logging;
mod platform;
mod state;
mod submit;
mod ui;

use anyhow::Result;
use app::App;
use config::SiteConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init()?;

    let config = SiteConfig::load_or_init().unwrap_or_else(|err| {
        tracing::warn!("Falling back to default config: {err}");
        SiteConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);

    loop {
        let now = Instant::now();
        app.tick(now);

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app, now))?;

        // Use faster polling while animating or waiting on a submission (16ms = ~60fps)
        // Normal polling (100ms) otherwise
        let poll_duration = if app.is_busy(now) {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now())?;
        }

        // Let the submission task make progress between frames
        tokio::task::yield_now().await;

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
