//! usecase-builder - terminal wizard for B2B automation use cases
//!
//! Walks through nine sections, tracks completion and exports the
//! document as JSON.

mod app;
mod catalog;
mod config;
mod export;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::BuilderConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "usecase_builder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let (config, config_error) = match BuilderConfig::load() {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!("Using default config: {err:#}");
            (BuilderConfig::default(), Some(err))
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    if let Some(err) = config_error {
        app.push_error(format!("Could not load config: {err:#}"));
    }
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.terminal_size = Some((size.height, size.width));

        let in_splash = app.in_splash();
        if in_splash {
            app.update_splash(size.height);
        }

        app.refresh_completion();
        terminal.draw(|frame| ui::draw(frame, app))?;

        // ~60fps while animating
        let poll_duration = if in_splash {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key).await?,
                Event::Mouse(mouse) => app.handle_mouse(mouse).await?,
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
