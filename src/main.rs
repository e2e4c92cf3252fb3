use anyhow::Result;
use clap::Parser;
use cli_log::*;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};

use tokenscope::{App, Cli, render_ui};

#[tokio::main]
async fn main() -> Result<()> {
    init_cli_log!();
    info!("Starting tokenscope screener...");

    let cli = Cli::parse();

    let result = run_tui_app(cli).await;

    // Restore terminal state even on the error path
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();

    result
}

async fn run_tui_app(cli: Cli) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and kick off the simulated initial load
    let mut app = App::new(&cli);
    app.begin_initial_load();

    // Main loop
    let res = run_app(&mut terminal, &mut app).await;

    // Cancel the load timer before tearing the terminal down
    app.shutdown();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        info!("App error: {err:?}");
    }

    res
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let poll_timeout = Duration::from_millis(tokenscope::config::EVENT_POLL_TIMEOUT_MS);
    let ui_update_rate = Duration::from_millis(tokenscope::config::UI_UPDATE_RATE_MS);
    let mut last_ui_update = Instant::now();

    loop {
        if crossterm::event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if !app.handle_key_input(key.code)? {
                    return Ok(()); // Exit requested
                }
            }
        }

        // Poll the load timer and apply the feed tick when due
        app.update().await?;

        // Force a redraw at least once per second so trend highlights fade
        let force_redraw = last_ui_update.elapsed() >= ui_update_rate;

        if app.needs_redraw || force_redraw {
            terminal.draw(|f| render_ui(f, app))?;
            app.needs_redraw = false;
            if force_redraw {
                last_ui_update = Instant::now();
            }
        }
    }
}
