//! Djeneric - Entry Point
//!
//! Initializes logging and the terminal, sets up the game,
//! and runs the main loop.

use std::fs::OpenOptions;
use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use djeneric::game::{Game, GameState};
use djeneric::ui::App;
use djeneric::GameConfig;

/// How long to wait for a key before redrawing
const POLL_TIMEOUT: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Djeneric v{}", env!("CARGO_PKG_VERSION"));

    // Build the game before touching the terminal so errors print normally
    let config = GameConfig::load();
    let mut game = Game::new(config).context("failed to set up the dungeons")?;
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game_loop(&mut terminal, &mut app, &mut game);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Game exited with error: {:#}", e);
        eprintln!("Error: {:#}", e);
    }

    log::info!("Djeneric shut down cleanly");
    result
}

/// Log to a file so output does not interfere with the TUI
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("djeneric.log")
    {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        // Nowhere to write; drop everything rather than draw over the screen
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.init();
}

/// Main game loop
fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    game: &mut Game,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            app.render(frame, game);
        })?;

        if event::poll(POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press {
                    match app.handle_input(key, game) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => log::warn!("Input handling error: {}", e),
                    }
                }
            }
        }

        if matches!(game.state(), GameState::Quit) {
            break;
        }
    }

    Ok(())
}
