use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use thiserror::Error;

use snake_tui::board::Board;
use snake_tui::config::{GRID_SIZE, TICK_INTERVAL_MS};
use snake_tui::game::{GameState, GameStatus};
use snake_tui::input::{map_key, GameInput};
use snake_tui::renderer;
use snake_tui::score::FileScoreStore;
use snake_tui::terminal_runtime::{install_panic_hook, AppTerminal, TerminalSession};

/// Top-level failures of the terminal front end.
#[derive(Debug, Error)]
enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

fn main() -> Result<(), AppError> {
    install_panic_hook();

    let mut session = TerminalSession::enter()?;
    run(session.terminal_mut())?;
    Ok(())
}

fn run(terminal: &mut AppTerminal) -> io::Result<()> {
    let mut state = GameState::new(Board::new(GRID_SIZE), Box::new(FileScoreStore::new()));
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, &state))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match map_key(key) {
                        Some(GameInput::Quit) => break,
                        Some(GameInput::Restart) if state.status() == GameStatus::Over => {
                            state.reset();
                            last_tick = Instant::now();
                        }
                        // Direction input is dropped once the game is over,
                        // until a restart.
                        Some(GameInput::Direction(direction))
                            if state.status() == GameStatus::Running =>
                        {
                            state.set_direction(direction);
                        }
                        _ => {}
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
