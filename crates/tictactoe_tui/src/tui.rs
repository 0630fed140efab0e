//! Terminal setup and the event loop.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_core::{GameConfig, GameEngine, ResetDue, ScoreStore};
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};

use crate::app::{App, Control};
use crate::ui;

/// How long to wait for terminal input before checking timers again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Puts the terminal into raw mode on the alternate screen and undoes
/// whatever part of that succeeded when dropped.
#[derive(Debug, Default)]
struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        let mut guard = Self::default();
        enable_raw_mode()?;
        guard.raw_mode = true;
        guard.alternate_screen = true;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.alternate_screen
            && let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
        {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        if self.raw_mode
            && let Err(e) = disable_raw_mode()
        {
            warn!(error = %e, "Failed to disable raw mode");
        }
    }
}

/// Runs the game until the user quits.
#[instrument(skip_all)]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let engine = GameEngine::new(config.open_store());
    let (mut app, mut resets) = App::new(engine, config.reset_delay());

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_game(&mut terminal, &mut app, &mut resets).await;

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, apply due resets, then handle at most one input event.
async fn run_game<S: ScoreStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
    resets: &mut mpsc::UnboundedReceiver<ResetDue>,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let areas = ui::draw(f, app);
            app.set_cell_areas(areas);
        })?;

        while let Ok(due) = resets.try_recv() {
            app.on_reset_due(due);
        }

        if !event::poll(POLL_INTERVAL)? {
            // Let the reset task make progress on a current-thread runtime.
            tokio::task::yield_now().await;
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code) == Control::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }
}
