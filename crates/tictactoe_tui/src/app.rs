//! Application state and logic.

use crate::input::{Command, command_for_key, square_at};
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tictactoe_core::{
    GameEngine, Phase, Player, Position, ResetDue, ResetTimer, RoundOutcome, ScoreStore, StoreError,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep going.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state. The engine is the only source of truth; this
/// struct adds the cursor, the status line and the pending reset.
#[derive(Debug)]
pub struct App<S: ScoreStore> {
    engine: GameEngine<S>,
    cursor: Position,
    status_message: String,
    timer: ResetTimer,
    cell_areas: [Rect; 9],
}

impl<S: ScoreStore> App<S> {
    /// Creates an application around `engine`, returning the channel on
    /// which deferred resets arrive.
    pub fn new(
        engine: GameEngine<S>,
        reset_delay: std::time::Duration,
    ) -> (Self, mpsc::UnboundedReceiver<ResetDue>) {
        let (timer, rx) = ResetTimer::new(reset_delay);
        let app = Self {
            engine,
            cursor: Position::Center,
            status_message: String::new(),
            timer,
            cell_areas: [Rect::default(); 9],
        };
        (app, rx)
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true while a finished board is waiting to be cleared.
    pub fn reset_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Records where each square was drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match command_for_key(self.cursor, key) {
            Command::Cursor(pos) => self.cursor = pos,
            Command::Place(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Command::Restart => self.restart(),
            Command::Quit => {
                info!("User quit");
                return Control::Quit;
            }
            Command::None => {}
        }
        Control::Continue
    }

    /// Handles a left click at terminal cell `(x, y)`.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, x: u16, y: u16) {
        if let Some(pos) = square_at(&self.cell_areas, x, y) {
            self.cursor = pos;
            self.play(pos);
        }
    }

    /// The human plays `pos`; the computer answers if the round goes on.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        if self.engine.phase() == Phase::Ended {
            debug!("Waiting for board reset, placement ignored");
            return;
        }
        self.status_message.clear();
        let mut outcome = self.step(|engine| engine.place(pos));
        if outcome == RoundOutcome::InProgress
            && self.engine.current_player() == Player::COMPUTER
        {
            outcome = self.step(|engine| engine.computer_move());
        }
        if outcome.is_over() {
            self.round_over(outcome);
        }
    }

    /// Applies a reset posted by the timer, unless it was invalidated.
    #[instrument(skip(self))]
    pub fn on_reset_due(&mut self, due: ResetDue) {
        if self.timer.accept(due) {
            self.engine.reset_board();
            self.status_message.clear();
        }
    }

    /// Zeroes scores, clears the board and drops any pending reset.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.timer.cancel();
        match self.engine.reset_game() {
            Ok(()) => self.status_message = "Scores reset. Your move.".to_string(),
            Err(e) => self.report(e),
        }
    }

    /// Runs one engine call, reporting persistence failures.
    fn step(
        &mut self,
        op: impl FnOnce(&mut GameEngine<S>) -> Result<RoundOutcome, StoreError>,
    ) -> RoundOutcome {
        match op(&mut self.engine) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.report(e);
                self.engine.last_outcome()
            }
        }
    }

    fn round_over(&mut self, outcome: RoundOutcome) {
        debug!(?outcome, "Round finished");
        let message = match outcome.winner() {
            Some(player) => format!("Player {} wins!", player),
            None => "It's a tie!".to_string(),
        };
        if self.status_message.is_empty() {
            self.status_message = message;
        } else {
            self.status_message = format!("{} ({})", message, self.status_message);
        }
        self.timer.schedule();
    }

    fn report(&mut self, err: StoreError) {
        error!(error = %err, "Score persistence failed");
        self.status_message = format!("Could not update scores: {}", err.message);
    }
}
