//! Game engine for single-player tic-tac-toe.
//!
//! The engine owns the board, the turn, the round phase and the score
//! tally. It is passive: callers drive it with [`GameEngine::place_mark`] and
//! [`GameEngine::computer_move`] and read the returned [`RoundOutcome`]. On
//! every win or tie the score is handed to the [`ScoreStore`].

use crate::outcome::{Phase, RoundOutcome};
use crate::position::Position;
use crate::rules::is_draw;
use crate::score::ScoreRecord;
use crate::store::{ScoreStore, StoreError};
use crate::types::{Board, Player, Square};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine with a persistent score tally.
#[derive(Debug)]
pub struct GameEngine<S, R = StdRng> {
    board: Board,
    to_move: Player,
    phase: Phase,
    last_outcome: RoundOutcome,
    score: ScoreRecord,
    moves_played: u32,
    store: S,
    rng: R,
}

impl<S: ScoreStore> GameEngine<S> {
    /// Creates an engine seeded from the OS, loading scores from `store`.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        Self::with_rng(store, StdRng::from_os_rng())
    }
}

impl<S: ScoreStore, R: rand::Rng> GameEngine<S, R> {
    /// Creates an engine with an explicit random source for the opponent.
    #[instrument(skip(store, rng))]
    pub fn with_rng(store: S, rng: R) -> Self {
        let score = store.load();
        let moves_played = store.moves_recorded();
        info!(?score, moves_played, "Game engine ready");
        Self {
            board: Board::new(),
            to_move: Player::HUMAN,
            phase: Phase::InProgress,
            last_outcome: RoundOutcome::InProgress,
            score,
            moves_played,
            store,
            rng,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes down next.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns whether the current board still accepts marks.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome of the last placement that was applied.
    pub fn last_outcome(&self) -> RoundOutcome {
        self.last_outcome
    }

    /// Returns the running score.
    pub fn score(&self) -> &ScoreRecord {
        &self.score
    }

    /// Marks placed so far, resumed from the store's highest record.
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Places the current player's mark at zero-based `(row, col)`.
    ///
    /// Off-board coordinates are ignored like any other rejected placement.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the round ended and the score could not be
    /// saved. The board and score are updated regardless.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<RoundOutcome, StoreError> {
        match Position::from_row_col(row, col) {
            Some(pos) => self.place(pos),
            None => {
                warn!(row, col, "Ignoring placement off the board");
                Ok(RoundOutcome::InProgress)
            }
        }
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Returns [`RoundOutcome::InProgress`] without touching anything when
    /// the round has ended or the square is taken.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the round ended and the score could not be
    /// saved. The board and score are updated regardless.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<RoundOutcome, StoreError> {
        if self.phase == Phase::Ended {
            debug!("Round already over, placement ignored");
            return Ok(RoundOutcome::InProgress);
        }
        if !self.board.is_empty(pos) {
            debug!("Square occupied, placement ignored");
            return Ok(RoundOutcome::InProgress);
        }
        self.apply(pos)
    }

    /// Lets the computer place its mark on a uniformly random empty square.
    ///
    /// Does nothing unless the round is in progress and it is the
    /// computer's turn. With no empty square left the round is a tie and
    /// nothing is placed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the round ended and the score could not be
    /// saved.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<RoundOutcome, StoreError> {
        if self.phase == Phase::Ended || self.to_move != Player::COMPUTER {
            debug!(phase = ?self.phase, to_move = %self.to_move, "Not the computer's turn");
            return Ok(RoundOutcome::InProgress);
        }

        let empty = self.board.empty_positions();
        match empty.choose(&mut self.rng).copied() {
            Some(pos) => {
                debug!(position = %pos, "Computer chose square");
                self.apply(pos)
            }
            None => {
                warn!("No empty square for the computer");
                Ok(RoundOutcome::Tie)
            }
        }
    }

    /// Clears the board and hands the first move back to the human.
    /// Scores are left alone.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.board.clear();
        self.to_move = Player::HUMAN;
        self.phase = Phase::InProgress;
        self.last_outcome = RoundOutcome::InProgress;
        info!("Board reset");
    }

    /// Clears the board, zeroes the score and deletes persisted records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the persisted records could not be removed.
    /// The in-memory state is reset regardless.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> Result<(), StoreError> {
        self.reset_board();
        self.score.reset();
        info!("Scores reset");
        self.store.clear()
    }

    /// Writes the mark and evaluates the board. `pos` must be empty.
    fn apply(&mut self, pos: Position) -> Result<RoundOutcome, StoreError> {
        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.moves_played = self.moves_played.saturating_add(1);
        debug!(%player, position = %pos, "Mark placed");

        let outcome = if let Some((line, winner)) = self.board.winning_line() {
            self.score.record_win(winner);
            info!(%winner, %line, wins = self.score.wins(winner), "Round won");
            RoundOutcome::Win(winner)
        } else if is_draw(&self.board) {
            info!("Round tied");
            RoundOutcome::Tie
        } else {
            self.to_move = player.opponent();
            RoundOutcome::InProgress
        };
        self.last_outcome = outcome;

        if outcome.is_over() {
            debug!(board = %self.board.display(), "Final board");
            self.phase = Phase::Ended;
            self.store
                .save(&self.score, &outcome.result_text(), self.moves_played)?;
        }
        Ok(outcome)
    }
}
