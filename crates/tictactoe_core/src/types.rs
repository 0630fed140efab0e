//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::rules::{Line, check_line, is_full};
use derive_more::Display;
use tracing::instrument;

/// Player in the game.
///
/// The human always plays [`Player::X`] and moves first; the computer plays
/// [`Player::O`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player X (the human, goes first).
    X,
    /// Player O (the computer).
    O,
}

impl Player {
    /// The symbol controlled by the person at the keyboard.
    pub const HUMAN: Player = Player::X;

    /// The symbol controlled by the random opponent.
    pub const COMPUTER: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    /// Returns the unoccupied positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Counts the squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns the first completed line and its owner.
    ///
    /// Lines are checked rows top to bottom, then columns left to right,
    /// then the main diagonal and the anti diagonal.
    #[instrument(skip(self))]
    pub fn winning_line(&self) -> Option<(Line, Player)> {
        Line::ALL
            .iter()
            .find_map(|line| check_line(self, *line).map(|player| (*line, player)))
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|(_, player)| player)
    }

    /// Clears every square.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the text doubles as a key map.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.push_str("\n-+-+-\n");
            }
            match square {
                Square::Empty => result.push_str(&(i + 1).to_string()),
                Square::Occupied(player) => result.push_str(&player.to_string()),
            }
            if i % 3 < 2 {
                result.push('|');
            }
        }
        result
    }
}
