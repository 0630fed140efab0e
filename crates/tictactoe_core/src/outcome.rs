//! Round outcomes and the phase guard.

use crate::types::Player;

/// Result of a placement, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// The round continues (also returned for ignored placements).
    InProgress,
    /// The given player completed a line.
    Win(Player),
    /// The board filled up with no completed line.
    Tie,
}

impl RoundOutcome {
    /// Returns true for `Win` and `Tie`.
    pub fn is_over(self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            RoundOutcome::Win(player) => Some(player),
            _ => None,
        }
    }

    /// Text written to the `Result:` line of a score record.
    pub fn result_text(self) -> String {
        match self {
            RoundOutcome::Win(player) => format!("Player {} wins", player),
            RoundOutcome::Tie => "It's a tie".to_string(),
            RoundOutcome::InProgress => "In progress".to_string(),
        }
    }
}

/// Whether the engine still accepts marks on the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Marks may be placed.
    #[default]
    InProgress,
    /// The round ended; placements are ignored until the board is reset.
    Ended,
}
