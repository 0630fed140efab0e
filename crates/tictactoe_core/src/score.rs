//! Running win tally for the human and the computer.

use crate::types::Player;
use derive_getters::Getters;
use derive_new::new;
use tracing::instrument;

/// Wins per side since the last restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters, new)]
pub struct ScoreRecord {
    /// Rounds won by the human (X).
    player_wins: u32,
    /// Rounds won by the computer (O).
    computer_wins: u32,
}

impl ScoreRecord {
    /// Credits a win to whichever side controls `winner`.
    #[instrument]
    pub fn record_win(&mut self, winner: Player) {
        match winner {
            Player::X => self.player_wins = self.player_wins.saturating_add(1),
            Player::O => self.computer_wins = self.computer_wins.saturating_add(1),
        }
    }

    /// Wins credited to `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.player_wins,
            Player::O => self.computer_wins,
        }
    }

    /// Zeroes both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
