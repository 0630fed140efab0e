//! Text codec for persisted score records.
//!
//! A record is exactly three lines:
//!
//! ```text
//! Player: 2
//! Computer: 1
//! Result: Player X wins
//! ```

use crate::score::ScoreRecord;
use derive_getters::Getters;
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

const PLAYER_KEY: &str = "Player";
const COMPUTER_KEY: &str = "Computer";
const RESULT_KEY: &str = "Result";

/// A score record together with the result of the round that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ScoreFile {
    /// Scores after the round.
    score: ScoreRecord,
    /// Human-readable result of the round.
    result: String,
}

impl ScoreFile {
    /// Creates a record. Line breaks in `result` are replaced by spaces so
    /// the record stays three lines long.
    pub fn new(score: ScoreRecord, result: impl Into<String>) -> Self {
        let result: String = result.into();
        Self {
            score,
            result: result.replace(['\r', '\n'], " "),
        }
    }
}

impl std::fmt::Display for ScoreFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}: {}", PLAYER_KEY, self.score.player_wins())?;
        writeln!(f, "{}: {}", COMPUTER_KEY, self.score.computer_wins())?;
        writeln!(f, "{}: {}", RESULT_KEY, self.result)
    }
}

/// Why a record could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Malformed score record: {}", reason)]
pub struct RecordError {
    /// What was wrong with the text.
    pub reason: String,
}

impl RecordError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Splits `line` on the first `": "` and checks the key.
fn field<'a>(line: Option<&'a str>, key: &str) -> Result<&'a str, RecordError> {
    let line = line.ok_or_else(|| RecordError::new(format!("missing '{}' line", key)))?;
    match line.split_once(": ") {
        Some((k, value)) if k == key => Ok(value),
        _ => Err(RecordError::new(format!("expected '{}: ', found '{}'", key, line))),
    }
}

fn count(line: Option<&str>, key: &str) -> Result<u32, RecordError> {
    let value = field(line, key)?;
    value
        .trim()
        .parse()
        .map_err(|e| RecordError::new(format!("bad {} count '{}': {}", key, value, e)))
}

impl FromStr for ScoreFile {
    type Err = RecordError;

    #[instrument(skip(s))]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let player_wins = count(lines.next(), PLAYER_KEY)?;
        let computer_wins = count(lines.next(), COMPUTER_KEY)?;
        let result = field(lines.next(), RESULT_KEY)?;
        if lines.any(|l| !l.trim().is_empty()) {
            return Err(RecordError::new("unexpected content after 'Result' line"));
        }
        Ok(Self::new(ScoreRecord::new(player_wins, computer_wins), result))
    }
}
