//! Tic-tac-toe against a random opponent, with a persistent score tally.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, the turn, the round phase
//!   and the score, and reports a [`RoundOutcome`] for every placement.
//! - **Rules**: pure win/draw checks over a [`Board`].
//! - **Store**: [`ScoreStore`] persists the score as a three-line text
//!   record, either in a single slot or as versioned files.
//! - **Timer**: [`ResetTimer`] clears a finished board after a delay and can
//!   be cancelled by a restart.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, MemoryStore, Player, RoundOutcome};
//!
//! # fn example() -> Result<(), tictactoe_core::StoreError> {
//! let mut engine = GameEngine::new(MemoryStore::new());
//! assert_eq!(engine.place_mark(1, 1)?, RoundOutcome::InProgress);
//! assert_eq!(engine.current_player(), Player::O);
//! engine.computer_move()?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod engine;
mod outcome;
mod position;
mod record;
mod score;
mod store;
mod timer;
mod types;

pub mod rules;

// Crate-level exports - Domain types
pub use position::Position;
pub use rules::Line;
pub use types::{Board, Player, Square};

// Crate-level exports - Engine
pub use engine::GameEngine;
pub use outcome::{Phase, RoundOutcome};
pub use score::ScoreRecord;

// Crate-level exports - Persistence
pub use record::{RecordError, ScoreFile};
pub use store::{
    FILE_STEM, MemoryStore, ScoreStore, SlotStore, StoreError, StoreLayout, VersionedStore,
    open_store,
};

// Crate-level exports - Configuration and scheduling
pub use config::{ConfigError, GameConfig};
pub use timer::{ResetDue, ResetTimer};
