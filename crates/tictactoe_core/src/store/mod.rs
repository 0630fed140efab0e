//! Durable score records across process restarts.
//!
//! Two file layouts exist and are picked explicitly through
//! [`StoreLayout`]; they are never mixed in one directory by this crate.

mod error;
mod memory;
mod slot;
mod versioned;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use slot::SlotStore;
pub use versioned::VersionedStore;

use crate::score::ScoreRecord;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, instrument};

/// Base name shared by every score file.
pub const FILE_STEM: &str = "tictactoe_scores";

/// Storage for the latest [`ScoreRecord`].
///
/// Implementations are single-threaded and not reentrant.
pub trait ScoreStore: std::fmt::Debug {
    /// Reads the persisted record.
    ///
    /// Missing or malformed records yield `ScoreRecord::default()`; this
    /// never fails.
    fn load(&self) -> ScoreRecord;

    /// Persists `record` with the human-readable `result` of the round.
    ///
    /// `moves_played` is the cumulative number of marks placed by the
    /// engine; layouts that do not version their records ignore it.
    fn save(
        &mut self,
        record: &ScoreRecord,
        result: &str,
        moves_played: u32,
    ) -> Result<(), StoreError>;

    /// Deletes every persisted record. Nothing to delete is not an error.
    fn clear(&mut self) -> Result<(), StoreError>;

    /// Highest `moves_played` already on record. An engine resumes counting
    /// from here so tagged records keep increasing across restarts.
    fn moves_recorded(&self) -> u32 {
        0
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> ScoreRecord {
        (**self).load()
    }

    fn save(
        &mut self,
        record: &ScoreRecord,
        result: &str,
        moves_played: u32,
    ) -> Result<(), StoreError> {
        (**self).save(record, result, moves_played)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        (**self).clear()
    }

    fn moves_recorded(&self) -> u32 {
        (**self).moves_recorded()
    }
}

/// How score records are laid out on disk.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreLayout {
    /// One file, overwritten on every save.
    #[default]
    #[display("slot")]
    Slot,
    /// One file per save, tagged with the move count; the newest wins.
    #[display("versioned")]
    Versioned,
}

/// Opens the store for `layout` rooted at `dir`.
///
/// With `persist` off an in-memory store is returned and nothing touches
/// the filesystem.
#[instrument]
pub fn open_store(layout: StoreLayout, dir: PathBuf, persist: bool) -> Box<dyn ScoreStore> {
    if !persist {
        info!("Score persistence disabled");
        return Box::new(MemoryStore::new());
    }
    info!(%layout, dir = %dir.display(), "Opening score store");
    match layout {
        StoreLayout::Slot => Box::new(SlotStore::new(dir)),
        StoreLayout::Versioned => Box::new(VersionedStore::new(dir)),
    }
}
