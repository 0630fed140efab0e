//! In-memory score store.

use super::{ScoreStore, StoreError};
use crate::record::ScoreFile;
use crate::score::ScoreRecord;
use tracing::debug;

/// Keeps the last saved record in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    current: Option<ScoreFile>,
    saves: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved record, if any.
    pub fn current(&self) -> Option<&ScoreFile> {
        self.current.as_ref()
    }

    /// Number of successful saves since creation.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> ScoreRecord {
        self.current
            .as_ref()
            .map(|file| *file.score())
            .unwrap_or_default()
    }

    fn save(
        &mut self,
        record: &ScoreRecord,
        result: &str,
        _moves_played: u32,
    ) -> Result<(), StoreError> {
        debug!(?record, result, "Saving score in memory");
        self.current = Some(ScoreFile::new(*record, result));
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.current = None;
        Ok(())
    }
}
