//! Single-file score store.

use super::{FILE_STEM, ScoreStore, StoreError};
use crate::record::ScoreFile;
use crate::score::ScoreRecord;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Keeps the latest record in `<dir>/tictactoe_scores.txt`.
#[derive(Debug, Clone)]
pub struct SlotStore {
    path: PathBuf,
}

impl SlotStore {
    /// Creates a store whose slot lives in `dir`.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(format!("{}.txt", FILE_STEM));
        debug!(path = %path.display(), "Slot store created");
        Self { path }
    }

    /// Location of the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads and decodes a record, treating every failure as "no record".
pub(super) fn read_record(path: &Path) -> Option<ScoreFile> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No score record");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Unreadable score record, using defaults");
            return None;
        }
    };
    match text.parse::<ScoreFile>() {
        Ok(file) => Some(file),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring malformed score record");
            None
        }
    }
}

/// Writes a record, creating the parent directory if needed.
pub(super) fn write_record(path: &Path, file: &ScoreFile) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::io("create", parent, e))?;
    }
    std::fs::write(path, file.to_string()).map_err(|e| StoreError::io("write", path, e))
}

/// Removes `path`; a missing file is fine.
pub(super) fn remove_record(path: &Path) -> Result<(), StoreError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StoreError::io("remove", path, e)),
    }
}

impl ScoreStore for SlotStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> ScoreRecord {
        let score = read_record(&self.path)
            .map(|file| *file.score())
            .unwrap_or_default();
        info!(?score, "Scores loaded");
        score
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save(
        &mut self,
        record: &ScoreRecord,
        result: &str,
        _moves_played: u32,
    ) -> Result<(), StoreError> {
        write_record(&self.path, &ScoreFile::new(*record, result))?;
        info!("Scores saved");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&mut self) -> Result<(), StoreError> {
        remove_record(&self.path)?;
        info!("Scores cleared");
        Ok(())
    }
}
