//! Append-only score store: one file per save, newest wins.
//!
//! Records accumulate until [`ScoreStore::clear`] removes them all.

use super::slot::{read_record, remove_record, write_record};
use super::{FILE_STEM, ScoreStore, StoreError};
use crate::record::ScoreFile;
use crate::score::ScoreRecord;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, instrument, warn};

/// Writes `<dir>/tictactoe_scores_<moves>.txt` on every save.
#[derive(Debug, Clone)]
pub struct VersionedStore {
    dir: PathBuf,
}

/// A record file found in the store directory.
#[derive(Debug, Clone)]
struct Entry {
    path: PathBuf,
    tag: u32,
    modified: SystemTime,
}

impl VersionedStore {
    /// Creates a store writing into `dir`.
    #[instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the record tagged `tag`.
    pub fn path_for(&self, tag: u32) -> PathBuf {
        self.dir.join(format!("{}_{}.txt", FILE_STEM, tag))
    }

    /// Paths of every record currently on disk, oldest first.
    pub fn records(&self) -> Result<Vec<PathBuf>, StoreError> {
        Ok(self.entries()?.into_iter().map(|e| e.path).collect())
    }

    /// Parses the tag out of a `tictactoe_scores_<n>.txt` file name.
    fn parse_tag(name: &str) -> Option<u32> {
        name.strip_prefix(FILE_STEM)?
            .strip_prefix('_')?
            .strip_suffix(".txt")?
            .parse()
            .ok()
    }

    /// Lists record files ordered by modification time, then tag.
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn entries(&self) -> Result<Vec<Entry>, StoreError> {
        let read_dir = match std::fs::read_dir(&self.dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io("list", &self.dir, e)),
        };

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| StoreError::io("list", &self.dir, e))?;
            let name = dir_entry.file_name();
            let Some(tag) = name.to_str().and_then(Self::parse_tag) else {
                continue;
            };
            let modified = dir_entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            entries.push(Entry {
                path: dir_entry.path(),
                tag,
                modified,
            });
        }
        entries.sort_by_key(|e| (e.modified, e.tag));
        debug!(count = entries.len(), "Score records found");
        Ok(entries)
    }
}

impl ScoreStore for VersionedStore {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self) -> ScoreRecord {
        let latest = match self.entries() {
            Ok(mut entries) => entries.pop(),
            Err(e) => {
                warn!(error = %e, "Cannot list score records, using defaults");
                None
            }
        };
        let score = latest
            .and_then(|entry| {
                debug!(path = %entry.path.display(), tag = entry.tag, "Reading latest record");
                read_record(&entry.path)
            })
            .map(|file| *file.score())
            .unwrap_or_default();
        info!(?score, "Scores loaded");
        score
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn save(
        &mut self,
        record: &ScoreRecord,
        result: &str,
        moves_played: u32,
    ) -> Result<(), StoreError> {
        let path = self.path_for(moves_played);
        write_record(&path, &ScoreFile::new(*record, result))?;
        info!(path = %path.display(), "Scores saved");
        Ok(())
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn clear(&mut self) -> Result<(), StoreError> {
        let entries = self.entries()?;
        for entry in &entries {
            remove_record(&entry.path)?;
        }
        info!(removed = entries.len(), "Scores cleared");
        Ok(())
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn moves_recorded(&self) -> u32 {
        match self.entries() {
            Ok(entries) => entries.iter().map(|e| e.tag).max().unwrap_or(0),
            Err(e) => {
                warn!(error = %e, "Cannot list score records, counting from zero");
                0
            }
        }
    }
}
