//! Persistence error types.

use derive_more::{Display, Error};
use std::path::Path;
use tracing::instrument;

/// Score persistence error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Score store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Wraps an I/O failure on `path`.
    #[track_caller]
    pub fn io(action: &str, path: &Path, err: std::io::Error) -> Self {
        Self::new(format!("Failed to {} '{}': {}", action, path.display(), err))
    }
}
