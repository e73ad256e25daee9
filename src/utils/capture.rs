//! Scoped capture file for editor mode

use crate::error::{Result, SearchError};
use std::path::Path;
use std::process::Stdio;
use tempfile::NamedTempFile;
use tracing::debug;

/// Temporary file that collects a run's combined output.
///
/// The file is removed when the value is dropped, whichever way the
/// caller leaves scope.
#[derive(Debug)]
pub struct CaptureFile {
    file: NamedTempFile,
}

impl CaptureFile {
    /// Create an empty capture file in the system temp directory
    pub fn new() -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("fsearch-")
            .suffix(".txt")
            .tempfile()
            .map_err(|e| SearchError::file_system("create", std::env::temp_dir(), e))?;

        debug!("Created capture file: {}", file.path().display());
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Stdout and stderr handles that both append to the capture file
    pub fn stdio(&self) -> Result<(Stdio, Stdio)> {
        let clone = || {
            self.file
                .as_file()
                .try_clone()
                .map_err(|e| SearchError::file_system("duplicate handle", self.path(), e))
        };
        Ok((Stdio::from(clone()?), Stdio::from(clone()?)))
    }
}
