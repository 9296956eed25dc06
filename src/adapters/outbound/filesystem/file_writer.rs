use crate::shared::error::GraphError;
use crate::shared::security::{staging_dir, validate_write_target};
use crate::shared::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemWriter adapter for all-or-nothing file output
///
/// Content is written to a temp file next to the target, synced, and then
/// renamed over the target. A failure at any step leaves the previous file
/// (or its absence) untouched.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Atomically replaces the target with `content`
    ///
    /// # Errors
    /// Returns `GraphError::FileWriteError` if the parent directory is missing
    /// or any write step fails, and `GraphError::SecurityError` if the target
    /// is a symbolic link.
    pub fn write_atomic(&self, content: &[u8]) -> Result<()> {
        validate_write_target(&self.output_path)?;

        let write_error = |details: String| GraphError::FileWriteError {
            path: self.output_path.clone(),
            details,
        };

        let mut temp_file = NamedTempFile::new_in(staging_dir(&self.output_path))
            .map_err(|e| write_error(format!("cannot create temp file: {}", e)))?;

        temp_file
            .write_all(content)
            .map_err(|e| write_error(format!("cannot write temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| write_error(format!("cannot sync to disk: {}", e)))?;

        // The temp file is removed automatically if persisting fails
        temp_file
            .persist(&self.output_path)
            .map_err(|e| write_error(format!("cannot replace target: {}", e.error)))?;

        Ok(())
    }
}
