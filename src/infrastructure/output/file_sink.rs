//! Directory-backed export sink.

use crate::domain::sinks::ExportSink;
use crate::error::AppError;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Writes export files into a directory, replacing existing files.
///
/// The directory is created on first save if it does not exist.
#[derive(Debug, Clone)]
pub struct FileExportSink {
    dir: PathBuf,
}

impl FileExportSink {
    /// Creates a sink rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        debug!(dir = %dir.display(), "Using file export sink");
        Self { dir }
    }
}

impl ExportSink for FileExportSink {
    fn save(&self, file_name: &str, contents: &str) -> Result<String, AppError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| AppError::output(self.dir.display().to_string(), e))?;

        let path = self.dir.join(file_name);
        let location = path.display().to_string();

        fs::write(&path, contents).map_err(|e| AppError::output(location.clone(), e))?;

        info!(path = %location, bytes = contents.len(), "Wrote export file");
        Ok(location)
    }
}
