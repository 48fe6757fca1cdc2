//! Sink trait for saving generated export files.

use crate::error::AppError;

/// Destination for a finished export file.
///
/// The pipeline never touches the filesystem itself; the presentation layer
/// picks a sink and the export service hands it the serialized content.
///
/// # Implementations
///
/// - [`crate::infrastructure::output::FileExportSink`] - Writes into a directory
/// - [`crate::infrastructure::output::StdoutExportSink`] - Prints to stdout
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ExportSink {
    /// Saves `contents` under `file_name`.
    ///
    /// # Returns
    ///
    /// A human-readable description of where the content went (a path, or
    /// `"stdout"`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Output`] on I/O failure.
    fn save(&self, file_name: &str, contents: &str) -> Result<String, AppError>;
}
