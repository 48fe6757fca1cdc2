//! Export sink that prints to standard output.

use crate::domain::sinks::ExportSink;
use crate::error::AppError;
use std::io::Write;

/// Prints export content to stdout instead of saving a file.
///
/// Useful for piping the TSV into another tool or copying it from the
/// terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutExportSink;

impl StdoutExportSink {
    pub fn new() -> Self {
        Self
    }
}

impl ExportSink for StdoutExportSink {
    fn save(&self, file_name: &str, contents: &str) -> Result<String, AppError> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(contents.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| AppError::output(format!("stdout ({file_name})"), e))?;

        Ok("stdout".to_string())
    }
}
