//! Export sinks for finished TSV files.
//!
//! Provides two [`crate::domain::sinks::ExportSink`] implementations:
//! - [`FileExportSink`] - Writes the file into an output directory
//! - [`StdoutExportSink`] - Prints the content, for piping into other tools

mod file_sink;
mod stdout_sink;

pub use file_sink::FileExportSink;
pub use stdout_sink::StdoutExportSink;
