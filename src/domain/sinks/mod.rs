//! Output boundary traits implemented by the infrastructure layer.

pub mod export_sink;

pub use export_sink::ExportSink;

#[cfg(test)]
pub use export_sink::MockExportSink;
