//! Pipeline services for the application layer.

pub mod export_service;
pub mod normalizer_service;

pub use export_service::{ExportOutcome, ExportService, build_export_rows, serialize_export};
pub use normalizer_service::{NormalizerService, parse_export};
