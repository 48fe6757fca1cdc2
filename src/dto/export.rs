//! DTO for a saved export.

use crate::application::services::ExportOutcome;
use serde::Serialize;

/// Where an export went and how many rows it held.
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub file_name: String,
    pub location: String,
    pub rows: usize,
}

impl From<ExportOutcome> for ExportResponse {
    fn from(outcome: ExportOutcome) -> Self {
        Self {
            file_name: outcome.file_name.to_string(),
            location: outcome.location,
            rows: outcome.rows,
        }
    }
}
