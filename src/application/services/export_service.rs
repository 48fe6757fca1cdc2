//! Export-row assembly and saving.

use std::sync::Arc;

use crate::domain::entities::{ArtworkRecord, EXPORT_HEADER, ExportKind, ExportRow, OperatorIdentity};
use crate::domain::sinks::ExportSink;
use crate::error::AppError;
use crate::utils::tsv::write_tsv;
use tracing::info;

/// Maps records to export rows attributed to one operator.
///
/// # Errors
///
/// Returns [`AppError::NoValidIdentifiers`] for an empty record list and
/// [`AppError::MissingField`] when either identity field is blank.
pub fn build_export_rows(
    records: &[ArtworkRecord],
    user_id: &str,
    user_name: &str,
) -> Result<Vec<ExportRow>, AppError> {
    if records.is_empty() {
        return Err(AppError::NoValidIdentifiers);
    }

    let operator = OperatorIdentity::new(user_id, user_name)?;

    Ok(records
        .iter()
        .map(|record| ExportRow::from_record(record, &operator))
        .collect())
}

/// Serializes rows with the fixed export header.
pub fn serialize_export(rows: &[ExportRow]) -> String {
    write_tsv(&EXPORT_HEADER, rows.iter().map(ExportRow::fields))
}

/// Result of a saved export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub file_name: &'static str,
    pub location: String,
    pub rows: usize,
}

/// Service for turning records into a saved export file.
pub struct ExportService<S: ExportSink> {
    sink: Arc<S>,
}

impl<S: ExportSink> ExportService<S> {
    /// Creates a new export service writing to `sink`.
    pub fn new(sink: Arc<S>) -> Self {
        Self { sink }
    }

    /// Builds the TSV content without saving it.
    ///
    /// # Errors
    ///
    /// See [`build_export_rows`].
    pub fn render(
        &self,
        records: &[ArtworkRecord],
        operator: &OperatorIdentity,
    ) -> Result<String, AppError> {
        let rows = build_export_rows(records, &operator.user_id, &operator.user_name)?;
        Ok(serialize_export(&rows))
    }

    /// Builds and saves the export under the file name of `kind`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`build_export_rows`], or [`AppError::Output`]
    /// when the sink fails.
    pub fn export(
        &self,
        records: &[ArtworkRecord],
        operator: &OperatorIdentity,
        kind: ExportKind,
    ) -> Result<ExportOutcome, AppError> {
        let contents = self.render(records, operator)?;
        let file_name = kind.file_name();
        let location = self.sink.save(file_name, &contents)?;

        info!(file_name, location = %location, rows = records.len(), "Export saved");

        Ok(ExportOutcome {
            file_name,
            location,
            rows: records.len(),
        })
    }
}
