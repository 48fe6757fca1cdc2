//! DTOs for the record preview table.

use crate::domain::entities::ArtworkRecord;
use serde::Serialize;

/// Preview of parsed records with summary counts.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub summary: PreviewSummary,
    pub items: Vec<PreviewItem>,
}

/// Counts shown above the preview table.
#[derive(Debug, Serialize)]
pub struct PreviewSummary {
    pub total: usize,
    /// Records whose slug carries a duplicate suffix.
    pub suffixed: usize,
}

/// One row of the preview table.
#[derive(Debug, Serialize)]
pub struct PreviewItem {
    pub identifier: String,
    pub display_name: String,
    pub slug: String,
}

impl From<&ArtworkRecord> for PreviewItem {
    fn from(record: &ArtworkRecord) -> Self {
        Self {
            identifier: record.identifier.to_string(),
            display_name: record.display_name.clone(),
            slug: record.slug.clone(),
        }
    }
}

impl From<&[ArtworkRecord]> for PreviewResponse {
    fn from(records: &[ArtworkRecord]) -> Self {
        let suffixed = records
            .iter()
            .filter(|record| record.slug.contains(crate::utils::slug::DUPLICATE_SUFFIX))
            .count();

        Self {
            summary: PreviewSummary {
                total: records.len(),
                suffixed,
            },
            items: records.iter().map(PreviewItem::from).collect(),
        }
    }
}
