//! Export row, operator identity and export kind.

use super::ArtworkRecord;
use crate::error::AppError;
use serde::Serialize;
use validator::Validate;

/// Column names of the export file, in output order.
pub const EXPORT_HEADER: [&str; 8] = [
    "id",
    "user_id",
    "user_name",
    "status",
    "art_work_name",
    "art_work_url_name",
    "sell_design_approval_status",
    "is_public",
];

pub const DEFAULT_STATUS: &str = "N";
pub const DEFAULT_SELL_DESIGN_APPROVAL_STATUS: &str = "P";
pub const DEFAULT_IS_PUBLIC: u8 = 1;

/// One line of the tab-separated export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub status: &'static str,
    pub art_work_name: String,
    pub art_work_url_name: String,
    pub sell_design_approval_status: &'static str,
    pub is_public: u8,
}

impl ExportRow {
    /// Builds a row from a record, filling the constant columns.
    pub fn from_record(record: &ArtworkRecord, operator: &OperatorIdentity) -> Self {
        Self {
            id: record.identifier.to_string(),
            user_id: operator.user_id.clone(),
            user_name: operator.user_name.clone(),
            status: DEFAULT_STATUS,
            art_work_name: record.display_name.clone(),
            art_work_url_name: record.slug.clone(),
            sell_design_approval_status: DEFAULT_SELL_DESIGN_APPROVAL_STATUS,
            is_public: DEFAULT_IS_PUBLIC,
        }
    }

    /// Field values in [`EXPORT_HEADER`] order.
    pub fn fields(&self) -> [String; 8] {
        [
            self.id.clone(),
            self.user_id.clone(),
            self.user_name.clone(),
            self.status.to_string(),
            self.art_work_name.clone(),
            self.art_work_url_name.clone(),
            self.sell_design_approval_status.to_string(),
            self.is_public.to_string(),
        ]
    }
}

/// The operator the exported rows are attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct OperatorIdentity {
    #[validate(length(min = 1))]
    pub user_id: String,

    #[validate(length(min = 1))]
    pub user_name: String,
}

impl OperatorIdentity {
    /// Trims both fields and rejects blanks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingField`] naming the first blank field.
    pub fn new(user_id: &str, user_name: &str) -> Result<Self, AppError> {
        let identity = Self {
            user_id: user_id.trim().to_string(),
            user_name: user_name.trim().to_string(),
        };

        if let Err(errors) = identity.validate() {
            let field_errors = errors.field_errors();
            let field = if field_errors.contains_key("user_id") {
                "user_id"
            } else {
                "user_name"
            };
            return Err(AppError::missing_field(field));
        }

        Ok(identity)
    }
}

/// Which export flow produced a file; decides the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Standard,
    Amended,
}

impl ExportKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ExportKind::Standard => "artwork_data.tsv",
            ExportKind::Amended => "amended_artwork_data.tsv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Identifier;

    #[test]
    fn test_row_from_record() {
        let record = ArtworkRecord::new(
            Identifier::parse("123").unwrap(),
            "Sunset".to_string(),
            "sunset".to_string(),
        );
        let operator = OperatorIdentity::new("42", "Jo").unwrap();
        let row = ExportRow::from_record(&record, &operator);

        assert_eq!(
            row.fields(),
            ["123", "42", "Jo", "N", "Sunset", "sunset", "P", "1"].map(String::from)
        );
    }

    #[test]
    fn test_operator_trims_fields() {
        let operator = OperatorIdentity::new("  42 ", "\tJo Bloggs\n").unwrap();
        assert_eq!(operator.user_id, "42");
        assert_eq!(operator.user_name, "Jo Bloggs");
    }

    #[test]
    fn test_operator_missing_user_id() {
        let err = OperatorIdentity::new("   ", "Jo").unwrap_err();
        assert!(matches!(err, AppError::MissingField { field: "user_id" }));
    }

    #[test]
    fn test_operator_missing_user_name() {
        let err = OperatorIdentity::new("42", "").unwrap_err();
        assert!(matches!(err, AppError::MissingField { field: "user_name" }));
    }

    #[test]
    fn test_export_kind_file_names() {
        assert_eq!(ExportKind::Standard.file_name(), "artwork_data.tsv");
        assert_eq!(ExportKind::Amended.file_name(), "amended_artwork_data.tsv");
    }
}
