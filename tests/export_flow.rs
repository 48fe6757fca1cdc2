mod common;

use artwork_normalizer::infrastructure::output::FileExportSink;
use artwork_normalizer::prelude::*;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_export_writes_tsv_file() {
    let temp = TempDir::new().unwrap();
    let records = common::service().build_records("Line Name\tCase\t123, 124").unwrap();

    let service = ExportService::new(Arc::new(FileExportSink::new(temp.path())));
    let outcome = service
        .export(&records, &common::operator(), ExportKind::Standard)
        .unwrap();

    assert_eq!(outcome.file_name, "artwork_data.tsv");
    assert_eq!(outcome.rows, 2);

    let contents = fs::read_to_string(temp.path().join("artwork_data.tsv")).unwrap();
    assert_eq!(
        contents,
        format!(
            "{}\n123\t42\tJo Bloggs\tN\tLine Name Case\tline-name-case\tP\t1\n\
             124\t42\tJo Bloggs\tN\tLine Name Case\tline-name-case-atwgp1\tP\t1\n",
            common::EXPORT_HEADER_LINE
        )
    );
}

#[test]
fn test_export_of_zero_records_reports_no_valid_identifiers() {
    let temp = TempDir::new().unwrap();
    let service = ExportService::new(Arc::new(FileExportSink::new(temp.path())));

    let err = service
        .export(&[], &common::operator(), ExportKind::Standard)
        .unwrap_err();

    assert!(matches!(err, AppError::NoValidIdentifiers));
    assert!(!temp.path().join("artwork_data.tsv").exists());
}

#[test]
fn test_build_export_rows_requires_identity() {
    let records = common::service().build_records("Sun\t1").unwrap();

    let err = build_export_rows(&records, "42", "  ").unwrap_err();
    assert!(matches!(err, AppError::MissingField { field: "user_name" }));
}

#[test]
fn test_export_then_amend_round() {
    let temp = TempDir::new().unwrap();
    let service = common::service();
    let exporter = ExportService::new(Arc::new(FileExportSink::new(temp.path())));

    let records = service.build_records("Sun Print\t1\nMoon Print\t2").unwrap();
    exporter
        .export(&records, &common::operator(), ExportKind::Standard)
        .unwrap();

    // The operator renames the second artwork by hand.
    let exported = fs::read_to_string(temp.path().join("artwork_data.tsv")).unwrap();
    let edited = exported.replace("\tMoon Print\t", "\tSun Print!\t");

    let amended = service.amend_records(&edited).unwrap();
    assert_eq!(common::slugs(&amended), ["sun-print", "sun-print-atwgp1"]);

    let outcome = exporter
        .export(&amended, &common::operator(), ExportKind::Amended)
        .unwrap();
    assert_eq!(outcome.file_name, "amended_artwork_data.tsv");

    let contents = fs::read_to_string(temp.path().join("amended_artwork_data.tsv")).unwrap();
    assert!(contents.starts_with(common::EXPORT_HEADER_LINE));
    assert!(contents.contains("2\t42\tJo Bloggs\tN\tSun Print!\tsun-print-atwgp1\tP\t1\n"));
}

#[test]
fn test_amend_rejects_foreign_file() {
    let err = common::service()
        .amend_records("name\tid\nSun\t1\n")
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { .. }));
    assert_eq!(err.code(), "validation_error");
}
