mod common;

use artwork_normalizer::prelude::*;
use artwork_normalizer::utils::identifiers::{IdentifierJoin, join_identifiers};

#[test]
fn test_unique_identifiers_from_mixed_paste() {
    let service = common::service();
    let result = service
        .unique_identifiers("1001, 1002\n1003\n\n1002,1004 , 1001\n")
        .unwrap();

    assert_eq!(common::ids(&result), ["1001", "1002", "1003", "1004"]);
}

#[test]
fn test_unique_identifiers_from_spreadsheet_rows() {
    let service = common::service();
    let result = service.unique_identifiers(common::PASTED_ROWS).unwrap();

    assert_eq!(
        common::ids(&result),
        ["1001", "1002", "1003", "1004", "1005"]
    );
}

#[test]
fn test_every_identifier_is_digits_only() {
    let inputs = [
        "12, ab, 3x, 4 5, , 006",
        "Name\t1 2 x3\nOther\tfoo,9",
        "日本語, 7, ٣, １",
        "\t\t\n,,,\n",
    ];

    for input in inputs {
        for identifier in extract_identifiers(input) {
            let value = identifier.as_str();
            assert!(!value.is_empty());
            assert!(value.bytes().all(|b| b.is_ascii_digit()), "{value:?}");
        }
    }
}

#[test]
fn test_extraction_is_idempotent_on_joined_output() {
    let first = extract_identifiers(common::PASTED_ROWS);

    for join in [IdentifierJoin::Newline, IdentifierJoin::Comma] {
        let joined = join_identifiers(&first, join);
        assert_eq!(extract_identifiers(&joined), first);
    }
}

#[test]
fn test_empty_input_and_no_valid_identifiers_are_distinct() {
    let service = common::service();

    let empty = service.unique_identifiers("   \n\t").unwrap_err();
    assert!(matches!(empty, AppError::EmptyInput { .. }));

    let none = service.unique_identifiers("abc, def\nghi").unwrap_err();
    assert!(matches!(none, AppError::NoValidIdentifiers));

    assert_ne!(empty.code(), none.code());
}

#[test]
fn test_wide_rows_read_same_identifier_column_as_parser() {
    let text = "Line\tMug\t10\t20\nPoster\t30";
    let service = common::service();

    let identifiers = service.unique_identifiers(text).unwrap();
    let parsed: Vec<Identifier> = service
        .parse(text)
        .unwrap()
        .into_iter()
        .map(|(identifier, _)| identifier)
        .collect();

    assert_eq!(common::ids(&identifiers), ["10", "30"]);
    assert_eq!(identifiers, parsed);
}
