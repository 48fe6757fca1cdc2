//! Identifier extraction from pasted ID lists and spreadsheet rows.
//!
//! Accepts comma-separated or newline-separated lists as well as
//! tab-delimited rows whose second (two-column rows) or third column holds
//! the identifiers.

use crate::domain::entities::Identifier;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// One or more tab characters between spreadsheet columns.
static TAB_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\t+").unwrap());

/// Separators inside an identifier column: commas and any whitespace.
static TOKEN_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,\s]+").unwrap());

/// How a list of identifiers is joined back into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierJoin {
    #[default]
    Newline,
    Comma,
}

/// Extracts unique digits-only identifiers in first-seen order.
///
/// Lines without tabs are split on commas; every trimmed segment that is
/// entirely ASCII digits is kept. Lines with tabs are treated as spreadsheet
/// rows and only their identifier column (see [`identifier_column`]) is
/// token-split on commas and whitespace.
///
/// # Examples
///
/// ```ignore
/// let ids = extract_identifiers("123, 456\n123\nabc");
/// assert_eq!(ids.iter().map(|i| i.as_str()).collect::<Vec<_>>(), ["123", "456"]);
/// ```
pub fn extract_identifiers(text: &str) -> Vec<Identifier> {
    let mut seen = HashSet::new();
    let mut identifiers = Vec::new();

    for line in text.lines() {
        for token in line_tokens(line) {
            match Identifier::parse(token) {
                Some(identifier) => {
                    if seen.insert(identifier.clone()) {
                        identifiers.push(identifier);
                    }
                }
                None => debug!(segment = token, "Skipping non-numeric segment"),
            }
        }
    }

    identifiers
}

fn line_tokens(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        identifier_column(&split_columns(line))
            .map(|field| split_identifier_field(field).collect())
            .unwrap_or_default()
    } else {
        line.split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}

/// Splits a spreadsheet row into trimmed columns on runs of tabs.
///
/// Trailing whitespace is dropped first, so a row ending in a tab does not
/// gain an empty last column. Leading tabs still yield an empty first column.
pub fn split_columns(line: &str) -> Vec<&str> {
    TAB_RUN.split(line.trim_end()).map(str::trim).collect()
}

/// Picks the identifier column of a spreadsheet row.
///
/// `name<TAB>ids` rows carry identifiers in the second column;
/// `sheet<TAB>product<TAB>ids<TAB>...` rows in the third, whatever follows.
/// A single column is taken as identifiers; an empty row has none.
pub fn identifier_column<'a>(columns: &[&'a str]) -> Option<&'a str> {
    match columns {
        [] => None,
        [ids] | [_, ids] | [_, _, ids, ..] => Some(*ids),
    }
}

/// Splits an identifier column into non-empty tokens.
///
/// Tokens are not validated here; see [`Identifier::parse`].
pub fn split_identifier_field(field: &str) -> impl Iterator<Item = &str> {
    TOKEN_SEPARATOR
        .split(field)
        .filter(|token| !token.is_empty())
}

/// Joins identifiers for display or copying.
pub fn join_identifiers(identifiers: &[Identifier], join: IdentifierJoin) -> String {
    let separator = match join {
        IdentifierJoin::Newline => "\n",
        IdentifierJoin::Comma => ",",
    };

    identifiers
        .iter()
        .map(Identifier::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}
