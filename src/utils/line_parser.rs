//! Parsing of tab-delimited name/identifier rows.
//!
//! Two shapes are accepted:
//!
//! - `name<TAB>ids`
//! - `line sheet name<TAB>product type<TAB>ids`
//!
//! The identifier column may hold several IDs separated by commas or
//! whitespace; each one is paired with the row's display name.

use super::identifiers::{identifier_column, split_columns, split_identifier_field};
use super::keywords::apply_keyword_substitutions;
use super::non_english::clean_non_english;
use super::slug::has_slug_text;
use crate::domain::entities::Identifier;
use crate::domain::options::NormalizerOptions;
use std::collections::HashSet;
use tracing::debug;

/// Cleans one free-text field: non-English prefix removal, then keyword
/// substitution when enabled. The result is trimmed.
pub fn clean_field(text: &str, options: &NormalizerOptions) -> String {
    let cleaned = clean_non_english(text.trim());
    let substituted = if options.keyword_substitutions {
        apply_keyword_substitutions(&cleaned)
    } else {
        cleaned
    };
    substituted.trim().to_string()
}

/// Resolves the display name of one row from its name columns.
///
/// Returns `None` when every name column cleans down to nothing, or when the
/// joined name has no word characters to build a slug from.
pub fn resolve_display_name(columns: &[&str], options: &NormalizerOptions) -> Option<String> {
    let parts: Vec<String> = columns
        .iter()
        .map(|column| clean_field(column, options))
        .filter(|part| !part.is_empty())
        .collect();

    let name = parts.join(" ");
    has_slug_text(&name, options.apostrophes).then_some(name)
}

/// Parses rows into `(identifier, display name)` pairs.
///
/// Rows with fewer than two columns, or whose name columns are empty after
/// cleaning, are skipped. Pairs are deduplicated by identifier; the first row
/// that mentions an identifier wins.
pub fn parse_lines(text: &str, options: &NormalizerOptions) -> Vec<(Identifier, String)> {
    let mut seen = HashSet::new();
    let mut pairs = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let columns = split_columns(line);
        let name_columns = match columns.as_slice() {
            [name, _] => vec![*name],
            [sheet, product, _, ..] => vec![*sheet, *product],
            _ => {
                debug!(line = line_no + 1, "Skipping row with fewer than two columns");
                continue;
            }
        };
        let id_field = identifier_column(&columns).unwrap_or_default();

        let Some(display_name) = resolve_display_name(&name_columns, options) else {
            debug!(line = line_no + 1, "Skipping row without a usable name");
            continue;
        };

        for token in split_identifier_field(id_field) {
            let Some(identifier) = Identifier::parse(token) else {
                debug!(line = line_no + 1, token, "Skipping non-numeric identifier");
                continue;
            };

            if seen.insert(identifier.clone()) {
                pairs.push((identifier, display_name.clone()));
            }
        }
    }

    pairs
}
