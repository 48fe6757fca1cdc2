//! Pipeline orchestration for pasted identifier and name lists.

use crate::domain::entities::{ArtworkRecord, EXPORT_HEADER, Identifier};
use crate::domain::options::NormalizerOptions;
use crate::error::AppError;
use crate::utils::identifiers::extract_identifiers;
use crate::utils::line_parser::{clean_field, parse_lines};
use crate::utils::slug::{SlugAllocator, has_slug_text};
use crate::utils::tsv::read_tsv;
use serde_json::json;
use std::collections::HashSet;
use tracing::{debug, info};

/// Runs the normalization pipeline with a fixed set of options.
///
/// Stateless apart from the options: every call builds its own slug counters,
/// so results never leak between invocations.
#[derive(Debug, Clone, Default)]
pub struct NormalizerService {
    options: NormalizerOptions,
}

impl NormalizerService {
    /// Creates a new normalizer service.
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    /// Returns the unique identifiers found in an ID list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyInput`] when `text` is blank and
    /// [`AppError::NoValidIdentifiers`] when nothing digits-only was found.
    pub fn unique_identifiers(&self, text: &str) -> Result<Vec<Identifier>, AppError> {
        require_text(text, "AW ID")?;

        let identifiers = extract_identifiers(text);
        if identifiers.is_empty() {
            return Err(AppError::NoValidIdentifiers);
        }

        info!(count = identifiers.len(), "Extracted unique identifiers");
        Ok(identifiers)
    }

    /// Generates one slug per usable line, in input order.
    ///
    /// Names are cleaned before slugging. Lines left without word characters
    /// are skipped. Repeated slugs get the duplicate suffix configured by
    /// [`NormalizerOptions::suffix_start`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyInput`] when no line holds a usable name.
    pub fn short_urls(&self, text: &str) -> Result<Vec<String>, AppError> {
        require_text(text, "artwork name")?;

        let mut allocator = SlugAllocator::from_options(&self.options);
        let slugs: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|name| {
                let slug = allocator.allocate(&clean_field(name, &self.options));
                if slug.is_none() {
                    debug!(name, "Skipping name without slug text");
                }
                slug
            })
            .collect();

        if slugs.is_empty() {
            return Err(AppError::empty_input("artwork name"));
        }

        info!(count = slugs.len(), "Generated short URLs");
        Ok(slugs)
    }

    /// Parses tab-delimited rows into `(identifier, display name)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyInput`] for blank input and
    /// [`AppError::NoValidIdentifiers`] when no row produced an identifier.
    pub fn parse(&self, text: &str) -> Result<Vec<(Identifier, String)>, AppError> {
        require_text(text, "artwork row")?;

        let pairs = parse_lines(text, &self.options);
        if pairs.is_empty() {
            return Err(AppError::NoValidIdentifiers);
        }

        Ok(pairs)
    }

    /// Parses rows and assigns a batch-unique slug to every identifier.
    ///
    /// # Errors
    ///
    /// See [`Self::parse`].
    pub fn build_records(&self, text: &str) -> Result<Vec<ArtworkRecord>, AppError> {
        let pairs = self.parse(text)?;
        let records = self.assign_slugs(pairs);

        info!(count = records.len(), "Built artwork records");
        Ok(records)
    }

    /// Turns pairs into records, allocating slugs in order.
    ///
    /// Pairs whose name has no word characters are dropped, so every record
    /// carries a non-empty slug.
    pub fn assign_slugs(&self, pairs: Vec<(Identifier, String)>) -> Vec<ArtworkRecord> {
        let mut allocator = SlugAllocator::from_options(&self.options);

        pairs
            .into_iter()
            .filter_map(|(identifier, display_name)| {
                let Some(slug) = allocator.allocate(&display_name) else {
                    debug!(id = %identifier, "Skipping record without slug text");
                    return None;
                };
                Some(ArtworkRecord::new(identifier, display_name, slug))
            })
            .collect()
    }

    /// Rebuilds records from a previously exported file whose names may have
    /// been edited by hand.
    ///
    /// Names are cleaned again and every slug is reallocated. Rows with fewer
    /// than eight fields, a non-numeric id, a repeated id or a name without
    /// word characters after cleaning are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptyInput`] for blank input,
    /// [`AppError::Validation`] when the header does not match the export
    /// format and [`AppError::NoValidIdentifiers`] when no row survives.
    pub fn amend_records(&self, tsv: &str) -> Result<Vec<ArtworkRecord>, AppError> {
        require_text(tsv, "exported row")?;

        let pairs = parse_export(tsv)?
            .into_iter()
            .filter_map(|record| {
                let name = clean_field(&record.display_name, &self.options);
                if !has_slug_text(&name, self.options.apostrophes) {
                    debug!(id = %record.identifier, "Skipping exported row without a usable name");
                    None
                } else {
                    Some((record.identifier, name))
                }
            })
            .collect::<Vec<_>>();

        if pairs.is_empty() {
            return Err(AppError::NoValidIdentifiers);
        }

        let records = self.assign_slugs(pairs);
        info!(count = records.len(), "Amended exported records");
        Ok(records)
    }
}

/// Reads an export file back into records, keeping its slugs as written.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the first row is not the export
/// header.
pub fn parse_export(tsv: &str) -> Result<Vec<ArtworkRecord>, AppError> {
    let rows = read_tsv(tsv);
    let Some((header, body)) = rows.split_first() else {
        return Ok(Vec::new());
    };

    let header: Vec<&str> = header.iter().map(|field| field.trim()).collect();
    if header != EXPORT_HEADER {
        return Err(AppError::validation(
            "Unexpected export header",
            json!({ "expected": EXPORT_HEADER, "found": header }),
        ));
    }

    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for (index, row) in body.iter().enumerate() {
        let line = index + 2;
        if row.len() < EXPORT_HEADER.len() {
            debug!(line, fields = row.len(), "Skipping short export row");
            continue;
        }

        let Some(identifier) = Identifier::parse(row[0].trim()) else {
            debug!(line, "Skipping export row with non-numeric id");
            continue;
        };

        if !seen.insert(identifier.clone()) {
            debug!(line, id = %identifier, "Skipping repeated export row");
            continue;
        }

        records.push(ArtworkRecord::new(
            identifier,
            row[4].trim().to_string(),
            row[5].trim().to_string(),
        ));
    }

    Ok(records)
}

fn require_text(text: &str, field: &'static str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        Err(AppError::empty_input(field))
    } else {
        Ok(())
    }
}
