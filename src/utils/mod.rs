//! Pure text-normalization functions used by the pipeline services.
//!
//! - [`identifiers`] - Identifier extraction and deduplication
//! - [`non_english`] - Non-English prefix stripping
//! - [`keywords`] - Brand keyword substitution
//! - [`slug`] - Slug generation and batch duplicate suffixes
//! - [`line_parser`] - Tab-delimited name/identifier rows
//! - [`tsv`] - Tab-separated export writer and reader

pub mod identifiers;
pub mod keywords;
pub mod line_parser;
pub mod non_english;
pub mod slug;
pub mod tsv;
