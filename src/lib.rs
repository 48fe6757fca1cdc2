//! # Artwork Normalizer
//!
//! Turns pasted spreadsheet fragments of artwork IDs and names into
//! deduplicated identifier lists, URL slugs and tab-separated export files.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, pipeline options and the export sink trait
//! - **Utilities** ([`utils`]) - Pure text functions (identifiers, cleaning, slugs, TSV)
//! - **Application Layer** ([`application`]) - Pipeline and export services
//! - **Infrastructure Layer** ([`infrastructure`]) - File and stdout export sinks
//! - **DTOs** ([`dto`]) - JSON output shapes
//!
//! ## Pipeline
//!
//! raw text → line/token splitting → field cleaning (non-English prefix,
//! keyword substitution) → identifier deduplication → slug allocation →
//! export rows → TSV
//!
//! ## Quick Start
//!
//! ```ignore
//! use artwork_normalizer::prelude::*;
//!
//! let service = NormalizerService::new(NormalizerOptions::default());
//! let records = service.build_records("Line Name\tCase\t123, 124")?;
//! assert_eq!(records[1].slug, "line-name-case-atwgp1");
//! ```
//!
//! ## Configuration
//!
//! The command-line tool reads its defaults from environment variables via
//! [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ExportService, NormalizerService, build_export_rows, serialize_export,
    };
    pub use crate::domain::entities::{
        ArtworkRecord, ExportKind, ExportRow, Identifier, OperatorIdentity,
    };
    pub use crate::domain::options::{ApostrophePolicy, NormalizerOptions, SuffixStart};
    pub use crate::error::AppError;
    pub use crate::utils::identifiers::extract_identifiers;
    pub use crate::utils::keywords::apply_keyword_substitutions;
    pub use crate::utils::line_parser::parse_lines;
    pub use crate::utils::non_english::clean_non_english;
    pub use crate::utils::slug::{SlugAllocator, generate_slug};
}
