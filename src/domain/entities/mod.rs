//! Core domain entities representing the artwork data model.
//!
//! Entities are plain data structures created fresh for every pipeline run and
//! dropped once the output has been produced.
//!
//! # Entity Types
//!
//! - [`Identifier`] - A digits-only artwork ID
//! - [`ArtworkRecord`] - An identifier with its display name and slug
//! - [`ExportRow`] - A record flattened into the fixed export columns
//! - [`OperatorIdentity`] - The operator fields repeated on every export row

pub mod artwork;
pub mod export_row;
pub mod identifier;

pub use artwork::ArtworkRecord;
pub use export_row::{
    DEFAULT_IS_PUBLIC, DEFAULT_SELL_DESIGN_APPROVAL_STATUS, DEFAULT_STATUS, EXPORT_HEADER,
    ExportKind, ExportRow, OperatorIdentity,
};
pub use identifier::{Identifier, is_identifier_token};
