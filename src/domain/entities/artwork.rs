//! Artwork record entity produced by the parsing pipeline.

use super::Identifier;
use serde::Serialize;

/// One unique artwork in a processed batch.
///
/// `slug` is derived from `display_name` plus its occurrence count among
/// records sharing the same base slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkRecord {
    pub identifier: Identifier,
    pub display_name: String,
    pub slug: String,
}

impl ArtworkRecord {
    pub fn new(identifier: Identifier, display_name: String, slug: String) -> Self {
        Self {
            identifier,
            display_name,
            slug,
        }
    }
}
