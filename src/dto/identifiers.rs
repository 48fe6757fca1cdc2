//! DTO for the unique identifier list.

use crate::domain::entities::Identifier;
use serde::Serialize;

/// Deduplicated identifiers in first-seen order.
#[derive(Debug, Serialize)]
pub struct IdentifiersResponse {
    pub count: usize,
    pub identifiers: Vec<Identifier>,
}

impl From<Vec<Identifier>> for IdentifiersResponse {
    fn from(identifiers: Vec<Identifier>) -> Self {
        Self {
            count: identifiers.len(),
            identifiers,
        }
    }
}
