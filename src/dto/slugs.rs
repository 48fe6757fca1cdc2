//! DTO for generated short URLs.

use serde::Serialize;

/// One slug per input name, in input order.
#[derive(Debug, Serialize)]
pub struct SlugsResponse {
    pub count: usize,
    pub slugs: Vec<String>,
}

impl From<Vec<String>> for SlugsResponse {
    fn from(slugs: Vec<String>) -> Self {
        Self {
            count: slugs.len(),
            slugs,
        }
    }
}
