//! Data Transfer Objects for JSON output.
//!
//! Every command can print its result as JSON (`--format json`). These DTOs
//! fix the shape of that output independently of the domain entities.

pub mod export;
pub mod identifiers;
pub mod preview;
pub mod slugs;

pub use export::ExportResponse;
pub use identifiers::IdentifiersResponse;
pub use preview::{PreviewItem, PreviewResponse, PreviewSummary};
pub use slugs::SlugsResponse;
