//! Domain layer containing artwork entities, pipeline options and the output
//! boundary.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (identifiers, records, export rows)
//! - [`options`] - Policies that parameterize slug and cleaning rules
//! - [`sinks`] - Output trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on the filesystem or the terminal.
//! Text transformations live in [`crate::utils`] and are orchestrated by
//! [`crate::application::services`].

pub mod entities;
pub mod options;
pub mod sinks;
