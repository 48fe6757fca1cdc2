//! Infrastructure layer for external integrations.
//!
//! Implements the output boundary defined by the domain layer.
//!
//! # Modules
//!
//! - [`output`] - Export sinks (directory files and stdout)

pub mod output;
