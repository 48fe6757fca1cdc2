//! Application layer services orchestrating the text pipeline.
//!
//! Services combine the pure functions in [`crate::utils`] with the pipeline
//! options and the output boundary, and report failures as
//! [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::normalizer_service::NormalizerService`] - Identifier lists, slugs, row parsing and amendments
//! - [`services::export_service::ExportService`] - Export row assembly and saving

pub mod services;
