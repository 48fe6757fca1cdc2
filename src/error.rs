//! Error taxonomy for the normalization pipeline.
//!
//! Every failure is reported to the immediate caller as an [`AppError`]. Lines
//! that cannot be parsed are skipped rather than reported, so they never show up
//! here.

use serde::Serialize;
use serde_json::{Value, json};

/// JSON body emitted by `--format json` when a command fails.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

/// Stable error code plus human-readable message and structured details.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No usable text was supplied for a required input.
    #[error("Please enter at least one {field}")]
    EmptyInput { field: &'static str },

    /// Input was parsed but produced zero digits-only identifiers.
    #[error("No valid identifiers found")]
    NoValidIdentifiers,

    /// A required operator identity field is blank.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("Failed to write {target}: {source}")]
    Output {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn empty_input(field: &'static str) -> Self {
        Self::EmptyInput { field }
    }

    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn output(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Output {
            target: target.into(),
            source,
        }
    }

    /// Machine-readable code, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::EmptyInput { .. } => "empty_input",
            AppError::NoValidIdentifiers => "no_valid_identifiers",
            AppError::MissingField { .. } => "missing_field",
            AppError::Validation { .. } => "validation_error",
            AppError::Output { .. } => "output_error",
        }
    }

    /// Structured context for the error, suitable for JSON output.
    pub fn details(&self) -> Value {
        match self {
            AppError::EmptyInput { field } | AppError::MissingField { field } => {
                json!({ "field": field })
            }
            AppError::NoValidIdentifiers => json!({}),
            AppError::Validation { details, .. } => details.clone(),
            AppError::Output { target, .. } => json!({ "target": target }),
        }
    }

    pub fn to_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_info(),
        }
    }
}
