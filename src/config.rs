//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command
//! runs. Command-line flags override the values loaded here.
//!
//! ## Example
//!
//! ```bash
//! export APOSTROPHE_POLICY="strip"
//! export SLUG_SUFFIX_START="one"
//! export KEYWORD_SUBSTITUTIONS="false"
//! export OUTPUT_DIR="./exports"
//! ```
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `APOSTROPHE_POLICY` - `space` or `strip` (default: `space`)
//! - `SLUG_SUFFIX_START` - `zero` or `one` (default: `zero`)
//! - `KEYWORD_SUBSTITUTIONS` - `true`/`1` to enable brand keyword replacement (default: enabled)
//! - `OUTPUT_DIR` - Directory for export files (default: `.`)
//! - `DEFAULT_USER_ID` / `DEFAULT_USER_NAME` - Prefilled operator identity for prompts

use crate::domain::options::{ApostrophePolicy, NormalizerOptions, SuffixStart};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Tool configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    pub apostrophes: ApostrophePolicy,
    pub suffix_start: SuffixStart,
    pub keyword_substitutions: bool,
    /// Directory that receives `artwork_data.tsv` and `amended_artwork_data.tsv`.
    pub output_dir: PathBuf,
    pub default_user_id: Option<String>,
    pub default_user_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            apostrophes: ApostrophePolicy::default(),
            suffix_start: SuffixStart::default(),
            keyword_substitutions: true,
            output_dir: PathBuf::from("."),
            default_user_id: None,
            default_user_name: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a policy variable holds an unknown value.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let apostrophes = match env::var("APOSTROPHE_POLICY") {
            Ok(value) => value
                .parse::<ApostrophePolicy>()
                .context("Invalid APOSTROPHE_POLICY")?,
            Err(_) => defaults.apostrophes,
        };

        let suffix_start = match env::var("SLUG_SUFFIX_START") {
            Ok(value) => value
                .parse::<SuffixStart>()
                .context("Invalid SLUG_SUFFIX_START")?,
            Err(_) => defaults.suffix_start,
        };

        let keyword_substitutions = env::var("KEYWORD_SUBSTITUTIONS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.keyword_substitutions);

        let output_dir = env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let default_user_id = non_empty_var("DEFAULT_USER_ID");
        let default_user_name = non_empty_var("DEFAULT_USER_NAME");

        Ok(Self {
            log_level,
            log_format,
            apostrophes,
            suffix_start,
            keyword_substitutions,
            output_dir,
            default_user_id,
            default_user_name,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `output_dir` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.output_dir.as_os_str().is_empty() {
            anyhow::bail!("OUTPUT_DIR must not be empty");
        }

        Ok(())
    }

    /// Pipeline options derived from this configuration.
    pub fn normalizer_options(&self) -> NormalizerOptions {
        NormalizerOptions {
            apostrophes: self.apostrophes,
            suffix_start: self.suffix_start,
            keyword_substitutions: self.keyword_substitutions,
        }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Apostrophes: {}", self.apostrophes);
        tracing::info!("  Suffix start: {}", self.suffix_start);
        tracing::info!("  Keyword substitutions: {}", self.keyword_substitutions);
        tracing::info!("  Output directory: {}", self.output_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
