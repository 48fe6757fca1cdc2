//! Command-line front end for artwork-normalizer.
//!
//! Reads pasted text from a file or stdin, runs one pipeline step and prints
//! the result or saves an export file.
//!
//! # Usage
//!
//! ```bash
//! # Deduplicate a pasted ID list
//! pbpaste | artwork-normalizer ids --join comma
//!
//! # Slugs for a list of names, one per line
//! artwork-normalizer slugs --input names.txt
//!
//! # Preview parsed spreadsheet rows
//! artwork-normalizer parse --input rows.tsv
//!
//! # Save artwork_data.tsv into ./exports
//! artwork-normalizer --output-dir exports export --input rows.tsv --user-id 42 --user-name "Jo"
//!
//! # Re-slug a hand-edited export into amended_artwork_data.tsv
//! artwork-normalizer amend --input exports/artwork_data.tsv
//! ```
//!
//! # Environment Variables
//!
//! See [`artwork_normalizer::config`]. Command-line flags take precedence.

use artwork_normalizer::application::services::{ExportService, NormalizerService};
use artwork_normalizer::config::{self, Config};
use artwork_normalizer::domain::entities::{ArtworkRecord, ExportKind, OperatorIdentity};
use artwork_normalizer::domain::options::{ApostrophePolicy, SuffixStart};
use artwork_normalizer::domain::sinks::ExportSink;
use artwork_normalizer::dto::{
    ExportResponse, IdentifiersResponse, PreviewItem, PreviewResponse, SlugsResponse,
};
use artwork_normalizer::infrastructure::output::{FileExportSink, StdoutExportSink};
use artwork_normalizer::utils::identifiers::{IdentifierJoin, join_identifiers};
use artwork_normalizer::AppError;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Confirm, Input};
use serde::Serialize;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Normalize pasted artwork IDs and names into slugs and TSV exports.
#[derive(Parser)]
#[command(name = "artwork-normalizer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    pipeline: PipelineArgs,

    /// Output format for results and errors
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Pipeline options; each one overrides its environment variable.
#[derive(Args)]
struct PipelineArgs {
    /// Apostrophe handling in slugs: space or strip
    #[arg(long, global = true)]
    apostrophes: Option<ApostrophePolicy>,

    /// Duplicate counter start: zero (second copy gets -atwgp1) or one (-atwgp2)
    #[arg(long, global = true)]
    suffix_start: Option<SuffixStart>,

    /// Disable brand keyword substitution (iphone, ipad, airpods)
    #[arg(long, global = true)]
    no_keywords: bool,

    /// Directory for saved export files
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum JoinArg {
    Newline,
    Comma,
}

impl From<JoinArg> for IdentifierJoin {
    fn from(join: JoinArg) -> Self {
        match join {
            JoinArg::Newline => IdentifierJoin::Newline,
            JoinArg::Comma => IdentifierJoin::Comma,
        }
    }
}

/// Pipeline steps.
#[derive(Subcommand)]
enum Commands {
    /// Deduplicate a comma- or newline-separated AW ID list
    Ids {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Separator for the printed list
        #[arg(long, value_enum, default_value_t = JoinArg::Newline)]
        join: JoinArg,
    },

    /// Generate one short URL slug per artwork name line
    Slugs {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Preview identifier, display name and slug for tab-delimited rows
    Parse {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Build and save artwork_data.tsv from tab-delimited rows
    Export {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        save: SaveArgs,
    },

    /// Re-clean and re-slug an edited export into amended_artwork_data.tsv
    Amend {
        /// Previously exported TSV file
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        save: SaveArgs,
    },
}

/// Operator identity and save options shared by export commands.
#[derive(Args)]
struct SaveArgs {
    /// Operator user ID written on every row
    #[arg(long)]
    user_id: Option<String>,

    /// Operator user name written on every row
    #[arg(long)]
    user_name: Option<String>,

    /// Print the TSV to stdout instead of saving a file
    #[arg(long)]
    stdout: bool,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let format = cli.format;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = config::load_from_env().context("Failed to load configuration")?;
    apply_overrides(&mut config, &cli.pipeline);

    init_tracing(&config);
    config.print_summary();

    let service = NormalizerService::new(config.normalizer_options());

    match cli.command {
        Commands::Ids { input, join } => {
            let text = read_input(input.as_deref())?;
            let identifiers = service.unique_identifiers(&text)?;

            match cli.format {
                OutputFormat::Json => print_json(&IdentifiersResponse::from(identifiers))?,
                OutputFormat::Text => println!("{}", join_identifiers(&identifiers, join.into())),
            }
        }
        Commands::Slugs { input } => {
            let text = read_input(input.as_deref())?;
            let slugs = service.short_urls(&text)?;

            match cli.format {
                OutputFormat::Json => print_json(&SlugsResponse::from(slugs))?,
                OutputFormat::Text => println!("{}", slugs.join("\n")),
            }
        }
        Commands::Parse { input } => {
            let text = read_input(input.as_deref())?;
            let records = service.build_records(&text)?;

            match cli.format {
                OutputFormat::Json => print_json(&PreviewResponse::from(records.as_slice()))?,
                OutputFormat::Text => print_preview(&records),
            }
        }
        Commands::Export { input, save } => {
            let interactive = input.is_some() && std::io::stdin().is_terminal();
            let text = read_input(input.as_deref())?;
            let records = service.build_records(&text)?;

            save_export(&records, &save, &config, ExportKind::Standard, interactive, cli.format)?;
        }
        Commands::Amend { input, save } => {
            let interactive = std::io::stdin().is_terminal();
            let text = read_input(Some(&input))?;
            let records = service.amend_records(&text)?;

            save_export(&records, &save, &config, ExportKind::Amended, interactive, cli.format)?;
        }
    }

    Ok(())
}

/// Command-line flags win over environment configuration.
fn apply_overrides(config: &mut Config, args: &PipelineArgs) {
    if let Some(apostrophes) = args.apostrophes {
        config.apostrophes = apostrophes;
    }
    if let Some(suffix_start) = args.suffix_start {
        config.suffix_start = suffix_start;
    }
    if args.no_keywords {
        config.keyword_substitutions = false;
    }
    if let Some(ref output_dir) = args.output_dir {
        config.output_dir = output_dir.clone();
    }
}

/// Logs go to stderr so stdout only carries results.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Resolves the operator identity from flags, config defaults or prompts.
///
/// Prompts only when stdin is a terminal that is not carrying the input text.
fn resolve_identity(save: &SaveArgs, config: &Config, interactive: bool) -> Result<OperatorIdentity> {
    let user_id = match save.user_id.clone().or_else(|| config.default_user_id.clone()) {
        Some(id) => id,
        None if interactive => Input::<String>::new().with_prompt("User ID").interact_text()?,
        None => return Err(AppError::missing_field("user_id").into()),
    };

    let user_name = match save.user_name.clone().or_else(|| config.default_user_name.clone()) {
        Some(name) => name,
        None if interactive => Input::<String>::new().with_prompt("User name").interact_text()?,
        None => return Err(AppError::missing_field("user_name").into()),
    };

    Ok(OperatorIdentity::new(&user_id, &user_name)?)
}

/// Confirms, then saves the export through the selected sink.
fn save_export(
    records: &[ArtworkRecord],
    save: &SaveArgs,
    config: &Config,
    kind: ExportKind,
    interactive: bool,
    format: OutputFormat,
) -> Result<()> {
    let operator = resolve_identity(save, config, interactive)?;

    if save.stdout {
        return run_export(StdoutExportSink::new(), records, &operator, kind).map(|_| ());
    }

    if format == OutputFormat::Text {
        print_preview(records);
    }

    if !save.yes && interactive {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Save {} rows to {}?",
                records.len(),
                config.output_dir.join(kind.file_name()).display()
            ))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let sink = FileExportSink::new(config.output_dir.clone());
    let response = run_export(sink, records, &operator, kind)?;

    match format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Text => {
            println!();
            println!("{}", "✅ Export saved".green().bold());
            println!("  File: {}", response.location.cyan());
            println!("  Rows: {}", response.rows.to_string().bright_white().bold());
        }
    }

    Ok(())
}

fn run_export<S: ExportSink>(
    sink: S,
    records: &[ArtworkRecord],
    operator: &OperatorIdentity,
    kind: ExportKind,
) -> Result<ExportResponse> {
    let service = ExportService::new(Arc::new(sink));
    let outcome = service.export(records, operator, kind)?;
    Ok(ExportResponse::from(outcome))
}

/// Prints records as an aligned table.
///
/// # Output Format
///
/// ```text
///   ID          Name                           Slug
///   ──────────────────────────────────────────────────────────────────────────
///   123         Line Name Case                 line-name-case
///   124         Line Name Case                 line-name-case-atwgp1
/// ```
fn print_preview(records: &[ArtworkRecord]) {
    let preview = PreviewResponse::from(records);

    println!(
        "  {:<11} {:<30} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Slug".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for PreviewItem {
        identifier,
        display_name,
        slug,
    } in &preview.items
    {
        println!(
            "  {:<11} {:<30} {}",
            identifier.bright_black(),
            display_name.cyan(),
            slug.green()
        );
    }

    println!();
    println!(
        "  Total: {}  Suffixed: {}",
        preview.summary.total.to_string().bright_white().bold(),
        preview.summary.suffixed.to_string().yellow()
    );
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn report_error(err: &anyhow::Error, format: OutputFormat) {
    let app_error = err.downcast_ref::<AppError>();

    if format == OutputFormat::Json
        && let Some(app_error) = app_error
        && let Ok(body) = serde_json::to_string_pretty(&app_error.to_body())
    {
        println!("{body}");
        return;
    }

    match app_error {
        Some(app_error) => eprintln!("{} {}", "❌".red(), app_error.to_string().red().bold()),
        None => eprintln!("{} {:#}", "❌ Error:".red().bold(), err),
    }
}
