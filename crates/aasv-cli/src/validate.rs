//! # `aasv validate` — Validate a document from disk
//!
//! Dispatches on the file extension the same way the upload endpoint
//! does: `.aasx` goes to the engine's package check, `.json` through
//! JSON decoding and deep validation. Exit code 1 means the document is
//! invalid; other failures (unreadable file, no engine URL) are reported
//! as errors.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Args;

use aasv_checker_client::{TestEngineClient, TestEngineConfig};
use aasv_core::ValidationReport;
use aasv_engine::{AasValidator, ValidationOptions};

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the document to validate (.json or .aasx).
    pub file: PathBuf,

    /// Base URL of the compliance test-engine service.
    /// Falls back to the AASV_CHECKER_URL environment variable.
    #[arg(long)]
    pub engine_url: Option<String>,

    /// Target metamodel version (defaults to the engine's latest).
    #[arg(long)]
    pub version: Option<String>,

    /// Print the raw report JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}

/// Input format, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// AAS environment JSON.
    Json,
    /// Packaged AASX container.
    Aasx,
}

/// Detect the document format from a path's extension.
pub fn detect_format(path: &Path) -> Option<DocumentFormat> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("json") => Some(DocumentFormat::Json),
        Some("aasx") => Some(DocumentFormat::Aasx),
        _ => None,
    }
}

/// Run the validate subcommand.
pub async fn run_validate(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let report = validate_file(&args).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Read, dispatch, and validate one file.
async fn validate_file(args: &ValidateArgs) -> anyhow::Result<ValidationReport> {
    let engine_url = args
        .engine_url
        .clone()
        .or_else(|| std::env::var("AASV_CHECKER_URL").ok())
        .context("no engine URL: pass --engine-url or set AASV_CHECKER_URL")?;

    let format = match detect_format(&args.file) {
        Some(format) => format,
        None => bail!(
            "unsupported file type for {}: expected .json or .aasx",
            args.file.display()
        ),
    };

    let content = std::fs::read(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    tracing::debug!(file = %args.file.display(), bytes = content.len(), "validating");

    let client = TestEngineClient::new(TestEngineConfig::new(engine_url))?;
    let validator = AasValidator::new(client);

    Ok(match format {
        DocumentFormat::Aasx => validator.validate_package(&content).await,
        DocumentFormat::Json => match &args.version {
            None => validator.validate_json_bytes(&content).await,
            Some(version) => {
                let environment: serde_json::Value = serde_json::from_slice(&content)
                    .with_context(|| format!("invalid JSON in {}", args.file.display()))?;
                let options = ValidationOptions {
                    version: Some(version.clone()),
                };
                validator.validate(&environment, &options).await
            }
        },
    })
}

/// Human-readable, severity-bucketed summary.
fn print_summary(report: &ValidationReport) {
    println!(
        "suite: {} ({:.1} ms)",
        report.test_suite, report.duration_ms
    );
    for diagnostic in &report.errors {
        println!("  error    {}  {}", diagnostic.path, diagnostic.message);
    }
    for diagnostic in &report.warnings {
        println!("  warning  {}  {}", diagnostic.path, diagnostic.message);
    }
    for diagnostic in &report.info {
        println!("  info     {}  {}", diagnostic.path, diagnostic.message);
    }
    println!(
        "{}: {} error(s), {} warning(s)",
        if report.valid { "valid" } else { "invalid" },
        report.errors.len(),
        report.warnings.len()
    );
}
