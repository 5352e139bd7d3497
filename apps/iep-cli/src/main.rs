//! Command-line validator for generated IEP drafts.
//!
//! Reads the structured intake facts from a JSON file and the generated
//! draft from an HTML file, prints a report, and exits non-zero when the
//! draft is not compliant. Useful for spot-checking drafts outside the
//! server, e.g. from a prompt-tuning loop.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use iep_validator::{format_report, IepValidator, ReportFormat};
use shared_types::IepInput;

/// Command-line arguments for the draft validator
#[derive(Parser, Debug)]
#[command(name = "iep-cli")]
#[command(about = "Content-policy validation for generated IEP drafts")]
struct Args {
    /// Path to the intake facts JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Path to the generated draft HTML file
    #[arg(short, long)]
    document: PathBuf,

    /// Report format: text or markup
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let format = match args.format.to_lowercase().as_str() {
        "text" => ReportFormat::Text,
        "markup" | "html" => ReportFormat::Markup,
        other => anyhow::bail!("Unknown report format: {}", other),
    };

    let input_json = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let input: IepInput =
        serde_json::from_str(&input_json).context("Failed to parse intake facts JSON")?;

    let document = fs::read_to_string(&args.document)
        .with_context(|| format!("Failed to read {}", args.document.display()))?;

    let result = IepValidator::new().validate(&input, &document);

    println!("{}", format_report(&result, format));

    if result.compliant {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
