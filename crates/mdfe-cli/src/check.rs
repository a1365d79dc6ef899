//! `mdfe-validate check`: run the full pipeline over one document.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mdfe_core::ValidationReport;
use mdfe_stages::ValidationPipeline;

use crate::{load_document, resolve_profile, OutputFormat};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Manifest document (JSON, or YAML by extension)
    pub document: PathBuf,

    /// Profile name (strict, lenient) or path to a profile file
    #[arg(long, default_value = "strict")]
    pub profile: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let profile = resolve_profile(&args.profile)?;
    let document = load_document(&args.document)?;

    let report = ValidationPipeline::new(profile).validate(&document);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render_text(&report)),
    }

    Ok(if report.verdict.is_blocked() { 1 } else { 0 })
}

pub fn render_text(report: &ValidationReport) -> String {
    let mut out = format!("{}\n", report.summary());
    for finding in &report.findings {
        out.push_str(&format!("  {}\n", finding));
    }
    out.push_str(&format!("document: {}\n", report.document_hash));
    out
}
