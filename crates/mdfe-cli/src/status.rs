//! `mdfe-validate status`: lifecycle lookup and transition gate.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mdfe_core::{is_final_status, DocumentStatus};
use mdfe_quality::TransitionGate;
use mdfe_stages::ValidationPipeline;

use crate::{load_document, resolve_profile};

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Status code (e.g. AUTORIZADO)
    pub code: String,

    /// Target status for a transition check
    #[arg(long)]
    pub target: Option<String>,

    /// Validate this document and gate the transition on its report
    #[arg(long, requires = "target")]
    pub document: Option<PathBuf>,

    /// Profile name or file used with --document
    #[arg(long, default_value = "strict")]
    pub profile: String,
}

pub fn run_status(args: &StatusArgs) -> Result<u8> {
    let finality = if is_final_status(&args.code) { "final" } else { "not final" };

    let current = match DocumentStatus::from_code(&args.code) {
        Some(status) => status,
        // a bare lookup classifies unknown codes; a transition needs a known one
        None if args.target.is_none() => {
            println!("{}: {} (unknown status)", args.code, finality);
            return Ok(0);
        }
        None => args.code.parse().context("invalid status")?,
    };

    let successors = current
        .successors()
        .iter()
        .map(|s| s.code())
        .collect::<Vec<_>>();
    println!("{}: {}", current, finality);
    println!(
        "successors: {}",
        if successors.is_empty() { "none".to_string() } else { successors.join(", ") }
    );

    let Some(target) = args.target.as_deref() else {
        return Ok(0);
    };
    let target: DocumentStatus = target.parse().context("invalid --target")?;

    let Some(path) = args.document.as_deref() else {
        let modeled = current.successors().contains(&target);
        println!("{} -> {}: {}", current, target, if modeled { "modeled" } else { "not modeled" });
        return Ok(0);
    };

    let profile = resolve_profile(&args.profile)?;
    let report = ValidationPipeline::new(profile.clone()).validate(&load_document(path)?);
    let verdict = TransitionGate::new(profile).check(current, target, &report);

    println!("{} -> {}: {}", current, target, verdict);
    Ok(if verdict.is_blocked() { 1 } else { 0 })
}
