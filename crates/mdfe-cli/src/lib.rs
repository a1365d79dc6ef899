//! # mdfe-validate
//!
//! Command-line front end over the validator crates.
//!
//! ```bash
//! mdfe-validate check manifest.json --profile lenient
//! mdfe-validate taxid 111.444.777-35 11222333000181
//! mdfe-validate status XML_GERADO --target AUTORIZADO --document manifest.json
//! mdfe-validate rules
//! ```
//!
//! Every handler returns the process exit code: `0` on success, `1` when a
//! document is blocked or an id is invalid. Errors exit with `2`.

pub mod check;
pub mod rules;
pub mod status;
pub mod taxid;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use mdfe_core::ManifestDocument;
use mdfe_quality::ValidationProfile;

/// Output rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Read a manifest from a `.yaml`/`.yml` or JSON file.
pub fn load_document(path: &Path) -> Result<ManifestDocument> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read document {}", path.display()))?;

    let document = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&raw)
            .with_context(|| format!("invalid YAML document {}", path.display()))?,
        _ => ManifestDocument::from_json(&raw)
            .with_context(|| format!("invalid JSON document {}", path.display()))?,
    };
    Ok(document)
}

/// Resolve `--profile`: a built-in mode name or a profile file.
pub fn resolve_profile(value: &str) -> Result<ValidationProfile> {
    match value {
        "strict" => return Ok(ValidationProfile::strict()),
        "lenient" => return Ok(ValidationProfile::lenient()),
        _ => {}
    }

    let path = Path::new(value);
    if !path.is_file() {
        bail!("unknown profile '{value}': expected strict, lenient or a profile file");
    }
    ValidationProfile::load(path).with_context(|| format!("failed to load profile {value}"))
}
