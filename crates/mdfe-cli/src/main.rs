//! mdfe-validate entry point

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdfe_cli::check::{run_check, CheckArgs};
use mdfe_cli::rules::{run_rules, RulesArgs};
use mdfe_cli::status::{run_status, StatusArgs};
use mdfe_cli::taxid::{run_taxid, TaxIdArgs};

/// MDF-e document compliance validator
#[derive(Parser, Debug)]
#[command(name = "mdfe-validate", version, about, long_about = None)]
struct Cli {
    /// Log filter (e.g. debug, mdfe_stages=trace). Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a manifest document and print the report
    Check(CheckArgs),

    /// Check CPF/CNPJ values
    #[command(name = "taxid")]
    TaxId(TaxIdArgs),

    /// Show finality and successors of a status, optionally gating a transition
    Status(StatusArgs),

    /// List the field rule table
    Rules(RulesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.log_level.as_deref() {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Check(args) => run_check(args),
        Commands::TaxId(args) => run_taxid(args),
        Commands::Status(args) => run_status(args),
        Commands::Rules(args) => run_rules(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
