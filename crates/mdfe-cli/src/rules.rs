//! `mdfe-validate rules`: print the field rule table.

use anyhow::Result;
use clap::Args;
use mdfe_rules::{default_rules, FieldRule};

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run_rules(args: &RulesArgs) -> Result<u8> {
    let rules = default_rules();
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rules)?),
        OutputFormat::Text => print!("{}", render_table(&rules)),
    }
    Ok(0)
}

pub fn render_table(rules: &[FieldRule]) -> String {
    let mut out = String::new();
    for rule in rules {
        out.push_str(&format!(
            "{:<6} {:<22} {:<24} {}\n",
            rule.severity.to_string(),
            format!("{}.{}", rule.section, rule.field),
            rule.rule,
            rule.message
        ));
    }
    out.push_str(&format!("{} rules\n", rules.len()));
    out
}
