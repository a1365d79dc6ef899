//! `mdfe-validate taxid`: check CPF/CNPJ values and explain failures.

use anyhow::Result;
use clap::Args;
use mdfe_taxid::TaxId;

#[derive(Args, Debug)]
pub struct TaxIdArgs {
    /// CPF or CNPJ values, formatted or bare digits
    #[arg(required = true)]
    pub values: Vec<String>,
}

pub fn run_taxid(args: &TaxIdArgs) -> Result<u8> {
    let mut invalid = 0;
    for value in &args.values {
        let line = describe(value);
        if line.starts_with("invalid") {
            invalid += 1;
        }
        println!("{line}  {value}");
    }

    Ok(if invalid > 0 { 1 } else { 0 })
}

pub fn describe(value: &str) -> String {
    match TaxId::parse(value) {
        Ok(id) => format!("valid    {} {}", id.kind(), id),
        Err(e) => format!("invalid  {}", e),
    }
}
